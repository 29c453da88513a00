//! Input collection for the session.
//!
//! On a terminal, single-line prompts go through `dialoguer`. When stdin is
//! piped the same questions are read as plain lines, so scripted sessions
//! see one line per prompt. Multi-line bodies use the same protocol in both
//! modes: lines accumulate until a lone `.`.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use is_terminal::IsTerminal;
use notezapp::error::{NotezError, Result};
use std::io::{self, BufRead, Write};

const CONTENT_TERMINATOR: &str = ".";

/// True when the session is talking to a person on a real terminal.
pub fn interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

/// Read one line of input for `prompt`.
pub fn read_line(prompt: &str) -> Result<String> {
    if interactive() {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|err| NotezError::Input(err.to_string()))
    } else {
        print!("{}: ", prompt);
        io::stdout().flush()?;
        next_stdin_line()
    }
}

/// Read a free-form body, line by line, until a lone `.`.
///
/// End of input also finishes the body, so a piped session that stops short
/// still produces a usable note.
pub fn read_content(prompt: &str) -> Result<String> {
    println!(
        "{} (finish with '{}' on its own line):",
        prompt, CONTENT_TERMINATOR
    );

    let mut lines: Vec<String> = Vec::new();
    loop {
        match try_next_stdin_line()? {
            None => break,
            Some(line) if line == CONTENT_TERMINATOR => break,
            Some(line) => lines.push(line),
        }
    }
    Ok(lines.join("\n"))
}

fn next_stdin_line() -> Result<String> {
    match try_next_stdin_line()? {
        Some(line) => Ok(line),
        None => Err(NotezError::Input("Input ended".to_string())),
    }
}

fn try_next_stdin_line() -> Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
