use clap::Parser;
use log::{debug, info};
use notezapp::api::{CmdMessage, ConfigAction, NotezApi};
use notezapp::config::{self, NotezConfig};
use notezapp::error::{NotezError, Result};
use notezapp::store::NoteStore;
use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

mod args;
mod cli;
mod logging;

use args::{Cli, ShellCommand, ShellLine};
use cli::print::{print_full_notes, print_messages, print_notes};
use cli::prompt;
use cli::styles::NOTEZ_THEME;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct Session {
    api: NotezApi,
    config: NotezConfig,
    config_dir: PathBuf,
    filter: Option<String>,
    dirty: Rc<Cell<bool>>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut session = init_session(&cli)?;

    banner();

    if let Some(path) = &cli.file {
        match session.api.load_notes(path) {
            Ok(result) => print_messages(&result.messages),
            Err(err) => print_error(&err),
        }
    }

    render(&session)?;
    session.dirty.set(false);

    let stdin = io::stdin();
    loop {
        print!("{} ", NOTEZ_THEME.prompt.apply_to("notez>"));
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match ShellLine::from_line(line) {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => {
                debug!("command: {:?}", command);
                if let Err(err) = dispatch(&mut session, command) {
                    print_error(&err);
                }
            }
            // Clap renders its own usage, help, and error output.
            Err(err) => {
                let _ = err.print();
            }
        }

        // Observers flag every successful mutation; repaint the list once
        // per command instead of once per change.
        if session.dirty.replace(false) {
            render(&session)?;
        }
    }

    info!("session ended");
    Ok(())
}

fn init_session(cli: &Cli) -> Result<Session> {
    let config_dir = config::config_dir()?;

    if let Err(err) = logging::init(&config_dir.join("logs"), cli.verbose) {
        eprintln!("Warning: logging disabled: {}", err);
    }

    let config = NotezConfig::load(&config_dir).unwrap_or_default();
    let strict = cli.strict || config.strict_indexes;

    let mut api = NotezApi::new(NoteStore::new().with_strict_indexes(strict));

    let dirty = Rc::new(Cell::new(false));
    let flag = Rc::clone(&dirty);
    api.observe(move || flag.set(true));

    info!("session started (strict_indexes={})", strict);
    Ok(Session {
        api,
        config,
        config_dir,
        filter: None,
        dirty,
    })
}

fn banner() {
    println!(
        "{}",
        NOTEZ_THEME
            .banner
            .apply_to(concat!("notez ", env!("CARGO_PKG_VERSION")))
    );
    println!(
        "{}",
        NOTEZ_THEME
            .hint
            .apply_to("Type 'help' for commands, 'quit' to leave.")
    );
}

fn dispatch(session: &mut Session, command: ShellCommand) -> Result<()> {
    match command {
        ShellCommand::Add => handle_add(session),
        ShellCommand::Edit { position } => handle_edit(session, position),
        ShellCommand::View { position } => handle_view(session, position),
        ShellCommand::Delete { position } => handle_delete(session, position),
        ShellCommand::List => handle_list(session),
        ShellCommand::Search { term } => handle_search(session, term),
        ShellCommand::Save { path } => handle_save(session, path),
        ShellCommand::Load { path } => handle_load(session, path),
        ShellCommand::Config { key, value } => handle_config(session, key, value),
        // Quit never reaches dispatch; the loop handles it.
        ShellCommand::Quit => Ok(()),
    }
}

fn handle_add(session: &mut Session) -> Result<()> {
    let name = prompt::read_line("Name")?;
    let content = prompt::read_content("Content")?;

    let result = session.api.create_note(&name, &content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(session: &mut Session, position: usize) -> Result<()> {
    let current = session.api.view_note(position)?;
    let Some(row) = current.listed_notes.first() else {
        print_messages(&current.messages);
        return Ok(());
    };
    print_full_notes(std::slice::from_ref(row));

    let name = prompt::read_line("New name (blank keeps the current one)")?;
    let content = prompt::read_content("New content (blank keeps the current one)")?;

    let name = if name.trim().is_empty() {
        row.note.name.clone()
    } else {
        name
    };
    let content = if content.trim().is_empty() {
        row.note.content.clone()
    } else {
        content
    };

    let result = session.api.update_note(position, &name, &content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(session: &Session, position: usize) -> Result<()> {
    let result = session.api.view_note(position)?;
    print_full_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(session: &mut Session, position: usize) -> Result<()> {
    let result = session.api.delete_note(position)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(session: &mut Session) -> Result<()> {
    session.filter = None;
    render(session)
}

fn handle_search(session: &mut Session, term: Vec<String>) -> Result<()> {
    let query = term.join(" ");
    let query = query.trim();
    session.filter = if query.is_empty() {
        None
    } else {
        Some(query.to_string())
    };
    render(session)
}

fn handle_save(session: &Session, path: Option<PathBuf>) -> Result<()> {
    let Some(path) = path.or_else(|| session.config.default_file.clone()) else {
        print_messages(&[CmdMessage::warning(
            "No file given. Use 'save <path>' or set the default_file config key.",
        )]);
        return Ok(());
    };

    let result = session.api.save_notes(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_load(session: &mut Session, path: Option<PathBuf>) -> Result<()> {
    let Some(path) = path.or_else(|| session.config.default_file.clone()) else {
        print_messages(&[CmdMessage::warning(
            "No file given. Use 'load <path>' or set the default_file config key.",
        )]);
        return Ok(());
    };

    let result = session.api.load_notes(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    session: &mut Session,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = session.api.config(&session.config_dir, action)?;
    if let Some(config) = &result.config {
        println!("strict_indexes = {}", config.strict_indexes);
        println!(
            "default_file = {}",
            config
                .get("default_file")
                .unwrap_or_else(|| "unset".to_string())
        );
        session.api.set_strict_indexes(config.strict_indexes);
        session.config = config.clone();
    }
    print_messages(&result.messages);
    Ok(())
}

fn render(session: &Session) -> Result<()> {
    let result = session.api.list_notes(session.filter.as_deref())?;
    if let Some(query) = &session.filter {
        println!(
            "{}",
            NOTEZ_THEME.hint.apply_to(format!("Filter: {}", query))
        );
    }
    print_notes(&result.listed_notes);
    Ok(())
}

fn print_error(error: &NotezError) {
    print_messages(&[CmdMessage::error(error.to_string())]);
}
