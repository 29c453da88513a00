use colored::*;
use notezapp::commands::{CmdMessage, MessageLevel, NoteRow};
use unicode_width::UnicodeWidthStr;

const LINE_WIDTH: usize = 100;
const PREVIEW_CHARS: usize = 50;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One line per note: position, name, then as much of the content as fits.
pub fn print_notes(rows: &[NoteRow]) {
    if rows.is_empty() {
        println!("No notes.");
        return;
    }

    for row in rows {
        let idx_str = format!("{:>3}. ", row.position);

        let preview: String = row
            .note
            .content
            .chars()
            .take(PREVIEW_CHARS)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let line = if preview.is_empty() {
            row.note.name.clone()
        } else {
            format!("{} {}", row.note.name, preview)
        };

        let available = LINE_WIDTH.saturating_sub(idx_str.width());
        println!(
            "{}{}",
            idx_str.normal(),
            truncate_to_width(&line, available)
        );
    }
}

pub fn print_full_notes(rows: &[NoteRow]) {
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            format!("{}.", row.position).yellow(),
            row.note.name.bold()
        );
        println!("--------------------------------");
        println!("{}", row.note.content);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
