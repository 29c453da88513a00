use crate::config::NotezConfig;
use crate::model::Note;

pub mod config;
pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod load;
pub mod save;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A note paired with the 1-based position it occupies in the store.
///
/// Positions survive filtering: a filtered listing shows each note under the
/// same number the full listing would, so a number on screen is always the
/// right one to pass to `view`, `edit`, or `delete`.
#[derive(Debug, Clone)]
pub struct NoteRow {
    pub position: usize,
    pub note: Note,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<NoteRow>,
    pub config: Option<NotezConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_notes(mut self, notes: Vec<NoteRow>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_config(mut self, config: NotezConfig) -> Self {
        self.config = Some(config);
        self
    }
}
