use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the notez core.
///
/// Display strings are written for end users; the CLI prints them verbatim.
#[derive(Error, Debug)]
pub enum NotezError {
    #[error("No note at index {0}")]
    NoteNotFound(usize),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid file format: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, NotezError>;
