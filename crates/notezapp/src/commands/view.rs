use crate::commands::{CmdMessage, CmdResult, NoteRow};
use crate::error::Result;
use crate::store::NoteStore;

use super::helpers::resolve_position;

/// Fetch a single note, with its full content, by 1-based position.
pub fn run(store: &NoteStore, position: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(index) = resolve_position(store, position)? else {
        result.add_message(CmdMessage::warning(format!(
            "No note at position {}.",
            position
        )));
        return Ok(result);
    };

    if let Some(note) = store.get(index) {
        result.listed_notes.push(NoteRow {
            position,
            note: note.clone(),
        });
    }
    Ok(result)
}
