use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;

use super::helpers::resolve_position;

/// Delete the note at a 1-based position.
pub fn run(store: &mut NoteStore, position: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(index) = resolve_position(store, position)? else {
        result.add_message(CmdMessage::warning(format!(
            "No note at position {}.",
            position
        )));
        return Ok(result);
    };

    let removed = store.notes()[index].clone();
    store.delete(index)?;

    result.add_message(CmdMessage::success(format!(
        "Note deleted ({}): {}",
        position, removed.name
    )));
    result.affected_notes.push(removed);
    Ok(result)
}
