use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::NoteStore;

use super::helpers::resolve_position;

/// Replace the note at a 1-based position with new field values.
///
/// Replacement is wholesale: both fields are written, there is no partial
/// merge. The same non-blank rule as `create` applies.
pub fn run(store: &mut NoteStore, position: usize, name: &str, content: &str) -> Result<CmdResult> {
    let name = name.trim();
    let content = content.trim();

    let mut result = CmdResult::default();
    if name.is_empty() || content.is_empty() {
        result.add_message(CmdMessage::warning(
            "A note needs both a name and some content.",
        ));
        return Ok(result);
    }

    let Some(index) = resolve_position(store, position)? else {
        result.add_message(CmdMessage::warning(format!(
            "No note at position {}.",
            position
        )));
        return Ok(result);
    };

    let note = Note::new(name, content);
    store.update(index, note.clone())?;

    result.add_message(CmdMessage::success(format!(
        "Note updated ({}): {}",
        position, note.name
    )));
    result.affected_notes.push(note);
    Ok(result)
}
