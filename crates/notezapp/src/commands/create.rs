use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::NoteStore;

/// Add a note from form input.
///
/// The store itself accepts anything; requiring both fields to be non-blank
/// is this layer's job. Blank input warns and leaves the store alone.
pub fn run(store: &mut NoteStore, name: &str, content: &str) -> Result<CmdResult> {
    let name = name.trim();
    let content = content.trim();

    let mut result = CmdResult::default();
    if name.is_empty() || content.is_empty() {
        result.add_message(CmdMessage::warning(
            "A note needs both a name and some content.",
        ));
        return Ok(result);
    }

    let note = Note::new(name, content);
    store.add(note.clone());

    result.add_message(CmdMessage::success(format!("Note added: {}", note.name)));
    result.affected_notes.push(note);
    Ok(result)
}
