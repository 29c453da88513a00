use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;
use std::path::Path;

/// Write the whole collection to `path` as a JSON array.
pub fn run(store: &NoteStore, path: &Path) -> Result<CmdResult> {
    store.save(path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Notes saved to {}",
        path.display()
    )));
    Ok(result)
}
