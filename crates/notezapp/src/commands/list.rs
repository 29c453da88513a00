use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::NoteStore;

use super::helpers::{matching_rows, note_rows};

/// List notes, optionally filtered.
///
/// A `None` or blank query means no filter. Filtered rows keep the positions
/// they hold in the full sequence.
pub fn run(store: &NoteStore, query: Option<&str>) -> Result<CmdResult> {
    let rows = match query.map(str::trim) {
        Some(query) if !query.is_empty() => matching_rows(store, query),
        _ => note_rows(store),
    };

    Ok(CmdResult::default().with_listed_notes(rows))
}
