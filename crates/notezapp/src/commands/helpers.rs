use crate::commands::NoteRow;
use crate::error::{NotezError, Result};
use crate::store::NoteStore;

/// Every note paired with its 1-based display position.
pub fn note_rows(store: &NoteStore) -> Vec<NoteRow> {
    store
        .notes()
        .iter()
        .enumerate()
        .map(|(index, note)| NoteRow {
            position: index + 1,
            note: note.clone(),
        })
        .collect()
}

/// Rows matching `query` case-insensitively on name or content. Each row
/// keeps the position it has in the unfiltered sequence.
pub fn matching_rows(store: &NoteStore, query: &str) -> Vec<NoteRow> {
    let query_lower = query.to_lowercase();
    store
        .notes()
        .iter()
        .enumerate()
        .filter(|(_, note)| {
            note.name.to_lowercase().contains(&query_lower)
                || note.content.to_lowercase().contains(&query_lower)
        })
        .map(|(index, note)| NoteRow {
            position: index + 1,
            note: note.clone(),
        })
        .collect()
}

/// Resolve a user-facing 1-based position to a store index.
///
/// A miss is `Ok(None)` in lenient mode so the caller can warn and move on;
/// with strict indexes it is an error, mirroring the store's own policy.
pub fn resolve_position(store: &NoteStore, position: usize) -> Result<Option<usize>> {
    match position.checked_sub(1) {
        Some(index) if index < store.len() => Ok(Some(index)),
        _ if store.strict_indexes() => {
            Err(NotezError::Input(format!("No note at position {}", position)))
        }
        _ => Ok(None),
    }
}
