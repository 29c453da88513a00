use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;
use std::path::Path;

/// Replace the collection with the contents of `path`.
///
/// Failures pass straight through; the store guarantees the previous notes
/// survive a bad file.
pub fn run(store: &mut NoteStore, path: &Path) -> Result<CmdResult> {
    store.load(path)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Loaded {} notes from {}",
        store.len(),
        path.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, save};
    use crate::error::NotezError;
    use crate::model::Note;
    use tempfile::TempDir;

    #[test]
    fn roundtrips_through_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.json");

        let mut store = NoteStore::new();
        create::run(&mut store, "A", "x").unwrap();
        create::run(&mut store, "B", "y").unwrap();
        save::run(&store, &path).unwrap();

        let mut other = NoteStore::new();
        run(&mut other, &path).unwrap();

        assert_eq!(other.notes(), store.notes());
    }

    #[test]
    fn replaces_existing_notes_wholesale() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, r#"[{"name":"Loaded","content":"z"}]"#).unwrap();

        let mut store = NoteStore::new();
        create::run(&mut store, "Old", "x").unwrap();
        run(&mut store, &path).unwrap();

        assert_eq!(store.notes(), [Note::new("Loaded", "z")]);
    }

    #[test]
    fn malformed_file_keeps_the_current_notes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, "this is not json").unwrap();

        let mut store = NoteStore::new();
        create::run(&mut store, "Keep", "me").unwrap();

        let err = run(&mut store, &path).unwrap_err();
        assert!(matches!(err, NotezError::Parse(_)));
        assert_eq!(store.notes(), [Note::new("Keep", "me")]);
    }

    #[test]
    fn missing_file_keeps_the_current_notes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nowhere.json");

        let mut store = NoteStore::new();
        create::run(&mut store, "Keep", "me").unwrap();

        let err = run(&mut store, &path).unwrap_err();
        assert!(matches!(err, NotezError::FileNotFound(_)));
        assert_eq!(store.len(), 1);
    }
}
