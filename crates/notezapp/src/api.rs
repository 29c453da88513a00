use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::store::{NoteStore, ObserverId};
use std::path::Path;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, MessageLevel, NoteRow};

/// Facade over the command layer.
///
/// Owns the store for the lifetime of the application. Presentation layers
/// call these methods and render the returned [`CmdResult`]; nothing from
/// here inward touches a terminal.
pub struct NotezApi {
    store: NoteStore,
}

impl NotezApi {
    pub fn new(store: NoteStore) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn set_strict_indexes(&mut self, strict: bool) {
        self.store.set_strict_indexes(strict);
    }

    pub fn create_note(&mut self, name: &str, content: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.store, name, content)
    }

    pub fn update_note(
        &mut self,
        position: usize,
        name: &str,
        content: &str,
    ) -> Result<CmdResult> {
        commands::update::run(&mut self.store, position, name, content)
    }

    pub fn delete_note(&mut self, position: usize) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, position)
    }

    pub fn view_note(&self, position: usize) -> Result<CmdResult> {
        commands::view::run(&self.store, position)
    }

    pub fn list_notes(&self, query: Option<&str>) -> Result<CmdResult> {
        commands::list::run(&self.store, query)
    }

    pub fn save_notes(&self, path: &Path) -> Result<CmdResult> {
        commands::save::run(&self.store, path)
    }

    pub fn load_notes(&mut self, path: &Path) -> Result<CmdResult> {
        commands::load::run(&mut self.store, path)
    }

    pub fn config(&self, config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(config_dir, action)
    }

    pub fn observe(&mut self, callback: impl FnMut() + 'static) -> ObserverId {
        self.store.observe(callback)
    }

    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        self.store.unobserve(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn dispatches_create_and_list() {
        let mut api = NotezApi::new(NoteStore::new());
        api.create_note("A", "x").unwrap();

        let result = api.list_notes(None).unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].note.name, "A");
    }

    #[test]
    fn observers_fire_through_the_facade() {
        let mut api = NotezApi::new(NoteStore::new());
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        let id = api.observe(move || seen.set(seen.get() + 1));

        api.create_note("A", "x").unwrap();
        assert_eq!(count.get(), 1);

        api.unobserve(id);
        api.delete_note(1).unwrap();
        assert_eq!(count.get(), 1);
    }
}
