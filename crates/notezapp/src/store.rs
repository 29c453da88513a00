//! # The Note Store
//!
//! [`NoteStore`] owns the ordered note sequence and is the single source of
//! truth for a running application. Construct exactly one per process and
//! pass it to whatever layer needs it; there is no global instance.
//!
//! ## Contract
//!
//! - Notes are identified by position only. `update`/`delete` take a 0-based
//!   index into the current sequence, and indices shift when earlier notes
//!   are removed.
//! - Out-of-range indices are a silent no-op (`Ok(false)`) by default. With
//!   [`NoteStore::with_strict_indexes`] they raise
//!   [`NotezError::NoteNotFound`] instead. Either way the sequence is
//!   unchanged and observers stay quiet.
//! - Persistence is explicit: nothing is written until [`NoteStore::save`]
//!   and nothing is read until [`NoteStore::load`]. The on-disk form is a
//!   UTF-8 JSON array of `{"name", "content"}` objects.
//! - A failed load leaves the in-memory sequence exactly as it was.
//!
//! ## Observers
//!
//! Callbacks registered with [`NoteStore::observe`] run synchronously after
//! every successful mutation (add, in-range update/delete, successful load).
//! `save` does not mutate and does not notify. Callbacks take no arguments;
//! they are expected to re-read whatever state they render. The boxed
//! callbacks make the store single-threaded by construction.

use crate::error::{NotezError, Result};
use crate::model::Note;
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Handle returned by [`NoteStore::observe`], used to unregister later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut()>;

pub struct NoteStore {
    notes: Vec<Note>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
    strict_indexes: bool,
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            observers: Vec::new(),
            next_observer: 0,
            strict_indexes: false,
        }
    }

    /// Make out-of-range update/delete an error instead of a no-op.
    pub fn with_strict_indexes(mut self, strict: bool) -> Self {
        self.strict_indexes = strict;
        self
    }

    pub fn set_strict_indexes(&mut self, strict: bool) {
        self.strict_indexes = strict;
    }

    pub fn strict_indexes(&self) -> bool {
        self.strict_indexes
    }

    /// The current sequence, in order. Mutation goes through store methods
    /// only, so every change is observable.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Append a note at the end of the sequence.
    pub fn add(&mut self, note: Note) {
        self.notes.push(note);
        debug!("added note, store holds {}", self.notes.len());
        self.notify();
    }

    /// Replace the note at `index` wholesale, both fields at once.
    ///
    /// Returns `Ok(true)` when a note was replaced, `Ok(false)` for an
    /// out-of-range index in the default lenient mode.
    pub fn update(&mut self, index: usize, note: Note) -> Result<bool> {
        match self.notes.get_mut(index) {
            Some(slot) => {
                *slot = note;
                self.notify();
                Ok(true)
            }
            None => self.out_of_range(index),
        }
    }

    /// Remove the note at `index`; later notes shift down one position.
    ///
    /// Returns `Ok(true)` when a note was removed, `Ok(false)` for an
    /// out-of-range index in the default lenient mode.
    pub fn delete(&mut self, index: usize) -> Result<bool> {
        if index < self.notes.len() {
            self.notes.remove(index);
            self.notify();
            Ok(true)
        } else {
            self.out_of_range(index)
        }
    }

    fn out_of_range(&self, index: usize) -> Result<bool> {
        if self.strict_indexes {
            Err(NotezError::NoteNotFound(index))
        } else {
            debug!("ignoring out-of-range index {}", index);
            Ok(false)
        }
    }

    /// Notes whose name or content contains `query` case-insensitively, in
    /// store order. The empty query matches everything; treating blank input
    /// as "no filter" is the caller's policy.
    pub fn search(&self, query: &str) -> Vec<Note> {
        let query_lower = query.to_lowercase();
        self.notes
            .iter()
            .filter(|note| {
                note.name.to_lowercase().contains(&query_lower)
                    || note.content.to_lowercase().contains(&query_lower)
            })
            .cloned()
            .collect()
    }

    /// Write the whole sequence to `path` as a pretty-printed JSON array.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(&self.notes)?;
        fs::write(path, content)?;
        debug!("saved {} notes to {}", self.notes.len(), path.display());
        Ok(())
    }

    /// Replace the whole sequence with the contents of `path`.
    ///
    /// The file must hold a JSON array of `{"name", "content"}` objects.
    /// Raises [`NotezError::FileNotFound`] for a missing path and
    /// [`NotezError::Parse`] for anything that is not the expected shape.
    /// On failure the in-memory sequence is untouched and observers are not
    /// notified.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(NotezError::FileNotFound(path.to_path_buf()))
            }
            Err(e) => return Err(NotezError::Io(e)),
        };

        // Parse fully before touching the sequence; a bad file must not
        // clobber the current notes. Parsing from bytes keeps non-UTF-8
        // content on the invalid-format path rather than the I/O one.
        let notes: Vec<Note> = serde_json::from_slice(&bytes)?;

        self.notes = notes;
        debug!("loaded {} notes from {}", self.notes.len(), path.display());
        self.notify();
        Ok(())
    }

    /// Register a callback to run after every successful mutation.
    pub fn observe(&mut self, callback: impl FnMut() + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(callback)));
        id
    }

    /// Unregister a callback. Returns whether it was still registered.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        for (_, callback) in self.observers.iter_mut() {
            callback();
        }
    }
}
