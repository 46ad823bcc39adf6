//! NoteStore trait and error types.

use crate::domain::{Note, StableId, VirtualId};
use std::path::PathBuf;
use thiserror::Error;

// ===========================================
// StoreError Type
// ===========================================

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No surviving note sits at the requested virtual id.
    #[error("note #{virtual_id} not found")]
    NotFound { virtual_id: VirtualId },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// NoteStore Trait
// ===========================================

/// Durable persistence of notes keyed by stable id.
///
/// Implementations never reuse a stable id: every insert returns an id
/// strictly greater than any id previously issued by the same store.
pub trait NoteStore {
    /// Appends a note and returns its freshly assigned stable id.
    fn insert(&mut self, content: &str) -> StoreResult<StableId>;

    /// Removes the note with the given stable id.
    ///
    /// Returns `true` if a row was removed. A missing id is not an error.
    fn delete(&mut self, id: StableId) -> StoreResult<bool>;

    /// Returns the number of surviving notes.
    fn count(&self) -> StoreResult<usize>;

    /// Returns all notes in ascending stable id order.
    fn notes_ordered(&self) -> StoreResult<Vec<Note>>;

    /// Looks up a single note by stable id.
    fn lookup(&self, id: StableId) -> StoreResult<Option<Note>>;

    /// Irreversibly destroys the backing store.
    fn erase(self) -> StoreResult<()>
    where
        Self: Sized;
}
