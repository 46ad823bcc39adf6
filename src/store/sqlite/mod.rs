//! SQLite-backed note store implementation.

mod connection;
mod repo_impl;


use rusqlite::Connection;
use std::path::PathBuf;

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed note store.
///
/// Owns the single database connection held for the duration of a command.
pub struct SqliteStore {
    pub(crate) conn: Connection,
    /// Backing file, `None` for in-memory stores.
    pub(crate) path: Option<PathBuf>,
    /// Whether `open` had to create the backing file.
    pub(crate) created: bool,
}
