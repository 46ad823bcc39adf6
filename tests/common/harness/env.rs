//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::StickyCommand;
use std::path::{Path, PathBuf};
use sticky::store::{NoteStore, SqliteStore};
use tempfile::TempDir;

/// Isolated test environment with its own home, working directory and database.
///
/// Everything lives in a temp directory that is removed on drop.
pub struct TestEnv {
    _temp_dir: TempDir,
    home: PathBuf,
    work_dir: PathBuf,
    db_path: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let home = temp_dir.path().join("home");
        let work_dir = temp_dir.path().join("work");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");
        std::fs::create_dir_all(&work_dir).expect("Failed to create work directory");
        let db_path = temp_dir.path().join("db").join("sticky.db");
        Self {
            _temp_dir: temp_dir,
            home,
            work_dir,
            db_path,
        }
    }

    /// Returns the fake `$HOME` handed to the binary.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Returns the directory the binary runs in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Returns the database path passed via `--db`.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Inserts notes directly through the store, bypassing the CLI.
    pub fn add_notes(&self, contents: &[&str]) {
        let mut store = SqliteStore::open(&self.db_path).expect("Failed to open store");
        for content in contents {
            store.insert(content).expect("Failed to insert note");
        }
    }

    /// Creates a command pinned to this environment's database.
    pub fn cmd(&self) -> StickyCommand {
        self.bare_cmd().db(&self.db_path)
    }

    /// Creates a command without `--db`, so the binary resolves its own path.
    pub fn bare_cmd(&self) -> StickyCommand {
        StickyCommand::new()
            .env("HOME", self.home.to_string_lossy())
            .current_dir(&self.work_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
