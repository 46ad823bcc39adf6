//! NoteStore trait implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{Note, StableId};
use crate::store::{NoteStore, StoreError, StoreResult};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Files SQLite may leave next to the database.
const SIDECAR_SUFFIXES: [&str; 3] = ["-journal", "-wal", "-shm"];

pub(super) fn row_to_note(row: &rusqlite::Row<'_>) -> rusqlite::Result<Note> {
    let id: i64 = row.get(0)?;
    // Older databases allowed NULL content.
    let content: Option<String> = row.get(1)?;
    Ok(Note::new(StableId::new(id), content.unwrap_or_default()))
}

fn remove_if_exists(path: PathBuf) -> StoreResult<()> {
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StoreError::Io { path, source: e }),
    }
}

impl NoteStore for SqliteStore {
    fn insert(&mut self, content: &str) -> StoreResult<StableId> {
        self.conn
            .execute("INSERT INTO notes (note) VALUES (?1)", [content])?;
        let id = StableId::new(self.conn.last_insert_rowid());
        tracing::debug!(stable_id = %id, "inserted note");
        Ok(id)
    }

    fn delete(&mut self, id: StableId) -> StoreResult<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1", [id.get()])?;
        tracing::debug!(stable_id = %id, affected, "deleted note");
        Ok(affected > 0)
    }

    fn count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn notes_ordered(&self) -> StoreResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, note FROM notes ORDER BY id ASC")?;
        let notes = stmt
            .query_map([], row_to_note)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(notes)
    }

    fn lookup(&self, id: StableId) -> StoreResult<Option<Note>> {
        let result = self.conn.query_row(
            "SELECT id, note FROM notes WHERE id = ?1",
            [id.get()],
            row_to_note,
        );

        match result {
            Ok(note) => Ok(Some(note)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    fn erase(self) -> StoreResult<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, e)| StoreError::Database(e))?;

        let Some(path) = path else {
            return Ok(());
        };

        for suffix in SIDECAR_SUFFIXES {
            let mut sidecar = path.clone().into_os_string();
            sidecar.push(suffix);
            remove_if_exists(PathBuf::from(sidecar))?;
        }
        remove_if_exists(path.clone())?;

        tracing::debug!(path = %path.display(), "erased note store");
        Ok(())
    }
}
