//! SQLite schema creation for the notes store.

use rusqlite::Connection;

/// Current schema version, recorded in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i32 = 1;

/// Creates the database schema for the notes store.
///
/// Idempotent: calling it against an existing database leaves its rows alone.
///
/// `AUTOINCREMENT` keeps SQLite from handing out `max(id) + 1` again after
/// the newest note is deleted, so stable ids are never reused.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            note TEXT NOT NULL
        );",
    )?;

    let version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }

    Ok(())
}
