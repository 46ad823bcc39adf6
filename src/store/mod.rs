//! Note storage and virtual id resolution

mod repository;
mod resolver;
mod schema;
mod sqlite;

pub use repository::{NoteStore, StoreError, StoreResult};
pub use resolver::{VirtualNote, list_with_virtual_ids, resolve_note, resolve_virtual_to_stable};
pub use schema::{SCHEMA_VERSION, create_schema};
pub use sqlite::SqliteStore;
