//! Core types: Note, StableId, VirtualId

mod note;
mod note_id;

pub use note::Note;
pub use note_id::{StableId, VirtualId};
