//! Get command handler.

use anyhow::Result;
use std::io::Write;

use crate::domain::VirtualId;
use crate::store::{NoteStore, resolve_note};

/// Prints the note currently at `virtual_id` as `<id> <content>`.
///
/// An out-of-range id surfaces as `StoreError::NotFound`.
pub fn handle_get<S: NoteStore, W: Write>(
    store: &S,
    virtual_id: VirtualId,
    out: &mut W,
) -> Result<()> {
    let note = resolve_note(store, virtual_id)?;
    writeln!(out, "{} {}", virtual_id, note.content())?;
    Ok(())
}
