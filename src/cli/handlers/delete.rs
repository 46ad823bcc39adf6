//! Delete command handler.

use anyhow::Result;
use std::io::Write;

use crate::cli::output::write_success;
use crate::domain::VirtualId;
use crate::store::{NoteStore, resolve_virtual_to_stable};

pub fn handle_delete<S: NoteStore, W: Write>(
    store: &mut S,
    virtual_id: VirtualId,
    out: &mut W,
) -> Result<()> {
    let stable_id = resolve_virtual_to_stable(store, virtual_id)?;
    if !store.delete(stable_id)? {
        tracing::warn!(%virtual_id, %stable_id, "note vanished before it could be deleted");
    }

    write_success(out, &format!("Successfully deleted note #{virtual_id}"))?;
    Ok(())
}
