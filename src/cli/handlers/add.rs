//! Add command handler.

use anyhow::{Context, Result};
use std::io::Write;

use crate::cli::output::write_success;
use crate::store::NoteStore;

pub fn handle_add<S: NoteStore, W: Write>(
    store: &mut S,
    content: &str,
    out: &mut W,
) -> Result<()> {
    let id = store.insert(content).context("failed to add note")?;
    tracing::info!(stable_id = %id, "added note");

    write_success(out, "Successfully added note")?;
    Ok(())
}
