//! Purge command handler.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::cli::output::{read_confirmation, write_preserved, write_purge_prompt, write_purged};
use crate::store::NoteStore;

/// What the purge prompt decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeOutcome {
    Erased,
    Preserved,
}

/// Asks for confirmation on `input` and erases the whole store on `y`.
///
/// Declining is not an error.
pub fn handle_purge<S, R, W>(store: S, input: &mut R, out: &mut W) -> Result<PurgeOutcome>
where
    S: NoteStore,
    R: BufRead,
    W: Write,
{
    write_purge_prompt(out)?;

    let confirmed = read_confirmation(input).context("failed to read confirmation")?;
    if !confirmed {
        write_preserved(out)?;
        return Ok(PurgeOutcome::Preserved);
    }

    store.erase().context("failed to delete notes database")?;
    tracing::info!("erased note store");
    write_purged(out)?;
    Ok(PurgeOutcome::Erased)
}
