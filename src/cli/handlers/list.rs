//! List command handler.

use anyhow::Result;
use std::io::Write;

use crate::cli::output::{format_row, id_width, write_list_preamble};
use crate::store::{NoteStore, list_with_virtual_ids};

/// Prints every note with its virtual id.
///
/// An empty store prints nothing at all, not even the preamble.
pub fn handle_list<S: NoteStore, W: Write>(store: &S, out: &mut W) -> Result<()> {
    let notes = list_with_virtual_ids(store)?;
    if notes.is_empty() {
        return Ok(());
    }

    let count = notes.len();
    write_list_preamble(out, count)?;

    let width = id_width(count);
    for note in &notes {
        writeln!(out, "{}", format_row(note.virtual_id, &note.content, width))?;
    }
    Ok(())
}
