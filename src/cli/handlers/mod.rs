//! Command handlers for the CLI.
//!
//! Each handler performs one action against an already-open store and
//! writes its user-facing output to `out`.

mod add;
mod delete;
mod get;
mod list;
mod purge;


use anyhow::Result;
use std::io::{BufRead, Write};

use super::Action;
use crate::store::NoteStore;

pub use add::handle_add;
pub use delete::handle_delete;
pub use get::handle_get;
pub use list::handle_list;
pub use purge::{PurgeOutcome, handle_purge};

/// Runs `action` against `store`.
///
/// `input` is only read by the purge confirmation.
pub fn dispatch<S, R, W>(action: Action, mut store: S, input: &mut R, out: &mut W) -> Result<()>
where
    S: NoteStore,
    R: BufRead,
    W: Write,
{
    tracing::debug!(?action, "dispatching");

    match action {
        Action::Add(content) => handle_add(&mut store, &content, out),
        Action::Get(id) => handle_get(&store, id, out),
        Action::List => handle_list(&store, out),
        Action::Delete(id) => handle_delete(&mut store, id, out),
        Action::Purge => handle_purge(store, input, out).map(|_| ()),
    }
}
