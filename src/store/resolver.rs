//! Virtual id resolution.
//!
//! Users address notes by their 1-based position among surviving notes
//! ordered by stable id. The mapping is recomputed from the store on every
//! call, so deletions shift later notes down by one instead of leaving holes.

use crate::domain::{Note, StableId, VirtualId};
use crate::store::{NoteStore, StoreError, StoreResult};

/// A note paired with the virtual id it currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualNote {
    pub virtual_id: VirtualId,
    pub content: String,
}

/// Returns every surviving note with its virtual id, in creation order.
pub fn list_with_virtual_ids<S: NoteStore>(store: &S) -> StoreResult<Vec<VirtualNote>> {
    let notes = store.notes_ordered()?;

    Ok(notes
        .into_iter()
        .enumerate()
        .map(|(position, note)| VirtualNote {
            virtual_id: VirtualId::from_position(position),
            content: note.into_content(),
        })
        .collect())
}

/// Resolves a virtual id to the note currently at that position.
///
/// # Errors
///
/// Returns `StoreError::NotFound` if `virtual_id` is below 1 or above the
/// number of surviving notes.
pub fn resolve_note<S: NoteStore>(store: &S, virtual_id: VirtualId) -> StoreResult<Note> {
    let not_found = || StoreError::NotFound { virtual_id };

    let position = virtual_id.position().ok_or_else(not_found)?;
    let note = store
        .notes_ordered()?
        .into_iter()
        .nth(position)
        .ok_or_else(not_found)?;

    tracing::debug!(%virtual_id, stable_id = %note.id(), "resolved virtual id");
    Ok(note)
}

/// Resolves a virtual id to the stable id of the note at that position.
pub fn resolve_virtual_to_stable<S: NoteStore>(
    store: &S,
    virtual_id: VirtualId,
) -> StoreResult<StableId> {
    resolve_note(store, virtual_id).map(|note| note.id())
}
