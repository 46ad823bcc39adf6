//! Note identifiers: the storage-assigned stable id and the user-facing virtual id.

use std::fmt;

/// The immutable key assigned to a note by the store on insert.
///
/// Stable ids increase monotonically and are never reused, even after the
/// note holding the highest id is deleted. They are never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StableId(i64);

impl StableId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw row id.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for StableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The 1-based rank of a note among all surviving notes ordered by stable id.
///
/// Virtual ids are a view, not persisted state: they are recomputed on every
/// access and stay dense (`1..=count`) across deletions. A `VirtualId` may hold
/// any integer the user typed; values outside `1..=count` fail to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualId(i64);

impl VirtualId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Builds the virtual id for a zero-based position in the ordered sequence.
    pub fn from_position(position: usize) -> Self {
        Self(position as i64 + 1)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Returns the zero-based position this id points at, if it is at least 1.
    pub fn position(self) -> Option<usize> {
        if self.0 < 1 {
            return None;
        }
        usize::try_from(self.0 - 1).ok()
    }
}

impl fmt::Display for VirtualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
