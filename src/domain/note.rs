//! The note entity as read back from the store.

use super::StableId;

/// A stored note: its stable id and text content.
///
/// Content is arbitrary text and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: StableId,
    content: String,
}

impl Note {
    pub fn new(id: StableId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// Returns the note's stable identifier.
    pub fn id(&self) -> StableId {
        self.id
    }

    /// Returns the note's text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consumes the note, returning its text.
    pub fn into_content(self) -> String {
        self.content
    }
}
