//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record `{id, title, content, date}`.
//! - Provide draft validation shared by store and editor boundaries.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `title` and `content` are non-blank after trimming once persisted.
//! - `date` is a display stamp, recomputed on every save; edits overwrite
//!   it (creation time is not tracked separately).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every note in the collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Canonical persisted note record.
///
/// This is also the wire shape of the durable mirror: the whole collection
/// serializes as one JSON array of these objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable ID assigned at creation, immutable thereafter.
    pub id: NoteId,
    /// Display title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Short human-readable stamp, e.g. `May 24`. Overwritten on edit.
    pub date: String,
}

impl Note {
    /// Creates a note with a generated stable ID.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, content, date)
    }

    /// Creates a note with a caller-provided stable ID.
    ///
    /// Used by paths where identity already exists (mirror decode, tests).
    pub fn with_id(
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            date: date.into(),
        }
    }
}

/// Draft rejection reasons for create/update/save boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title is empty or whitespace-only.
    BlankTitle,
    /// Content is empty or whitespace-only.
    BlankContent,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "note title must not be blank"),
            Self::BlankContent => write!(f, "note content must not be blank"),
        }
    }
}

impl Error for NoteValidationError {}

/// Validates a title/content draft pair.
///
/// Values are judged after trimming but stored verbatim by callers; the
/// check gates persistence, it does not normalize.
pub fn validate_draft(title: &str, content: &str) -> Result<(), NoteValidationError> {
    if title.trim().is_empty() {
        return Err(NoteValidationError::BlankTitle);
    }
    if content.trim().is_empty() {
        return Err(NoteValidationError::BlankContent);
    }
    Ok(())
}
