//! Authoritative note collection with write-through persistence.
//!
//! # Responsibility
//! - Provide create/update/remove/search over the session's notes.
//! - Seed first-run sessions with the fixed sample notes.
//! - Apply the corrupt-mirror recovery policy.
//!
//! # Invariants
//! - Note ids are unique within the collection at all times.
//! - Newly created notes are prepended; editing preserves position.
//! - Every successful mutation writes the whole collection through to
//!   the mirror before returning.

use crate::clock::{date_stamp, Clock};
use crate::model::note::{validate_draft, Note, NoteId, NoteValidationError};
use crate::repo::note_mirror::{MirrorError, NoteMirror};
use crate::search::filter::filter_notes;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for note mutation and persistence operations.
#[derive(Debug)]
pub enum StoreError {
    /// Draft rejected before touching the collection.
    Validation(NoteValidationError),
    /// Update target does not exist.
    NotFound(NoteId),
    /// Durable mirror failure.
    Mirror(MirrorError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::Mirror(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Mirror(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for StoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<MirrorError> for StoreError {
    fn from(value: MirrorError) -> Self {
        Self::Mirror(value)
    }
}

/// Session-owned note collection backed by a durable mirror.
///
/// Generic over the persistence and clock capabilities so tests can run
/// against an in-memory mirror and a pinned date.
pub struct NoteStore<M: NoteMirror, C: Clock> {
    notes: Vec<Note>,
    mirror: M,
    clock: C,
}

impl<M: NoteMirror, C: Clock> NoteStore<M, C> {
    /// Opens a store session: reads the mirror once, seeding or degrading
    /// as needed.
    ///
    /// - No blob yet: the collection is seeded with the two fixed sample
    ///   notes and written through immediately.
    /// - Corrupt blob: a warning is logged and the session starts empty;
    ///   the blob stays in place until the next mutation overwrites it.
    pub fn open(mirror: M, clock: C) -> StoreResult<Self> {
        let loaded = match mirror.load() {
            Ok(blob) => blob,
            Err(MirrorError::Corrupt(message)) => {
                warn!("event=mirror_load module=store status=error error_code=corrupt_blob error={message}");
                Some(Vec::new())
            }
            Err(other) => return Err(other.into()),
        };

        let mut store = Self {
            notes: Vec::new(),
            mirror,
            clock,
        };

        match loaded {
            Some(notes) => {
                info!(
                    "event=store_open module=store status=ok seeded=false count={}",
                    notes.len()
                );
                store.notes = notes;
            }
            None => {
                store.notes = sample_notes(&store.stamp());
                store.persist()?;
                info!(
                    "event=store_open module=store status=ok seeded=true count={}",
                    store.notes.len()
                );
            }
        }

        Ok(store)
    }

    /// Creates a note from a draft and prepends it to the collection.
    ///
    /// Rejects blank (after trim) title or content without touching the
    /// collection. Values are stored verbatim, not trimmed.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<NoteId> {
        let title = title.into();
        let content = content.into();
        validate_draft(&title, &content)?;

        let note = Note::new(title, content, self.stamp());
        let id = note.id;
        self.notes.insert(0, note);
        self.persist()?;
        debug!("event=note_create module=store status=ok id={id}");
        Ok(id)
    }

    /// Replaces title/content of an existing note, restamping its date.
    ///
    /// The note keeps its position in the collection. Unknown ids are
    /// reported as [`StoreError::NotFound`] with the collection unchanged.
    pub fn update(
        &mut self,
        id: NoteId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<()> {
        let title = title.into();
        let content = content.into();
        validate_draft(&title, &content)?;

        let stamp = self.stamp();
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(StoreError::NotFound(id))?;
        note.title = title;
        note.content = content;
        note.date = stamp;

        self.persist()?;
        debug!("event=note_update module=store status=ok id={id}");
        Ok(())
    }

    /// Removes a note by id.
    ///
    /// Returns `true` when a note was removed. A missing id is a silent
    /// no-op returning `false`; nothing is persisted in that case.
    pub fn remove(&mut self, id: NoteId) -> StoreResult<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        if self.notes.len() == before {
            return Ok(false);
        }

        self.persist()?;
        debug!("event=note_remove module=store status=ok id={id}");
        Ok(true)
    }

    /// Filters the collection by case-insensitive substring on title or
    /// content. An empty term matches everything. Pure; order preserved.
    pub fn search(&self, term: &str) -> Vec<&Note> {
        filter_notes(&self.notes, term)
    }

    /// Gets one note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Full collection, most-recent-first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn stamp(&self) -> String {
        date_stamp(self.clock.today())
    }

    fn persist(&self) -> StoreResult<()> {
        self.mirror.save(&self.notes)?;
        Ok(())
    }
}

/// Fixed first-run sample collection, most-recent-first.
fn sample_notes(stamp: &str) -> Vec<Note> {
    vec![
        Note::new("two", "good interface and better experience", stamp),
        Note::new("one", "test note pad", stamp),
    ]
}
