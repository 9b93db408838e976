//! Note editor form: a two-state dialog machine.
//!
//! States are `Closed` and `Open(Create | Edit(id))`. All state changes
//! happen through the explicit transition methods below; there is no
//! other way to mutate the draft.
//!
//! # Invariants
//! - Opening in create mode clears both draft fields.
//! - Opening in edit mode pre-fills both draft fields from the target.
//! - A failed save leaves the form open and the draft intact.
//! - A successful save resets the draft and closes the form.

use crate::clock::Clock;
use crate::model::note::{validate_draft, Note, NoteId, NoteValidationError};
use crate::repo::note_mirror::NoteMirror;
use crate::store::note_store::{NoteStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Dialog mode: creating a fresh note or editing an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(NoteId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorState {
    Closed,
    Open(EditorMode),
}

/// Save-path error for the editor dialog.
#[derive(Debug)]
pub enum EditorError {
    /// Save was requested while no dialog is open.
    Closed,
    /// Draft fields do not pass validation; the form stays open.
    Draft(NoteValidationError),
    /// The store rejected the save; the form stays open.
    Store(StoreError),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed => write!(f, "editor is not open"),
            Self::Draft(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Closed => None,
            Self::Draft(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for EditorError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Transient title/content draft for the dialog currently open.
#[derive(Debug)]
pub struct NoteEditorForm {
    state: EditorState,
    title: String,
    content: String,
}

impl Default for NoteEditorForm {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteEditorForm {
    /// Creates a closed form with empty drafts.
    pub fn new() -> Self {
        Self {
            state: EditorState::Closed,
            title: String::new(),
            content: String::new(),
        }
    }

    /// Opens the dialog in create mode with cleared drafts.
    pub fn open_create(&mut self) {
        self.title.clear();
        self.content.clear();
        self.state = EditorState::Open(EditorMode::Create);
    }

    /// Opens the dialog in edit mode, pre-filled from the target note.
    pub fn open_edit(&mut self, note: &Note) {
        self.title = note.title.clone();
        self.content = note.content.clone();
        self.state = EditorState::Open(EditorMode::Edit(note.id));
    }

    /// Replaces the title draft.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the content draft.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Whether a save would currently be accepted: the dialog is open and
    /// both drafts are non-blank after trimming.
    pub fn can_save(&self) -> bool {
        matches!(self.state, EditorState::Open(_))
            && validate_draft(&self.title, &self.content).is_ok()
    }

    /// Commits the draft to the store.
    ///
    /// Create mode delegates to [`NoteStore::create`], edit mode to
    /// [`NoteStore::update`]. On success the draft is reset and the form
    /// closes; on any failure the form stays open with the draft intact.
    pub fn save<M: NoteMirror, C: Clock>(
        &mut self,
        store: &mut NoteStore<M, C>,
    ) -> Result<NoteId, EditorError> {
        let mode = match self.state {
            EditorState::Closed => return Err(EditorError::Closed),
            EditorState::Open(mode) => mode,
        };
        validate_draft(&self.title, &self.content).map_err(EditorError::Draft)?;

        let id = match mode {
            EditorMode::Create => store.create(self.title.as_str(), self.content.as_str())?,
            EditorMode::Edit(id) => {
                store.update(id, self.title.as_str(), self.content.as_str())?;
                id
            }
        };

        self.reset();
        Ok(id)
    }

    /// Closes the dialog, discarding the draft without persisting.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Whether a dialog is currently open.
    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Open(_))
    }

    /// Current dialog mode, if open.
    pub fn mode(&self) -> Option<EditorMode> {
        match self.state {
            EditorState::Closed => None,
            EditorState::Open(mode) => Some(mode),
        }
    }

    /// Current title draft.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current content draft.
    pub fn content(&self) -> &str {
        &self.content
    }

    fn reset(&mut self) {
        self.title.clear();
        self.content.clear();
        self.state = EditorState::Closed;
    }
}
