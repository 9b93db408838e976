//! Domain model for the note collection.
//!
//! # Responsibility
//! - Define the canonical note record shared by store, mirror and editor.
//! - Validate draft input before it may become persisted state.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Persisted notes always have non-blank `title` and `content`.

pub mod note;
