//! Case-insensitive substring filter over the in-memory collection.
//!
//! # Responsibility
//! - Decide whether a note matches a live search term.
//! - Produce the filtered sub-collection without mutating state.
//!
//! # Invariants
//! - An empty term matches every note.
//! - Matching is case-insensitive on both title and content.
//! - Input order is preserved in the result.

use crate::model::note::Note;

/// Returns whether `term` occurs (case-insensitively) in the note's
/// title or content.
pub fn note_matches(note: &Note, term: &str) -> bool {
    let needle = term.to_lowercase();
    note.title.to_lowercase().contains(&needle) || note.content.to_lowercase().contains(&needle)
}

/// Filters notes by [`note_matches`], preserving order.
pub fn filter_notes<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    notes.iter().filter(|note| note_matches(note, term)).collect()
}
