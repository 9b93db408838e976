//! Editor dialog state machine.
//!
//! # Responsibility
//! - Hold transient draft state for the dialog currently open.
//! - Gate the single save path into the note store.
//!
//! # Invariants
//! - Draft state never reaches the store without passing validation.
//! - Cancel discards the draft without persisting anything.

pub mod form;
