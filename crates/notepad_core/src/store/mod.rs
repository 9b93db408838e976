//! Core note store.
//!
//! # Responsibility
//! - Own the authoritative in-memory collection for the session.
//! - Keep the durable mirror in sync after every mutation.
//!
//! # Invariants
//! - Exactly one writer: the current user action, run to completion.
//! - Mirror content equals in-memory content after each successful
//!   mutation (write-through, no batching).

pub mod note_store;
