//! Durable mirror abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the load/save contract for the serialized note collection.
//! - Isolate storage-medium details from store orchestration.
//!
//! # Invariants
//! - `save` replaces the whole persisted collection wholesale.
//! - Implementations return semantic errors (`Corrupt`) in addition to
//!   transport errors, so the store can apply recovery policy.

pub mod note_mirror;
