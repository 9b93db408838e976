//! Live-filter search entry points.
//!
//! # Responsibility
//! - Expose the substring predicate shared by store and presentation.
//! - Keep result shaping (order, borrowing) inside core.

pub mod filter;
