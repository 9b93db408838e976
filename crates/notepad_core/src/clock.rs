//! Injected clock capability for date stamping.
//!
//! # Responsibility
//! - Supply "today" to the store without binding it to wall-clock time.
//! - Format the short display stamp written into `Note::date`.
//!
//! # Invariants
//! - `date_stamp` output matches the `Mon D` shape (`May 24`, `Jun 3`).

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
///
/// The store takes this as a capability so tests can pin the stamp.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation used by real sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Pinned-date implementation for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Formats a date as the short display stamp stored on notes.
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
