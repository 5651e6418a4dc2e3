//! Injected time source.
//!
//! All wall-clock and calendar reads in the core go through a single
//! [`Clock`] per logical operation, so a mutation never observes two
//! different "todays" mid-way and tests can pin time deterministically.

use chrono::{DateTime, NaiveDate, Utc};

pub trait Clock {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date, derived from the same instant as `now`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Production wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
