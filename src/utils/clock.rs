// Clock abstraction
// "Now" is always injected so date-dependent logic stays deterministic

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
///
/// Grid generation and navigation take the reference date as an explicit
/// parameter; hosts obtain it from a `Clock` so tests can pin time.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation using the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests and reproducible snapshots.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
