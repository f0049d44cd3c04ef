//! Anchor-date navigation.
//!
//! Pure computation of the next anchor for prev/next/today commands. Month
//! mode always lands on the 1st of the adjacent month so repeated navigation
//! never drifts at month ends; week mode shifts by whole weeks.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::grid::ViewMode;
use crate::utils::clock::Clock;

/// Compute the anchor one step forward from `anchor` in the given mode.
pub fn next_anchor(anchor: NaiveDate, mode: ViewMode) -> NaiveDate {
    match mode {
        ViewMode::Week => anchor + Duration::weeks(1),
        ViewMode::Month => {
            let (year, month) = if anchor.month() == 12 {
                (anchor.year() + 1, 1)
            } else {
                (anchor.year(), anchor.month() + 1)
            };
            NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(anchor)
        }
    }
}

/// Compute the anchor one step backward from `anchor` in the given mode.
pub fn prev_anchor(anchor: NaiveDate, mode: ViewMode) -> NaiveDate {
    match mode {
        ViewMode::Week => anchor - Duration::weeks(1),
        ViewMode::Month => {
            let (year, month) = if anchor.month() == 1 {
                (anchor.year() - 1, 12)
            } else {
                (anchor.year(), anchor.month() - 1)
            };
            NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(anchor)
        }
    }
}

/// Anchor for the "Today" command: the injected clock's current date.
pub fn today_anchor(clock: &dyn Clock) -> NaiveDate {
    clock.today()
}
