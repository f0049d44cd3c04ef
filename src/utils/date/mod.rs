// Date utility functions
// Day-key codec and pure calendar math

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{CalendarError, CalendarResult};

/// Encode a date as a canonical `YYYY-MM-DD` day key.
///
/// The key is built from local calendar fields only (year, month,
/// day-of-month), never through a UTC/epoch round trip, so it identifies the
/// same calendar day in every time zone. Month and day are zero-padded; the
/// key is always 10 characters long.
pub fn encode_day_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Decode a `YYYY-MM-DD` day key back into a date.
///
/// Exact left inverse of [`encode_day_key`]: decoding an encoded date yields
/// identical year/month/day fields.
///
/// # Errors
/// Returns `CalendarError::InvalidDayKey` when the string is not three
/// dash-separated integers or names an out-of-range month/day.
pub fn decode_day_key(key: &str) -> CalendarResult<NaiveDate> {
    let invalid = || CalendarError::InvalidDayKey(key.to_string());

    let parts: Vec<&str> = key.split('-').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    let year: i32 = parts[0].parse().map_err(|_| invalid())?;
    let month: u32 = parts[1].parse().map_err(|_| invalid())?;
    let day: u32 = parts[2].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match (first, next) {
        (Some(first), Some(next)) => next.signed_duration_since(first).num_days() as u32,
        _ => 30,
    }
}

/// Weekday index (0 = Sunday .. 6 = Saturday) of the 1st of the given month.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

pub fn is_same_day(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1 == date2
}
