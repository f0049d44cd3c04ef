//! Calendar grid generation.
//!
//! Pure functions of `(anchor, now, settings)` producing the fixed-size cell
//! sequences the renderer consumes. No hidden state; `now` is always passed
//! in so output is deterministic and snapshot-testable.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use crate::models::grid::{GridCell, ViewMode};
use crate::models::settings::GridSettings;
use crate::utils::date::{encode_day_key, is_same_day, week_start};

/// Month view is always 6 rows of 7 columns; the renderer depends on this.
pub const MONTH_GRID_CELLS: usize = 42;

/// Week view is always one cell per weekday.
pub const WEEK_GRID_CELLS: usize = 7;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Generate the ordered cell sequence for the given anchor date and view mode.
pub fn generate_grid(
    anchor: NaiveDate,
    mode: ViewMode,
    now: NaiveDate,
    settings: &GridSettings,
) -> Vec<GridCell> {
    match mode {
        ViewMode::Month => month_grid(anchor, now, settings.first_day_of_week),
        ViewMode::Week => week_grid(anchor, now, settings.first_day_of_week),
    }
}

/// Generate the 42-cell month grid for the month containing `anchor`.
///
/// Leading cells pad back to the start of the week containing the 1st
/// (drawn from the previous month, `in_current_period = false`), followed by
/// every day of the anchor month, followed by next-month padding up to
/// exactly [`MONTH_GRID_CELLS`].
pub fn month_grid(anchor: NaiveDate, now: NaiveDate, first_day_of_week: u8) -> Vec<GridCell> {
    let first_of_month = anchor
        .with_day(1)
        .unwrap_or(anchor);
    let grid_start = week_start(first_of_month, first_day_of_week);

    (0..MONTH_GRID_CELLS as i64)
        .filter_map(|offset| grid_start.checked_add_signed(Duration::days(offset)))
        .map(|date| {
            let in_month = date.year() == anchor.year() && date.month() == anchor.month();
            make_cell(date, in_month, now)
        })
        .collect()
}

/// Generate the 7-cell week grid for the week containing `anchor`.
///
/// Week view has no concept of "other period", so every cell is
/// `in_current_period = true`.
pub fn week_grid(anchor: NaiveDate, now: NaiveDate, first_day_of_week: u8) -> Vec<GridCell> {
    let start = week_start(anchor, first_day_of_week);

    (0..WEEK_GRID_CELLS as i64)
        .filter_map(|offset| start.checked_add_signed(Duration::days(offset)))
        .map(|date| make_cell(date, true, now))
        .collect()
}

/// The static ascending hour axis used to bucket week-view events by
/// hour-of-day. Independent of events and of the anchor date.
pub fn hour_axis(settings: &GridSettings) -> Vec<NaiveTime> {
    (settings.day_start_hour..=settings.day_end_hour)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
        .collect()
}

/// Weekday header labels rotated to the configured first day of week.
pub fn day_names(first_day_of_week: u8) -> Vec<&'static str> {
    (0..7)
        .map(|i| DAY_NAMES[(first_day_of_week as usize + i) % 7])
        .collect()
}

fn make_cell(date: NaiveDate, in_current_period: bool, now: NaiveDate) -> GridCell {
    GridCell {
        date,
        day_key: encode_day_key(date),
        in_current_period,
        is_today: is_same_day(date, now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_month_grid_february_2026_sunday_start() {
        // February 2026 starts on a Sunday: no leading padding,
        // 28 in-month cells, 14 trailing cells from March.
        let now = date(2026, 2, 19);
        let grid = month_grid(date(2026, 2, 1), now, 0);

        assert_eq!(grid.len(), MONTH_GRID_CELLS);
        assert_eq!(grid[0].day_key, "2026-02-01");
        assert!(grid[0].in_current_period);
        assert_eq!(grid[27].day_key, "2026-02-28");
        assert!(grid[27].in_current_period);

        let padding: Vec<_> = grid.iter().filter(|c| !c.in_current_period).collect();
        assert_eq!(padding.len(), 14);
        assert_eq!(grid[28].day_key, "2026-03-01");
        assert!(!grid[28].in_current_period);
        assert_eq!(grid[41].day_key, "2026-03-14");
    }

    #[test]
    fn test_month_grid_leading_padding() {
        // August 2026 starts on a Saturday: 6 leading days from July.
        let now = date(2026, 8, 23);
        let grid = month_grid(date(2026, 8, 23), now, 0);

        assert_eq!(grid[0].day_key, "2026-07-26");
        assert!(!grid[0].in_current_period);
        assert_eq!(grid[5].day_key, "2026-07-31");
        assert!(!grid[5].in_current_period);
        assert_eq!(grid[6].day_key, "2026-08-01");
        assert!(grid[6].in_current_period);
    }

    #[test]
    fn test_month_grid_is_today_uses_injected_now() {
        let now = date(2026, 2, 19);
        let grid = month_grid(date(2026, 2, 1), now, 0);

        let today_cells: Vec<_> = grid.iter().filter(|c| c.is_today).collect();
        assert_eq!(today_cells.len(), 1);
        assert_eq!(today_cells[0].day_key, "2026-02-19");

        // A "now" outside the visible range marks nothing as today.
        let grid = month_grid(date(2026, 2, 1), date(2027, 6, 1), 0);
        assert!(grid.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_month_grid_dates_are_contiguous() {
        let grid = month_grid(date(2024, 12, 15), date(2024, 12, 15), 0);
        for pair in grid.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }
    }

    #[test_case(2026, 2, 1; "february 2026")]
    #[test_case(2024, 2, 29; "leap february")]
    #[test_case(2025, 12, 31; "december year end")]
    #[test_case(2026, 1, 1; "january year start")]
    #[test_case(2026, 5, 31; "31-day month")]
    fn test_month_grid_always_42_cells(year: i32, month: u32, day: u32) {
        let anchor = date(year, month, day);
        let grid = month_grid(anchor, anchor, 0);
        assert_eq!(grid.len(), MONTH_GRID_CELLS);
    }

    #[test]
    fn test_month_grid_anchor_day_does_not_matter() {
        let now = date(2026, 2, 19);
        assert_eq!(
            month_grid(date(2026, 2, 1), now, 0),
            month_grid(date(2026, 2, 28), now, 0)
        );
    }

    #[test]
    fn test_week_grid_sunday_through_saturday() {
        // Thursday, Feb 19 2026 falls in the week of Feb 15-21.
        let now = date(2026, 2, 19);
        let grid = week_grid(date(2026, 2, 19), now, 0);

        assert_eq!(grid.len(), WEEK_GRID_CELLS);
        assert_eq!(grid[0].day_key, "2026-02-15");
        assert_eq!(grid[6].day_key, "2026-02-21");
        assert!(grid.iter().all(|c| c.in_current_period));
        assert_eq!(grid.iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn test_week_grid_monday_start() {
        let now = date(2026, 2, 19);
        let grid = week_grid(date(2026, 2, 19), now, 1);

        assert_eq!(grid[0].day_key, "2026-02-16");
        assert_eq!(grid[6].day_key, "2026-02-22");
    }

    #[test]
    fn test_generate_grid_dispatches_on_mode() {
        let now = date(2026, 2, 19);
        let settings = GridSettings::default();

        let month = generate_grid(now, ViewMode::Month, now, &settings);
        let week = generate_grid(now, ViewMode::Week, now, &settings);
        assert_eq!(month.len(), MONTH_GRID_CELLS);
        assert_eq!(week.len(), WEEK_GRID_CELLS);
    }

    #[test]
    fn test_hour_axis_default_range() {
        let axis = hour_axis(&GridSettings::default());
        assert_eq!(axis.len(), 14);
        assert_eq!(axis[0], NaiveTime::from_hms_opt(7, 0, 0).unwrap());
        assert_eq!(axis[13], NaiveTime::from_hms_opt(20, 0, 0).unwrap());
    }

    #[test]
    fn test_hour_axis_clamps_invalid_hours() {
        let settings = GridSettings {
            day_start_hour: 22,
            day_end_hour: 30,
            ..GridSettings::default()
        };
        let axis = hour_axis(&settings);
        assert_eq!(axis.len(), 2); // 22:00 and 23:00 only
    }

    #[test]
    fn test_day_names_rotation() {
        assert_eq!(day_names(0)[0], "Sun");
        assert_eq!(day_names(1)[0], "Mon");
        assert_eq!(day_names(1)[6], "Sun");
    }
}
