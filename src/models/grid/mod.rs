// Grid module
// View modes and the value cells the renderer consumes

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar view modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Month,
    Week,
}

/// One rendering slot in the calendar grid.
///
/// Recomputed on every navigation, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub date: NaiveDate,
    pub day_key: String,
    /// False for padding cells drawn from an adjacent month in month view.
    pub in_current_period: bool,
    /// Computed once per grid generation against the injected "now".
    pub is_today: bool,
}
