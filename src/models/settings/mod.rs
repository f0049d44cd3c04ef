// Settings module
// Host-configurable grid parameters

use serde::{Deserialize, Serialize};

/// Grid generation settings.
///
/// Defaults reproduce the canonical layout: weeks start on Sunday and the
/// week-view hour axis runs 07:00 through 20:00 inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSettings {
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u8,
    pub day_start_hour: u32,
    pub day_end_hour: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            day_start_hour: 7,
            day_end_hour: 20,
        }
    }
}
