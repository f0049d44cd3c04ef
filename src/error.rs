//! Error types for the scheduling core.

use thiserror::Error;

/// Errors surfaced by store operations, the day-key codec, and the
/// drag-reschedule controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid day key: {0}")]
    InvalidDayKey(String),

    #[error("Event not found: {0}")]
    NotFound(String),

    #[error("Invalid drag state: {0}")]
    InvalidState(String),
}

/// Result type alias for scheduling operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
