//! Error types for annum-computus.

use annum_calendar::CalendarError;

/// Error type for all fallible operations in the annum-computus crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputusError {
    /// Returned when an Easter method selector is not one of the three
    /// recognised algorithms.
    #[error("invalid easter method: {method} (expected 1 = julian, 2 = orthodox, 3 = western)")]
    InvalidMethod {
        /// The rejected selector, as given.
        method: String,
    },

    /// Wraps an error originating from the annum-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },
}

impl From<CalendarError> for ComputusError {
    fn from(e: CalendarError) -> Self {
        ComputusError::Calendar {
            reason: e.to_string(),
        }
    }
}
