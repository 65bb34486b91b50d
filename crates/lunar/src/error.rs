//! Error types for annum-lunar.

use annum_calendar::CalendarError;

/// Error type for all fallible operations in the annum-lunar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LunarError {
    /// Wraps an error originating from the annum-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },
}

impl From<CalendarError> for LunarError {
    fn from(e: CalendarError) -> Self {
        LunarError::Calendar {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_calendar_error() {
        let err: LunarError = CalendarError::InvalidYearRange { start: 2, end: 1 }.into();
        assert_eq!(
            err.to_string(),
            "calendar error: invalid year range: 2..=1 (start must not exceed end)"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<LunarError>();
    }
}
