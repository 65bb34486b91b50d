//! Error types for annum-holidays.

use annum_calendar::{CalendarDate, CalendarError};
use annum_computus::ComputusError;

/// Error type for all fallible operations in the annum-holidays crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HolidayError {
    /// Returned when no provider is registered for a jurisdiction code.
    #[error("unknown jurisdiction: {code:?} (known: {known})")]
    UnknownJurisdiction {
        /// The rejected code.
        code: String,
        /// Comma-separated list of supported codes.
        known: String,
    },

    /// Returned when a provider has no rules for a requested year.
    #[error("{code} holidays are not defined for {year} (supported: {first}..={last})")]
    UnsupportedYear {
        /// Jurisdiction code of the provider.
        code: String,
        /// The rejected year.
        year: i32,
        /// First supported year.
        first: i32,
        /// Last supported year.
        last: i32,
    },

    /// Returned when a provider label contains no usable name.
    #[error("malformed label on {date}: {raw:?}")]
    MalformedLabel {
        /// Date the label was attached to.
        date: CalendarDate,
        /// The label as supplied by the provider.
        raw: String,
    },

    /// Wraps an error originating from the annum-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Wraps an error originating from the annum-computus crate.
    #[error("computus error: {reason}")]
    Computus {
        /// Description of the underlying computus failure.
        reason: String,
    },
}

impl From<CalendarError> for HolidayError {
    fn from(e: CalendarError) -> Self {
        HolidayError::Calendar {
            reason: e.to_string(),
        }
    }
}

impl From<ComputusError> for HolidayError {
    fn from(e: ComputusError) -> Self {
        HolidayError::Computus {
            reason: e.to_string(),
        }
    }
}
