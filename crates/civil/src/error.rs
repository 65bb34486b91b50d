//! Error types for annum-civil.

use annum_calendar::CalendarError;
use annum_computus::ComputusError;

/// Error type for all fallible operations in the annum-civil crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CivilError {
    /// Returned when no observance calendar exists for a country code.
    #[error("unknown country: {code:?} (known: {known})")]
    UnknownCountry {
        /// The rejected code.
        code: String,
        /// Comma-separated list of supported codes.
        known: String,
    },

    /// Returned when one observance cannot be expanded over a range.
    #[error("observance {label:?}: {reason}")]
    Observance {
        /// Label of the failing observance.
        label: String,
        /// Description of the underlying failure.
        reason: String,
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

impl CivilError {
    /// Attaches the label of the observance being expanded.
    pub(crate) fn in_observance(self, label: &str) -> Self {
        CivilError::Observance {
            label: label.to_string(),
            reason: self.to_string(),
        }
    }
}

impl From<CalendarError> for CivilError {
    fn from(e: CalendarError) -> Self {
        CivilError::Calendar {
            reason: e.to_string(),
        }
    }
}

impl From<ComputusError> for CivilError {
    fn from(e: ComputusError) -> Self {
        CivilError::Computus {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_country() {
        let err = CivilError::UnknownCountry {
            code: "XX".to_string(),
            known: "FR, DE".to_string(),
        };
        assert_eq!(err.to_string(), "unknown country: \"XX\" (known: FR, DE)");
    }

    #[test]
    fn from_calendar_error() {
        let err: CivilError = CalendarError::InvalidYearRange { start: 2, end: 1 }.into();
        assert!(matches!(err, CivilError::Calendar { .. }));
    }

    #[test]
    fn from_computus_error() {
        let err: CivilError = ComputusError::InvalidMethod {
            method: "9".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("computus error: invalid easter method"));
    }

    #[test]
    fn observance_context() {
        let err = CivilError::Calendar {
            reason: "invalid date: 2023-02-29".to_string(),
        }
        .in_observance("Chandeleur");
        assert_eq!(
            err.to_string(),
            "observance \"Chandeleur\": calendar error: invalid date: 2023-02-29"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<CivilError>();
    }
}
