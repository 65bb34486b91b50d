//! Error types for annum-ical.

use std::path::PathBuf;

/// Error type for all fallible operations in the annum-ical crate.
#[derive(Debug, thiserror::Error)]
pub enum IcalError {
    /// Returned when an explicit-date event is requested with no dates.
    #[error("no dates for event {label:?}")]
    EmptyDates {
        /// Label of the offending group.
        label: String,
    },

    /// Returned when a line-ending name is not recognised.
    #[error("invalid line ending: {value:?} (expected \"lf\" or \"crlf\")")]
    InvalidLineEnding {
        /// The rejected value.
        value: String,
    },

    /// Returned when the document cannot be written to disk.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination (or temporary) path involved in the failure.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
