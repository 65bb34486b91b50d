//! Error types for the annum-calendar crate.

use chrono::Weekday;

use crate::date::CalendarDate;

/// Error type for all fallible operations in the annum-calendar crate.
///
/// This enum covers invalid Gregorian dates, inverted year ranges, weekday
/// searches whose window holds no matching day, and duplicate labels in a
/// group collection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a (year, month, day) triple is not a Gregorian date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year component of the rejected date.
        year: i32,
        /// Month component of the rejected date.
        month: u32,
        /// Day component of the rejected date.
        day: u32,
    },

    /// Returned when a year range ends before it starts.
    #[error("invalid year range: {start}..={end} (start must not exceed end)")]
    InvalidYearRange {
        /// First year of the rejected range.
        start: i32,
        /// Last year of the rejected range.
        end: i32,
    },

    /// Returned when date arithmetic leaves the representable range.
    #[error("date out of range: {date} shifted by {days} day(s)")]
    OutOfRange {
        /// Date the shift was applied to.
        date: CalendarDate,
        /// Requested shift in days.
        days: i64,
    },

    /// Returned when a weekday search window contains no matching day.
    ///
    /// Civil and ecclesiastical rules always use windows wide enough to hold
    /// the weekday, so this signals a misconfigured rule.
    #[error("no {weekday} found in {days}-day window starting {from}")]
    WeekdayNotFound {
        /// Weekday that was searched for.
        weekday: Weekday,
        /// First day examined.
        from: CalendarDate,
        /// Number of days examined.
        days: u32,
    },

    /// Returned when an n-th weekday ordinal is zero or too large to locate.
    #[error("invalid weekday ordinal: {n}")]
    InvalidOrdinal {
        /// The rejected ordinal.
        n: u32,
    },

    /// Returned when a label is added twice to the same group collection.
    #[error("duplicate label: {label:?}")]
    DuplicateLabel {
        /// The repeated label.
        label: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_date() {
        let err = CalendarError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "invalid date: 2023-02-29");
    }

    #[test]
    fn error_invalid_year_range() {
        let err = CalendarError::InvalidYearRange {
            start: 2040,
            end: 2000,
        };
        assert_eq!(
            err.to_string(),
            "invalid year range: 2040..=2000 (start must not exceed end)"
        );
    }

    #[test]
    fn error_weekday_not_found() {
        let err = CalendarError::WeekdayNotFound {
            weekday: Weekday::Sun,
            from: CalendarDate::new(2024, 5, 1).unwrap(),
            days: 3,
        };
        assert_eq!(
            err.to_string(),
            "no Sun found in 3-day window starting 2024-05-01"
        );
    }

    #[test]
    fn error_invalid_ordinal() {
        let err = CalendarError::InvalidOrdinal { n: 0 };
        assert_eq!(err.to_string(), "invalid weekday ordinal: 0");
    }

    #[test]
    fn error_duplicate_label() {
        let err = CalendarError::DuplicateLabel {
            label: "Easter".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate label: \"Easter\"");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
