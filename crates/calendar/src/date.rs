//! Gregorian calendar date without a time component.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::CalendarError;

/// A proleptic Gregorian date (year, month, day).
///
/// Every date rule in the workspace produces `CalendarDate`s, and the
/// serializer formats them as iCalendar `DATE` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] if the triple does not name a
    /// Gregorian date (e.g. February 29 of a common year).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u32, u32) {
        (self.month(), self.day())
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the wrapped `chrono` date.
    pub fn naive(self) -> NaiveDate {
        self.0
    }

    /// Shifts the date by a signed number of days.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result leaves the range
    /// `chrono` can represent.
    pub fn add_days(self, days: i64) -> Result<Self, CalendarError> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted
            .map(Self)
            .ok_or(CalendarError::OutOfRange { date: self, days })
    }

    /// Returns the following day, or `None` at the end of the representable
    /// range.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// Returns the number of days from `other` to `self`.
    pub fn days_since(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }

    /// Formats the date as an iCalendar `DATE` value (`YYYYMMDD`).
    pub fn to_ical(self) -> String {
        self.0.format("%Y%m%d").to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
