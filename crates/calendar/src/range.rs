//! Inclusive year ranges and one-date-per-year feast sets.

use crate::date::CalendarDate;
use crate::error::CalendarError;

/// An inclusive range of years `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Creates a new inclusive year range.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYearRange`] if `start > end`.
    pub fn new(start: i32, end: i32) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidYearRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first year.
    pub fn start(self) -> i32 {
        self.start
    }

    /// Returns the last year (inclusive).
    pub fn end(self) -> i32 {
        self.end
    }

    /// Returns the number of years spanned, `end - start + 1`.
    pub fn len(self) -> usize {
        (i64::from(self.end) - i64::from(self.start) + 1) as usize
    }

    /// Always `false`: a valid range spans at least one year.
    pub fn is_empty(self) -> bool {
        false
    }

    /// Returns `true` if `year` lies inside the range.
    pub fn contains(self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Iterates the years in ascending order.
    pub fn years(self) -> impl Iterator<Item = i32> {
        self.start..=self.end
    }
}

/// One date per year over a [`YearRange`], in ascending year order.
///
/// The only constructor runs a per-year rule across the whole range, so the
/// length always equals `range.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovingFeastSet {
    range: YearRange,
    dates: Vec<CalendarDate>,
}

impl MovingFeastSet {
    /// Evaluates `rule` once for every year of `range`.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `rule`.
    pub fn from_rule<E, F>(range: YearRange, mut rule: F) -> Result<Self, E>
    where
        F: FnMut(i32) -> Result<CalendarDate, E>,
    {
        let dates = range.years().map(&mut rule).collect::<Result<Vec<_>, E>>()?;
        Ok(Self { range, dates })
    }

    /// Returns the year range the set covers.
    pub fn range(&self) -> YearRange {
        self.range
    }

    /// Returns the number of dates (one per year).
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Always `false`: a set covers at least one year.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the date for `year`, if the year is in range.
    pub fn get(&self, year: i32) -> Option<CalendarDate> {
        if !self.range.contains(year) {
            return None;
        }
        self.dates.get((year - self.range.start) as usize).copied()
    }

    /// Returns the dates as a slice.
    pub fn dates(&self) -> &[CalendarDate] {
        &self.dates
    }

    /// Consumes the set and returns the dates.
    pub fn into_dates(self) -> Vec<CalendarDate> {
        self.dates
    }
}
