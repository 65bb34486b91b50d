//! Day-by-day date sequences.

use crate::date::CalendarDate;

/// Iterator over consecutive days from `first` to `last`, both inclusive.
///
/// Returned by [`day_sequence`].
#[derive(Debug, Clone)]
pub struct DaySequence {
    next: Option<CalendarDate>,
    last: CalendarDate,
}

impl Iterator for DaySequence {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<CalendarDate> {
        let current = self.next.filter(|d| *d <= self.last)?;
        self.next = current.succ();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self
            .next
            .map_or(0, |d| (self.last.days_since(d) + 1).max(0) as usize);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DaySequence {}

/// Generates every date from `first` through `last`.
///
/// Month, year and leap-day boundaries are handled by the Gregorian
/// calendar. If `last` precedes `first` the sequence is empty.
///
/// # Example
///
/// ```
/// use annum_calendar::{CalendarDate, day_sequence};
///
/// let first = CalendarDate::new(2000, 12, 30).unwrap();
/// let last = CalendarDate::new(2001, 1, 2).unwrap();
/// assert_eq!(day_sequence(first, last).count(), 4);
/// ```
pub fn day_sequence(first: CalendarDate, last: CalendarDate) -> DaySequence {
    DaySequence {
        next: Some(first),
        last,
    }
}
