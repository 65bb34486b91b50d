//! Weekday searches over bounded day windows.
//!
//! Every weekday rule in the workspace reduces to scanning a short window of
//! days, forward or backward from a start date, and picking the first (or the
//! n-th) day that falls on a given weekday.

use chrono::Weekday;

use crate::date::CalendarDate;
use crate::error::CalendarError;

/// Scan direction of a search window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `from`, `from + 1`, `from + 2`, ...
    Forward,
    /// `from`, `from - 1`, `from - 2`, ...
    Backward,
}

impl Direction {
    fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Returns the `n`-th day (1-based) falling on `weekday` in the window of
/// `days` days that starts at `from` and runs in `direction`.
///
/// # Errors
///
/// Returns [`CalendarError::WeekdayNotFound`] if the window holds fewer than
/// `n` matching days (always the case for `n == 0`).
pub fn nth_weekday_in_window(
    from: CalendarDate,
    days: u32,
    direction: Direction,
    weekday: Weekday,
    n: u32,
) -> Result<CalendarDate, CalendarError> {
    let mut found = 0;
    for offset in 0..i64::from(days) {
        let day = from.add_days(offset * direction.step())?;
        if day.weekday() == weekday {
            found += 1;
            if found == n {
                return Ok(day);
            }
        }
    }
    Err(CalendarError::WeekdayNotFound {
        weekday,
        from,
        days,
    })
}

/// Returns the first day falling on `weekday` in the window of `days` days
/// that starts at `from` and runs in `direction`.
///
/// # Errors
///
/// Returns [`CalendarError::WeekdayNotFound`] if no day in the window matches.
pub fn find_weekday(
    from: CalendarDate,
    days: u32,
    direction: Direction,
    weekday: Weekday,
) -> Result<CalendarDate, CalendarError> {
    nth_weekday_in_window(from, days, direction, weekday, 1)
}

/// Returns the first `weekday` on or after `date`.
pub fn weekday_on_or_after(
    date: CalendarDate,
    weekday: Weekday,
) -> Result<CalendarDate, CalendarError> {
    find_weekday(date, 7, Direction::Forward, weekday)
}

/// Returns the last `weekday` on or before `date`.
pub fn weekday_on_or_before(
    date: CalendarDate,
    weekday: Weekday,
) -> Result<CalendarDate, CalendarError> {
    find_weekday(date, 7, Direction::Backward, weekday)
}

/// Returns the `n`-th `weekday` counting backwards from `date` (inclusive),
/// looking at no more than `window_days` days.
///
/// # Errors
///
/// Returns [`CalendarError::WeekdayNotFound`] if the window is too short to
/// hold `n` such weekdays.
pub fn nth_weekday_on_or_before(
    date: CalendarDate,
    weekday: Weekday,
    n: u32,
    window_days: u32,
) -> Result<CalendarDate, CalendarError> {
    nth_weekday_in_window(date, window_days, Direction::Backward, weekday, n)
}

/// Returns the `n`-th `weekday` of `month` in `year` (1-based).
///
/// The search covers the seven days starting on day `7 * (n - 1) + 1`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidOrdinal`] for `n == 0` or an `n` whose
/// window start overflows, [`CalendarError::InvalidDate`] when the window
/// start does not exist (e.g. a 6th week) and
/// [`CalendarError::WeekdayNotFound`] when the match would fall past the end
/// of the month.
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    n: u32,
) -> Result<CalendarDate, CalendarError> {
    let start_day = n
        .checked_sub(1)
        .and_then(|weeks| weeks.checked_mul(7))
        .and_then(|days| days.checked_add(1))
        .ok_or(CalendarError::InvalidOrdinal { n })?;
    let first = CalendarDate::new(year, month, start_day)?;
    let day = find_weekday(first, 7, Direction::Forward, weekday)?;
    if day.month() != month {
        return Err(CalendarError::WeekdayNotFound {
            weekday,
            from: first,
            days: 7,
        });
    }
    Ok(day)
}

/// Returns the last `weekday` of `month` in `year`, scanning the final seven
/// days of the month from the end.
pub fn last_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
) -> Result<CalendarDate, CalendarError> {
    let next_month = if month == 12 {
        CalendarDate::new(year + 1, 1, 1)?
    } else {
        CalendarDate::new(year, month + 1, 1)?
    };
    weekday_on_or_before(next_month.add_days(-1)?, weekday)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn find_weekday_forward() {
        // 2024-05-01 is a Wednesday.
        let found = find_weekday(date(2024, 5, 1), 7, Direction::Forward, Weekday::Sun).unwrap();
        assert_eq!(found, date(2024, 5, 5));
    }

    #[test]
    fn find_weekday_short_window() {
        let err = find_weekday(date(2024, 5, 1), 3, Direction::Forward, Weekday::Sun).unwrap_err();
        assert_eq!(
            err,
            CalendarError::WeekdayNotFound {
                weekday: Weekday::Sun,
                from: date(2024, 5, 1),
                days: 3,
            }
        );
    }

    #[test]
    fn nth_zero_never_matches() {
        let from = date(2024, 5, 1);
        assert!(nth_weekday_in_window(from, 28, Direction::Forward, Weekday::Sun, 0).is_err());
    }

    #[test]
    fn on_or_after_same_day() {
        let wed = date(2024, 5, 1);
        assert_eq!(weekday_on_or_after(wed, Weekday::Wed).unwrap(), wed);
        assert_eq!(weekday_on_or_after(wed, Weekday::Tue).unwrap(), date(2024, 5, 7));
    }

    #[test]
    fn on_or_before() {
        let wed = date(2024, 5, 1);
        assert_eq!(weekday_on_or_before(wed, Weekday::Sun).unwrap(), date(2024, 4, 28));
        assert_eq!(weekday_on_or_before(wed, Weekday::Wed).unwrap(), wed);
    }

    #[test]
    fn nth_backwards() {
        // Fourth Sunday counting back from Christmas Eve 2023 (itself a Sunday).
        let advent = nth_weekday_on_or_before(date(2023, 12, 24), Weekday::Sun, 4, 28).unwrap();
        assert_eq!(advent, date(2023, 12, 3));
    }

    #[test]
    fn nth_weekday_of_month_known() {
        // Fourth Thursday of November 2024.
        assert_eq!(
            nth_weekday_of_month(2024, 11, Weekday::Thu, 4).unwrap(),
            date(2024, 11, 28)
        );
        // Second Sunday of May 2000.
        assert_eq!(
            nth_weekday_of_month(2000, 5, Weekday::Sun, 2).unwrap(),
            date(2000, 5, 14)
        );
    }

    #[test]
    fn nth_weekday_of_month_past_end() {
        // February 2024 has only four Wednesdays; the fifth-week window
        // starts on the 29th and runs into March.
        assert!(matches!(
            nth_weekday_of_month(2024, 2, Weekday::Wed, 5),
            Err(CalendarError::WeekdayNotFound { .. })
        ));
    }

    #[test]
    fn nth_weekday_of_month_rejects_bad_ordinals() {
        assert_eq!(
            nth_weekday_of_month(2024, 5, Weekday::Sun, 0),
            Err(CalendarError::InvalidOrdinal { n: 0 })
        );
        assert_eq!(
            nth_weekday_of_month(2024, 5, Weekday::Sun, u32::MAX),
            Err(CalendarError::InvalidOrdinal { n: u32::MAX })
        );
        // A sixth week never starts inside a month.
        assert!(matches!(
            nth_weekday_of_month(2024, 5, Weekday::Sun, 6),
            Err(CalendarError::InvalidDate { day: 36, .. })
        ));
    }

    #[test]
    fn last_weekday_of_month_known() {
        assert_eq!(
            last_weekday_of_month(2024, 5, Weekday::Mon).unwrap(),
            date(2024, 5, 27)
        );
        assert_eq!(
            last_weekday_of_month(2024, 12, Weekday::Tue).unwrap(),
            date(2024, 12, 31)
        );
    }
}
