//! German observances anchored on Easter, Advent or a weekday rule.

use annum_calendar::{CalendarDate, Direction, MovingFeastSet, YearRange, find_weekday};
use annum_computus::{EasterMethod, MovingFeast, first_advent, moving_feast};
use chrono::Weekday;

use crate::error::CivilError;

/// Vatertag, celebrated on Ascension Day (Easter + 39).
pub fn fathers_day(year: i32) -> Result<CalendarDate, CivilError> {
    Ok(moving_feast(year, MovingFeast::Ascension, EasterMethod::Western)?)
}

/// Opening Saturday of the Oktoberfest: the first Saturday after
/// September 15.
pub fn oktoberfest_opening(year: i32) -> Result<CalendarDate, CivilError> {
    let sept_16 = CalendarDate::new(year, 9, 16)?;
    Ok(find_weekday(sept_16, 7, Direction::Forward, Weekday::Sat)?)
}

/// Volkstrauertag: two Sundays before the first Sunday of Advent.
pub fn volkstrauertag(year: i32) -> Result<CalendarDate, CivilError> {
    Ok(first_advent(year)?.add_days(-14)?)
}

/// [`fathers_day`] for every year of `range`.
pub fn fathers_days(range: YearRange) -> Result<MovingFeastSet, CivilError> {
    MovingFeastSet::from_rule(range, fathers_day)
}

/// [`oktoberfest_opening`] for every year of `range`.
pub fn oktoberfest_openings(range: YearRange) -> Result<MovingFeastSet, CivilError> {
    MovingFeastSet::from_rule(range, oktoberfest_opening)
}

/// [`volkstrauertag`] for every year of `range`.
pub fn volkstrauertage(range: YearRange) -> Result<MovingFeastSet, CivilError> {
    MovingFeastSet::from_rule(range, volkstrauertag)
}
