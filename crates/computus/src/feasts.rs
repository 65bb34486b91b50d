//! Feasts that move with Easter, and the first Sunday of Advent.

use annum_calendar::{CalendarDate, MovingFeastSet, YearRange, nth_weekday_on_or_before};
use chrono::Weekday;
use tracing::debug;

use crate::easter::{EasterMethod, easter};
use crate::error::ComputusError;

/// A feast defined as a fixed day offset from Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovingFeast {
    /// Ash Wednesday, 46 days before Easter.
    AshWednesday,
    /// Good Friday, 2 days before Easter.
    GoodFriday,
    /// Easter Sunday.
    Easter,
    /// Easter Monday.
    EasterMonday,
    /// Ascension Thursday, 39 days after Easter.
    Ascension,
    /// Pentecost (Whit Sunday), 49 days after Easter.
    Pentecost,
    /// Whit Monday, 50 days after Easter.
    WhitMonday,
    /// Corpus Christi, 60 days after Easter.
    CorpusChristi,
}

impl MovingFeast {
    /// Offset in days from Easter Sunday.
    pub fn offset(self) -> i64 {
        match self {
            Self::AshWednesday => -46,
            Self::GoodFriday => -2,
            Self::Easter => 0,
            Self::EasterMonday => 1,
            Self::Ascension => 39,
            Self::Pentecost => 49,
            Self::WhitMonday => 50,
            Self::CorpusChristi => 60,
        }
    }
}

/// Computes `feast` for `year`, using `method` for the underlying Easter.
pub fn moving_feast(
    year: i32,
    feast: MovingFeast,
    method: EasterMethod,
) -> Result<CalendarDate, ComputusError> {
    Ok(easter(year, method)?.add_days(feast.offset())?)
}

/// Ash Wednesday (Western Easter - 46 days).
pub fn ash_wednesday(year: i32) -> Result<CalendarDate, ComputusError> {
    moving_feast(year, MovingFeast::AshWednesday, EasterMethod::Western)
}

/// Pentecost (Western Easter + 49 days).
pub fn pentecost(year: i32) -> Result<CalendarDate, ComputusError> {
    moving_feast(year, MovingFeast::Pentecost, EasterMethod::Western)
}

/// Days scanned backwards from Christmas Eve when looking for Advent Sunday.
const ADVENT_WINDOW_DAYS: u32 = 28;

/// First Sunday of Advent: the fourth Sunday counting backwards from, and
/// including, December 24.
///
/// # Errors
///
/// Returns [`ComputusError::Calendar`] wrapping a weekday-not-found error if
/// the 28-day window holds fewer than four Sundays, which cannot happen.
pub fn first_advent(year: i32) -> Result<CalendarDate, ComputusError> {
    let christmas_eve = CalendarDate::new(year, 12, 24)?;
    Ok(nth_weekday_on_or_before(christmas_eve, Weekday::Sun, 4, ADVENT_WINDOW_DAYS)?)
}

/// Computes `feast` for every year of `range`.
pub fn moving_feasts(
    range: YearRange,
    feast: MovingFeast,
    method: EasterMethod,
) -> Result<MovingFeastSet, ComputusError> {
    let set = MovingFeastSet::from_rule(range, |year| moving_feast(year, feast, method))?;
    debug!(?feast, %method, n = set.len(), "computed moving feast");
    Ok(set)
}

/// Computes the first Sunday of Advent for every year of `range`.
pub fn first_advents(range: YearRange) -> Result<MovingFeastSet, ComputusError> {
    MovingFeastSet::from_rule(range, first_advent)
}
