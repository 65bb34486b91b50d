//! Day-by-day detection of the four principal phase crossings.

use std::fmt;

use annum_calendar::{CalendarDate, YearRange, day_sequence};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::error::LunarError;
use crate::position::lunar_position_on;

/// Decimal places the daily position is rounded to before comparison.
const POSITION_DECIMALS: u32 = 3;

/// Below this (rounded) position, after a day above [`NEW_MOON_HIGH`], the
/// new moon has passed.
const NEW_MOON_LOW: Decimal = dec!(0.05);
const NEW_MOON_HIGH: Decimal = dec!(0.95);

/// The four principal phases reported as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// Position wraps from near 1 to near 0.
    NewMoon,
    /// Position crosses 0.25.
    FirstQuarter,
    /// Position crosses 0.5.
    FullMoon,
    /// Position crosses 0.75.
    LastQuarter,
}

impl PhaseKind {
    /// The phase that follows this one in the lunar cycle.
    pub fn next(self) -> Self {
        match self {
            Self::NewMoon => Self::FirstQuarter,
            Self::FirstQuarter => Self::FullMoon,
            Self::FullMoon => Self::LastQuarter,
            Self::LastQuarter => Self::NewMoon,
        }
    }

    /// Distance of `position` from this phase's threshold.
    ///
    /// For the new moon the threshold is 1 when approached from below and 0
    /// when departed from above.
    fn distance(self, position: Decimal, before_crossing: bool) -> Decimal {
        match self {
            Self::NewMoon if before_crossing => Decimal::ONE - position,
            Self::NewMoon => position,
            Self::FirstQuarter => (position - dec!(0.25)).abs(),
            Self::FullMoon => (position - dec!(0.5)).abs(),
            Self::LastQuarter => (position - dec!(0.75)).abs(),
        }
    }

    /// Returns the phase crossed between two consecutive daily positions.
    fn crossed(previous: Decimal, current: Decimal) -> Option<Self> {
        if previous > NEW_MOON_HIGH && current < NEW_MOON_LOW {
            return Some(Self::NewMoon);
        }
        [
            (dec!(0.25), Self::FirstQuarter),
            (dec!(0.5), Self::FullMoon),
            (dec!(0.75), Self::LastQuarter),
        ]
        .into_iter()
        .find(|&(threshold, _)| previous < threshold && current >= threshold)
        .map(|(_, kind)| kind)
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NewMoon => "New Moon",
            Self::FirstQuarter => "First Quarter",
            Self::FullMoon => "Full Moon",
            Self::LastQuarter => "Last Quarter",
        })
    }
}

/// A principal phase and the day it is reported on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseEvent {
    /// Day closest to the crossing.
    pub date: CalendarDate,
    /// Which phase was crossed.
    pub kind: PhaseKind,
}

/// Lunar position at midnight starting `date`, rounded to three decimals
/// (half to even).
pub fn rounded_position(date: CalendarDate) -> Decimal {
    lunar_position_on(date).round_dp(POSITION_DECIMALS)
}

/// Fold state carried from one scanned day to the next.
struct Scan {
    previous_position: Decimal,
    previous_date: CalendarDate,
    events: Vec<PhaseEvent>,
}

impl Scan {
    fn step(mut self, date: CalendarDate) -> Self {
        let position = rounded_position(date);
        if let Some(kind) = PhaseKind::crossed(self.previous_position, position) {
            // The earlier day wins only when strictly closer; ties go to the
            // later day.
            let before = kind.distance(self.previous_position, true);
            let date = if before < kind.distance(position, false) {
                self.previous_date
            } else {
                date
            };
            self.events.push(PhaseEvent { date, kind });
        }
        self.previous_position = position;
        self.previous_date = date;
        self
    }
}

/// Reports each principal phase crossing dated January 1 of `range.start()`
/// through December 31 of `range.end()`.
///
/// Positions are compared after rounding to three decimals. A crossing is
/// reported on whichever of the two days straddling it is closer to the
/// threshold. The scan reaches one day beyond each end of the range so a
/// crossing at a year boundary is seen from both sides, and events dated
/// outside the range are dropped. Adjacent ranges therefore share no event
/// and lose none.
///
/// # Errors
///
/// Returns [`LunarError::Calendar`] if the scan bounds cannot be represented.
#[tracing::instrument(skip_all, fields(start = range.start(), end = range.end()))]
pub fn detect_phase_events(range: YearRange) -> Result<Vec<PhaseEvent>, LunarError> {
    let first = CalendarDate::new(range.start(), 1, 1)?;
    let last = CalendarDate::new(range.end(), 12, 31)?;
    let seed_date = first.add_days(-1)?;

    let init = Scan {
        previous_position: rounded_position(seed_date),
        previous_date: seed_date,
        events: Vec::with_capacity(range.len() * 50),
    };
    let lookahead = last.add_days(1)?;
    let mut scan = day_sequence(first, lookahead).fold(init, Scan::step);
    scan.events.retain(|e| first <= e.date && e.date <= last);

    debug!(n_events = scan.events.len(), "phase scan complete");
    Ok(scan.events)
}
