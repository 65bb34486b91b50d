//! Position within the synodic month and the eight named phases.

use std::fmt;

use annum_calendar::CalendarDate;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

/// Lunation fraction already elapsed at the epoch (2001-01-01T00:00).
const EPOCH_LUNATION: Decimal = dec!(0.20439731);

/// Mean lunations per day (1 / 29.530588853).
const LUNATIONS_PER_DAY: Decimal = dec!(0.03386319269);

const SECONDS_PER_DAY: i64 = 86_400;

fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2001, 1, 1)
        .expect("2001-01-01 is a valid date")
        .and_time(NaiveTime::MIN)
}

/// Returns the position of `instant` in the synodic month, in `[0, 1)`.
///
/// `0` is new moon, `0.25` first quarter, `0.5` full moon, `0.75` last
/// quarter. Elapsed time since the epoch is converted to fractional days and
/// multiplied by the mean lunation rate in decimal arithmetic, so stepping
/// day by day over decades accumulates no binary rounding error. Instants
/// before the epoch wrap around into `[0, 1)` as well.
pub fn lunar_position(instant: NaiveDateTime) -> Decimal {
    let seconds = (instant - epoch()).num_seconds();
    let whole_days = Decimal::from(seconds.div_euclid(SECONDS_PER_DAY));
    let day_fraction =
        Decimal::from(seconds.rem_euclid(SECONDS_PER_DAY)) / Decimal::from(SECONDS_PER_DAY);
    let lunations = EPOCH_LUNATION + (whole_days + day_fraction) * LUNATIONS_PER_DAY;

    let position = lunations % Decimal::ONE;
    if position < Decimal::ZERO {
        position + Decimal::ONE
    } else {
        position
    }
}

/// Returns the lunar position at midnight starting `date`.
pub fn lunar_position_on(date: CalendarDate) -> Decimal {
    lunar_position(date.naive().and_time(NaiveTime::MIN))
}

/// One of the eight conventional moon phases (octants of the synodic month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    /// New moon.
    New,
    /// Waxing crescent.
    WaxingCrescent,
    /// First quarter.
    FirstQuarter,
    /// Waxing gibbous.
    WaxingGibbous,
    /// Full moon.
    Full,
    /// Waning gibbous.
    WaningGibbous,
    /// Last quarter.
    LastQuarter,
    /// Waning crescent.
    WaningCrescent,
}

const OCTANTS: [MoonPhase; 8] = [
    MoonPhase::New,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::Full,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        })
    }
}

/// Maps a lunar position to its octant: `floor(position * 8 + 0.5) mod 8`.
pub fn phase_of(position: Decimal) -> MoonPhase {
    let index = (position * dec!(8) + dec!(0.5)).floor();
    let index = index.to_i64().unwrap_or_default().rem_euclid(8);
    OCTANTS[index as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_time(NaiveTime::MIN)
    }

    #[test]
    fn epoch_position() {
        assert_eq!(lunar_position(midnight(2001, 1, 1)), dec!(0.20439731));
    }

    #[test]
    fn one_day_step_is_exact() {
        assert_eq!(lunar_position(midnight(2001, 1, 2)), dec!(0.23826050269));
    }

    #[test]
    fn wraps_past_one() {
        // 24 days after the epoch: 0.20439731 + 24 * 0.03386319269 = 1.01711393456
        assert_eq!(lunar_position(midnight(2001, 1, 25)), dec!(0.01711393456));
    }

    #[test]
    fn before_epoch_stays_in_unit_interval() {
        let p = lunar_position(midnight(2000, 12, 31));
        assert_eq!(p, dec!(0.17053411731));
        for year in [1900, 1950, 1999] {
            let p = lunar_position(midnight(year, 6, 1));
            assert!(p >= Decimal::ZERO && p < Decimal::ONE, "{p} out of range");
        }
    }

    #[test]
    fn fractional_day() {
        let noon = NaiveDate::from_ymd_opt(2001, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        // Half a day adds half the daily rate.
        assert_eq!(lunar_position(noon), dec!(0.221328906345));
    }

    #[test]
    fn position_on_date_matches_midnight() {
        let date = CalendarDate::new(2024, 3, 31).unwrap();
        assert_eq!(lunar_position_on(date), lunar_position(midnight(2024, 3, 31)));
    }

    #[test]
    fn octant_boundaries() {
        assert_eq!(phase_of(dec!(0)), MoonPhase::New);
        assert_eq!(phase_of(dec!(0.0624)), MoonPhase::New);
        assert_eq!(phase_of(dec!(0.0625)), MoonPhase::WaxingCrescent);
        assert_eq!(phase_of(dec!(0.25)), MoonPhase::FirstQuarter);
        assert_eq!(phase_of(dec!(0.5)), MoonPhase::Full);
        assert_eq!(phase_of(dec!(0.75)), MoonPhase::LastQuarter);
        assert_eq!(phase_of(dec!(0.9)), MoonPhase::WaningCrescent);
        // Just below 1 rounds back to new moon.
        assert_eq!(phase_of(dec!(0.97)), MoonPhase::New);
    }

    #[test]
    fn phase_names() {
        assert_eq!(MoonPhase::New.to_string(), "New Moon");
        assert_eq!(MoonPhase::WaningGibbous.to_string(), "Waning Gibbous");
    }
}
