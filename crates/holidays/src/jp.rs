//! Japanese national holidays.

use std::collections::BTreeSet;

use annum_calendar::{CalendarDate, YearRange, nth_weekday_of_month};
use chrono::Weekday;

use crate::error::HolidayError;
use crate::provider::HolidayProvider;
use crate::table::{HolidayTable, OBSERVED_SUFFIX};

/// National holidays of Japan, including Happy Monday days, the equinoxes,
/// substitute holidays and the citizen's holiday between two holidays.
///
/// Equinox days come from the standard approximation, which is only defined
/// from 1949 through 2099.
#[derive(Debug, Clone, Copy, Default)]
pub struct JapanHolidays;

const FIRST_YEAR: i32 = 1949;
const LAST_YEAR: i32 = 2099;

const MARINE_DAY: &str = "Marine Day";
const MOUNTAIN_DAY: &str = "Mountain Day";
const SPORTS_DAY: &str = "Sports Day";
const CITIZENS_HOLIDAY: &str = "National Holiday";

/// Days moved for the Tokyo Olympics.
const OLYMPIC_MOVES: &[(i32, &str, u32, u32)] = &[
    (2020, MARINE_DAY, 7, 23),
    (2020, SPORTS_DAY, 7, 24),
    (2020, MOUNTAIN_DAY, 8, 10),
    (2021, MARINE_DAY, 7, 22),
    (2021, SPORTS_DAY, 7, 23),
    (2021, MOUNTAIN_DAY, 8, 8),
];

/// One-off holidays for imperial ceremonies.
const SPECIAL: &[(i32, u32, u32, &str)] = &[
    (1959, 4, 10, "Wedding of Crown Prince Akihito"),
    (1989, 2, 24, "State Funeral of Emperor Showa"),
    (1990, 11, 12, "Enthronement Ceremony Day"),
    (1993, 6, 9, "Wedding of Crown Prince Naruhito"),
    (2019, 5, 1, "Enthronement Day"),
    (2019, 10, 22, "Enthronement Ceremony Day"),
];

/// Day of March (vernal) or September (autumnal) of the equinox holiday.
fn equinox_day(year: i32, autumnal: bool) -> u32 {
    // Millionths of a day: base + 0.242194 * (year - 1980) - leap corrections.
    let elapsed = i64::from(year - 1980);
    let (base, leaps) = if year < 1980 {
        let base = if autumnal { 23_258_800 } else { 20_835_700 };
        (base, i64::from((year - 1983) / 4))
    } else {
        let base = if autumnal { 23_248_800 } else { 20_843_100 };
        (base, elapsed.div_euclid(4))
    };
    ((base + 242_194 * elapsed - 1_000_000 * leaps) / 1_000_000) as u32
}

fn olympic_or(year: i32, name: &str, usual: CalendarDate) -> Result<CalendarDate, HolidayError> {
    match OLYMPIC_MOVES.iter().find(|&&(y, n, _, _)| y == year && n == name) {
        Some(&(_, _, month, day)) => Ok(CalendarDate::new(year, month, day)?),
        None => Ok(usual),
    }
}

/// Holidays named by the Public Holiday Law for `year`, without substitutes.
fn national_days(year: i32) -> Result<Vec<(CalendarDate, &'static str)>, HolidayError> {
    let on = |month: u32, day: u32| CalendarDate::new(year, month, day);
    let monday = |month: u32, n: u32| nth_weekday_of_month(year, month, Weekday::Mon, n);
    let mut days = vec![(on(1, 1)?, "New Year's Day")];

    let coming_of_age = if year < 2000 { on(1, 15)? } else { monday(1, 2)? };
    days.push((coming_of_age, "Coming of Age Day"));
    if year >= 1967 {
        days.push((on(2, 11)?, "Foundation Day"));
    }
    match year {
        ..=1988 => days.push((on(4, 29)?, "Emperor's Birthday")),
        1989..=2018 => days.push((on(12, 23)?, "Emperor's Birthday")),
        2019 => {}
        _ => days.push((on(2, 23)?, "Emperor's Birthday")),
    }
    days.push((on(3, equinox_day(year, false))?, "Vernal Equinox Day"));
    match year {
        ..=1988 => {}
        1989..=2006 => days.push((on(4, 29)?, "Greenery Day")),
        _ => {
            days.push((on(4, 29)?, "Showa Day"));
            days.push((on(5, 4)?, "Greenery Day"));
        }
    }
    days.push((on(5, 3)?, "Constitution Day"));
    days.push((on(5, 5)?, "Children's Day"));

    if year >= 1996 {
        let usual = if year <= 2002 { on(7, 20)? } else { monday(7, 3)? };
        days.push((olympic_or(year, MARINE_DAY, usual)?, MARINE_DAY));
    }
    if year >= 2016 {
        days.push((olympic_or(year, MOUNTAIN_DAY, on(8, 11)?)?, MOUNTAIN_DAY));
    }
    if year >= 1966 {
        let aged = if year <= 2002 { on(9, 15)? } else { monday(9, 3)? };
        days.push((aged, "Respect for the Aged Day"));
    }
    days.push((on(9, equinox_day(year, true))?, "Autumnal Equinox Day"));
    match year {
        ..=1965 => {}
        1966..=1999 => days.push((on(10, 10)?, "Health and Sports Day")),
        2000..=2019 => days.push((monday(10, 2)?, "Health and Sports Day")),
        _ => days.push((olympic_or(year, SPORTS_DAY, monday(10, 2)?)?, SPORTS_DAY)),
    }
    days.push((on(11, 3)?, "Culture Day"));
    days.push((on(11, 23)?, "Labor Thanksgiving Day"));

    for &(_, month, day, name) in SPECIAL.iter().filter(|s| s.0 == year) {
        days.push((on(month, day)?, name));
    }
    Ok(days)
}

/// Substitute days for holidays falling on a Sunday.
///
/// From April 12, 1973 the following Monday is a holiday unless it already
/// is one. From 2007 the substitute moves on to the first day that is not a
/// holiday.
fn substitute_days(
    national: &[(CalendarDate, &'static str)],
    dates: &BTreeSet<CalendarDate>,
) -> Result<Vec<(CalendarDate, &'static str)>, HolidayError> {
    let rule_start = CalendarDate::new(1973, 4, 12)?;
    let mut substitutes = Vec::new();
    for &(date, name) in national {
        if date.weekday() != Weekday::Sun || date < rule_start {
            continue;
        }
        let mut day = date.add_days(1)?;
        if date.year() >= 2007 {
            while dates.contains(&day) {
                day = day.add_days(1)?;
            }
        } else if dates.contains(&day) {
            continue;
        }
        substitutes.push((day, name));
    }
    Ok(substitutes)
}

/// Days enclosed by two holidays (since 1986), unless a Sunday or already a
/// substitute day.
fn citizens_holidays(
    dates: &BTreeSet<CalendarDate>,
    substitutes: &[(CalendarDate, &'static str)],
) -> Result<Vec<CalendarDate>, HolidayError> {
    let mut days = Vec::new();
    for &date in dates {
        let (middle, next) = (date.add_days(1)?, date.add_days(2)?);
        let enclosed = dates.contains(&next) && !dates.contains(&middle);
        let substitute = substitutes.iter().any(|&(d, _)| d == middle);
        if enclosed && !substitute && middle.weekday() != Weekday::Sun {
            days.push(middle);
        }
    }
    Ok(days)
}

impl HolidayProvider for JapanHolidays {
    fn code(&self) -> &'static str {
        "JP"
    }

    fn holidays(&self, range: YearRange) -> Result<Vec<(CalendarDate, String)>, HolidayError> {
        let mut table = HolidayTable::new();
        for year in range.years() {
            if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
                return Err(HolidayError::UnsupportedYear {
                    code: self.code().to_string(),
                    year,
                    first: FIRST_YEAR,
                    last: LAST_YEAR,
                });
            }
            let national = national_days(year)?;
            let dates: BTreeSet<CalendarDate> = national.iter().map(|&(d, _)| d).collect();
            let substitutes = substitute_days(&national, &dates)?;

            for &(date, name) in &national {
                table.add(date, name);
            }
            for &(date, name) in &substitutes {
                table.add(date, format!("{name}{OBSERVED_SUFFIX}"));
            }
            if year >= 1986 {
                for date in citizens_holidays(&dates, &substitutes)? {
                    table.add(date, CITIZENS_HOLIDAY);
                }
            }
        }
        Ok(table.into_pairs())
    }
}
