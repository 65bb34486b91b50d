//! England and Wales bank holidays.

use annum_calendar::{
    CalendarDate, YearRange, last_weekday_of_month, nth_weekday_of_month, weekday_on_or_after,
};
use annum_computus::{EasterMethod, MovingFeast, moving_feast};
use chrono::Weekday;

use crate::error::HolidayError;
use crate::provider::HolidayProvider;
use crate::table::{HolidayTable, OBSERVED_SUFFIX};

/// Bank holidays of England and Wales, with "(Observed)" substitute days
/// and one-off royal and state occasions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedKingdomHolidays;

const NEW_YEAR: &str = "New Year's Day";
const MAY_DAY: &str = "May Day";
const SPRING_BANK: &str = "Spring Bank Holiday";
const CHRISTMAS: &str = "Christmas Day";
const BOXING_DAY: &str = "Boxing Day";

/// Statutory days moved by proclamation.
const MOVED: &[(i32, &str, u32, u32)] = &[
    (1995, MAY_DAY, 5, 8),
    (2002, SPRING_BANK, 6, 4),
    (2012, SPRING_BANK, 6, 4),
    (2020, MAY_DAY, 5, 8),
    (2022, SPRING_BANK, 6, 2),
];

/// One-off bank holidays.
const SPECIAL: &[(i32, u32, u32, &str)] = &[
    (1999, 12, 31, "Millennium Celebrations"),
    (2002, 6, 3, "Golden Jubilee of Elizabeth II"),
    (2011, 4, 29, "Wedding of William and Catherine"),
    (2012, 6, 5, "Diamond Jubilee of Elizabeth II"),
    (2022, 6, 3, "Platinum Jubilee of Elizabeth II"),
    (2022, 9, 19, "State Funeral of Queen Elizabeth II"),
    (2023, 5, 8, "Coronation of Charles III"),
];

fn is_weekend(date: CalendarDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First weekday after `date` that is not already a holiday.
fn substitute_day(table: &HolidayTable, date: CalendarDate) -> Result<CalendarDate, HolidayError> {
    let mut day = weekday_on_or_after(date.add_days(1)?, Weekday::Mon)?;
    while table.contains(day) {
        day = day.add_days(1)?;
    }
    Ok(day)
}

fn rule_or_moved(
    year: i32,
    name: &str,
    rule: impl FnOnce() -> Result<CalendarDate, HolidayError>,
) -> Result<CalendarDate, HolidayError> {
    match MOVED.iter().find(|&&(y, n, _, _)| y == year && n == name) {
        Some(&(_, _, month, day)) => Ok(CalendarDate::new(year, month, day)?),
        None => rule(),
    }
}

fn add_with_substitute(
    table: &mut HolidayTable,
    date: CalendarDate,
    name: &str,
) -> Result<(), HolidayError> {
    if is_weekend(date) {
        let observed = substitute_day(table, date)?;
        table.add(observed, format!("{name}{OBSERVED_SUFFIX}"));
    }
    Ok(())
}

impl HolidayProvider for UnitedKingdomHolidays {
    fn code(&self) -> &'static str {
        "GB"
    }

    fn holidays(&self, range: YearRange) -> Result<Vec<(CalendarDate, String)>, HolidayError> {
        let mut table = HolidayTable::new();
        for year in range.years() {
            let new_year = CalendarDate::new(year, 1, 1)?;
            table.add(new_year, NEW_YEAR);
            add_with_substitute(&mut table, new_year, NEW_YEAR)?;

            let feast = |f| moving_feast(year, f, EasterMethod::Western);
            table.add(feast(MovingFeast::GoodFriday)?, "Good Friday");
            table.add(feast(MovingFeast::EasterMonday)?, "Easter Monday");

            let may_day = rule_or_moved(year, MAY_DAY, || {
                Ok(nth_weekday_of_month(year, 5, Weekday::Mon, 1)?)
            })?;
            table.add(may_day, MAY_DAY);
            let spring = rule_or_moved(year, SPRING_BANK, || {
                Ok(last_weekday_of_month(year, 5, Weekday::Mon)?)
            })?;
            table.add(spring, SPRING_BANK);
            table.add(last_weekday_of_month(year, 8, Weekday::Mon)?, "Late Summer Bank Holiday");

            let christmas = CalendarDate::new(year, 12, 25)?;
            let boxing_day = CalendarDate::new(year, 12, 26)?;
            table.add(christmas, CHRISTMAS);
            table.add(boxing_day, BOXING_DAY);
            add_with_substitute(&mut table, christmas, CHRISTMAS)?;
            add_with_substitute(&mut table, boxing_day, BOXING_DAY)?;

            for &(y, month, day, name) in SPECIAL.iter().filter(|s| s.0 == year) {
                table.add(CalendarDate::new(y, month, day)?, name);
            }
        }
        Ok(table.into_pairs())
    }
}
