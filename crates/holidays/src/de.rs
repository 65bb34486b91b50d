//! Germany, Free State of Bavaria.

use annum_calendar::{CalendarDate, YearRange};
use annum_computus::{EasterMethod, MovingFeast, moving_feast};

use crate::error::HolidayError;
use crate::provider::HolidayProvider;
use crate::table::HolidayTable;

/// Statewide public holidays of Bavaria. Mariä Himmelfahrt is included
/// although it is only observed in predominantly Catholic municipalities.
#[derive(Debug, Clone, Copy, Default)]
pub struct GermanyBavariaHolidays;

const FIXED: &[(u32, u32, &str)] = &[
    (1, 1, "Neujahr"),
    (1, 6, "Heilige Drei Könige"),
    (5, 1, "Erster Mai"),
    (8, 15, "Mariä Himmelfahrt"),
    (10, 3, "Tag der Deutschen Einheit"),
    (11, 1, "Allerheiligen"),
    (12, 25, "Erster Weihnachtstag"),
    (12, 26, "Zweiter Weihnachtstag"),
];

const MOVING: &[(MovingFeast, &str)] = &[
    (MovingFeast::GoodFriday, "Karfreitag"),
    (MovingFeast::EasterMonday, "Ostermontag"),
    (MovingFeast::Ascension, "Christi Himmelfahrt"),
    (MovingFeast::WhitMonday, "Pfingstmontag"),
    (MovingFeast::CorpusChristi, "Fronleichnam"),
];

/// 500th anniversary of the Reformation, a nationwide one-off.
const REFORMATION_JUBILEE: i32 = 2017;

impl HolidayProvider for GermanyBavariaHolidays {
    fn code(&self) -> &'static str {
        "DE"
    }

    fn holidays(&self, range: YearRange) -> Result<Vec<(CalendarDate, String)>, HolidayError> {
        let mut table = HolidayTable::new();
        for year in range.years() {
            for &(month, day, name) in FIXED {
                table.add(CalendarDate::new(year, month, day)?, name);
            }
            for &(feast, name) in MOVING {
                table.add(moving_feast(year, feast, EasterMethod::Western)?, name);
            }
            if year == REFORMATION_JUBILEE {
                table.add(CalendarDate::new(year, 10, 31)?, "Reformationstag");
            }
        }
        Ok(table.into_pairs())
    }
}
