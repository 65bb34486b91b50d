//! Metropolitan France.

use annum_calendar::{CalendarDate, YearRange};
use annum_computus::{EasterMethod, MovingFeast, moving_feast};

use crate::error::HolidayError;
use crate::provider::HolidayProvider;
use crate::table::HolidayTable;

/// Public holidays of metropolitan France (Code du travail, art. L3133-1).
#[derive(Debug, Clone, Copy, Default)]
pub struct FranceHolidays;

const FIXED: &[(u32, u32, &str)] = &[
    (1, 1, "Jour de l'an"),
    (5, 1, "Fête du Travail"),
    (5, 8, "Fête de la Victoire"),
    (7, 14, "Fête nationale"),
    (8, 15, "Assomption"),
    (11, 1, "Toussaint"),
    (11, 11, "Armistice"),
    (12, 25, "Noël"),
];

/// Whit Monday was a working "journée de solidarité" in these years.
const NO_WHIT_MONDAY: std::ops::RangeInclusive<i32> = 2005..=2007;

impl HolidayProvider for FranceHolidays {
    fn code(&self) -> &'static str {
        "FR"
    }

    fn holidays(&self, range: YearRange) -> Result<Vec<(CalendarDate, String)>, HolidayError> {
        let mut table = HolidayTable::new();
        for year in range.years() {
            for &(month, day, name) in FIXED {
                table.add(CalendarDate::new(year, month, day)?, name);
            }
            let feast = |f| moving_feast(year, f, EasterMethod::Western);
            table.add(feast(MovingFeast::EasterMonday)?, "Lundi de Pâques");
            table.add(feast(MovingFeast::Ascension)?, "Ascension");
            if !NO_WHIT_MONDAY.contains(&year) {
                table.add(feast(MovingFeast::WhitMonday)?, "Lundi de Pentecôte");
            }
        }
        Ok(table.into_pairs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn year_2024() {
        let pairs = FranceHolidays.holidays(YearRange::new(2024, 2024).unwrap()).unwrap();
        assert_eq!(pairs.len(), 11);
        assert_eq!(pairs[0], (date(2024, 1, 1), "Jour de l'an".to_string()));
        assert_eq!(pairs[1], (date(2024, 4, 1), "Lundi de Pâques".to_string()));
        assert!(pairs.contains(&(date(2024, 5, 9), "Ascension".to_string())));
        assert!(pairs.contains(&(date(2024, 5, 20), "Lundi de Pentecôte".to_string())));
        assert!(pairs.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn shared_date_is_joined() {
        // Ascension 2008 fell on May 1.
        let pairs = FranceHolidays.holidays(YearRange::new(2008, 2008).unwrap()).unwrap();
        assert!(pairs.contains(&(date(2008, 5, 1), "Fête du Travail, Ascension".to_string())));
        assert_eq!(pairs.len(), 10);
    }

    #[test]
    fn no_whit_monday_2005_to_2007() {
        let pairs = FranceHolidays.holidays(YearRange::new(2004, 2008).unwrap()).unwrap();
        let whit: Vec<i32> = pairs
            .iter()
            .filter(|(_, label)| label.contains("Pentecôte"))
            .map(|(d, _)| d.year())
            .collect();
        assert_eq!(whit, vec![2004, 2008]);
    }
}
