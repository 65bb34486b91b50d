//! French observances defined by weekday rules.

use annum_calendar::{
    CalendarDate, MovingFeastSet, YearRange, last_weekday_of_month, nth_weekday_of_month,
};
use annum_computus::pentecost;
use chrono::Weekday;

use crate::error::CivilError;

/// Fête des Mères: the last Sunday of May, or the first Sunday of June when
/// the last Sunday of May is Pentecost.
pub fn mothers_day(year: i32) -> Result<CalendarDate, CivilError> {
    let last_may_sunday = last_weekday_of_month(year, 5, Weekday::Sun)?;
    if last_may_sunday == pentecost(year)? {
        Ok(nth_weekday_of_month(year, 6, Weekday::Sun, 1)?)
    } else {
        Ok(last_may_sunday)
    }
}

/// [`mothers_day`] for every year of `range`.
pub fn mothers_days(range: YearRange) -> Result<MovingFeastSet, CivilError> {
    MovingFeastSet::from_rule(range, mothers_day)
}

/// Opening day of the winter sales (Code de commerce, art. D. 310-15-2):
/// the second Wednesday of January, brought forward to the first Wednesday
/// when the second falls after the 12th.
pub fn winter_sales_opening(year: i32) -> Result<CalendarDate, CivilError> {
    let second = nth_weekday_of_month(year, 1, Weekday::Wed, 2)?;
    if second.day() > 12 {
        Ok(nth_weekday_of_month(year, 1, Weekday::Wed, 1)?)
    } else {
        Ok(second)
    }
}

/// Opening day of the summer sales: the last Wednesday of June, brought
/// forward one week when it falls after the 28th.
pub fn summer_sales_opening(year: i32) -> Result<CalendarDate, CivilError> {
    let last = last_weekday_of_month(year, 6, Weekday::Wed)?;
    if last.day() > 28 {
        Ok(last.add_days(-7)?)
    } else {
        Ok(last)
    }
}

/// Both sales openings for every year of `range`, in date order.
pub fn sales_openings(range: YearRange) -> Result<Vec<CalendarDate>, CivilError> {
    let mut dates = Vec::with_capacity(range.len() * 2);
    for year in range.years() {
        dates.push(winter_sales_opening(year)?);
        dates.push(summer_sales_opening(year)?);
    }
    Ok(dates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn mothers_day_regular_years() {
        assert_eq!(mothers_day(2000).unwrap(), date(2000, 5, 28));
        assert_eq!(mothers_day(2024).unwrap(), date(2024, 5, 26));
        assert_eq!(mothers_day(2025).unwrap(), date(2025, 5, 25));
    }

    #[test]
    fn mothers_day_moved_by_pentecost() {
        // Pentecost 2020 was May 31, the last Sunday of May.
        assert_eq!(pentecost(2020).unwrap(), date(2020, 5, 31));
        assert_eq!(mothers_day(2020).unwrap(), date(2020, 6, 7));
        assert_eq!(mothers_day(2023).unwrap(), date(2023, 6, 4));
        assert_eq!(mothers_day(2004).unwrap(), date(2004, 6, 6));
    }

    #[test]
    fn mothers_day_never_pentecost() {
        for year in 1900..=2100 {
            assert_ne!(mothers_day(year).unwrap(), pentecost(year).unwrap());
        }
    }

    #[test]
    fn winter_sales() {
        assert_eq!(winter_sales_opening(2000).unwrap(), date(2000, 1, 12));
        assert_eq!(winter_sales_opening(2020).unwrap(), date(2020, 1, 8));
        assert_eq!(winter_sales_opening(2024).unwrap(), date(2024, 1, 10));
    }

    #[test]
    fn summer_sales() {
        assert_eq!(summer_sales_opening(2000).unwrap(), date(2000, 6, 28));
        assert_eq!(summer_sales_opening(2019).unwrap(), date(2019, 6, 26));
        assert_eq!(summer_sales_opening(2020).unwrap(), date(2020, 6, 24));
    }

    #[test]
    fn sales_window_bounds() {
        for year in 2000..=2040 {
            let w = winter_sales_opening(year).unwrap();
            assert!((6..=12).contains(&w.day()) && w.weekday() == Weekday::Wed);
            let s = summer_sales_opening(year).unwrap();
            assert!((22..=28).contains(&s.day()) && s.weekday() == Weekday::Wed);
        }
    }

    #[test]
    fn two_openings_per_year() {
        let range = YearRange::new(2019, 2020).unwrap();
        assert_eq!(
            sales_openings(range).unwrap(),
            vec![
                date(2019, 1, 9),
                date(2019, 6, 26),
                date(2020, 1, 8),
                date(2020, 6, 24),
            ]
        );
    }
}
