use annum_calendar::{
    CalendarDate, CalendarError, Direction, MovingFeastSet, YearRange, find_weekday,
    last_weekday_of_month, nth_weekday_of_month,
};
use chrono::Weekday;

#[test]
fn last_sunday_of_may_is_always_in_final_week() {
    let range = YearRange::new(1900, 2100).unwrap();
    let set =
        MovingFeastSet::from_rule(range, |y| last_weekday_of_month(y, 5, Weekday::Sun)).unwrap();
    assert_eq!(set.len(), range.len());
    for d in set.dates() {
        assert_eq!(d.weekday(), Weekday::Sun);
        assert_eq!(d.month(), 5);
        assert!((25..=31).contains(&d.day()), "{d} outside final week");
    }
}

#[test]
fn nth_weekday_stays_in_its_week() {
    for year in 2000..=2040 {
        for n in 1..=4 {
            let d = nth_weekday_of_month(year, 6, Weekday::Sun, n).unwrap();
            assert_eq!(d.weekday(), Weekday::Sun);
            let lo = 7 * (n - 1) + 1;
            assert!((lo..lo + 7).contains(&d.day()));
        }
    }
}

#[test]
fn misconfigured_window_is_not_found() {
    let from = CalendarDate::new(2024, 5, 1).unwrap();
    let err = find_weekday(from, 0, Direction::Forward, Weekday::Mon).unwrap_err();
    assert!(matches!(err, CalendarError::WeekdayNotFound { days: 0, .. }));
}
