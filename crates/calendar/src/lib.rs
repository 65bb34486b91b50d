//! # annum-calendar
//!
//! Gregorian dates and the small value types shared by every date rule and
//! by the iCalendar serializer.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CalendarDate"] -->|"day_sequence()"| B["DaySequence"]
//!     A -->|"find_weekday() / nth_weekday_of_month()"| A
//!     C["YearRange"] -->|"MovingFeastSet::from_rule()"| D["MovingFeastSet"]
//!     D -->|"LabeledDateGroup::irregular()"| E["DateGroups"]
//!     A -->|"LabeledDateGroup::recurring()"| E
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use annum_calendar::{CalendarDate, MovingFeastSet, YearRange, last_weekday_of_month};
//! use chrono::Weekday;
//!
//! let range = YearRange::new(2000, 2040).unwrap();
//! let set =
//!     MovingFeastSet::from_rule(range, |y| last_weekday_of_month(y, 5, Weekday::Sun)).unwrap();
//! assert_eq!(set.len(), 41);
//! assert_eq!(set.get(2024), Some(CalendarDate::new(2024, 5, 26).unwrap()));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Gregorian date value |
//! | `range` | Year ranges and one-date-per-year sets |
//! | `sequence` | Day-by-day iteration |
//! | `search` | Weekday searches over bounded windows |
//! | `group` | Labeled date groups and recurrence rules |
//! | `error` | Error types |

mod date;
mod error;
mod group;
mod range;
mod search;
mod sequence;

pub use date::CalendarDate;
pub use error::CalendarError;
pub use group::{DateGroups, DateRule, LabeledDateGroup, RecurrenceRule};
pub use range::{MovingFeastSet, YearRange};
pub use search::{
    Direction, find_weekday, last_weekday_of_month, nth_weekday_in_window, nth_weekday_of_month,
    nth_weekday_on_or_before, weekday_on_or_after, weekday_on_or_before,
};
pub use sequence::{DaySequence, day_sequence};
