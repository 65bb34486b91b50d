//! # annum-civil
//!
//! Commerce-calendar and folk observances whose date follows a weekday rule
//! or an ecclesiastical anchor, for France and Germany.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `france` | Fête des mères, sales openings |
//! | `germany` | Vatertag, Oktoberfest, Volkstrauertag |
//! | `observances` | Per-country tables expanded into `DateGroups` |
//! | `error` | Error types |
//!
//! ```
//! use annum_calendar::YearRange;
//! use annum_civil::ObservanceCalendar;
//!
//! let range = YearRange::new(2000, 2040).unwrap();
//! let groups = ObservanceCalendar::for_code("DE").unwrap().groups(range).unwrap();
//! assert!(groups.get("Volkstrauertag").is_some());
//! ```

mod error;
pub mod france;
pub mod germany;
mod observances;

pub use error::CivilError;
pub use observances::{Country, ObservanceCalendar};
