//! # annum-lunar
//!
//! Position in the synodic month for any instant, the eight conventional
//! phase names, and a day-by-day scan that reports new moon, first quarter,
//! full moon and last quarter over a year range.
//!
//! All arithmetic on positions uses [`rust_decimal::Decimal`], so a
//! multi-decade daily scan classifies boundary days identically on every
//! platform.
//!
//! # Quick start
//!
//! ```rust
//! use annum_calendar::YearRange;
//! use annum_lunar::{PhaseKind, detect_phase_events};
//!
//! let events = detect_phase_events(YearRange::new(2001, 2001).unwrap()).unwrap();
//! assert_eq!(events[0].kind, PhaseKind::FirstQuarter);
//! ```

pub mod detect;
pub mod error;
pub mod position;

pub use detect::{PhaseEvent, PhaseKind, detect_phase_events, rounded_position};
pub use error::LunarError;
pub use position::{MoonPhase, lunar_position, lunar_position_on, phase_of};
