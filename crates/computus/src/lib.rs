//! # annum-computus
//!
//! Easter Sunday under three historical computus variants, plus the feasts
//! defined as fixed offsets from it and the first Sunday of Advent.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │   easter     │────▶│  moving_feast  │────▶│  MovingFeastSet  │
//!  │ (congruences)│     │ (day offsets)  │     │  (one per year)  │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use annum_calendar::YearRange;
//! use annum_computus::{EasterMethod, MovingFeast, moving_feasts};
//!
//! let range = YearRange::new(2000, 2040).unwrap();
//! let pentecosts = moving_feasts(range, MovingFeast::Pentecost, EasterMethod::Western).unwrap();
//! assert_eq!(pentecosts.len(), 41);
//! ```

pub mod easter;
pub mod error;
pub mod feasts;

pub use easter::{EasterMethod, easter};
pub use error::ComputusError;
pub use feasts::{
    MovingFeast, ash_wednesday, first_advent, first_advents, moving_feast, moving_feasts, pentecost,
};
