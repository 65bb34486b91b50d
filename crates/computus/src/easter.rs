//! Easter Sunday under the Julian, Orthodox and Western computus.

use std::fmt;
use std::str::FromStr;

use annum_calendar::CalendarDate;

use crate::error::ComputusError;

/// Which historical computus to apply.
///
/// The numeric values follow the conventional method numbering used by
/// Easter tables (1, 2, 3).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EasterMethod {
    /// Original computus, result expressed in the Julian calendar. Valid for
    /// years after 326.
    Julian = 1,
    /// Original computus with the result converted to the Gregorian
    /// calendar, as observed by the Orthodox churches. Valid 1583..=4099.
    Orthodox = 2,
    /// Revised Gregorian computus. Valid 1583..=4099.
    #[default]
    Western = 3,
}

impl TryFrom<u8> for EasterMethod {
    type Error = ComputusError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Julian),
            2 => Ok(Self::Orthodox),
            3 => Ok(Self::Western),
            other => Err(ComputusError::InvalidMethod {
                method: other.to_string(),
            }),
        }
    }
}

impl FromStr for EasterMethod {
    type Err = ComputusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "julian" => Ok(Self::Julian),
            "2" | "orthodox" => Ok(Self::Orthodox),
            "3" | "western" | "gregorian" => Ok(Self::Western),
            _ => Err(ComputusError::InvalidMethod {
                method: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for EasterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Julian => "julian",
            Self::Orthodox => "orthodox",
            Self::Western => "western",
        })
    }
}

/// Computes Easter Sunday for `year`.
///
/// Implements the algorithm of Claus Tondering, based on Oudin (1940):
///
/// * `g`: golden number - 1
/// * `c`: century
/// * `h`: (23 - epact) mod 30
/// * `i`: days from March 21 to the Paschal full moon
/// * `j`: weekday of the Paschal full moon (0 = Sunday)
/// * `p`: days from March 21 to the Sunday on or before the full moon
///   (-6..=28 for Julian/Western, up to 56 for Orthodox)
/// * `e`: days added to convert a Julian date to Gregorian (Orthodox only)
///
/// # Errors
///
/// Returns [`ComputusError::Calendar`] only if the resulting date cannot be
/// represented (years far outside any calendar's range).
///
/// # Example
///
/// ```
/// use annum_computus::{EasterMethod, easter};
///
/// let d = easter(2024, EasterMethod::Western).unwrap();
/// assert_eq!(d.to_string(), "2024-03-31");
/// ```
pub fn easter(year: i32, method: EasterMethod) -> Result<CalendarDate, ComputusError> {
    let y = year;
    let g = y % 19;
    let mut e = 0;

    let (i, j) = match method {
        EasterMethod::Julian | EasterMethod::Orthodox => {
            let i = (19 * g + 15) % 30;
            let j = (y + y / 4 + i) % 7;
            if method == EasterMethod::Orthodox {
                e = 10;
                if y > 1600 {
                    e += y / 100 - 16 - (y / 100 - 16) / 4;
                }
            }
            (i, j)
        }
        EasterMethod::Western => {
            let c = y / 100;
            let h = (c - c / 4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
            let i = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - g) / 11));
            let j = (y + y / 4 + i + 2 - c + c / 4) % 7;
            (i, j)
        }
    };

    let p = i - j + e;
    let d = 1 + (p + 27 + (p + 6) / 40) % 31;
    let m = 3 + (p + 26) / 30;
    Ok(CalendarDate::new(y, m as u32, d as u32)?)
}
