//! The provider seam and the jurisdiction lookup table.

use annum_calendar::{CalendarDate, YearRange};

use crate::error::HolidayError;
use crate::{FranceHolidays, GermanyBavariaHolidays, JapanHolidays, UnitedKingdomHolidays};

/// Supplies the public holidays of one jurisdiction.
pub trait HolidayProvider {
    /// Jurisdiction code, e.g. `"FR"`.
    fn code(&self) -> &'static str;

    /// Every holiday in `range` as chronologically sorted `(date, label)`
    /// pairs. Holidays falling on the same date share one pair whose label
    /// joins the names with `", "`.
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::UnsupportedYear`] when the jurisdiction has no
    /// rules for a year of `range`.
    fn holidays(&self, range: YearRange) -> Result<Vec<(CalendarDate, String)>, HolidayError>;
}

type ProviderCtor = fn() -> Box<dyn HolidayProvider>;

fn france() -> Box<dyn HolidayProvider> {
    Box::new(FranceHolidays)
}

fn united_kingdom() -> Box<dyn HolidayProvider> {
    Box::new(UnitedKingdomHolidays)
}

fn germany_bavaria() -> Box<dyn HolidayProvider> {
    Box::new(GermanyBavariaHolidays)
}

fn japan() -> Box<dyn HolidayProvider> {
    Box::new(JapanHolidays)
}

const PROVIDERS: &[(&str, ProviderCtor)] = &[
    ("FR", france),
    ("GB", united_kingdom),
    ("DE", germany_bavaria),
    ("JP", japan),
];

/// Supported jurisdiction codes, in lookup order.
pub fn jurisdictions() -> impl Iterator<Item = &'static str> {
    PROVIDERS.iter().map(|(code, _)| *code)
}

/// Returns the provider registered for `code` (case-insensitive).
///
/// # Errors
///
/// Returns [`HolidayError::UnknownJurisdiction`] if no provider matches.
pub fn provider_for(code: &str) -> Result<Box<dyn HolidayProvider>, HolidayError> {
    PROVIDERS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code.trim()))
        .map(|(_, ctor)| ctor())
        .ok_or_else(|| HolidayError::UnknownJurisdiction {
            code: code.to_string(),
            known: jurisdictions().collect::<Vec<_>>().join(", "),
        })
}
