//! Per-date accumulation of holiday names.

use std::collections::BTreeMap;

use annum_calendar::CalendarDate;

/// Appended to a holiday name on its substitute day.
pub(crate) const OBSERVED_SUFFIX: &str = " (Observed)";

/// Collects holiday names by date; names sharing a date are joined with
/// `", "` in insertion order when the table is flattened.
#[derive(Debug, Default)]
pub(crate) struct HolidayTable {
    days: BTreeMap<CalendarDate, Vec<String>>,
}

impl HolidayTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add(&mut self, date: CalendarDate, name: impl Into<String>) {
        self.days.entry(date).or_default().push(name.into());
    }

    pub(crate) fn contains(&self, date: CalendarDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Chronologically sorted `(date, label)` pairs.
    pub(crate) fn into_pairs(self) -> Vec<(CalendarDate, String)> {
        self.days
            .into_iter()
            .map(|(date, names)| (date, names.join(", ")))
            .collect()
    }
}
