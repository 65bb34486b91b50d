//! Splitting provider data into recurring and irregular date groups.

use std::collections::HashMap;

use annum_calendar::{CalendarDate, DateGroups, LabeledDateGroup, RecurrenceRule, YearRange};
use tracing::debug;

use crate::error::HolidayError;

const OBSERVED_MARKER: &str = "(Observed)";

/// Canonical display name: the part trimmed, with an `(Observed)` marker
/// removed.
fn canonical_name(part: &str) -> String {
    part.replace(OBSERVED_MARKER, "").trim().to_string()
}

/// Splits a composite provider label into its canonical names.
fn split_label(date: CalendarDate, raw: &str) -> Result<Vec<String>, HolidayError> {
    let names: Vec<String> = raw
        .split(',')
        .map(canonical_name)
        .filter(|name| !name.is_empty())
        .collect();
    if names.is_empty() {
        return Err(HolidayError::MalformedLabel {
            date,
            raw: raw.to_string(),
        });
    }
    Ok(names)
}

/// A label recurs yearly when it falls once per year of `range`, always on
/// the month and day of its first occurrence.
fn is_yearly(dates: &[CalendarDate], range: YearRange) -> bool {
    match dates.first() {
        Some(first) => {
            dates.len() == range.len() && dates.iter().all(|d| d.month_day() == first.month_day())
        }
        None => false,
    }
}

/// Groups `(date, label)` pairs by label and classifies each label.
///
/// Composite labels are split on `,`. Names are normalised by trimming and
/// dropping an `(Observed)` marker before grouping, so substitute days are
/// accumulated under the holiday they replace; a holiday with any
/// substitute day therefore becomes irregular.
///
/// Recurring labels are anchored on their first date with a plain
/// `FREQ=YEARLY;` rule; all other labels keep their explicit date list.
/// Groups are returned in order of first appearance.
///
/// # Errors
///
/// Returns [`HolidayError::MalformedLabel`] if a label contains no name.
#[tracing::instrument(
    skip_all,
    fields(n_pairs = pairs.len(), start = range.start(), end = range.end())
)]
pub fn classify(
    pairs: &[(CalendarDate, String)],
    range: YearRange,
) -> Result<DateGroups, HolidayError> {
    let mut order: Vec<(String, Vec<CalendarDate>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (date, raw) in pairs {
        for name in split_label(*date, raw)? {
            match index.get(&name) {
                Some(&i) => order[i].1.push(*date),
                None => {
                    index.insert(name.clone(), order.len());
                    order.push((name, vec![*date]));
                }
            }
        }
    }

    let mut groups = DateGroups::new();
    for (label, dates) in order {
        let group = if is_yearly(&dates, range) {
            LabeledDateGroup::recurring(label, dates[0], RecurrenceRule::yearly())
        } else {
            LabeledDateGroup::irregular(label, dates)
        };
        debug!(label = group.label(), recurring = group.is_recurring(), "classified");
        groups.push(group)?;
    }
    Ok(groups)
}
