//! Labeled date groups: the unit the serializer turns into one event.

use std::fmt;

use crate::date::CalendarDate;
use crate::error::CalendarError;

/// A recurrence rule expression, attached verbatim to a recurring event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecurrenceRule(String);

impl RecurrenceRule {
    /// Wraps an RRULE value such as `FREQ=YEARLY;BYMONTH=5;BYDAY=2SU`.
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }

    /// Yearly on the anchor's month and day: `FREQ=YEARLY;`.
    pub fn yearly() -> Self {
        Self::new("FREQ=YEARLY;")
    }

    /// Returns the expression text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the dates of one label are expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRule {
    /// One anchor date plus a recurrence rule.
    Recurring {
        /// First occurrence.
        anchor: CalendarDate,
        /// Recurrence expression.
        rule: RecurrenceRule,
    },
    /// An explicit, ordered list of dates.
    Irregular(Vec<CalendarDate>),
}

/// A human-readable label and the dates it occurs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledDateGroup {
    label: String,
    rule: DateRule,
}

impl LabeledDateGroup {
    /// Creates a recurring group.
    pub fn recurring(label: impl Into<String>, anchor: CalendarDate, rule: RecurrenceRule) -> Self {
        Self {
            label: label.into(),
            rule: DateRule::Recurring { anchor, rule },
        }
    }

    /// Creates an irregular group from an explicit date list.
    pub fn irregular(label: impl Into<String>, dates: Vec<CalendarDate>) -> Self {
        Self {
            label: label.into(),
            rule: DateRule::Irregular(dates),
        }
    }

    /// Returns the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the date rule.
    pub fn rule(&self) -> &DateRule {
        &self.rule
    }

    /// Returns `true` for a recurring group.
    pub fn is_recurring(&self) -> bool {
        matches!(self.rule, DateRule::Recurring { .. })
    }
}

/// An insertion-ordered collection of groups with unique labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateGroups {
    groups: Vec<LabeledDateGroup>,
}

impl DateGroups {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a group.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DuplicateLabel`] if a group with the same
    /// label is already present.
    pub fn push(&mut self, group: LabeledDateGroup) -> Result<(), CalendarError> {
        if self.get(group.label()).is_some() {
            return Err(CalendarError::DuplicateLabel {
                label: group.label,
            });
        }
        self.groups.push(group);
        Ok(())
    }

    /// Looks a group up by label.
    pub fn get(&self, label: &str) -> Option<&LabeledDateGroup> {
        self.groups.iter().find(|g| g.label == label)
    }

    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates the groups in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, LabeledDateGroup> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a DateGroups {
    type Item = &'a LabeledDateGroup;
    type IntoIter = std::slice::Iter<'a, LabeledDateGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl IntoIterator for DateGroups {
    type Item = LabeledDateGroup;
    type IntoIter = std::vec::IntoIter<LabeledDateGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
