//! Per-country observance tables: fixed-rule groups rendered as RRULEs and
//! rule-computed groups rendered as explicit date lists.

use std::fmt;
use std::str::FromStr;

use annum_calendar::{
    CalendarDate, DateGroups, LabeledDateGroup, RecurrenceRule, YearRange, nth_weekday_of_month,
};
use chrono::Weekday;
use tracing::debug;

use crate::error::CivilError;
use crate::{france, germany};

/// Countries with an observance calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    /// France.
    France,
    /// Germany.
    Germany,
}

impl Country {
    /// All supported countries.
    pub const ALL: [Country; 2] = [Country::France, Country::Germany];

    /// ISO 3166-1 alpha-2 code.
    pub fn code(self) -> &'static str {
        match self {
            Self::France => "FR",
            Self::Germany => "DE",
        }
    }

    fn known_codes() -> String {
        Self::ALL.map(Country::code).join(", ")
    }
}

impl FromStr for Country {
    type Err = CivilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CivilError::UnknownCountry {
                code: s.to_string(),
                known: Self::known_codes(),
            })
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How a recurring observance is placed within its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    /// Same month and day every year.
    Fixed { month: u32, day: u32 },
    /// The `n`-th `weekday` of `month`.
    NthWeekday { month: u32, weekday: Weekday, n: u32 },
}

impl Anchor {
    fn first_in(self, year: i32) -> Result<CalendarDate, CivilError> {
        match self {
            Self::Fixed { month, day } => Ok(CalendarDate::new(year, month, day)?),
            Self::NthWeekday { month, weekday, n } => {
                Ok(nth_weekday_of_month(year, month, weekday, n)?)
            }
        }
    }

    fn rule(self) -> RecurrenceRule {
        match self {
            Self::Fixed { .. } => RecurrenceRule::yearly(),
            Self::NthWeekday { month, weekday, n } => {
                let day = ical_weekday(weekday);
                RecurrenceRule::new(format!("FREQ=YEARLY;BYMONTH={month};BYDAY={n}{day}"))
            }
        }
    }
}

/// Two-letter RFC 5545 weekday code.
fn ical_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}

struct RecurringObservance {
    label: &'static str,
    anchor: Anchor,
}

impl RecurringObservance {
    fn group(&self, year: i32) -> Result<LabeledDateGroup, CivilError> {
        let anchor = self
            .anchor
            .first_in(year)
            .map_err(|e| e.in_observance(self.label))?;
        debug!(label = self.label, %anchor, "recurring observance");
        Ok(LabeledDateGroup::recurring(self.label, anchor, self.anchor.rule()))
    }
}

struct IrregularObservance {
    label: &'static str,
    dates: fn(YearRange) -> Result<Vec<CalendarDate>, CivilError>,
}

impl IrregularObservance {
    fn group(&self, range: YearRange) -> Result<LabeledDateGroup, CivilError> {
        let dates = (self.dates)(range).map_err(|e| e.in_observance(self.label))?;
        debug!(label = self.label, n = dates.len(), "irregular observance");
        Ok(LabeledDateGroup::irregular(self.label, dates))
    }
}

fn french_mothers_days(range: YearRange) -> Result<Vec<CalendarDate>, CivilError> {
    Ok(france::mothers_days(range)?.into_dates())
}

fn german_fathers_days(range: YearRange) -> Result<Vec<CalendarDate>, CivilError> {
    Ok(germany::fathers_days(range)?.into_dates())
}

fn oktoberfest_openings(range: YearRange) -> Result<Vec<CalendarDate>, CivilError> {
    Ok(germany::oktoberfest_openings(range)?.into_dates())
}

fn volkstrauertage(range: YearRange) -> Result<Vec<CalendarDate>, CivilError> {
    Ok(germany::volkstrauertage(range)?.into_dates())
}

const FRANCE_RECURRING: &[RecurringObservance] = &[
    RecurringObservance {
        label: "Chandeleur",
        anchor: Anchor::Fixed { month: 2, day: 2 },
    },
    RecurringObservance {
        label: "Fête des pères",
        anchor: Anchor::NthWeekday {
            month: 6,
            weekday: Weekday::Sun,
            n: 3,
        },
    },
    RecurringObservance {
        label: "Fête de la musique",
        anchor: Anchor::Fixed { month: 6, day: 21 },
    },
    RecurringObservance {
        label: "Journées du patrimoine",
        anchor: Anchor::NthWeekday {
            month: 9,
            weekday: Weekday::Sun,
            n: 3,
        },
    },
];

const FRANCE_IRREGULAR: &[IrregularObservance] = &[
    IrregularObservance {
        label: "Fête des mères",
        dates: french_mothers_days,
    },
    IrregularObservance {
        label: "Ouverture des soldes",
        dates: france::sales_openings,
    },
];

const GERMANY_RECURRING: &[RecurringObservance] = &[
    RecurringObservance {
        label: "Muttertag",
        anchor: Anchor::NthWeekday {
            month: 5,
            weekday: Weekday::Sun,
            n: 2,
        },
    },
    RecurringObservance {
        label: "Martinstag",
        anchor: Anchor::Fixed { month: 11, day: 11 },
    },
    RecurringObservance {
        label: "Nikolaustag",
        anchor: Anchor::Fixed { month: 12, day: 6 },
    },
];

const GERMANY_IRREGULAR: &[IrregularObservance] = &[
    IrregularObservance {
        label: "Vatertag",
        dates: german_fathers_days,
    },
    IrregularObservance {
        label: "Oktoberfest",
        dates: oktoberfest_openings,
    },
    IrregularObservance {
        label: "Volkstrauertag",
        dates: volkstrauertage,
    },
];

/// The observances of one country, ready to be expanded over a year range.
#[derive(Clone, Copy)]
pub struct ObservanceCalendar {
    country: Country,
    recurring: &'static [RecurringObservance],
    irregular: &'static [IrregularObservance],
}

impl ObservanceCalendar {
    /// Returns the observance calendar for `country`.
    pub fn for_country(country: Country) -> Self {
        let (recurring, irregular) = match country {
            Country::France => (FRANCE_RECURRING, FRANCE_IRREGULAR),
            Country::Germany => (GERMANY_RECURRING, GERMANY_IRREGULAR),
        };
        Self {
            country,
            recurring,
            irregular,
        }
    }

    /// Looks the calendar up by country code (`"FR"`, `"DE"`).
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::UnknownCountry`] for any other code.
    pub fn for_code(code: &str) -> Result<Self, CivilError> {
        Ok(Self::for_country(code.parse()?))
    }

    /// The country this calendar covers.
    pub fn country(&self) -> Country {
        self.country
    }

    /// Expands every observance over `range`.
    ///
    /// Recurring groups come first, anchored on their occurrence in
    /// `range.start()`, followed by the rule-computed groups with one or more
    /// dates per year.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::Observance`] naming the first observance that
    /// cannot be computed over `range`.
    #[tracing::instrument(skip_all, fields(country = %self.country))]
    pub fn groups(&self, range: YearRange) -> Result<DateGroups, CivilError> {
        let mut groups = DateGroups::new();
        for obs in self.recurring {
            groups.push(obs.group(range.start())?)?;
        }
        for obs in self.irregular {
            groups.push(obs.group(range)?)?;
        }
        Ok(groups)
    }
}

impl fmt::Debug for ObservanceCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservanceCalendar")
            .field("country", &self.country)
            .field("recurring", &self.recurring.len())
            .field("irregular", &self.irregular.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use annum_calendar::DateRule;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn country_codes() {
        assert_eq!("FR".parse::<Country>().unwrap(), Country::France);
        assert_eq!("de".parse::<Country>().unwrap(), Country::Germany);
        assert_eq!(
            "JP".parse::<Country>().unwrap_err(),
            CivilError::UnknownCountry {
                code: "JP".to_string(),
                known: "FR, DE".to_string(),
            }
        );
    }

    #[test]
    fn weekday_anchor_rule_text() {
        let muttertag = Anchor::NthWeekday {
            month: 5,
            weekday: Weekday::Sun,
            n: 2,
        };
        assert_eq!(muttertag.rule().as_str(), "FREQ=YEARLY;BYMONTH=5;BYDAY=2SU");
        assert_eq!(muttertag.first_in(2000).unwrap(), date(2000, 5, 14));
        let fixed = Anchor::Fixed { month: 2, day: 2 };
        assert_eq!(fixed.rule().as_str(), "FREQ=YEARLY;");
    }

    fn no_dates(_: YearRange) -> Result<Vec<CalendarDate>, CivilError> {
        Err(CivilError::Calendar {
            reason: "invalid date: 2023-02-29".to_string(),
        })
    }

    #[test]
    fn failing_rule_names_its_observance() {
        let obs = IrregularObservance {
            label: "Ouverture des soldes",
            dates: no_dates,
        };
        let err = obs.group(YearRange::new(2023, 2023).unwrap()).unwrap_err();
        assert_eq!(
            err,
            CivilError::Observance {
                label: "Ouverture des soldes".to_string(),
                reason: "calendar error: invalid date: 2023-02-29".to_string(),
            }
        );
    }

    #[test]
    fn unrepresentable_year_names_first_observance() {
        let range = YearRange::new(300_000, 300_000).unwrap();
        let err = ObservanceCalendar::for_country(Country::France)
            .groups(range)
            .unwrap_err();
        assert!(matches!(&err, CivilError::Observance { label, .. } if label == "Chandeleur"));
    }

    #[test]
    fn france_groups() {
        let range = YearRange::new(2000, 2040).unwrap();
        let groups = ObservanceCalendar::for_code("FR").unwrap().groups(range).unwrap();
        assert_eq!(groups.len(), 6);

        let chandeleur = groups.get("Chandeleur").unwrap();
        assert_eq!(
            chandeleur.rule(),
            &DateRule::Recurring {
                anchor: date(2000, 2, 2),
                rule: RecurrenceRule::yearly(),
            }
        );

        let peres = groups.get("Fête des pères").unwrap();
        assert_eq!(
            peres.rule(),
            &DateRule::Recurring {
                anchor: date(2000, 6, 18),
                rule: RecurrenceRule::new("FREQ=YEARLY;BYMONTH=6;BYDAY=3SU"),
            }
        );

        match groups.get("Ouverture des soldes").unwrap().rule() {
            DateRule::Irregular(dates) => assert_eq!(dates.len(), 82),
            other => panic!("expected irregular, got {other:?}"),
        }
        match groups.get("Fête des mères").unwrap().rule() {
            DateRule::Irregular(dates) => {
                assert_eq!(dates.len(), 41);
                assert_eq!(dates[20], date(2020, 6, 7));
            }
            other => panic!("expected irregular, got {other:?}"),
        }
    }

    #[test]
    fn germany_groups_recurring_first() {
        let range = YearRange::new(2024, 2025).unwrap();
        let groups = ObservanceCalendar::for_country(Country::Germany).groups(range).unwrap();
        let labels: Vec<&str> = groups.iter().map(|g| g.label()).collect();
        assert_eq!(
            labels,
            ["Muttertag", "Martinstag", "Nikolaustag", "Vatertag", "Oktoberfest", "Volkstrauertag"]
        );
        assert_eq!(
            groups.get("Martinstag").unwrap().rule(),
            &DateRule::Recurring {
                anchor: date(2024, 11, 11),
                rule: RecurrenceRule::yearly(),
            }
        );
        assert_eq!(
            groups.get("Oktoberfest").unwrap().rule(),
            &DateRule::Irregular(vec![date(2024, 9, 21), date(2025, 9, 20)])
        );
    }
}
