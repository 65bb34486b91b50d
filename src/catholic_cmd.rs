//! Catholic command: the Easter cycle, Advent and the fixed solemnities.

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use annum_calendar::{CalendarDate, DateGroups, LabeledDateGroup, RecurrenceRule, YearRange};
use annum_computus::{EasterMethod, MovingFeast, first_advents, moving_feasts};
use annum_ical::CalendarDocument;

use crate::cli::{CatholicArgs, Language};
use crate::convert;
use crate::session::Session;

struct Label {
    fr: &'static str,
    en: &'static str,
}

impl Label {
    fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::Fr => self.fr,
            Language::En => self.en,
        }
    }
}

const MOVING: &[(MovingFeast, Label)] = &[
    (MovingFeast::Easter, Label { fr: "Pâques", en: "Easter" }),
    (
        MovingFeast::AshWednesday,
        Label {
            fr: "Mercredi des Cendres",
            en: "Ash Wednesday",
        },
    ),
    (MovingFeast::Pentecost, Label { fr: "Pentecôte", en: "Pentecost" }),
];

const ADVENT: Label = Label { fr: "Avent", en: "Advent" };

const FIXED: &[(u32, u32, Label)] = &[
    (1, 6, Label { fr: "Épiphanie", en: "Epiphany" }),
    (
        2,
        2,
        Label {
            fr: "Présentation de Jésus au Temple",
            en: "Presentation of Jesus at the Temple",
        },
    ),
    (3, 19, Label { fr: "Saint Joseph", en: "Saint Joseph" }),
    (3, 25, Label { fr: "Annonciation", en: "Annunciation" }),
    (
        6,
        29,
        Label {
            fr: "Saints Pierre et Paul",
            en: "Saints Peter and Paul",
        },
    ),
    (8, 15, Label { fr: "Assomption", en: "Assumption" }),
    (11, 1, Label { fr: "Toussaint", en: "All Saints" }),
    (
        12,
        8,
        Label {
            fr: "Immaculée Conception",
            en: "Immaculate Conception",
        },
    ),
    (12, 24, Label { fr: "Vigile de Noël", en: "Christmas Eve" }),
    (12, 25, Label { fr: "Noël", en: "Christmas" }),
];

/// Builds the liturgical date groups for `range` in `lang`.
pub fn catholic_groups(
    range: YearRange,
    lang: Language,
    method: EasterMethod,
) -> Result<DateGroups> {
    let mut groups = DateGroups::new();

    for (month, day, label) in FIXED {
        let anchor = CalendarDate::new(range.start(), *month, *day)?;
        let rule = RecurrenceRule::yearly();
        groups.push(LabeledDateGroup::recurring(label.get(lang), anchor, rule))?;
    }

    for (feast, label) in MOVING {
        let set = moving_feasts(range, *feast, method)
            .with_context(|| format!("failed to compute {}", label.en))?;
        groups.push(LabeledDateGroup::irregular(label.get(lang), set.into_dates()))?;
    }

    let advents = first_advents(range).context("failed to compute Advent")?;
    groups.push(LabeledDateGroup::irregular(ADVENT.get(lang), advents.into_dates()))?;

    debug!(n_groups = groups.len(), "built liturgical groups");
    Ok(groups)
}

/// `catho_<start>_<end>_<lang>.ics`
pub fn file_name(session: &Session, lang: Language) -> String {
    format!("catho_{}_{}.ics", session.range_tag(), lang.code())
}

/// Run the catholic calendar pipeline.
pub fn run(args: CatholicArgs) -> Result<()> {
    let _cmd = info_span!("catholic", lang = args.lang.code()).entered();
    let mut session = Session::open(&args.common)?;
    let method = convert::parse_easter_method(&session.config.computus.method)?;

    let groups = catholic_groups(session.range, args.lang, method)?;
    let doc = CalendarDocument::from_groups(&mut session.renderer, &groups)?;
    let path = session.write(&doc, &file_name(&session, args.lang))?;
    info!(path = %path.display(), n_events = doc.n_events(), "catholic calendar written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use annum_calendar::DateRule;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn french_groups() {
        let range = YearRange::new(2000, 2040).unwrap();
        let groups = catholic_groups(range, Language::Fr, EasterMethod::Western).unwrap();
        assert_eq!(groups.len(), FIXED.len() + MOVING.len() + 1);
        assert_eq!(
            groups.get("Épiphanie").unwrap().rule(),
            &DateRule::Recurring {
                anchor: date(2000, 1, 6),
                rule: RecurrenceRule::yearly(),
            }
        );
        match groups.get("Pâques").unwrap().rule() {
            DateRule::Irregular(dates) => {
                assert_eq!(dates.len(), 41);
                assert_eq!(dates[0], date(2000, 4, 23));
                assert_eq!(dates[24], date(2024, 3, 31));
            }
            other => panic!("expected irregular, got {other:?}"),
        }
        match groups.get("Avent").unwrap().rule() {
            DateRule::Irregular(dates) => assert_eq!(dates[0], date(2000, 12, 3)),
            other => panic!("expected irregular, got {other:?}"),
        }
    }

    #[test]
    fn english_labels_and_orthodox_method() {
        let range = YearRange::new(2024, 2024).unwrap();
        let groups = catholic_groups(range, Language::En, EasterMethod::Orthodox).unwrap();
        assert!(groups.get("Christmas").is_some());
        assert_eq!(
            groups.get("Easter").unwrap().rule(),
            &DateRule::Irregular(vec![date(2024, 5, 5)])
        );
        assert_eq!(
            groups.get("Christmas Eve").unwrap().rule(),
            &DateRule::Recurring {
                anchor: date(2024, 12, 24),
                rule: RecurrenceRule::yearly(),
            }
        );
    }

    #[test]
    fn labels_unique_in_both_languages() {
        let range = YearRange::new(2000, 2001).unwrap();
        for lang in [Language::Fr, Language::En] {
            assert!(catholic_groups(range, lang, EasterMethod::Western).is_ok());
        }
    }
}
