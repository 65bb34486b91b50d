//! Event records and document markers.

use annum_calendar::{CalendarDate, DateRule, LabeledDateGroup, RecurrenceRule};
use annum_lunar::PhaseEvent;

use crate::error::IcalError;
use crate::stamp::{EventStamp, LineEnding};
use crate::uid::UidSource;

/// Explicit dates written per `RDATE` content line.
pub const RDATES_PER_LINE: usize = 3;

/// Renders event records, drawing one UID per event from `U`.
#[derive(Debug)]
pub struct Renderer<U> {
    stamp: EventStamp,
    line_ending: LineEnding,
    uids: U,
}

impl<U: UidSource> Renderer<U> {
    /// Creates a renderer with the given metadata, terminator and UID source.
    pub fn new(stamp: EventStamp, line_ending: LineEnding, uids: U) -> Self {
        Self {
            stamp,
            line_ending,
            uids,
        }
    }

    /// The metadata stamped onto every record.
    pub fn stamp(&self) -> &EventStamp {
        &self.stamp
    }

    /// The line terminator in use.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    fn lines(&self, lines: &[String]) -> String {
        let eol = self.line_ending.as_str();
        let mut out = String::with_capacity(lines.iter().map(|l| l.len() + eol.len()).sum());
        for line in lines {
            out.push_str(line);
            out.push_str(eol);
        }
        out
    }

    fn uid(&mut self) -> String {
        format!("{}@{}", self.uids.next_uuid(), self.stamp.uid_domain())
    }

    fn organizer(&self) -> String {
        format!(
            "ORGANIZER;CN={}:MAILTO:{}",
            self.stamp.organizer_name(),
            self.stamp.organizer_email()
        )
    }

    /// `BEGIN:VCALENDAR` header.
    pub fn open_marker(&self) -> String {
        self.lines(&[
            "BEGIN:VCALENDAR".into(),
            "VERSION:2.0".into(),
            format!("PRODID:{}", self.stamp.prodid()),
        ])
    }

    /// `END:VCALENDAR` footer.
    pub fn close_marker(&self) -> String {
        self.lines(&["END:VCALENDAR".into()])
    }

    /// An all-day event on `anchor` repeating by `rule`.
    pub fn render_recurring_event(
        &mut self,
        label: &str,
        anchor: CalendarDate,
        rule: &RecurrenceRule,
    ) -> String {
        let start = anchor.to_ical();
        let lines = [
            "BEGIN:VEVENT".into(),
            format!("UID:{}", self.uid()),
            format!("DTSTART;VALUE=DATE:{start}"),
            format!("DTEND;VALUE=DATE:{start}"),
            format!("RRULE:{rule}"),
            format!("DTSTAMP:{}", self.stamp.dtstamp()),
            self.organizer(),
            format!("SUMMARY:{label}"),
            "END:VEVENT".into(),
        ];
        self.lines(&lines)
    }

    /// An all-day event on the first of `dates` with every date listed in
    /// `RDATE`, [`RDATES_PER_LINE`] per folded line.
    ///
    /// # Errors
    ///
    /// Returns [`IcalError::EmptyDates`] if `dates` is empty.
    pub fn render_irregular_event(
        &mut self,
        label: &str,
        dates: &[CalendarDate],
    ) -> Result<String, IcalError> {
        let first = dates.first().ok_or_else(|| IcalError::EmptyDates {
            label: label.to_string(),
        })?;
        let start = first.to_ical();
        let separator = format!(",{} ", self.line_ending.as_str());
        let rdates = dates
            .chunks(RDATES_PER_LINE)
            .map(|chunk| chunk.iter().map(|d| d.to_ical()).collect::<Vec<_>>().join(","))
            .collect::<Vec<_>>()
            .join(&separator);

        let lines = [
            "BEGIN:VEVENT".into(),
            format!("UID:{}", self.uid()),
            format!("DTSTART;VALUE=DATE:{start}"),
            format!("DTEND;VALUE=DATE:{start}"),
            format!("RDATE;VALUE=DATE:{rdates}"),
            format!("DTSTAMP:{}", self.stamp.dtstamp()),
            self.organizer(),
            format!("SUMMARY:{label}"),
            "END:VEVENT".into(),
        ];
        Ok(self.lines(&lines))
    }

    /// Renders either form depending on the group's rule.
    pub fn render_group(&mut self, group: &LabeledDateGroup) -> Result<String, IcalError> {
        match group.rule() {
            DateRule::Recurring { anchor, rule } => {
                Ok(self.render_recurring_event(group.label(), *anchor, rule))
            }
            DateRule::Irregular(dates) => self.render_irregular_event(group.label(), dates),
        }
    }

    /// A transparent all-day moon-phase event.
    pub fn render_phase_event(&mut self, event: &PhaseEvent) -> String {
        let day = event.date.to_ical();
        let stamp = self.stamp.dtstamp().to_string();
        let lines = [
            "BEGIN:VEVENT".into(),
            format!("UID:{}", self.uid()),
            "CATEGORIES:MOON".into(),
            format!("DTSTAMP:{stamp}"),
            "TRANSP:TRANSPARENT".into(),
            format!("LAST-MODIFIED:{stamp}"),
            "STATUS:CONFIRMED".into(),
            format!("DTSTART;VALUE=DATE:{day}"),
            format!("DTEND;VALUE=DATE:{day}"),
            format!("SUMMARY:Moon - {}", event.kind),
            "END:VEVENT".into(),
        ];
        self.lines(&lines)
    }
}

#[cfg(test)]
mod tests {
    use annum_lunar::PhaseKind;

    use super::*;
    use crate::uid::SeededUids;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn renderer() -> Renderer<SeededUids> {
        Renderer::new(EventStamp::default(), LineEnding::Lf, SeededUids::new(1))
    }

    fn strip_uid(text: &str) -> String {
        text.lines()
            .filter(|l| !l.starts_with("UID:"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn markers() {
        let r = renderer();
        assert_eq!(r.open_marker(), "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:1-annum\n");
        assert_eq!(r.close_marker(), "END:VCALENDAR\n");
    }

    #[test]
    fn recurring_record() {
        let mut r = renderer();
        let rule = RecurrenceRule::yearly();
        let text = r.render_recurring_event("Epiphanie", date(2000, 1, 6), &rule);
        assert_eq!(
            strip_uid(&text),
            "BEGIN:VEVENT\n\
             DTSTART;VALUE=DATE:20000106\n\
             DTEND;VALUE=DATE:20000106\n\
             RRULE:FREQ=YEARLY;\n\
             DTSTAMP:20210101T170000Z\n\
             ORGANIZER;CN=1-annum:MAILTO:contact@1-annum.com\n\
             SUMMARY:Epiphanie\n\
             END:VEVENT"
        );
        let uid_line = text.lines().nth(1).unwrap();
        assert!(uid_line.starts_with("UID:") && uid_line.ends_with("@1-annum.com"));
    }

    #[test]
    fn rdate_lines_grouped_by_three() {
        let mut r = renderer();
        let dates: Vec<CalendarDate> = (2000..2007).map(|y| date(y, 5, 28)).collect();
        let text = r.render_irregular_event("Fête des mères", &dates).unwrap();
        assert!(text.contains(
            "RDATE;VALUE=DATE:20000528,20010528,20020528,\n \
             20030528,20040528,20050528,\n \
             20060528\n"
        ));
        assert!(text.contains("DTSTART;VALUE=DATE:20000528\n"));
    }

    #[test]
    fn exactly_three_dates_stay_on_one_line() {
        let mut r = renderer();
        let dates: Vec<CalendarDate> = (2000..2003).map(|y| date(y, 1, 1)).collect();
        let text = r.render_irregular_event("X", &dates).unwrap();
        assert!(text.contains("RDATE;VALUE=DATE:20000101,20010101,20020101\nDTSTAMP"));
    }

    #[test]
    fn empty_dates_rejected() {
        let mut r = renderer();
        let err = r.render_irregular_event("Avent", &[]).unwrap_err();
        assert!(matches!(err, IcalError::EmptyDates { label } if label == "Avent"));
    }

    #[test]
    fn crlf_everywhere() {
        let mut r = Renderer::new(EventStamp::default(), LineEnding::Crlf, SeededUids::new(1));
        let dates: Vec<CalendarDate> = (2000..2005).map(|y| date(y, 1, 1)).collect();
        let text = r.render_irregular_event("X", &dates).unwrap();
        assert!(text.contains(",\r\n 20030101"));
        assert!(text.ends_with("END:VEVENT\r\n"));
        assert!(!text.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn phase_record() {
        let mut r = renderer();
        let event = PhaseEvent {
            date: date(2024, 1, 11),
            kind: PhaseKind::NewMoon,
        };
        assert_eq!(
            strip_uid(&r.render_phase_event(&event)),
            "BEGIN:VEVENT\n\
             CATEGORIES:MOON\n\
             DTSTAMP:20210101T170000Z\n\
             TRANSP:TRANSPARENT\n\
             LAST-MODIFIED:20210101T170000Z\n\
             STATUS:CONFIRMED\n\
             DTSTART;VALUE=DATE:20240111\n\
             DTEND;VALUE=DATE:20240111\n\
             SUMMARY:Moon - New Moon\n\
             END:VEVENT"
        );
    }

    #[test]
    fn seeded_uids_reproduce_output() {
        let a = renderer().render_recurring_event("A", date(2000, 1, 1), &RecurrenceRule::yearly());
        let b = renderer().render_recurring_event("A", date(2000, 1, 1), &RecurrenceRule::yearly());
        assert_eq!(a, b);
    }
}
