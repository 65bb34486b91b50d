//! Whole calendar documents and writing them to disk.

use std::fs;
use std::path::{Path, PathBuf};

use annum_calendar::DateGroups;
use annum_lunar::PhaseEvent;
use tracing::{debug, info};

use crate::error::IcalError;
use crate::render::Renderer;
use crate::uid::UidSource;

/// A fully rendered iCalendar document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDocument {
    text: String,
    n_events: usize,
}

/// Concatenates the open marker, `events` in order, and the close marker.
pub fn assemble_document<I, S>(open: &str, events: I, close: &str) -> CalendarDocument
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::from(open);
    let mut n_events = 0;
    for event in events {
        text.push_str(event.as_ref());
        n_events += 1;
    }
    text.push_str(close);
    CalendarDocument { text, n_events }
}

impl CalendarDocument {
    /// Renders every group in collection order.
    pub fn from_groups<U: UidSource>(
        renderer: &mut Renderer<U>,
        groups: &DateGroups,
    ) -> Result<Self, IcalError> {
        let events = groups
            .iter()
            .map(|g| renderer.render_group(g))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(n_events = events.len(), "rendered date groups");
        Ok(assemble_document(&renderer.open_marker(), events, &renderer.close_marker()))
    }

    /// Renders one moon-phase event per entry of `events`.
    pub fn from_phases<U: UidSource>(renderer: &mut Renderer<U>, events: &[PhaseEvent]) -> Self {
        let rendered: Vec<String> = events.iter().map(|e| renderer.render_phase_event(e)).collect();
        assemble_document(&renderer.open_marker(), rendered, &renderer.close_marker())
    }

    /// The document text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of event records.
    pub fn n_events(&self) -> usize {
        self.n_events
    }

    /// Writes the document to `path`, replacing any existing file.
    ///
    /// The text goes to a temporary sibling first and is renamed into place,
    /// so a failed write never leaves a partial calendar at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`IcalError::Write`] if the temporary file cannot be written
    /// or renamed.
    pub fn write(&self, path: &Path) -> Result<(), IcalError> {
        let tmp = temp_path(path);
        if let Err(source) = fs::write(&tmp, &self.text) {
            let _ = fs::remove_file(&tmp);
            return Err(IcalError::Write { path: tmp, source });
        }
        if let Err(source) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(IcalError::Write {
                path: path.to_path_buf(),
                source,
            });
        }
        info!(path = %path.display(), n_events = self.n_events, "wrote calendar");
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use annum_calendar::{CalendarDate, LabeledDateGroup, RecurrenceRule};

    use super::*;
    use crate::stamp::{EventStamp, LineEnding};
    use crate::uid::SeededUids;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn renderer() -> Renderer<SeededUids> {
        Renderer::new(EventStamp::default(), LineEnding::Lf, SeededUids::new(3))
    }

    #[test]
    fn assemble_preserves_order() {
        let doc = assemble_document("OPEN\n", ["a\n", "b\n", "c\n"], "CLOSE\n");
        assert_eq!(doc.as_str(), "OPEN\na\nb\nc\nCLOSE\n");
        assert_eq!(doc.n_events(), 3);
    }

    #[test]
    fn groups_keep_collection_order() {
        let noel =
            LabeledDateGroup::recurring("Noël", date(2000, 12, 25), RecurrenceRule::yearly());
        let mut groups = DateGroups::new();
        groups
            .push(LabeledDateGroup::irregular("Pâques", vec![date(2000, 4, 23)]))
            .unwrap();
        groups.push(noel).unwrap();
        let doc = CalendarDocument::from_groups(&mut renderer(), &groups).unwrap();
        let noel = doc.as_str().find("SUMMARY:Noël").unwrap();
        let paques = doc.as_str().find("SUMMARY:Pâques").unwrap();
        assert!(paques < noel);
        assert_eq!(doc.n_events(), 2);
    }

    #[test]
    fn empty_group_fails_whole_document() {
        let mut groups = DateGroups::new();
        groups.push(LabeledDateGroup::irregular("Vide", Vec::new())).unwrap();
        let err = CalendarDocument::from_groups(&mut renderer(), &groups).unwrap_err();
        assert!(matches!(err, IcalError::EmptyDates { .. }));
    }

    #[test]
    fn temp_path_is_sibling() {
        assert_eq!(
            temp_path(Path::new("/out/moon_2000_2040.ics")),
            PathBuf::from("/out/moon_2000_2040.ics.tmp")
        );
    }

    #[test]
    fn write_replaces_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cal.ics");
        fs::write(&path, "old").unwrap();
        let doc = assemble_document("BEGIN:VCALENDAR\n", Vec::<String>::new(), "END:VCALENDAR\n");
        doc.write(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "BEGIN:VCALENDAR\nEND:VCALENDAR\n");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn failed_write_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("cal.ics");
        let doc = assemble_document("", Vec::<String>::new(), "");
        assert!(matches!(doc.write(&path), Err(IcalError::Write { .. })));
        assert!(!path.exists());
    }
}
