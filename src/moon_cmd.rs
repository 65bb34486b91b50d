//! Moon command: principal lunar phases as all-day events.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use annum_ical::CalendarDocument;
use annum_lunar::detect_phase_events;

use crate::cli::CommonArgs;
use crate::session::Session;

/// Run the moon phase pipeline.
pub fn run(args: CommonArgs) -> Result<()> {
    let _cmd = info_span!("moon").entered();
    let mut session = Session::open(&args)?;

    let events = detect_phase_events(session.range).context("failed to scan lunar phases")?;
    info!(n_events = events.len(), "lunar phases detected");

    let doc = CalendarDocument::from_phases(&mut session.renderer, &events);
    let file_name = format!("moon_{}.ics", session.range_tag());
    let path = session.write(&doc, &file_name)?;
    info!(path = %path.display(), "moon calendar written");
    Ok(())
}
