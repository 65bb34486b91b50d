//! Observances command: weekday-rule and fixed observances per country.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use annum_civil::ObservanceCalendar;
use annum_ical::CalendarDocument;

use crate::cli::CountryArgs;
use crate::session::Session;

/// Run the observance calendar pipeline.
pub fn run(args: CountryArgs) -> Result<()> {
    let _cmd = info_span!("observances", country = %args.country).entered();
    let calendar = ObservanceCalendar::for_code(&args.country)?;
    let mut session = Session::open(&args.common)?;

    let code = calendar.country().code();
    let groups = calendar
        .groups(session.range)
        .with_context(|| format!("failed to compute {code} observances"))?;
    let doc = CalendarDocument::from_groups(&mut session.renderer, &groups)?;
    let file_name = format!("{code}_doi_{}.ics", session.range_tag());
    let path = session.write(&doc, &file_name)?;
    info!(path = %path.display(), n_events = doc.n_events(), "observance calendar written");
    Ok(())
}
