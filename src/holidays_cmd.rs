//! Holidays command: public holidays classified into fixed and moving.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use annum_holidays::{classify, provider_for};
use annum_ical::CalendarDocument;

use crate::cli::CountryArgs;
use crate::session::Session;

/// Run the public holiday pipeline.
pub fn run(args: CountryArgs) -> Result<()> {
    let _cmd = info_span!("holidays", country = %args.country).entered();
    let provider = provider_for(&args.country)?;
    let mut session = Session::open(&args.common)?;

    let code = provider.code();
    let pairs = provider
        .holidays(session.range)
        .with_context(|| format!("failed to compute {code} holidays"))?;
    info!(n_days = pairs.len(), "holidays loaded");

    let groups = classify(&pairs, session.range)
        .with_context(|| format!("failed to classify {code} holidays"))?;
    let doc = CalendarDocument::from_groups(&mut session.renderer, &groups)?;
    let file_name = format!("{code}_ferie_{}.ics", session.range_tag());
    let path = session.write(&doc, &file_name)?;
    info!(path = %path.display(), n_events = doc.n_events(), "holiday calendar written");
    Ok(())
}
