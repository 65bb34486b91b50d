//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use annum_calendar::YearRange;
use annum_computus::EasterMethod;
use annum_ical::{EventStamp, LineEnding, RandomUids, Renderer, SeededUids, UidSource};

use crate::config::*;

/// Validates the configured year range.
pub fn build_year_range(range: &RangeToml) -> Result<YearRange> {
    YearRange::new(range.start_year, range.end_year).context("invalid [range]")
}

/// Parses the `[output].line_ending` value.
pub fn parse_line_ending(s: &str) -> Result<LineEnding> {
    s.parse().context("invalid [output].line_ending")
}

/// Parses the `[computus].method` value.
pub fn parse_easter_method(s: &str) -> Result<EasterMethod> {
    s.parse().context("invalid [computus].method")
}

/// Copies the `[stamp]` section into the serializer's metadata.
pub fn build_event_stamp(stamp: &StampToml) -> EventStamp {
    EventStamp::default()
        .with_prodid(&stamp.prodid)
        .with_dtstamp(&stamp.dtstamp)
        .with_organizer_name(&stamp.organizer_name)
        .with_organizer_email(&stamp.organizer_email)
        .with_uid_domain(&stamp.uid_domain)
}

/// Seeded UIDs when a seed is configured, OS entropy otherwise.
pub fn build_uid_source(seed: Option<u64>) -> Box<dyn UidSource> {
    match seed {
        Some(s) => Box::new(SeededUids::new(s)),
        None => Box::new(RandomUids),
    }
}

/// Builds the event renderer from the full configuration.
pub fn build_renderer(config: &AnnumConfig) -> Result<Renderer<Box<dyn UidSource>>> {
    Ok(Renderer::new(
        build_event_stamp(&config.stamp),
        parse_line_ending(&config.output.line_ending)?,
        build_uid_source(config.seed),
    ))
}
