//! Settings shared by every subcommand, resolved once per run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use annum_calendar::YearRange;
use annum_ical::{CalendarDocument, Renderer, UidSource};

use crate::cli::CommonArgs;
use crate::config::AnnumConfig;
use crate::convert;

/// Resolved configuration for one run.
pub struct Session {
    pub config: AnnumConfig,
    pub range: YearRange,
    pub renderer: Renderer<Box<dyn UidSource>>,
}

impl Session {
    /// Loads the config file, applies CLI overrides and validates the result.
    pub fn open(args: &CommonArgs) -> Result<Self> {
        let mut config = AnnumConfig::load(args.config.as_deref())?;
        config.apply_overrides(args);
        let range = convert::build_year_range(&config.range)?;
        let renderer = convert::build_renderer(&config)?;
        info!(
            start = range.start(),
            end = range.end(),
            seeded = config.seed.is_some(),
            "session ready"
        );
        Ok(Self {
            config,
            range,
            renderer,
        })
    }

    /// `<start>_<end>` as used in every output file name.
    pub fn range_tag(&self) -> String {
        format!("{}_{}", self.range.start(), self.range.end())
    }

    /// Writes `doc` as `file_name` in the output directory, creating the
    /// directory if needed.
    pub fn write(&self, doc: &CalendarDocument, file_name: &str) -> Result<PathBuf> {
        let dir = &self.config.output.dir;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
        let path = dir.join(file_name);
        doc.write(&path)
            .with_context(|| format!("failed to write calendar: {}", path.display()))?;
        Ok(path)
    }
}
