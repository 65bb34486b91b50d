use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::CommonArgs;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "annum.toml";

/// Top-level annum configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnumConfig {
    /// Global UID seed. Random UIDs when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Year range settings.
    #[serde(default)]
    pub range: RangeToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Event metadata.
    #[serde(default)]
    pub stamp: StampToml,

    /// Easter computation settings.
    #[serde(default)]
    pub computus: ComputusToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeToml {
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_end_year")]
    pub end_year: i32,
}

impl Default for RangeToml {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            end_year: default_end_year(),
        }
    }
}

fn default_start_year() -> i32 {
    2000
}
fn default_end_year() -> i32 {
    2040
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_line_ending")]
    pub line_ending: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            line_ending: default_line_ending(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_line_ending() -> String {
    "lf".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StampToml {
    #[serde(default = "default_prodid")]
    pub prodid: String,
    #[serde(default = "default_dtstamp")]
    pub dtstamp: String,
    #[serde(default = "default_organizer_name")]
    pub organizer_name: String,
    #[serde(default = "default_organizer_email")]
    pub organizer_email: String,
    #[serde(default = "default_uid_domain")]
    pub uid_domain: String,
}

impl Default for StampToml {
    fn default() -> Self {
        Self {
            prodid: default_prodid(),
            dtstamp: default_dtstamp(),
            organizer_name: default_organizer_name(),
            organizer_email: default_organizer_email(),
            uid_domain: default_uid_domain(),
        }
    }
}

fn default_prodid() -> String {
    "1-annum".to_string()
}
fn default_dtstamp() -> String {
    "20210101T170000Z".to_string()
}
fn default_organizer_name() -> String {
    "1-annum".to_string()
}
fn default_organizer_email() -> String {
    "contact@1-annum.com".to_string()
}
fn default_uid_domain() -> String {
    "1-annum.com".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComputusToml {
    #[serde(default = "default_method")]
    pub method: String,
}

impl Default for ComputusToml {
    fn default() -> Self {
        Self {
            method: default_method(),
        }
    }
}

fn default_method() -> String {
    "western".to_string()
}

impl AnnumConfig {
    /// Parses a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse TOML config")
    }

    /// Loads `path`, or [`DEFAULT_CONFIG_FILE`] if it exists, or the
    /// built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
            None => return Ok(Self::default()),
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_toml(&toml_str).with_context(|| format!("in {}", path.display()))
    }

    /// CLI flags override config file values.
    pub fn apply_overrides(&mut self, args: &CommonArgs) {
        if let Some(start) = args.start {
            self.range.start_year = start;
        }
        if let Some(end) = args.end {
            self.range.end_year = end;
        }
        if let Some(ref dir) = args.output_dir {
            self.output.dir = dir.clone();
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
    }
}
