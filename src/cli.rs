use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Annum calendar generator.
#[derive(Parser)]
#[command(
    name = "annum",
    version,
    about = "Generates iCalendar files for moving feasts, moon phases, observances and \
             public holidays"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Catholic liturgical calendar: Easter cycle, Advent and fixed feasts.
    Catholic(CatholicArgs),
    /// New moon, first quarter, full moon and last quarter.
    Moon(CommonArgs),
    /// Country observances (FR, DE).
    Observances(CountryArgs),
    /// Public holidays (FR, GB, DE, JP).
    Holidays(CountryArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args, Debug, Default)]
pub struct CommonArgs {
    /// Path to TOML configuration file [default: annum.toml when present].
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override first year of the range from config.
    #[arg(long)]
    pub start: Option<i32>,

    /// Override last year of the range (inclusive) from config.
    #[arg(long)]
    pub end: Option<i32>,

    /// Override output directory from config.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Override global UID seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Label language of the Catholic calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    /// French.
    Fr,
    /// English.
    En,
}

impl Language {
    /// Lowercase code used in file names.
    pub fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
        }
    }
}

/// Arguments for the `catholic` subcommand.
#[derive(clap::Args)]
pub struct CatholicArgs {
    /// Label language.
    #[arg(long, value_enum, default_value_t = Language::Fr)]
    pub lang: Language,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments for the `observances` and `holidays` subcommands.
#[derive(clap::Args)]
pub struct CountryArgs {
    /// ISO 3166-1 alpha-2 country code.
    #[arg(long)]
    pub country: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_catholic_with_overrides() {
        let cli = Cli::try_parse_from([
            "annum", "-vv", "catholic", "--lang", "en", "--start", "2024", "--end", "2025",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Catholic(args) => {
                assert_eq!(args.lang, Language::En);
                assert_eq!(args.common.start, Some(2024));
                assert_eq!(args.common.end, Some(2025));
                assert!(args.common.config.is_none());
            }
            _ => panic!("expected catholic"),
        }
    }

    #[test]
    fn country_is_required() {
        assert!(Cli::try_parse_from(["annum", "holidays"]).is_err());
        let cli =
            Cli::try_parse_from(["annum", "holidays", "--country", "GB", "--seed", "7"]).unwrap();
        match cli.command {
            Command::Holidays(args) => {
                assert_eq!(args.country, "GB");
                assert_eq!(args.common.seed, Some(7));
            }
            _ => panic!("expected holidays"),
        }
    }
}
