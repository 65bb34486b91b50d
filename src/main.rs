mod catholic_cmd;
mod cli;
mod config;
mod convert;
mod holidays_cmd;
mod logging;
mod moon_cmd;
mod observances_cmd;
mod session;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Catholic(args) => catholic_cmd::run(args),
        Command::Moon(args) => moon_cmd::run(args),
        Command::Observances(args) => observances_cmd::run(args),
        Command::Holidays(args) => holidays_cmd::run(args),
    }
}
