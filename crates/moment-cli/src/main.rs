mod cli;
mod commands;
mod format;
mod holidays;
mod logging;

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
        Command::Fields(args) => commands::fields(args),
        Command::Epoch(args) => commands::epoch(args),
        Command::Shift(args) => commands::shift(args),
        Command::Now(args) => commands::now(args),
        Command::Holidays(args) => commands::holidays(args),
    }
}
