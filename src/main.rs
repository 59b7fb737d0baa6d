mod cli;
mod logging;

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    uct_converter::prompt::run(stdin.lock(), io::stdout().lock())
        .context("failed to talk to the terminal")
}
