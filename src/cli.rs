//! CLI definition and parsing.
//! The command takes no arguments; clap supplies `--help` and `--version` only.

use clap::Parser;

/// Rename the exported web logo to its published file name.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Rename the exported web logo to its published file name"
)]
pub struct Args {}

pub fn parse() -> Args {
    Args::parse()
}
