//! Pagegen - bundles web assets into an embeddable page constant for firmware.

#![allow(dead_code)]

mod asset;
mod bundle;
mod cli;
mod dev;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Build { args } => cli::build::run(args),
        Commands::Dev { args } => cli::dev::run(args),
    }
}
