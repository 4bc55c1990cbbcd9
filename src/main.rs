//! scoped-styles - inspect the style registry of a site from the command line.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use scoped_styles::cli::{self, Cli, Commands};
use scoped_styles::{StylesConfig, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = StylesConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Manifest { args } => cli::manifest::run_manifest(args, &config),
        Commands::Check => cli::check::run_check(&config),
    }
}
