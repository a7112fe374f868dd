//! daterange CLI application
//!
//! Command-line host for the date range formatter: it loads settings,
//! parses instants and prints classifications, formatted ranges and
//! settings previews.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use daterange_core::DateRangeFormatterBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        settings,
        no_color,
        command,
    } = Args::parse();

    let formatter = DateRangeFormatterBuilder::new()
        .with_settings_path(settings)
        .build()
        .context("Failed to load formatter settings")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(formatter, renderer);

    info!("daterange started");

    match command {
        Some(Classify(args)) => cli.classify(&args),
        Some(Format(args)) => cli.format(&args),
        Some(Formats(args)) => cli.list_formats(&args),
        Some(Summary(args)) => cli.summary(&args),
        Some(Schema) => cli.schema(),
        Some(Classes) | None => cli.list_classes(),
    }
}
