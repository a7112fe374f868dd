use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{FormatArgs, RangeArgs, SampleArgs};

/// Compact, proximity-aware date range formatting
///
/// Classifies how close two instants are (same second, hour, day, month,
/// year, or none of these) and renders the pair with formats chosen for that
/// closeness, e.g. `5 - 25 Jun 2023`.
#[derive(Parser)]
#[command(version, about, name = "daterange")]
pub struct Args {
    /// Path to the settings JSON file. Defaults to
    /// $XDG_CONFIG_HOME/daterange/settings.json when it exists
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the daterange CLI
///
/// Without a command the proximity classes are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Show which proximity class a pair of instants falls into
    #[command(alias = "c")]
    Classify(RangeArgs),
    /// Format a pair of instants
    #[command(alias = "f")]
    Format(FormatArgs),
    /// List the proximity classes in priority order
    Classes,
    /// List named formats with a sample rendering
    Formats(SampleArgs),
    /// Summarize the active settings
    Summary(SampleArgs),
    /// Print the JSON schema of the settings file
    Schema,
}
