//! Command handlers and clap argument wrappers.
//!
//! Argument structs carry only clap concerns and convert into core values
//! (`Instant`, `RangePolicy`) before any formatting happens:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Values → DateRangeFormatter
//! ```

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use daterange_core::{
    settings::{CascadeFormats, FormatterSettings, RangeFormatConfig, RangePolicy},
    ClassList, DateRangeFormatter, Instant, RangeMarkup, SettingsSummary,
};
use jiff::Zoned;
use log::debug;

use crate::renderer::TerminalRenderer;

/// A start and end instant
///
/// Instants are RFC 3339 timestamps (`2023-06-15T10:00:00Z`), zoned
/// datetimes (`2023-06-15T10:00:00+02:00[Europe/Paris]`), or civil datetimes
/// without offset, which are read as UTC.
#[derive(Args)]
pub struct RangeArgs {
    #[arg(help = "Start of the range")]
    pub start: String,
    #[arg(help = "End of the range")]
    pub end: String,
}

impl RangeArgs {
    fn instants(&self) -> Result<(Instant, Instant)> {
        let start = Instant::parse(&self.start).context("Invalid start instant")?;
        let end = Instant::parse(&self.end).context("Invalid end instant")?;
        Ok((start, end))
    }
}

/// Format a pair of instants
///
/// Uses the policy and zone override from the settings file unless
/// overridden on the command line.
#[derive(Args)]
pub struct FormatArgs {
    #[command(flatten)]
    pub range: RangeArgs,
    #[arg(long, help = "Formatting policy to use instead of the configured one")]
    pub policy: Option<PolicyArg>,
    #[arg(long, help = "Render in this IANA time zone instead of each instant's own")]
    pub timezone: Option<String>,
    #[arg(long, conflicts_with = "json", help = "Print HTML <time> markup")]
    pub html: bool,
    #[arg(long, help = "Print the start and end text as JSON")]
    pub json: bool,
}

/// Sample instant used to preview formats
#[derive(Args)]
pub struct SampleArgs {
    #[arg(long, help = "Instant to render previews with (defaults to now)")]
    pub sample: Option<String>,
}

impl SampleArgs {
    fn instant(&self) -> Result<Instant> {
        match &self.sample {
            Some(sample) => Instant::parse(sample).context("Invalid sample instant"),
            None => Ok(Instant::new(Zoned::now())),
        }
    }
}

/// Command-line representation of the formatting policies
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum PolicyArg {
    /// Fixed five-slot cascade
    Cascade,
    /// Per-class format table
    PerClass,
}

impl PolicyArg {
    /// The configured policy if it already has this kind, else the defaults.
    fn resolve(self, configured: &RangePolicy) -> RangePolicy {
        match (self, configured) {
            (PolicyArg::Cascade, RangePolicy::Cascade(_))
            | (PolicyArg::PerClass, RangePolicy::PerClass(_)) => configured.clone(),
            (PolicyArg::Cascade, _) => RangePolicy::Cascade(CascadeFormats::default()),
            (PolicyArg::PerClass, _) => RangePolicy::PerClass(RangeFormatConfig::default()),
        }
    }
}

pub struct Cli {
    formatter: DateRangeFormatter,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(formatter: DateRangeFormatter, renderer: TerminalRenderer) -> Self {
        Self {
            formatter,
            renderer,
        }
    }

    pub fn classify(&self, args: &RangeArgs) -> Result<()> {
        let (start, end) = args.instants()?;
        let class = self.formatter.classify(&start, &end);
        self.renderer
            .render(&format!("**{class}**: {}\n", class.label()))
    }

    pub fn format(&self, args: &FormatArgs) -> Result<()> {
        let (start, end) = args.range.instants()?;
        let configured = &self.formatter.settings().policy;
        let policy = match args.policy {
            Some(policy) => policy.resolve(configured),
            None => configured.clone(),
        };
        let timezone = args
            .timezone
            .as_deref()
            .or_else(|| self.formatter.settings().timezone());
        debug!("Formatting with {} policy, zone {timezone:?}", policy.name());

        let range = self
            .formatter
            .format_range(&start, &end, &policy, timezone)
            .context("Failed to format range")?;

        if args.json {
            println!("{}", serde_json::to_string(&range)?);
        } else if args.html {
            println!("{}", RangeMarkup::new(&start, &end, &range));
        } else {
            println!("{range}");
        }
        Ok(())
    }

    pub fn list_classes(&self) -> Result<()> {
        let classifier = self.formatter.classifier();
        self.renderer.render(
            &ClassList::with_title(classifier.list_classes(), "Proximity Classes").to_string(),
        )
    }

    pub fn list_formats(&self, args: &SampleArgs) -> Result<()> {
        let sample = args.instant()?;
        let options = self
            .formatter
            .resolver()
            .options(&sample)
            .context("Failed to render format samples")?;

        let mut markdown = String::from("# Named Formats\n\n");
        for option in options {
            markdown.push_str(&format!("- **{}**: {}\n", option.name, option.display));
        }
        self.renderer.render(&markdown)
    }

    pub fn summary(&self, args: &SampleArgs) -> Result<()> {
        let sample = args.instant()?;
        let lines = self
            .formatter
            .settings_summary(&sample)
            .context("Failed to summarize settings")?;
        let title = format!("Policy: {}", self.formatter.settings().policy.name());
        self.renderer
            .render(&SettingsSummary::with_title(&lines, &title).to_string())
    }

    pub fn schema(&self) -> Result<()> {
        let schema = schemars::schema_for!(FormatterSettings);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_arg_keeps_matching_configuration() {
        let configured = RangePolicy::Cascade(CascadeFormats {
            separator: "to".to_string(),
            ..CascadeFormats::default()
        });
        assert_eq!(PolicyArg::Cascade.resolve(&configured), configured);
    }

    #[test]
    fn test_policy_arg_switches_to_defaults() {
        let configured = RangePolicy::Cascade(CascadeFormats::default());
        assert_eq!(
            PolicyArg::PerClass.resolve(&configured),
            RangePolicy::PerClass(RangeFormatConfig::default())
        );
    }
}
