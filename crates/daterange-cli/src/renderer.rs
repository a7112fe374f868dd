//! Terminal output for markdown produced by the display wrappers.
//!
//! Rich mode styles through termimad. Plain mode drops the emphasis markers
//! so piped output reads as ordinary text.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown either styled or as plain text
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        // Class keys and format names are bold.
        skin.bold.set_fg(Color::Green);

        Self { rich_enabled, skin }
    }

    /// Prints `markdown`, one line at a time.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{}", plain_text(markdown));
            return Ok(());
        }

        for line in markdown.lines() {
            // termimad strips the hashes, which makes titles hard to spot
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }
}

/// Markdown with `**` emphasis removed.
fn plain_text(markdown: &str) -> String {
    markdown.replace("**", "")
}
