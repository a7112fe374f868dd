//! Settings summary rendering.

use std::fmt;

/// Markdown bullet list of summary lines.
pub struct SettingsSummary<'a> {
    lines: &'a [String],
    title: Option<&'a str>,
}

impl<'a> SettingsSummary<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines, title: None }
    }

    pub fn with_title(lines: &'a [String], title: &'a str) -> Self {
        Self {
            lines,
            title: Some(title),
        }
    }
}

impl fmt::Display for SettingsSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = self.title {
            writeln!(f, "# {title}")?;
            writeln!(f)?;
        }

        if self.lines.is_empty() {
            writeln!(f, "No settings.")?;
            return Ok(());
        }

        for line in self.lines {
            writeln!(f, "- {line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_display() {
        let lines = vec!["exact: 10:00".to_string(), "Time zone: UTC".to_string()];
        let output = SettingsSummary::with_title(&lines, "Cascade").to_string();
        assert_eq!(output, "# Cascade\n\n- exact: 10:00\n- Time zone: UTC\n");
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(SettingsSummary::new(&[]).to_string(), "No settings.\n");
    }
}
