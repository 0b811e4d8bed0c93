//! Visual theme and styling.

use console::Style;

use super::icons::StatusKind;

/// Colors for the check report.
#[derive(Debug, Clone)]
pub struct CheckTheme {
    /// Style for passed checks (green).
    pub success: Style,
    /// Style for failed checks (red bold).
    pub error: Style,
    /// Style for informational lines (cyan).
    pub info: Style,
    /// Style for skipped checks and secondary text (dim).
    pub dim: Style,
    /// Style for headers (bold cyan).
    pub header: Style,
    /// Style for remediation hints (yellow).
    pub hint: Style,
}

impl Default for CheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            header: Style::new().bold().cyan(),
            hint: Style::new().yellow(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a passed check.
    pub fn format_success(&self, msg: &str) -> String {
        StatusKind::Success.format(self, msg)
    }

    /// Format a failed check.
    pub fn format_failure(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("{} {}", StatusKind::Failed.icon(), msg)))
    }

    /// Format a skipped check.
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("{} {}", StatusKind::Skipped.icon(), msg)))
    }

    /// Format an informational line.
    pub fn format_info(&self, msg: &str) -> String {
        StatusKind::Info.format(self, msg)
    }

    /// Format an indented hint under a check line.
    pub fn format_hint(&self, msg: &str) -> String {
        format!("  {}", self.hint.apply_to(msg))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(format!("── {} ──", title)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
