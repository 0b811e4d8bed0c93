//! Status vocabulary for report lines.
//!
//! `StatusKind` is the single set of glyphs and colors used to prefix every
//! report line, so pass/fail/skip read the same everywhere.

use super::theme::CheckTheme;

/// Canonical status kinds used across all report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check failed.
    Failed,
    /// Check was skipped (counts as a pass).
    Skipped,
    /// Informational line.
    Info,
}

impl StatusKind {
    /// Unicode glyph.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Skipped => "○",
            Self::Info => "•",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &CheckTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Skipped => theme.dim.apply_to(icon).to_string(),
            Self::Info => theme.info.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &CheckTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}
