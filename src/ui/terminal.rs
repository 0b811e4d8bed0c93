//! Terminal report output.

use console::Term;
use std::io::Write;

use super::{should_use_colors, CheckTheme, UserInterface};

/// Writes the report to stdout.
pub struct TerminalUI {
    term: Term,
    theme: CheckTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(use_colors: bool) -> Self {
        let theme = if use_colors {
            CheckTheme::new()
        } else {
            CheckTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn clear_screen(&mut self) {
        if !self.term.is_term() {
            return;
        }
        if let Err(e) = self.term.clear_screen() {
            tracing::debug!("Could not clear screen: {}", e);
        }
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}", self.theme.format_header(title)).ok();
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn info(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_info(msg)).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn failure(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_failure(msg)).ok();
    }

    fn skipped(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_skipped(msg)).ok();
    }

    fn show_hint(&mut self, hint: &str) {
        writeln!(self.term, "{}", self.theme.format_hint(hint)).ok();
    }

    fn list_item(&mut self, item: &str) {
        writeln!(self.term, "  {} {}", self.theme.dim.apply_to("-"), item).ok();
    }
}

/// Create the report UI.
///
/// Colors are used only when not disabled and stdout is a terminal.
pub fn create_ui(no_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(!no_color && should_use_colors()))
}
