//! Report output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for writing the report to stdout
//! - [`MockUI`] for capturing the report in tests
//!
//! # Example
//!
//! ```
//! use mongocheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("MongoDB Systemcheck");
//! ui.success("Driver ready");
//!
//! assert!(ui.has_success("Driver ready"));
//! ```

pub mod icons;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::{MockUI, UiEvent};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, CheckTheme};

/// Trait for report output.
///
/// This trait allows capturing the report in tests.
pub trait UserInterface {
    /// Clear the display. Best-effort; never fails.
    fn clear_screen(&mut self);

    /// Show a header/banner, preceded by a blank line.
    fn show_header(&mut self, title: &str);

    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display an informational line.
    fn info(&mut self, msg: &str);

    /// Display a passed check.
    fn success(&mut self, msg: &str);

    /// Display a failed check.
    fn failure(&mut self, msg: &str);

    /// Display a skipped check.
    fn skipped(&mut self, msg: &str);

    /// Display an indented hint or detail under the previous line.
    fn show_hint(&mut self, hint: &str);

    /// Display one entry of a listing.
    fn list_item(&mut self, item: &str);
}
