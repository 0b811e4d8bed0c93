//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and records every call in
//! order, so tests can assert both on what was shown and on where it landed
//! in the report.
//!
//! # Example
//!
//! ```
//! use mongocheck::ui::{MockUI, UiEvent, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.failure("Server binary not found");
//! ui.show_hint("Please ensure that MongoDB Server is installed.");
//!
//! assert!(ui.has_failure("not found"));
//! assert_eq!(
//!     ui.events().last(),
//!     Some(&UiEvent::Hint("Please ensure that MongoDB Server is installed.".to_string()))
//! );
//! ```

use super::UserInterface;

/// One recorded UI call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// `clear_screen` was called.
    Cleared,
    /// Header/banner.
    Header(String),
    /// Plain line.
    Message(String),
    /// Informational line.
    Info(String),
    /// Passed check.
    Success(String),
    /// Failed check.
    Failure(String),
    /// Skipped check.
    Skipped(String),
    /// Hint or detail line.
    Hint(String),
    /// Listing entry.
    Item(String),
}

impl UiEvent {
    /// The text carried by this event, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Cleared => None,
            Self::Header(s)
            | Self::Message(s)
            | Self::Info(s)
            | Self::Success(s)
            | Self::Failure(s)
            | Self::Skipped(s)
            | Self::Hint(s)
            | Self::Item(s) => Some(s),
        }
    }
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    events: Vec<UiEvent>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded call, in order.
    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    /// Get all captured headers.
    pub fn headers(&self) -> Vec<&str> {
        self.collect(|e| matches!(e, UiEvent::Header(_)))
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> Vec<&str> {
        self.collect(|e| matches!(e, UiEvent::Success(_)))
    }

    /// Get all captured failure messages.
    pub fn failures(&self) -> Vec<&str> {
        self.collect(|e| matches!(e, UiEvent::Failure(_)))
    }

    /// Get all captured hints.
    pub fn hints(&self) -> Vec<&str> {
        self.collect(|e| matches!(e, UiEvent::Hint(_)))
    }

    /// Get all captured listing entries.
    pub fn items(&self) -> Vec<&str> {
        self.collect(|e| matches!(e, UiEvent::Item(_)))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific failure was shown.
    pub fn has_failure(&self, msg: &str) -> bool {
        self.failures().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific informational line was shown.
    pub fn has_info(&self, msg: &str) -> bool {
        self.collect(|e| matches!(e, UiEvent::Info(_)))
            .iter()
            .any(|m| m.contains(msg))
    }

    /// Check if a specific skip was shown.
    pub fn has_skipped(&self, msg: &str) -> bool {
        self.collect(|e| matches!(e, UiEvent::Skipped(_)))
            .iter()
            .any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific plain message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.collect(|e| matches!(e, UiEvent::Message(_)))
            .iter()
            .any(|m| m.contains(msg))
    }

    /// Whether the screen was cleared.
    pub fn was_cleared(&self) -> bool {
        self.events.contains(&UiEvent::Cleared)
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn collect(&self, pred: impl Fn(&UiEvent) -> bool) -> Vec<&str> {
        self.events
            .iter()
            .filter(|&e| pred(e))
            .filter_map(UiEvent::text)
            .collect()
    }
}

impl UserInterface for MockUI {
    fn clear_screen(&mut self) {
        self.events.push(UiEvent::Cleared);
    }

    fn show_header(&mut self, title: &str) {
        self.events.push(UiEvent::Header(title.to_string()));
    }

    fn message(&mut self, msg: &str) {
        self.events.push(UiEvent::Message(msg.to_string()));
    }

    fn info(&mut self, msg: &str) {
        self.events.push(UiEvent::Info(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.events.push(UiEvent::Success(msg.to_string()));
    }

    fn failure(&mut self, msg: &str) {
        self.events.push(UiEvent::Failure(msg.to_string()));
    }

    fn skipped(&mut self, msg: &str) {
        self.events.push(UiEvent::Skipped(msg.to_string()));
    }

    fn show_hint(&mut self, hint: &str) {
        self.events.push(UiEvent::Hint(hint.to_string()));
    }

    fn list_item(&mut self, item: &str) {
        self.events.push(UiEvent::Item(item.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_in_order() {
        let mut ui = MockUI::new();
        ui.clear_screen();
        ui.show_header("Title");
        ui.success("ok");
        ui.failure("bad");
        ui.show_hint("fix it");
        ui.list_item("admin");

        assert_eq!(
            ui.events(),
            &[
                UiEvent::Cleared,
                UiEvent::Header("Title".into()),
                UiEvent::Success("ok".into()),
                UiEvent::Failure("bad".into()),
                UiEvent::Hint("fix it".into()),
                UiEvent::Item("admin".into()),
            ]
        );
    }

    #[test]
    fn mock_ui_has_helpers_match_substrings() {
        let mut ui = MockUI::new();
        ui.success("Driver 'mongodb' is available");
        ui.skipped("binary check skipped");
        ui.info("Available Databases:");
        ui.message("");

        assert!(ui.has_success("mongodb"));
        assert!(ui.has_skipped("skipped"));
        assert!(ui.has_info("Available"));
        assert!(!ui.has_message("Available"));
        assert!(!ui.has_failure("mongodb"));
    }

    #[test]
    fn mock_ui_clear() {
        let mut ui = MockUI::new();
        ui.clear_screen();
        assert!(ui.was_cleared());

        ui.clear();
        assert!(ui.events().is_empty());
    }
}
