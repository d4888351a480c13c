//! # insight-state
//!
//! Reactive state management for the Insight analytics dashboard.
//! Uses Leptos signals for surgical DOM updates on report changes.

pub mod command;

pub use command::*;

use insight_core::{seed::seed_report, ConnectionState, Report, PAGE_COUNT};
use leptos::prelude::*;

// ============================================================================
// UI STATE
// ============================================================================

/// Chat panel window state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatWindow {
    pub open: bool,
    pub minimized: bool,
    pub maximized: bool,
}

impl Default for ChatWindow {
    fn default() -> Self {
        Self {
            open: false,
            minimized: false,
            maximized: false,
        }
    }
}

/// Valid page numbers are 1-based up to the fixed page count
pub fn is_valid_page(page: u8) -> bool {
    (1..=PAGE_COUNT).contains(&page)
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Global application state with reactive signals
#[derive(Clone)]
pub struct AppState {
    /// The rendered report payload
    pub report: RwSignal<Report>,
    /// Dashboard header title
    pub title: RwSignal<String>,
    /// Active page tab (1-based)
    pub active_page: RwSignal<u8>,
    /// Insights pushed by the assistant alongside a dashboard update
    pub insights: RwSignal<Vec<String>>,
    /// Bumped on every report replacement. Keyed lists include it in their
    /// keys so a payload reusing the same section ids still re-renders.
    pub revision: RwSignal<u64>,
    /// Agent bridge connection state
    pub connection: RwSignal<ConnectionState>,
    /// Chat panel window state
    pub chat: RwSignal<ChatWindow>,
    /// Current error message
    pub error: RwSignal<Option<String>>,
    /// Loading overlay state
    pub loading: RwSignal<bool>,
    /// Message shown while loading
    pub loading_message: RwSignal<String>,
}

impl AppState {
    /// Create new application state holding the seeded report
    pub fn new() -> Self {
        let report = seed_report();
        let title = report.title.clone();
        Self {
            report: RwSignal::new(report),
            title: RwSignal::new(title),
            active_page: RwSignal::new(1),
            insights: RwSignal::new(Vec::new()),
            revision: RwSignal::new(0),
            connection: RwSignal::new(ConnectionState::Disconnected),
            chat: RwSignal::new(ChatWindow::default()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            loading_message: RwSignal::new(String::new()),
        }
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Switch the active page. Out-of-range numbers are rejected without
    /// altering UI state.
    pub fn navigate_to(&self, page: u8) -> Result<(), String> {
        if !is_valid_page(page) {
            return Err(format!(
                "Invalid page number {}: must be between 1 and {}",
                page, PAGE_COUNT
            ));
        }
        self.active_page.set(page);
        Ok(())
    }

    // ========================================================================
    // Report Updates
    // ========================================================================

    /// Replace the rendered report wholesale
    pub fn replace_report(&self, report: Report, title: String, insights: Vec<String>) {
        self.report.set(report);
        self.title.set(title);
        self.insights.set(insights);
        self.revision.update(|r| *r += 1);
    }

    // ========================================================================
    // Connection State
    // ========================================================================

    pub fn set_connected(&self) {
        self.connection.set(ConnectionState::Connected);
        self.error.set(None);
    }

    pub fn set_disconnected(&self) {
        self.connection.set(ConnectionState::Disconnected);
    }

    pub fn set_connecting(&self) {
        self.connection.set(ConnectionState::Connecting);
    }

    pub fn set_reconnecting(&self) {
        self.connection.set(ConnectionState::Reconnecting);
    }

    pub fn is_connected(&self) -> bool {
        self.connection.get().is_connected()
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    pub fn set_error(&self, msg: impl Into<String>) {
        self.error.set(Some(msg.into()));
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    // ========================================================================
    // Loading State
    // ========================================================================

    pub fn set_loading(&self, loading: bool, message: String) {
        self.loading.set(loading);
        self.loading_message.set(message);
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    // ========================================================================
    // Chat Window
    // ========================================================================

    pub fn open_chat(&self) {
        self.chat.update(|c| {
            c.open = true;
            c.minimized = false;
        });
    }

    pub fn close_chat(&self) {
        self.chat.set(ChatWindow::default());
    }

    pub fn toggle_minimized(&self) {
        self.chat.update(|c| c.minimized = !c.minimized);
    }

    pub fn toggle_maximized(&self) {
        self.chat.update(|c| c.maximized = !c.maximized);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide app state context to component tree
pub fn provide_app_state() -> AppState {
    let state = AppState::new();
    provide_context(state.clone());
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

/// Try to get app state from context (returns None if not provided)
pub fn try_use_app_state() -> Option<AppState> {
    use_context::<AppState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_validation_bounds() {
        assert!(!is_valid_page(0));
        assert!(is_valid_page(1));
        assert!(is_valid_page(6));
        assert!(!is_valid_page(7));
        assert!(!is_valid_page(200));
    }

    #[test]
    fn test_replace_report_bumps_revision() {
        let state = AppState::new();
        assert_eq!(state.revision.get_untracked(), 0);

        // A refreshed payload keeps the seed's section ids; the revision is
        // what distinguishes it for keyed rendering
        let refreshed = state.report.get_untracked();
        state.replace_report(refreshed.clone(), "Updated".into(), vec![]);
        assert_eq!(state.revision.get_untracked(), 1);

        state.replace_report(refreshed, "Updated again".into(), vec![]);
        assert_eq!(state.revision.get_untracked(), 2);
    }
}
