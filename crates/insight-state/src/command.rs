//! Command reducer for the agent bridge.
//!
//! Every tool call received over the WebSocket is funneled through one
//! reducer rather than per-tool callbacks threaded through the component
//! tree. The reducer owns validation and returns the structured
//! acknowledgment sent back to the agent runtime.

use crate::AppState;
use insight_core::{AgentCommand, AgentReply};
use tracing::{debug, info, warn};

/// Apply one agent command to the application state
pub fn apply_command(state: &AppState, command: AgentCommand) -> AgentReply {
    match command {
        AgentCommand::SetLoading { is_loading, message } => {
            debug!(is_loading, "agent toggled loading state");
            state.set_loading(is_loading, message);
            AgentReply::ok()
        }

        AgentCommand::UpdateDashboard {
            dashboard_data,
            title,
            insights,
            active_page,
        } => {
            let pages = dashboard_data.pages.len();
            info!(%title, pages, "agent replaced dashboard payload");

            state.replace_report(dashboard_data, title, insights);
            state.set_loading(false, String::new());

            if let Some(page) = active_page {
                if let Err(err) = state.navigate_to(page) {
                    // Payload was applied; only the navigation was rejected
                    warn!(page, "dashboard update requested an invalid page");
                    return AgentReply {
                        success: true,
                        detail: Some("dashboard updated".to_string()),
                        error: Some(err),
                    };
                }
            }

            AgentReply::ok_with(format!("dashboard updated with {} pages", pages))
        }

        AgentCommand::NavigateToPage { page } => match state.navigate_to(page) {
            Ok(()) => AgentReply::ok_with(format!("navigated to page {}", page)),
            Err(err) => {
                warn!(page, "rejected navigation request");
                AgentReply::fail(err)
            }
        },

        AgentCommand::Heartbeat { timestamp } => {
            debug!(timestamp, "heartbeat");
            AgentReply::ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_core::Report;
    use leptos::prelude::*;

    #[test]
    fn test_navigate_updates_active_page() {
        let state = AppState::new();
        let reply = apply_command(&state, AgentCommand::NavigateToPage { page: 4 });

        assert!(reply.success);
        assert_eq!(state.active_page.get_untracked(), 4);
    }

    #[test]
    fn test_invalid_page_is_rejected_without_state_change() {
        let state = AppState::new();
        state.active_page.set(2);

        let reply = apply_command(&state, AgentCommand::NavigateToPage { page: 9 });

        assert!(!reply.success);
        assert!(reply.error.is_some());
        assert_eq!(state.active_page.get_untracked(), 2);
    }

    #[test]
    fn test_update_dashboard_replaces_report() {
        let state = AppState::new();
        let reply = apply_command(
            &state,
            AgentCommand::UpdateDashboard {
                dashboard_data: Report {
                    title: "Fresh".into(),
                    pages: vec![],
                },
                title: "Q4 Review".into(),
                insights: vec!["Margin improved".into()],
                active_page: None,
            },
        );

        assert!(reply.success);
        assert_eq!(state.title.get_untracked(), "Q4 Review");
        assert_eq!(state.report.get_untracked().title, "Fresh");
        assert_eq!(state.insights.get_untracked(), vec!["Margin improved".to_string()]);
        assert!(!state.loading.get_untracked());
    }

    #[test]
    fn test_update_with_unchanged_section_ids_advances_revision() {
        // A refreshed payload typically keeps every section id; the revision
        // signal must still change so keyed section lists rebuild their views
        let state = AppState::new();
        let before = state.revision.get_untracked();
        let same_shape = state.report.get_untracked();

        let reply = apply_command(
            &state,
            AgentCommand::UpdateDashboard {
                dashboard_data: same_shape,
                title: state.title.get_untracked(),
                insights: vec![],
                active_page: None,
            },
        );

        assert!(reply.success);
        assert!(state.revision.get_untracked() > before);
    }

    #[test]
    fn test_set_loading_carries_message() {
        let state = AppState::new();
        apply_command(
            &state,
            AgentCommand::SetLoading {
                is_loading: true,
                message: "Crunching numbers".into(),
            },
        );

        assert!(state.loading.get_untracked());
        assert_eq!(state.loading_message.get_untracked(), "Crunching numbers");
    }
}
