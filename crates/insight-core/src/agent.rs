//! Wire envelope for the agent runtime's tool calls.
//!
//! The remote assistant drives the dashboard through named tool calls
//! streamed over the WebSocket bridge; each call is acknowledged with a
//! structured reply.

use crate::Report;
use serde::{Deserialize, Serialize};

/// Tool-call envelope with discriminated union on the tool name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", content = "args")]
pub enum AgentCommand {
    /// Show or hide the dashboard loading spinner with a status message
    #[serde(rename = "set_loading")]
    SetLoading {
        is_loading: bool,
        #[serde(default)]
        message: String,
    },
    /// Replace the rendered report wholesale
    #[serde(rename = "update_dashboard")]
    UpdateDashboard {
        dashboard_data: Report,
        title: String,
        #[serde(default)]
        insights: Vec<String>,
        /// Page to show after the update (1-6)
        #[serde(default, skip_serializing_if = "Option::is_none")]
        active_page: Option<u8>,
    },
    /// Switch the active dashboard tab
    #[serde(rename = "navigate_to_page")]
    NavigateToPage { page: u8 },
    #[serde(rename = "heartbeat")]
    Heartbeat { timestamp: i64 },
}

/// Acknowledgment returned to the agent runtime for each tool call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AgentReply {
    pub fn ok() -> Self {
        Self {
            success: true,
            detail: None,
            error: None,
        }
    }

    pub fn ok_with(detail: impl Into<String>) -> Self {
        Self {
            success: true,
            detail: Some(detail.into()),
            error: None,
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            detail: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_roundtrip() {
        let cmd = AgentCommand::NavigateToPage { page: 3 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"tool":"navigate_to_page","args":{"page":3}}"#);

        let back: AgentCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn test_set_loading_defaults_message() {
        let json = r#"{"tool":"set_loading","args":{"is_loading":true}}"#;
        let cmd: AgentCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            AgentCommand::SetLoading {
                is_loading: true,
                message: String::new()
            }
        );
    }

    #[test]
    fn test_update_dashboard_roundtrip() {
        let cmd = AgentCommand::UpdateDashboard {
            dashboard_data: Report {
                title: "Q4".into(),
                pages: vec![],
            },
            title: "Q4 Review".into(),
            insights: vec!["Revenue up 15%".into()],
            active_page: Some(2),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: AgentCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }

    #[test]
    fn test_unknown_tool_is_an_error() {
        let json = r#"{"tool":"reticulate_splines","args":{}}"#;
        assert!(serde_json::from_str::<AgentCommand>(json).is_err());
    }

    #[test]
    fn test_reply_shapes() {
        let ok = AgentReply::ok_with("navigated to page 3");
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"success":true,"detail":"navigated to page 3"}"#
        );

        let fail = AgentReply::fail("Invalid page number");
        assert_eq!(
            serde_json::to_string(&fail).unwrap(),
            r#"{"success":false,"error":"Invalid page number"}"#
        );
    }
}
