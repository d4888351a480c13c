//! Agent bridge client: receives tool calls, acknowledges each one.

use crate::{AgentConfig, ReconnectPolicy};
use futures::stream::SplitSink;
use futures::{SinkExt, StreamExt};
use gloo_net::websocket::{futures::WebSocket, Message};
use gloo_timers::future::TimeoutFuture;
use insight_core::{AgentCommand, AgentReply};
use insight_state::{apply_command, AppState};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

// ============================================================================
// AGENT CLIENT
// ============================================================================

/// WebSocket client for the assistant tool-call stream
pub struct AgentClient {
    config: AgentConfig,
    state: AppState,
}

impl AgentClient {
    /// Create new agent client
    pub fn new(state: AppState) -> Self {
        Self {
            config: AgentConfig::default(),
            state,
        }
    }

    /// Create with custom configuration
    pub fn with_config(state: AppState, config: AgentConfig) -> Self {
        Self { config, state }
    }

    /// Set bridge URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Start the bridge connection (spawns async task)
    pub fn connect(self) -> BridgeHandle {
        let handle = BridgeHandle::new();
        let handle_clone = handle.clone();

        spawn_local(async move {
            self.run_connection_loop(handle_clone).await;
        });

        handle
    }

    /// Main connection loop with reconnection logic
    async fn run_connection_loop(self, handle: BridgeHandle) {
        let mut attempt = 0u32;
        let mut policy = self.config.reconnect_policy.clone();

        loop {
            if handle.is_stopped() {
                tracing::info!("agent bridge stopped by handle");
                self.state.set_disconnected();
                break;
            }

            self.state.set_connecting();
            tracing::info!("connecting to agent runtime: {}", self.config.url);

            match WebSocket::open(&self.config.url) {
                Ok(ws) => {
                    self.state.set_connected();
                    policy.reset();
                    attempt = 0;

                    tracing::info!("agent bridge connected");

                    self.handle_connection(ws, &handle).await;

                    if handle.is_stopped() {
                        break;
                    }

                    self.state.set_disconnected();
                    tracing::warn!("agent bridge disconnected");
                }
                Err(e) => {
                    tracing::error!("agent bridge connection failed: {:?}", e);
                    self.state.set_error(format!("Connection failed: {:?}", e));
                }
            }

            if !policy.should_reconnect(attempt) {
                tracing::error!("max reconnection attempts ({}) reached", attempt);
                self.state.set_error("Max reconnection attempts reached");
                break;
            }

            let delay = policy.delay_ms(attempt);
            self.state.set_reconnecting();
            tracing::info!("reconnecting in {}ms (attempt {})", delay, attempt + 1);

            TimeoutFuture::new(delay).await;
            attempt += 1;
        }
    }

    /// Handle an active connection: parse each tool call, run it through the
    /// command reducer, write the structured acknowledgment back.
    async fn handle_connection(&self, ws: WebSocket, handle: &BridgeHandle) {
        let (mut write, mut read) = ws.split();

        while let Some(msg) = read.next().await {
            if handle.is_stopped() {
                break;
            }

            match msg {
                Ok(Message::Text(text)) => {
                    self.process_message(&text, &mut write).await;
                }
                Ok(Message::Bytes(bytes)) => {
                    if let Ok(text) = String::from_utf8(bytes) {
                        self.process_message(&text, &mut write).await;
                    }
                }
                Err(e) => {
                    tracing::error!("agent bridge error: {:?}", e);
                    break;
                }
            }
        }
    }

    /// Process one received tool call and acknowledge it
    async fn process_message(&self, text: &str, write: &mut SplitSink<WebSocket, Message>) {
        let reply = match serde_json::from_str::<AgentCommand>(text) {
            Ok(command) => apply_command(&self.state, command),
            Err(e) => {
                tracing::warn!("unparseable tool call: {}", e);
                AgentReply::fail(format!("unrecognized tool call: {}", e))
            }
        };

        match serde_json::to_string(&reply) {
            Ok(json) => {
                if let Err(e) = write.send(Message::Text(json)).await {
                    tracing::error!("failed to send acknowledgment: {:?}", e);
                }
            }
            Err(e) => tracing::error!("failed to encode acknowledgment: {}", e),
        }
    }
}

// ============================================================================
// BRIDGE HANDLE (Send + Sync)
// ============================================================================

/// Handle for controlling the bridge connection
#[derive(Clone)]
pub struct BridgeHandle {
    stopped: Arc<AtomicBool>,
}

impl BridgeHandle {
    fn new() -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Stop the bridge connection
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Check if stopped
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Check if running
    pub fn is_running(&self) -> bool {
        !self.is_stopped()
    }
}

// ============================================================================
// LEPTOS INTEGRATION
// ============================================================================

/// Hook to create and manage the agent bridge in Leptos components
pub fn use_agent_bridge(state: AppState, url: Option<String>) -> BridgeHandle {
    let config = AgentConfig::new(url.unwrap_or_else(|| crate::DEFAULT_WS_URL.to_string()));
    AgentClient::with_config(state, config).connect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_handle() {
        let handle = BridgeHandle::new();
        assert!(!handle.is_stopped());
        assert!(handle.is_running());

        handle.stop();
        assert!(handle.is_stopped());
        assert!(!handle.is_running());
    }
}
