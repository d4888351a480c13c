//! Development agent runtime: serves a scripted tool-call stream over
//! WebSocket so the dashboard can be exercised without a hosted model.

mod script;

use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::State,
    response::IntoResponse,
    routing::get,
    Router,
};
use futures::{SinkExt, StreamExt};
use insight_core::{AgentCommand, AgentReply};
use std::net::SocketAddr;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
struct AppShared {
    tx: broadcast::Sender<AgentCommand>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "insight_server=debug,tower_http=info".into()),
        )
        .init();

    let (tx, _) = broadcast::channel(64);
    let shared = AppShared { tx: tx.clone() };

    tokio::spawn(script::run_scripted_agent(tx));

    let app = Router::new()
        .route("/ws", get(ws_handler))
        .layer(CorsLayer::permissive())
        .with_state(shared);

    let addr: SocketAddr = "127.0.0.1:3001".parse().expect("static address");
    tracing::info!("agent runtime listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind agent runtime port");
    axum::serve(listener, app).await.expect("server error");
}

async fn ws_handler(ws: WebSocketUpgrade, State(shared): State<AppShared>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, shared))
}

/// Forward scripted tool calls to the client and log its acknowledgments
async fn handle_socket(socket: WebSocket, shared: AppShared) {
    tracing::info!("dashboard connected");

    let (mut write, mut read) = socket.split();
    let mut rx = shared.tx.subscribe();

    loop {
        tokio::select! {
            command = rx.recv() => {
                match command {
                    Ok(command) => {
                        let json = match serde_json::to_string(&command) {
                            Ok(json) => json,
                            Err(e) => {
                                tracing::error!("failed to encode tool call: {}", e);
                                continue;
                            }
                        };
                        if write.send(Message::Text(json)).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!("client lagged, dropped {} tool calls", n);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }

            incoming = read.next() => {
                match incoming {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<AgentReply>(&text) {
                            Ok(reply) if reply.success => {
                                tracing::debug!(detail = ?reply.detail, "tool call acknowledged");
                            }
                            Ok(reply) => {
                                tracing::warn!(error = ?reply.error, "tool call rejected");
                            }
                            Err(e) => tracing::warn!("unparseable acknowledgment: {}", e),
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("socket error: {}", e);
                        break;
                    }
                }
            }
        }
    }

    tracing::info!("dashboard disconnected");
}
