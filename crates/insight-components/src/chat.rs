//! Assistant chat panel: launcher, window chrome, insights feed.

use insight_state::use_app_state;
use leptos::prelude::*;

/// Floating chat panel with minimize/maximize/close controls
#[component]
pub fn ChatPanel() -> impl IntoView {
    let state = use_app_state();
    let chat = state.chat;
    let connection = state.connection;
    let insights = state.insights;

    let open_state = state.clone();
    let close_state = state.clone();
    let min_state = state.clone();
    let max_state = state.clone();

    view! {
        {move || {
            let window = chat.get();
            if !window.open {
                let open_state = open_state.clone();
                return view! {
                    <button
                        class="chat-launcher"
                        on:click=move |_| open_state.open_chat()
                    >
                        "💬 Ask the assistant"
                    </button>
                }
                .into_any();
            }

            let panel_class = if window.maximized {
                "chat-panel maximized"
            } else if window.minimized {
                "chat-panel minimized"
            } else {
                "chat-panel"
            };

            let close_state = close_state.clone();
            let min_state = min_state.clone();
            let max_state = max_state.clone();

            view! {
                <div class=panel_class>
                    <div class="chat-header">
                        <span class="chat-title">"Business Analyst"</span>
                        <span class=move || format!("chat-status {}", connection.get().css_class())>
                            {move || connection.get().label()}
                        </span>
                        <div class="chat-controls">
                            <button
                                class="chat-btn"
                                on:click=move |_| min_state.toggle_minimized()
                            >
                                "–"
                            </button>
                            <button
                                class="chat-btn"
                                on:click=move |_| max_state.toggle_maximized()
                            >
                                "□"
                            </button>
                            <button
                                class="chat-btn"
                                on:click=move |_| close_state.close_chat()
                            >
                                "✕"
                            </button>
                        </div>
                    </div>

                    {(!window.minimized)
                        .then(|| {
                            view! {
                                <div class="chat-body">
                                    <InsightsFeed insights=insights.get() />
                                </div>
                            }
                        })}
                </div>
            }
            .into_any()
        }}
    }
}

/// Insights pushed alongside the latest dashboard update
#[component]
fn InsightsFeed(insights: Vec<String>) -> impl IntoView {
    if insights.is_empty() {
        return view! {
            <p class="chat-placeholder">
                "Ask for a report update or jump to a page. Insights from the assistant appear here."
            </p>
        }
        .into_any();
    }

    view! {
        <ul class="chat-insights">
            {insights
                .into_iter()
                .map(|insight| view! { <li>{insight}</li> })
                .collect_view()}
        </ul>
    }
    .into_any()
}
