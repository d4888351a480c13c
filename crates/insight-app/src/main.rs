//! Insight dashboard WASM entry point.

use insight_agent::use_agent_bridge;
use insight_components::Dashboard;
use insight_state::provide_app_state;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("starting insight dashboard");

    mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let state = provide_app_state();

    // Connect to the agent runtime; the handle lives for the app's lifetime
    let _bridge = use_agent_bridge(state, None);

    view! { <Dashboard /> }
}
