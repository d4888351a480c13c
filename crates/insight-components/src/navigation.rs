//! Page tab navigation.

use insight_state::use_app_state;
use leptos::prelude::*;
use tracing::warn;

/// Numbered page tabs built from the report's page list
#[component]
pub fn PageNav() -> impl IntoView {
    let state = use_app_state();
    let report = state.report;
    let active = state.active_page;
    let revision = state.revision;

    // Revision in the key so replaced payloads refresh the tab titles
    let tabs = move || {
        let rev = revision.get();
        report
            .get()
            .pages
            .iter()
            .map(|p| (rev, p.number, p.title.clone()))
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="page-nav">
            <For
                each=tabs
                key=|(rev, number, _)| (*rev, *number)
                children=move |(_, number, title)| {
                    let state = use_app_state();
                    view! {
                        <button
                            class=move || {
                                if active.get() == number { "nav-tab active" } else { "nav-tab" }
                            }
                            on:click=move |_| {
                                if let Err(err) = state.navigate_to(number) {
                                    warn!("{err}");
                                }
                            }
                        >
                            <span class="nav-number">{number.to_string()}</span>
                            <span class="nav-title">{title.clone()}</span>
                        </button>
                    }
                }
            />
        </nav>
    }
}
