//! Main dashboard layout component.

use insight_charts::ChartView;
use insight_core::{Section, SectionViz};
use insight_state::use_app_state;
use leptos::prelude::*;

use crate::{ChatPanel, DataTable, KpiGrid, PageNav};

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();
    let report = state.report;
    let title = state.title;
    let active_page = state.active_page;
    let loading = state.loading;
    let loading_message = state.loading_message;
    let revision = state.revision;

    // Each entry carries the report revision so that an agent payload
    // reusing the same section ids still replaces the rendered cards
    let sections = move || {
        let rev = revision.get();
        report
            .get()
            .page(active_page.get())
            .map(|page| page.sections.clone())
            .unwrap_or_default()
            .into_iter()
            .map(|section| (rev, section))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dashboard">
            <header class="dash-header">
                <h1 class="dash-title">{move || title.get()}</h1>
                <PageNav />
            </header>

            <main class="dash-main">
                <div class="section-grid">
                    <For
                        each=sections
                        key=|(rev, section)| (*rev, section.id.clone())
                        children=|(_, section)| view! { <SectionCard section=section /> }
                    />
                </div>
            </main>

            {move || {
                loading.get().then(|| {
                    view! {
                        <div class="loading-overlay">
                            <div class="spinner"></div>
                            <p class="loading-message">
                                {move || {
                                    let msg = loading_message.get();
                                    if msg.is_empty() { "Updating dashboard...".to_string() } else { msg }
                                }}
                            </p>
                        </div>
                    }
                })
            }}

            <footer class="dash-footer">
                <StatusBar />
            </footer>

            <ChatPanel />
        </div>
    }
}

/// One titled section card dispatching to the right visualization
#[component]
fn SectionCard(section: Section) -> impl IntoView {
    let card_class = if section.wide { "panel wide" } else { "panel" };

    view! {
        <div class=card_class>
            <div class="panel-header">
                <span class="panel-title">{section.title.clone()}</span>
                {(!section.description.is_empty())
                    .then(|| {
                        view! {
                            <span class="panel-description">{section.description.clone()}</span>
                        }
                    })}
            </div>
            <div class="panel-content">
                {match section.viz {
                    SectionViz::Kpis { kpis } => view! { <KpiGrid kpis=kpis /> }.into_any(),
                    SectionViz::Chart { kind, data, keys, scales } => {
                        view! { <ChartView kind=kind data=data keys=keys scales=scales /> }
                            .into_any()
                    }
                    SectionViz::Table { headers, rows } => {
                        view! { <DataTable headers=headers rows=rows /> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn StatusBar() -> impl IntoView {
    let state = use_app_state();
    let connection = state.connection;
    let error = state.error;

    view! {
        <div class="status-bar">
            <div class="sb-connection">
                <span class="sb-label">"Assistant:"</span>
                <span class=move || format!("sb-value {}", connection.get().css_class())>
                    {move || connection.get().label()}
                </span>
            </div>

            {move || {
                error.get().map(|e| {
                    view! {
                        <div class="sb-error">
                            <span class="error-icon">"⚠"</span>
                            <span class="error-msg">{e}</span>
                        </div>
                    }
                })
            }}

            <div class="sb-version">
                <span>"v0.1.0"</span>
            </div>
        </div>
    }
}
