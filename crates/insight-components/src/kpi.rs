//! KPI metric cards.

use insight_charts::colors;
use insight_core::{Kpi, PercentFormatter, ValueFormatter};
use leptos::prelude::*;

/// One metric card with period-over-period change indicator
#[component]
pub fn KpiCard(kpi: Kpi) -> impl IntoView {
    let positive = kpi.change >= 0.0;
    let arrow = if positive { "▲" } else { "▼" };
    let change_color = if positive { colors::POSITIVE } else { colors::NEGATIVE };
    let change_text = PercentFormatter::default().format(kpi.change.abs());

    let target = Kpi {
        value: kpi.target,
        ..kpi.clone()
    };

    view! {
        <div class="kpi-card">
            <div class="kpi-metric">{kpi.metric.clone()}</div>
            <div class="kpi-value">{kpi.display_value()}</div>
            <div class="kpi-footer">
                <span class="kpi-change" style=format!("color: {};", change_color)>
                    {arrow} " " {change_text}
                </span>
                <span class="kpi-target">"Target: " {target.display_value()}</span>
            </div>
        </div>
    }
}

/// Grid of KPI cards
#[component]
pub fn KpiGrid(kpis: Vec<Kpi>) -> impl IntoView {
    view! {
        <div class="kpi-grid">
            {kpis
                .into_iter()
                .map(|kpi| view! { <KpiCard kpi=kpi /> })
                .collect_view()}
        </div>
    }
}
