//! Chart-kind dispatch: one entry point over the closed encoding set.

use crate::{
    AreaChart, BarChart, BarVariant, ComboChart, FunnelChart, HorizontalBarChart, LineChart,
    PieChart, ScatterChart, StackedAreaChart, TreemapChart, colors,
};
use insight_core::{ChartKind, Dataset, KeySpec, ScaleDirectives};
use leptos::prelude::*;

/// Neutral placeholder rendered for every chart kind when the dataset is empty
#[component]
pub fn NoData() -> impl IntoView {
    view! {
        <div class="chart-empty" style=format!("color: {};", colors::TEXT_MUTED)>
            "No data available"
        </div>
    }
}

/// Visible fallback for chart type tags outside the supported set.
/// Never a silent no-op: the unrecognized tag is shown as received.
#[component]
pub fn UnsupportedChart(tag: String) -> impl IntoView {
    view! {
        <div class="chart-unsupported" style=format!("color: {};", colors::TEXT_MUTED)>
            {format!("Unsupported chart type: {}", tag)}
        </div>
    }
}

/// Dispatch a section's chart payload to the matching visual encoding
#[component]
pub fn ChartView(
    kind: ChartKind,
    data: Dataset,
    keys: KeySpec,
    scales: ScaleDirectives,
) -> impl IntoView {
    if data.is_empty() {
        return view! { <NoData /> }.into_any();
    }

    let y_axis = scales.y;
    match kind {
        ChartKind::Line => view! { <LineChart data=data keys=keys y_axis=y_axis /> }.into_any(),
        ChartKind::Area => view! { <AreaChart data=data keys=keys y_axis=y_axis /> }.into_any(),
        ChartKind::StackedArea => {
            view! { <StackedAreaChart data=data keys=keys y_axis=y_axis /> }.into_any()
        }
        ChartKind::Bar => {
            view! { <BarChart data=data keys=keys y_axis=y_axis variant=BarVariant::Single /> }
                .into_any()
        }
        ChartKind::GroupedBar => {
            view! { <BarChart data=data keys=keys y_axis=y_axis variant=BarVariant::Grouped /> }
                .into_any()
        }
        ChartKind::StackedBar => {
            view! { <BarChart data=data keys=keys y_axis=y_axis variant=BarVariant::Stacked /> }
                .into_any()
        }
        ChartKind::HorizontalBar => {
            view! { <HorizontalBarChart data=data keys=keys x_axis=scales.x /> }.into_any()
        }
        ChartKind::Pie => view! { <PieChart data=data keys=keys donut=false /> }.into_any(),
        ChartKind::Donut => view! { <PieChart data=data keys=keys donut=true /> }.into_any(),
        ChartKind::Scatter => {
            view! { <ScatterChart data=data keys=keys scales=scales /> }.into_any()
        }
        ChartKind::Treemap => view! { <TreemapChart data=data keys=keys /> }.into_any(),
        ChartKind::Funnel => view! { <FunnelChart data=data keys=keys /> }.into_any(),
        kind @ (ChartKind::BarLine | ChartKind::StackedBarLine) => {
            view! { <ComboChart kind=kind data=data keys=keys y_axis=y_axis /> }.into_any()
        }
        ChartKind::Unknown(tag) => view! { <UnsupportedChart tag=tag /> }.into_any(),
    }
}
