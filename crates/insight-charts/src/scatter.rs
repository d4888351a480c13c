//! Labeled scatter plots over two numeric axes.

use crate::{
    colors, compute_domain, format_tick, resolve_bounds, truncate_label, ChartDimensions,
    LinearScale, PaddingProfile, Scale,
};
use insight_core::{numeric_values, Dataset, KeySpec, ScaleDirectives};
use leptos::prelude::*;

/// Scatter chart: both axes numeric, optional text label per point
#[component]
pub fn ScatterChart(data: Dataset, keys: KeySpec, scales: ScaleDirectives) -> impl IntoView {
    let Some(x_key) = keys.x.clone() else {
        return ().into_any();
    };
    let Some(y_key) = keys.y.first().cloned() else {
        return ().into_any();
    };
    let label_key = keys.label_key().map(str::to_string);

    let dims = ChartDimensions::default();

    let x_values = numeric_values(&data, std::slice::from_ref(&x_key));
    let y_values = numeric_values(&data, std::slice::from_ref(&y_key));

    // Scatter uses the lighter padding profile so clusters stay readable
    let x_domain = compute_domain(&x_values, &scales.x, PaddingProfile::Scatter);
    let y_domain = compute_domain(&y_values, &scales.y, PaddingProfile::Scatter);
    let (x_lo, x_hi) = resolve_bounds(x_domain, &x_values);
    let (y_lo, y_hi) = resolve_bounds(y_domain, &y_values);

    let x = LinearScale::new().domain(x_lo, x_hi).range(0.0, dims.inner_width());
    let y = LinearScale::new().domain(y_lo, y_hi).range(dims.inner_height(), 0.0);

    let points: Vec<(f64, f64, Option<String>)> = data
        .iter()
        .filter_map(|record| {
            let px = record.number(&x_key)?;
            let py = record.number(&y_key)?;
            let label = label_key
                .as_deref()
                .map(|k| truncate_label(&record.display(k)));
            Some((x.scale(px), y.scale(py), label))
        })
        .collect();

    let x_ticks: Vec<(f64, String)> = x
        .nice_ticks(5)
        .into_iter()
        .map(|v| (x.scale(v), format_tick(v)))
        .collect();
    let y_ticks: Vec<(f64, String)> = y
        .nice_ticks(5)
        .into_iter()
        .map(|v| (y.scale(v), format_tick(v)))
        .collect();

    let inner_w = dims.inner_width();
    let inner_h = dims.inner_height();

    view! {
        <div class="chart scatter-chart">
            <svg viewBox=dims.viewbox() style="width: 100%; height: auto;">
                <g transform=dims.inner_transform()>
                    {y_ticks
                        .into_iter()
                        .map(|(ty, label)| {
                            view! {
                                <line x1="0" y1=ty x2=inner_w y2=ty stroke=colors::GRID stroke-width="1" />
                                <text
                                    x=-8.0
                                    y=ty + 4.0
                                    text-anchor="end"
                                    font-size="11"
                                    fill=colors::TEXT_MUTED
                                >
                                    {label}
                                </text>
                            }
                        })
                        .collect_view()}
                    {x_ticks
                        .into_iter()
                        .map(|(tx, label)| {
                            view! {
                                <line x1=tx y1="0" x2=tx y2=inner_h stroke=colors::GRID stroke-width="1" />
                                <text
                                    x=tx
                                    y=inner_h + 18.0
                                    text-anchor="middle"
                                    font-size="11"
                                    fill=colors::TEXT_MUTED
                                >
                                    {label}
                                </text>
                            }
                        })
                        .collect_view()}
                    {points
                        .into_iter()
                        .map(|(px, py, label)| {
                            view! {
                                <circle
                                    cx=px
                                    cy=py
                                    r="6"
                                    fill=colors::series_alpha(0, 0.75)
                                    stroke=colors::series(0)
                                    stroke-width="1.5"
                                />
                                {label.map(|text| {
                                    view! {
                                        <text
                                            x=px
                                            y=py - 10.0
                                            text-anchor="middle"
                                            font-size="10"
                                            fill=colors::TEXT_PRIMARY
                                        >
                                            {text}
                                        </text>
                                    }
                                })}
                            }
                        })
                        .collect_view()}
                </g>
            </svg>
        </div>
    }
    .into_any()
}
