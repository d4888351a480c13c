//! Combo charts: bars and lines sharing one cartesian frame.

use crate::{
    colors, line_path, stack_series, BandScale, ChartDimensions, PaddingProfile, Scale, XyFrame,
    frame_decor, Legend,
};
use insight_core::{numeric_values, AxisScale, ChartKind, Dataset, KeySpec};
use leptos::prelude::*;

/// Partition the requested value keys into a bar subset and a line subset.
///
/// Fixed split policy: plain combo sends the first key to bars and the rest
/// to lines; the stacked variant sends the first two keys to a stacking
/// group and the rest to lines.
pub fn split_combo_keys(kind: &ChartKind, keys: &[String]) -> (Vec<String>, Vec<String>) {
    let bar_count = match kind {
        ChartKind::StackedBarLine => 2.min(keys.len()),
        _ => 1.min(keys.len()),
    };

    let (bars, lines) = keys.split_at(bar_count);
    (bars.to_vec(), lines.to_vec())
}

/// Bar + line composite against a shared value axis
#[component]
pub fn ComboChart(
    kind: ChartKind,
    data: Dataset,
    keys: KeySpec,
    y_axis: AxisScale,
) -> impl IntoView {
    let Some(index_key) = keys.index_key().map(str::to_string) else {
        return ().into_any();
    };
    let series_keys = keys.series_keys();
    let (bar_keys, line_keys) = split_combo_keys(&kind, &series_keys);
    let stacked = matches!(kind, ChartKind::StackedBarLine);
    let dims = ChartDimensions::default();

    // Shared axis covers raw line values plus bar heights (stacked tops when
    // the bar group accumulates)
    let mut values = numeric_values(&data, &line_keys);
    if stacked {
        values.extend(
            stack_series(&data, &bar_keys)
                .iter()
                .flat_map(|layer| layer.iter().map(|&(_, top)| top)),
        );
    } else {
        values.extend(numeric_values(&data, &bar_keys));
    }
    values.push(0.0);

    let frame = XyFrame::build(&data, &index_key, &values, &y_axis, PaddingProfile::Standard, dims);
    let band = BandScale::new(data.len())
        .range(0.0, dims.inner_width())
        .padding_uniform(0.25);
    let baseline = frame.y.scale(frame.y.domain_bounds().0.max(0.0));

    let mut bars: Vec<(f64, f64, f64, f64, usize)> = Vec::new();
    if stacked {
        for (s, layer) in stack_series(&data, &bar_keys).iter().enumerate() {
            for (row, &(base, top)) in layer.iter().enumerate() {
                let y_top = frame.y.scale(top);
                let y_base = frame.y.scale(base);
                bars.push((band.scale(row), y_top, band.bandwidth(), (y_base - y_top).max(0.0), s));
            }
        }
    } else {
        for (s, key) in bar_keys.iter().enumerate() {
            for (row, record) in data.iter().enumerate() {
                if let Some(v) = record.number(key) {
                    let y = frame.y.scale(v);
                    bars.push((band.scale(row), y.min(baseline), band.bandwidth(), (baseline - y).abs(), s));
                }
            }
        }
    }

    // Line series continue the palette after the bar series
    let palette_offset = bar_keys.len();
    let lines: Vec<(String, usize)> = line_keys
        .iter()
        .enumerate()
        .map(|(i, key)| {
            (
                line_path(&frame.series_points(&data, key)),
                palette_offset + i,
            )
        })
        .collect();

    view! {
        <div class="chart combo-chart">
            <svg viewBox=dims.viewbox() style="width: 100%; height: auto;">
                <g transform=dims.inner_transform()>
                    {frame_decor(&frame)}
                    {bars
                        .into_iter()
                        .map(|(x, y, w, h, s)| {
                            view! {
                                <rect
                                    x=x
                                    y=y
                                    width=w
                                    height=h
                                    fill=colors::series_alpha(s, 0.8)
                                    rx="2"
                                />
                            }
                        })
                        .collect_view()}
                    {lines
                        .into_iter()
                        .map(|(path, s)| {
                            view! {
                                <path
                                    d=path
                                    fill="none"
                                    stroke=colors::series(s)
                                    stroke-width="2.5"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                />
                            }
                        })
                        .collect_view()}
                </g>
            </svg>
            <Legend labels=series_keys />
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_bar_line_sends_first_key_to_bars() {
        let (bars, lines) = split_combo_keys(&ChartKind::BarLine, &keys(&["revenue", "target"]));
        assert_eq!(bars, keys(&["revenue"]));
        assert_eq!(lines, keys(&["target"]));
    }

    #[test]
    fn test_stacked_bar_line_sends_first_two_keys_to_bars() {
        let (bars, lines) = split_combo_keys(
            &ChartKind::StackedBarLine,
            &keys(&["fixedCost", "varCost", "profitMargin"]),
        );
        assert_eq!(bars, keys(&["fixedCost", "varCost"]));
        assert_eq!(lines, keys(&["profitMargin"]));
    }

    #[test]
    fn test_split_with_fewer_keys_than_policy() {
        let (bars, lines) = split_combo_keys(&ChartKind::StackedBarLine, &keys(&["only"]));
        assert_eq!(bars, keys(&["only"]));
        assert!(lines.is_empty());

        let (bars, lines) = split_combo_keys(&ChartKind::BarLine, &[]);
        assert!(bars.is_empty() && lines.is_empty());
    }
}
