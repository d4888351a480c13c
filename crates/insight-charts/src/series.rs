//! Line, area, and stacked-area charts.

use crate::{
    area_path, band_path, colors, compute_domain, format_tick, line_path, stack_series,
    truncate_label, BandScale, ChartDimensions, LinearScale, PaddingProfile, Scale,
};
use insight_core::{numeric_values, AxisScale, Dataset, Domain, KeySpec};
use leptos::prelude::*;

/// Resolve "auto" sentinel bounds against the actual value extent so the
/// renderer always has concrete numbers to scale with.
pub fn resolve_bounds(domain: Domain, values: &[f64]) -> (f64, f64) {
    let data_min = values.iter().copied().fold(f64::MAX, f64::min);
    let data_max = values.iter().copied().fold(f64::MIN, f64::max);
    let (data_min, data_max) = if values.is_empty() {
        (0.0, 1.0)
    } else {
        (data_min, data_max)
    };

    let headroom = ((data_max - data_min) * 0.05).max(data_max.abs() * 0.01).max(1.0);

    let lower = domain.0.value().unwrap_or(data_min - headroom);
    let upper = domain.1.value().unwrap_or(data_max + headroom);

    if upper > lower {
        (lower, upper)
    } else {
        (lower, lower + 1.0)
    }
}

/// Shared cartesian frame: band scale on the category axis, linear scale on
/// the value axis, plus precomputed grid geometry.
pub struct XyFrame {
    pub dims: ChartDimensions,
    pub x: BandScale,
    pub y: LinearScale,
    pub categories: Vec<String>,
}

impl XyFrame {
    pub fn build(
        data: &Dataset,
        index_key: &str,
        values: &[f64],
        axis: &AxisScale,
        profile: PaddingProfile,
        dims: ChartDimensions,
    ) -> Self {
        let categories: Vec<String> = data.iter().map(|r| r.display(index_key)).collect();

        let domain = compute_domain(values, axis, profile);
        let (lower, upper) = resolve_bounds(domain, values);

        let y = LinearScale::new()
            .domain(lower, upper)
            .range(dims.inner_height(), 0.0)
            .clamp(true);
        let x = BandScale::new(data.len()).range(0.0, dims.inner_width());

        Self { dims, x, y, categories }
    }

    /// Grid lines with tick labels: (pixel y, formatted value)
    pub fn y_ticks(&self) -> Vec<(f64, String)> {
        self.y
            .nice_ticks(5)
            .into_iter()
            .map(|v| (self.y.scale(v), format_tick(v)))
            .collect()
    }

    /// Category tick labels: (pixel x at band center, truncated label)
    pub fn x_ticks(&self) -> Vec<(f64, String)> {
        self.categories
            .iter()
            .enumerate()
            .map(|(i, label)| (self.x.scale_center(i), truncate_label(label)))
            .collect()
    }

    /// Point positions for one numeric series; missing cells become gaps
    pub fn series_points(&self, data: &Dataset, key: &str) -> Vec<(f64, f64)> {
        data.iter()
            .enumerate()
            .filter_map(|(i, record)| {
                record
                    .number(key)
                    .map(|v| (self.x.scale_center(i), self.y.scale(v)))
            })
            .collect()
    }
}

/// Grid lines plus both axes' tick labels
pub fn frame_decor(frame: &XyFrame) -> impl IntoView + use<> {
    let width = frame.dims.inner_width();
    let height = frame.dims.inner_height();
    let y_ticks = frame.y_ticks();
    let x_ticks = frame.x_ticks();

    view! {
        {y_ticks
            .into_iter()
            .map(|(y, label)| {
                view! {
                    <line
                        x1="0"
                        y1=y
                        x2=width
                        y2=y
                        stroke=colors::GRID
                        stroke-width="1"
                    />
                    <text
                        x=-8.0
                        y=y + 4.0
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
            .map(|(x, label)| {
                view! {
                    <text
                        x=x
                        y=height + 18.0
                        text-anchor="middle"
                        font-size="11"
                        fill=colors::TEXT_MUTED
                    >
                        {label}
                    </text>
                }
            })
            .collect_view()}
    }
}

/// Series color legend rendered beneath a chart
#[component]
pub fn Legend(labels: Vec<String>) -> impl IntoView {
    view! {
        <div class="chart-legend">
            {labels
                .into_iter()
                .enumerate()
                .map(|(i, label)| {
                    view! {
                        <span class="legend-item">
                            <span
                                class="legend-swatch"
                                style=format!("background-color: {};", colors::series(i))
                            ></span>
                            {label}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Multi-series line chart
#[component]
pub fn LineChart(data: Dataset, keys: KeySpec, y_axis: AxisScale) -> impl IntoView {
    let Some(index_key) = keys.index_key().map(str::to_string) else {
        return ().into_any();
    };
    let series_keys = keys.series_keys();
    let dims = ChartDimensions::default();

    let values = numeric_values(&data, &series_keys);
    let frame = XyFrame::build(&data, &index_key, &values, &y_axis, PaddingProfile::Standard, dims);

    let paths: Vec<(String, &'static str)> = series_keys
        .iter()
        .enumerate()
        .map(|(i, key)| (line_path(&frame.series_points(&data, key)), colors::series(i)))
        .collect();

    view! {
        <div class="chart line-chart">
            <svg viewBox=dims.viewbox() style="width: 100%; height: auto;">
                <g transform=dims.inner_transform()>
                    {frame_decor(&frame)}
                    {paths
                        .into_iter()
                        .map(|(path, color)| {
                            view! {
                                <path
                                    d=path
                                    fill="none"
                                    stroke=color
                                    stroke-width="2"
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

/// Multi-series area chart (each series filled to the zero baseline)
#[component]
pub fn AreaChart(data: Dataset, keys: KeySpec, y_axis: AxisScale) -> impl IntoView {
    let Some(index_key) = keys.index_key().map(str::to_string) else {
        return ().into_any();
    };
    let series_keys = keys.series_keys();
    let dims = ChartDimensions::default();

    let values = numeric_values(&data, &series_keys);
    let frame = XyFrame::build(&data, &index_key, &values, &y_axis, PaddingProfile::Standard, dims);

    let baseline = dims.inner_height();
    let layers: Vec<(String, String, usize)> = series_keys
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let points = frame.series_points(&data, key);
            (area_path(&points, baseline), line_path(&points), i)
        })
        .collect();

    view! {
        <div class="chart area-chart">
            <svg viewBox=dims.viewbox() style="width: 100%; height: auto;">
                <g transform=dims.inner_transform()>
                    {frame_decor(&frame)}
                    {layers
                        .into_iter()
                        .map(|(area, line, i)| {
                            view! {
                                <path d=area fill=colors::series_alpha(i, 0.25) />
                                <path
                                    d=line
                                    fill="none"
                                    stroke=colors::series(i)
                                    stroke-width="2"
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

/// Stacked area chart: series accumulate on a shared baseline
#[component]
pub fn StackedAreaChart(data: Dataset, keys: KeySpec, y_axis: AxisScale) -> impl IntoView {
    let Some(index_key) = keys.index_key().map(str::to_string) else {
        return ().into_any();
    };
    let series_keys = keys.series_keys();
    let dims = ChartDimensions::default();

    let stacks = stack_series(&data, &series_keys);
    // Domain derives from the stacked tops, not the raw series values
    let values: Vec<f64> = stacks
        .iter()
        .flat_map(|layer| layer.iter().map(|&(_, top)| top))
        .chain([0.0])
        .collect();
    let frame = XyFrame::build(&data, &index_key, &values, &y_axis, PaddingProfile::Standard, dims);

    let layers: Vec<(String, usize)> = stacks
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            let upper: Vec<(f64, f64)> = layer
                .iter()
                .enumerate()
                .map(|(row, &(_, top))| (frame.x.scale_center(row), frame.y.scale(top)))
                .collect();
            let lower: Vec<(f64, f64)> = layer
                .iter()
                .enumerate()
                .map(|(row, &(base, _))| (frame.x.scale_center(row), frame.y.scale(base)))
                .collect();
            (band_path(&upper, &lower), i)
        })
        .collect();

    view! {
        <div class="chart stacked-area-chart">
            <svg viewBox=dims.viewbox() style="width: 100%; height: auto;">
                <g transform=dims.inner_transform()>
                    {frame_decor(&frame)}
                    {layers
                        .into_iter()
                        .map(|(path, i)| {
                            view! {
                                <path
                                    d=path
                                    fill=colors::series_alpha(i, 0.55)
                                    stroke=colors::series(i)
                                    stroke-width="1"
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
    use insight_core::Record;

    fn sample() -> Dataset {
        vec![
            Record::new().field("month", "Jan").field("v", 100.0),
            Record::new().field("month", "Feb").field("v", 1000.0),
        ]
    }

    #[test]
    fn test_frame_scales_to_computed_domain() {
        let data = sample();
        let frame = XyFrame::build(
            &data,
            "month",
            &[100.0, 1000.0],
            &AxisScale::auto(),
            PaddingProfile::Standard,
            ChartDimensions::new(640.0, 320.0),
        );

        // Padded domain is (55, 1045); bottom of the plot maps to 55
        assert_eq!(frame.y.domain_bounds(), (55.0, 1045.0));
        assert_eq!(frame.categories, vec!["Jan", "Feb"]);
    }

    #[test]
    fn test_series_points_skip_missing_cells() {
        let data = vec![
            Record::new().field("month", "Jan").field("v", 10.0),
            Record::new().field("month", "Feb"),
            Record::new().field("month", "Mar").field("v", 30.0),
        ];
        let frame = XyFrame::build(
            &data,
            "month",
            &[10.0, 30.0],
            &AxisScale::from_zero(),
            PaddingProfile::Standard,
            ChartDimensions::new(640.0, 320.0),
        );

        assert_eq!(frame.series_points(&data, "v").len(), 2);
    }

    #[test]
    fn test_resolve_bounds_fills_auto_sentinels() {
        let (lo, hi) = resolve_bounds(
            (insight_core::AxisBound::Value(0.0), insight_core::AxisBound::Auto),
            &[10.0, 90.0],
        );
        assert_eq!(lo, 0.0);
        assert!(hi > 90.0);
    }

    #[test]
    fn test_resolve_bounds_empty_values() {
        let (lo, hi) = resolve_bounds(
            (insight_core::AxisBound::Auto, insight_core::AxisBound::Auto),
            &[],
        );
        assert!(lo.is_finite() && hi.is_finite() && hi > lo);
    }
}
