//! Bar charts: vertical, horizontal, grouped, and stacked variants.
//!
//! Orientation is a frequent source of confusion: vertical bars place
//! categories on the x axis, horizontal bars place them on the y axis. The
//! mapping is encoded explicitly in [`BarAxes::assign`] so it can be tested
//! directly rather than inferred from rendered output.

use crate::{
    colors, compute_domain, format_tick, resolve_bounds, stack_series, truncate_label, BandScale,
    ChartDimensions, ChartMargin, LinearScale, PaddingProfile, Scale, XyFrame, frame_decor,
    Legend,
};
use insight_core::{numeric_values, AxisScale, Dataset, KeySpec};
use leptos::prelude::*;

// ============================================================================
// ORIENTATION & AXIS ASSIGNMENT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// What a single axis carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisRole {
    /// Categorical band axis keyed by this field
    Category(String),
    /// Numeric magnitude axis over these fields
    Value(Vec<String>),
}

/// Explicit axis-to-key assignment for a bar chart.
///
/// One axis always carries the category band, the other the numeric
/// magnitudes; which is which depends solely on the orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarAxes {
    orientation: Orientation,
    category: String,
    values: Vec<String>,
}

impl BarAxes {
    /// Assign category and value keys to concrete axes for the given
    /// orientation. Returns `None` when the key spec lacks a category key.
    pub fn assign(orientation: Orientation, keys: &KeySpec) -> Option<Self> {
        let category = keys.index_key()?.to_string();
        let values = keys.series_keys();

        Some(Self {
            orientation,
            category,
            values,
        })
    }

    /// What the x axis carries
    pub fn x(&self) -> AxisRole {
        match self.orientation {
            Orientation::Vertical => AxisRole::Category(self.category.clone()),
            Orientation::Horizontal => AxisRole::Value(self.values.clone()),
        }
    }

    /// What the y axis carries
    pub fn y(&self) -> AxisRole {
        match self.orientation {
            Orientation::Vertical => AxisRole::Value(self.values.clone()),
            Orientation::Horizontal => AxisRole::Category(self.category.clone()),
        }
    }

    pub fn category_key(&self) -> &str {
        &self.category
    }

    pub fn value_keys(&self) -> &[String] {
        &self.values
    }
}

/// Bar layout family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarVariant {
    /// Only the first requested value key is rendered
    #[default]
    Single,
    /// All value keys side by side within each band
    Grouped,
    /// All value keys accumulated in a shared stacking group
    Stacked,
}

// ============================================================================
// VERTICAL BARS
// ============================================================================

/// Vertical bar chart (single, grouped, or stacked)
#[component]
pub fn BarChart(
    data: Dataset,
    keys: KeySpec,
    y_axis: AxisScale,
    #[prop(default = BarVariant::Single)] variant: BarVariant,
) -> impl IntoView {
    let Some(axes) = BarAxes::assign(Orientation::Vertical, &keys) else {
        return ().into_any();
    };
    let category_key = axes.category_key().to_string();
    let value_keys: Vec<String> = match variant {
        BarVariant::Single => axes.value_keys().iter().take(1).cloned().collect(),
        _ => axes.value_keys().to_vec(),
    };
    let dims = ChartDimensions::default();

    let values: Vec<f64> = match variant {
        BarVariant::Stacked => stack_series(&data, &value_keys)
            .iter()
            .flat_map(|layer| layer.iter().map(|&(_, top)| top))
            .chain([0.0])
            .collect(),
        _ => {
            let mut v = numeric_values(&data, &value_keys);
            v.push(0.0); // bars always grow from zero
            v
        }
    };
    let frame = XyFrame::build(&data, &category_key, &values, &y_axis, PaddingProfile::Standard, dims);

    let band = BandScale::new(data.len())
        .range(0.0, dims.inner_width())
        .padding_uniform(0.2);
    let baseline = frame.y.scale(frame.y.domain_bounds().0.max(0.0));

    // (x, y, w, h, series index) per rect
    let mut bars: Vec<(f64, f64, f64, f64, usize)> = Vec::new();
    match variant {
        BarVariant::Single | BarVariant::Grouped => {
            let n = value_keys.len().max(1) as f64;
            let slot = band.bandwidth() / n;
            for (row, record) in data.iter().enumerate() {
                for (s, key) in value_keys.iter().enumerate() {
                    if let Some(v) = record.number(key) {
                        let y = frame.y.scale(v);
                        let x = band.scale(row) + s as f64 * slot;
                        bars.push((x, y.min(baseline), slot.max(1.0), (baseline - y).abs(), s));
                    }
                }
            }
        }
        BarVariant::Stacked => {
            for (s, layer) in stack_series(&data, &value_keys).iter().enumerate() {
                for (row, &(base, top)) in layer.iter().enumerate() {
                    let y_top = frame.y.scale(top);
                    let y_base = frame.y.scale(base);
                    bars.push((band.scale(row), y_top, band.bandwidth(), (y_base - y_top).max(0.0), s));
                }
            }
        }
    }

    let show_legend = value_keys.len() > 1;
    view! {
        <div class="chart bar-chart">
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
                                    fill=colors::series(s)
                                    rx="2"
                                />
                            }
                        })
                        .collect_view()}
                </g>
            </svg>
            {show_legend.then(|| view! { <Legend labels=value_keys /> })}
        </div>
    }
    .into_any()
}

// ============================================================================
// HORIZONTAL BARS
// ============================================================================

/// Horizontal bar chart: categories on the y axis, magnitudes on the x axis
#[component]
pub fn HorizontalBarChart(data: Dataset, keys: KeySpec, x_axis: AxisScale) -> impl IntoView {
    let Some(axes) = BarAxes::assign(Orientation::Horizontal, &keys) else {
        return ().into_any();
    };
    let category_key = axes.category_key().to_string();
    let Some(value_key) = axes.value_keys().first().cloned() else {
        return ().into_any();
    };

    let dims = ChartDimensions::default().with_margin(ChartMargin::category_axis());

    let mut values = numeric_values(&data, std::slice::from_ref(&value_key));
    values.push(0.0);
    let domain = compute_domain(&values, &x_axis, PaddingProfile::Standard);
    let (lower, upper) = resolve_bounds(domain, &values);

    let x = LinearScale::new()
        .domain(lower, upper)
        .range(0.0, dims.inner_width())
        .clamp(true);
    let band = BandScale::new(data.len())
        .range(0.0, dims.inner_height())
        .padding_uniform(0.25);

    let origin = x.scale(lower.max(0.0));
    let bars: Vec<(f64, f64, f64, String)> = data
        .iter()
        .enumerate()
        .filter_map(|(row, record)| {
            record.number(&value_key).map(|v| {
                (
                    band.scale(row),
                    (x.scale(v) - origin).max(0.0),
                    band.bandwidth(),
                    truncate_label(&record.display(&category_key)),
                )
            })
        })
        .collect();

    let ticks: Vec<(f64, String)> = x
        .nice_ticks(5)
        .into_iter()
        .map(|v| (x.scale(v), format_tick(v)))
        .collect();
    let inner_h = dims.inner_height();

    view! {
        <div class="chart horizontal-bar-chart">
            <svg viewBox=dims.viewbox() style="width: 100%; height: auto;">
                <g transform=dims.inner_transform()>
                    {ticks
                        .into_iter()
                        .map(|(tx, label)| {
                            view! {
                                <line
                                    x1=tx
                                    y1="0"
                                    x2=tx
                                    y2=inner_h
                                    stroke=colors::GRID
                                    stroke-width="1"
                                />
                                <text
                                    x=tx
                                    y=inner_h + 16.0
                                    text-anchor="middle"
                                    font-size="11"
                                    fill=colors::TEXT_MUTED
                                >
                                    {label}
                                </text>
                            }
                        })
                        .collect_view()}
                    {bars
                        .into_iter()
                        .map(|(y, w, h, label)| {
                            view! {
                                <text
                                    x=-8.0
                                    y=y + h / 2.0 + 4.0
                                    text-anchor="end"
                                    font-size="11"
                                    fill=colors::TEXT_PRIMARY
                                >
                                    {label}
                                </text>
                                <rect
                                    x=origin
                                    y=y
                                    width=w
                                    height=h
                                    fill=colors::series(0)
                                    rx="2"
                                />
                            }
                        })
                        .collect_view()}
                </g>
            </svg>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rep_keys() -> KeySpec {
        KeySpec::new().x("name").y("revenue")
    }

    #[test]
    fn test_vertical_assignment_puts_categories_on_x() {
        let axes = BarAxes::assign(Orientation::Vertical, &rep_keys()).unwrap();
        assert_eq!(axes.x(), AxisRole::Category("name".to_string()));
        assert_eq!(axes.y(), AxisRole::Value(vec!["revenue".to_string()]));
    }

    #[test]
    fn test_horizontal_assignment_puts_categories_on_y() {
        let axes = BarAxes::assign(Orientation::Horizontal, &rep_keys()).unwrap();
        assert_eq!(axes.y(), AxisRole::Category("name".to_string()));
        assert_eq!(axes.x(), AxisRole::Value(vec!["revenue".to_string()]));
    }

    #[test]
    fn test_assignment_accepts_name_value_roles() {
        let keys = KeySpec::new().name("region").value("revenue");
        let axes = BarAxes::assign(Orientation::Horizontal, &keys).unwrap();
        assert_eq!(axes.y(), AxisRole::Category("region".to_string()));
        assert_eq!(axes.x(), AxisRole::Value(vec!["revenue".to_string()]));
    }

    #[test]
    fn test_assignment_requires_category_key() {
        let keys = KeySpec::new().y("revenue");
        assert!(BarAxes::assign(Orientation::Vertical, &keys).is_none());
    }

    #[test]
    fn test_accessors_are_orientation_independent() {
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            let axes = BarAxes::assign(orientation, &rep_keys()).unwrap();
            assert_eq!(axes.category_key(), "name");
            assert_eq!(axes.value_keys(), ["revenue".to_string()]);
        }
    }
}
