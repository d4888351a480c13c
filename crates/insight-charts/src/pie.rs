//! Pie and donut charts.

use crate::{colors, PathBuilder};
use insight_core::{Dataset, KeySpec, PercentFormatter, ValueFormatter};
use leptos::prelude::*;
use std::f64::consts::PI;

/// Angular extents per slice as (start, end) radians, clockwise from twelve
/// o'clock. Non-positive values produce zero-width slices rather than being
/// dropped, so slice index stays aligned with input order.
pub fn slice_angles(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return values.iter().map(|_| (0.0, 0.0)).collect();
    }

    let start_at = -PI / 2.0;
    let mut cursor = start_at;
    values
        .iter()
        .map(|v| {
            let sweep = v.max(0.0) / total * 2.0 * PI;
            let arc = (cursor, cursor + sweep);
            cursor += sweep;
            arc
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG path for one slice; `inner_radius` of zero yields a filled pie wedge
pub fn slice_path(cx: f64, cy: f64, radius: f64, inner_radius: f64, start: f64, end: f64) -> String {
    let large_arc = end - start > PI;
    let (x0, y0) = polar(cx, cy, radius, start);
    let (x1, y1) = polar(cx, cy, radius, end);

    if inner_radius <= 0.0 {
        PathBuilder::new()
            .move_to(cx, cy)
            .line_to(x0, y0)
            .arc_to(radius, radius, 0.0, large_arc, true, x1, y1)
            .close()
            .build()
    } else {
        let (ix0, iy0) = polar(cx, cy, inner_radius, start);
        let (ix1, iy1) = polar(cx, cy, inner_radius, end);
        PathBuilder::new()
            .move_to(x0, y0)
            .arc_to(radius, radius, 0.0, large_arc, true, x1, y1)
            .line_to(ix1, iy1)
            .arc_to(inner_radius, inner_radius, 0.0, large_arc, false, ix0, iy0)
            .close()
            .build()
    }
}

/// Part-of-whole chart; `donut` hollows the center and prints the total there
#[component]
pub fn PieChart(
    data: Dataset,
    keys: KeySpec,
    #[prop(default = false)] donut: bool,
) -> impl IntoView {
    let Some(name_key) = keys.name_key().map(str::to_string) else {
        return ().into_any();
    };
    let Some(value_key) = keys.value_key().map(str::to_string) else {
        return ().into_any();
    };

    let (width, height) = (420.0, 300.0);
    let (cx, cy) = (height / 2.0, height / 2.0);
    let radius = height / 2.0 - 10.0;
    let inner_radius = if donut { radius * 0.58 } else { 0.0 };

    let values: Vec<f64> = data
        .iter()
        .map(|r| r.number(&value_key).unwrap_or(0.0))
        .collect();
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let angles = slice_angles(&values);
    let pct = PercentFormatter::default();

    let slices: Vec<(String, usize, Option<(f64, f64, String)>)> = angles
        .iter()
        .enumerate()
        .map(|(i, &(start, end))| {
            let path = slice_path(cx, cy, radius, inner_radius, start, end);
            // Share label at the slice centroid, skipped for thin slices
            let share = if total > 0.0 { values[i].max(0.0) / total * 100.0 } else { 0.0 };
            let label = (share >= 4.0).then(|| {
                let mid = (start + end) / 2.0;
                let label_r = if donut { (radius + inner_radius) / 2.0 } else { radius * 0.62 };
                let (lx, ly) = polar(cx, cy, label_r, mid);
                (lx, ly, pct.format((share * 10.0).round() / 10.0))
            });
            (path, i, label)
        })
        .collect();

    let legend: Vec<(usize, String)> = data
        .iter()
        .enumerate()
        .map(|(i, r)| (i, r.display(&name_key)))
        .collect();

    view! {
        <div class="chart pie-chart">
            <svg viewBox=format!("0 0 {} {}", width, height) style="width: 100%; height: auto;">
                {slices
                    .into_iter()
                    .map(|(path, i, label)| {
                        view! {
                            <path
                                d=path
                                fill=colors::series(i)
                                stroke=colors::BG_CARD
                                stroke-width="1.5"
                            />
                            {label.map(|(lx, ly, text)| {
                                view! {
                                    <text
                                        x=lx
                                        y=ly
                                        text-anchor="middle"
                                        font-size="11"
                                        fill=colors::BG_CARD
                                    >
                                        {text}
                                    </text>
                                }
                            })}
                        }
                    })
                    .collect_view()}
                {donut.then(|| {
                    view! {
                        <text
                            x=cx
                            y=cy + 4.0
                            text-anchor="middle"
                            font-size="15"
                            font-weight="600"
                            fill=colors::TEXT_PRIMARY
                        >
                            {crate::format_tick(total)}
                        </text>
                    }
                })}
                <g transform=format!("translate({}, 24)", height + 16.0)>
                    {legend
                        .into_iter()
                        .map(|(i, name)| {
                            view! {
                                <rect
                                    x="0"
                                    y=(i as f64) * 20.0 - 9.0
                                    width="10"
                                    height="10"
                                    rx="2"
                                    fill=colors::series(i)
                                />
                                <text
                                    x="16"
                                    y=(i as f64) * 20.0
                                    font-size="12"
                                    fill=colors::TEXT_PRIMARY
                                >
                                    {name}
                                </text>
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

    #[test]
    fn test_slice_angles_cover_full_circle() {
        let angles = slice_angles(&[1.0, 2.0, 1.0]);
        assert_eq!(angles.len(), 3);
        assert!((angles[2].1 - angles[0].0 - 2.0 * PI).abs() < 1e-9);
        // Slices are contiguous
        assert_eq!(angles[0].1, angles[1].0);
        assert_eq!(angles[1].1, angles[2].0);
    }

    #[test]
    fn test_slice_angles_proportional() {
        let angles = slice_angles(&[3.0, 1.0]);
        let first = angles[0].1 - angles[0].0;
        let second = angles[1].1 - angles[1].0;
        assert!((first - 3.0 * second).abs() < 1e-9);
    }

    #[test]
    fn test_negative_values_become_zero_width() {
        let angles = slice_angles(&[5.0, -2.0, 5.0]);
        assert_eq!(angles[1].0, angles[1].1);
    }

    #[test]
    fn test_all_zero_values_do_not_panic() {
        let angles = slice_angles(&[0.0, 0.0]);
        assert_eq!(angles, vec![(0.0, 0.0), (0.0, 0.0)]);
    }

    #[test]
    fn test_donut_path_has_two_arcs() {
        let path = slice_path(100.0, 100.0, 80.0, 50.0, 0.0, PI / 2.0);
        assert_eq!(path.matches('A').count(), 2);
        assert!(path.ends_with('Z'));
    }
}
