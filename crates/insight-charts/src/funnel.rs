//! Stage conversion funnel.
//!
//! Bespoke layout, not delegated to the cartesian frame: each stage's bar
//! width is proportional to its count relative to the first stage's count,
//! stages listed top to bottom in input order with no reordering.

use crate::colors;
use insight_core::{Dataset, KeySpec, PlainNumberFormatter, ValueFormatter};
use leptos::prelude::*;

/// Width percentages per stage, relative to the first stage's count.
/// A zero or missing first count divides by one so later stages still render.
pub fn stage_widths(data: &Dataset, value_key: &str) -> Vec<f64> {
    let first = data
        .first()
        .and_then(|r| r.number(value_key))
        .filter(|v| *v != 0.0)
        .unwrap_or(1.0);

    data.iter()
        .map(|r| r.number(value_key).unwrap_or(0.0) / first * 100.0)
        .collect()
}

/// Funnel chart with centered stage bars
#[component]
pub fn FunnelChart(data: Dataset, keys: KeySpec) -> impl IntoView {
    let Some(name_key) = keys.name_key().map(str::to_string) else {
        return ().into_any();
    };
    let Some(value_key) = keys.value_key().map(str::to_string) else {
        return ().into_any();
    };

    let width = 640.0;
    let row_h = 44.0;
    let gap = 8.0;
    let height = data.len() as f64 * (row_h + gap);

    let widths = stage_widths(&data, &value_key);
    let numbers = PlainNumberFormatter;

    let stages: Vec<(f64, f64, f64, String, String, usize)> = data
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let pct = widths[i].clamp(0.0, 100.0);
            let bar_w = width * pct / 100.0;
            let x = (width - bar_w) / 2.0;
            let y = i as f64 * (row_h + gap);
            let name = record.display(&name_key);
            let count = numbers.format(record.number(&value_key).unwrap_or(0.0));
            (x, y, bar_w, name, count, i)
        })
        .collect();

    view! {
        <div class="chart funnel-chart">
            <svg viewBox=format!("0 0 {} {}", width, height) style="width: 100%; height: auto;">
                {stages
                    .into_iter()
                    .map(|(x, y, bar_w, name, count, i)| {
                        view! {
                            <rect
                                x=x
                                y=y
                                width=bar_w.max(2.0)
                                height=row_h
                                rx="4"
                                fill=colors::FUNNEL[i % colors::FUNNEL.len()]
                            />
                            <text
                                x=width / 2.0
                                y=y + row_h / 2.0 - 3.0
                                text-anchor="middle"
                                font-size="12"
                                font-weight="600"
                                fill=colors::BG_CARD
                            >
                                {name}
                            </text>
                            <text
                                x=width / 2.0
                                y=y + row_h / 2.0 + 13.0
                                text-anchor="middle"
                                font-size="11"
                                fill=colors::BG_CARD
                            >
                                {count}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_core::Record;

    fn stages(counts: &[(&str, f64)]) -> Dataset {
        counts
            .iter()
            .map(|(stage, count)| Record::new().field("stage", *stage).field("count", *count))
            .collect()
    }

    #[test]
    fn test_second_stage_width_relative_to_first() {
        let data = stages(&[("Leads", 1000.0), ("Won", 100.0)]);
        let widths = stage_widths(&data, "count");
        assert_eq!(widths, vec![100.0, 10.0]);
    }

    #[test]
    fn test_input_order_is_preserved() {
        // A later stage larger than the first must not be reordered
        let data = stages(&[("A", 500.0), ("B", 800.0), ("C", 200.0)]);
        let widths = stage_widths(&data, "count");
        assert_eq!(widths, vec![100.0, 160.0, 40.0]);
    }

    #[test]
    fn test_zero_first_stage_does_not_divide_by_zero() {
        let data = stages(&[("Empty", 0.0), ("Next", 50.0)]);
        let widths = stage_widths(&data, "count");
        assert!(widths.iter().all(|w| w.is_finite()));
        assert_eq!(widths[1], 5000.0); // relative to the fallback divisor of 1
    }

    #[test]
    fn test_missing_counts_yield_zero_width() {
        let data = vec![
            Record::new().field("stage", "Leads").field("count", 1000.0),
            Record::new().field("stage", "Broken"),
        ];
        assert_eq!(stage_widths(&data, "count"), vec![100.0, 0.0]);
    }
}
