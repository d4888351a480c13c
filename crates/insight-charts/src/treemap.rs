//! Area-proportional treemap.
//!
//! Deterministic binary-split layout: items are divided into two runs of
//! near-equal weight, the rectangle is split along its longer side, and each
//! half recurses. Input order is preserved within the layout.

use crate::{colors, truncate_label};
use insight_core::{CompactNumberFormatter, Dataset, KeySpec, ValueFormatter};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn area(&self) -> f64 {
        self.w * self.h
    }
}

/// One positioned tile, index referring back to the input item order
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub index: usize,
    pub rect: Rect,
}

/// Lay out weights into `bounds`; tile areas are proportional to weights.
/// Non-positive weights receive zero-area tiles.
pub fn treemap_layout(weights: &[f64], bounds: Rect) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(weights.len());
    let indexed: Vec<(usize, f64)> = weights
        .iter()
        .map(|w| w.max(0.0))
        .enumerate()
        .collect();
    split(&indexed, bounds, &mut tiles);
    tiles.sort_by_key(|t| t.index);
    tiles
}

fn split(items: &[(usize, f64)], rect: Rect, out: &mut Vec<Tile>) {
    match items {
        [] => {}
        [(index, _)] => out.push(Tile { index: *index, rect }),
        _ => {
            let total: f64 = items.iter().map(|(_, w)| w).sum();
            if total <= 0.0 {
                // All-zero run: give every item an empty tile at the corner
                for &(index, _) in items {
                    out.push(Tile {
                        index,
                        rect: Rect { x: rect.x, y: rect.y, w: 0.0, h: 0.0 },
                    });
                }
                return;
            }

            // Find the split point that best balances the two runs
            let mut best_cut = 1;
            let mut best_diff = f64::MAX;
            let mut prefix = 0.0;
            for (i, (_, w)) in items.iter().enumerate().take(items.len() - 1) {
                prefix += w;
                let diff = (total - 2.0 * prefix).abs();
                if diff < best_diff {
                    best_diff = diff;
                    best_cut = i + 1;
                }
            }

            let (left, right) = items.split_at(best_cut);
            let left_total: f64 = left.iter().map(|(_, w)| w).sum();
            let fraction = left_total / total;

            let (a, b) = if rect.w >= rect.h {
                let w_left = rect.w * fraction;
                (
                    Rect { x: rect.x, y: rect.y, w: w_left, h: rect.h },
                    Rect { x: rect.x + w_left, y: rect.y, w: rect.w - w_left, h: rect.h },
                )
            } else {
                let h_top = rect.h * fraction;
                (
                    Rect { x: rect.x, y: rect.y, w: rect.w, h: h_top },
                    Rect { x: rect.x, y: rect.y + h_top, w: rect.w, h: rect.h - h_top },
                )
            };

            split(left, a, out);
            split(right, b, out);
        }
    }
}

/// Treemap chart keyed by a name and value role
#[component]
pub fn TreemapChart(data: Dataset, keys: KeySpec) -> impl IntoView {
    let Some(name_key) = keys.name_key().map(str::to_string) else {
        return ().into_any();
    };
    let Some(value_key) = keys.value_key().map(str::to_string) else {
        return ().into_any();
    };

    let (width, height) = (640.0, 320.0);
    let weights: Vec<f64> = data
        .iter()
        .map(|r| r.number(&value_key).unwrap_or(0.0))
        .collect();
    let tiles = treemap_layout(&weights, Rect { x: 0.0, y: 0.0, w: width, h: height });
    let compact = CompactNumberFormatter;

    let cells: Vec<(Rect, usize, String, String)> = tiles
        .iter()
        .map(|tile| {
            let record = &data[tile.index];
            (
                tile.rect,
                tile.index,
                truncate_label(&record.display(&name_key)),
                compact.format(weights[tile.index]),
            )
        })
        .collect();

    view! {
        <div class="chart treemap-chart">
            <svg viewBox=format!("0 0 {} {}", width, height) style="width: 100%; height: auto;">
                {cells
                    .into_iter()
                    .map(|(rect, i, name, value)| {
                        let show_text = rect.w > 70.0 && rect.h > 34.0;
                        view! {
                            <rect
                                x=rect.x
                                y=rect.y
                                width=rect.w
                                height=rect.h
                                fill=colors::series(i)
                                stroke=colors::BG_CARD
                                stroke-width="2"
                            />
                            {show_text.then(|| {
                                view! {
                                    <text
                                        x=rect.x + 8.0
                                        y=rect.y + 18.0
                                        font-size="12"
                                        font-weight="600"
                                        fill=colors::BG_CARD
                                    >
                                        {name}
                                    </text>
                                    <text
                                        x=rect.x + 8.0
                                        y=rect.y + 34.0
                                        font-size="11"
                                        fill=colors::BG_CARD
                                    >
                                        {value}
                                    </text>
                                }
                            })}
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

    const BOUNDS: Rect = Rect { x: 0.0, y: 0.0, w: 640.0, h: 320.0 };

    #[test]
    fn test_tile_areas_proportional_to_weights() {
        let weights = [40.0, 30.0, 20.0, 10.0];
        let tiles = treemap_layout(&weights, BOUNDS);
        let total_area = BOUNDS.area();
        let total_weight: f64 = weights.iter().sum();

        assert_eq!(tiles.len(), 4);
        for tile in &tiles {
            let expected = weights[tile.index] / total_weight * total_area;
            assert!(
                (tile.rect.area() - expected).abs() < 1e-6,
                "tile {} area {} expected {}",
                tile.index,
                tile.rect.area(),
                expected
            );
        }
    }

    #[test]
    fn test_tiles_fill_bounds_exactly() {
        let tiles = treemap_layout(&[5.0, 3.0, 2.0], BOUNDS);
        let sum: f64 = tiles.iter().map(|t| t.rect.area()).sum();
        assert!((sum - BOUNDS.area()).abs() < 1e-6);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let weights = [8.0, 1.0, 4.0, 2.0, 6.0];
        let first = treemap_layout(&weights, BOUNDS);
        assert_eq!(treemap_layout(&weights, BOUNDS), first);
    }

    #[test]
    fn test_tiles_stay_within_bounds() {
        let tiles = treemap_layout(&[9.0, 7.0, 5.0, 3.0, 1.0], BOUNDS);
        for tile in tiles {
            assert!(tile.rect.x >= -1e-9 && tile.rect.y >= -1e-9);
            assert!(tile.rect.x + tile.rect.w <= BOUNDS.w + 1e-9);
            assert!(tile.rect.y + tile.rect.h <= BOUNDS.h + 1e-9);
        }
    }

    #[test]
    fn test_single_item_takes_everything() {
        let tiles = treemap_layout(&[42.0], BOUNDS);
        assert_eq!(tiles, vec![Tile { index: 0, rect: BOUNDS }]);
    }

    #[test]
    fn test_zero_weights_do_not_panic() {
        let tiles = treemap_layout(&[0.0, 0.0, 0.0], BOUNDS);
        assert_eq!(tiles.len(), 3);
        for tile in tiles {
            assert_eq!(tile.rect.area(), 0.0);
        }
    }
}
