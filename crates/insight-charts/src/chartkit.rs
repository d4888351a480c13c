//! # chartkit
//!
//! Core chart primitives: scales, path builders, tick formatting.
//! Implements Strategy pattern for flexible scale behaviors.

use insight_core::{CompactNumberFormatter, Dataset, ValueFormatter};
use std::fmt::Write;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;

    /// Inverse scale (range to domain)
    fn invert(&self, value: f64) -> f64;

    /// Generate tick values
    fn ticks(&self, count: usize) -> Vec<f64>;
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
    clamp: bool,
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Get domain bounds
    pub fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    /// Get range bounds
    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    /// Generate "nice" tick values (rounded to clean numbers)
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        let range = max - min;

        if range == 0.0 || count == 0 {
            return vec![min];
        }

        let rough_step = range / count as f64;
        let magnitude = 10.0_f64.powf(rough_step.log10().floor());
        let residual = rough_step / magnitude;

        let nice_step = if residual <= 1.0 {
            magnitude
        } else if residual <= 2.0 {
            2.0 * magnitude
        } else if residual <= 5.0 {
            5.0 * magnitude
        } else {
            10.0 * magnitude
        };

        let nice_min = (min / nice_step).floor() * nice_step;
        let nice_max = (max / nice_step).ceil() * nice_step;

        let mut ticks = Vec::new();
        let mut tick = nice_min;

        while tick <= nice_max + nice_step * 0.5 {
            if tick >= min && tick <= max {
                ticks.push(tick);
            }
            tick += nice_step;
        }

        ticks
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let mut normalized = (value - d_min) / (d_max - d_min);

        if self.clamp {
            normalized = normalized.clamp(0.0, 1.0);
        }

        r_min + normalized * (r_max - r_min)
    }

    fn invert(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (r_max - r_min).abs() < f64::EPSILON {
            return (d_min + d_max) / 2.0;
        }

        let normalized = (value - r_min) / (r_max - r_min);
        d_min + normalized * (d_max - d_min)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        if count <= 1 {
            return vec![min];
        }

        let step = (max - min) / (count - 1) as f64;
        (0..count).map(|i| min + step * i as f64).collect()
    }
}

// ============================================================================
// BAND SCALE (for categorical axes)
// ============================================================================

/// Band scale for categorical data (bar positions, category ticks)
#[derive(Debug, Clone)]
pub struct BandScale {
    domain_count: usize,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    pub fn new(count: usize) -> Self {
        Self {
            domain_count: count,
            range: (0.0, 1.0),
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.clamp(0.0, 1.0);
        self
    }

    pub fn padding_uniform(self, padding: f64) -> Self {
        self.padding(padding, padding)
    }

    /// Get band width (width of each bar)
    pub fn bandwidth(&self) -> f64 {
        if self.domain_count == 0 {
            return 0.0;
        }

        let (r_min, r_max) = self.range;
        let total_range = r_max - r_min;
        let n = self.domain_count as f64;

        let outer_total = self.padding_outer * 2.0;
        let inner_total = self.padding_inner * (n - 1.0).max(0.0);

        let available = total_range / (n + outer_total + inner_total);
        available * (1.0 - self.padding_inner)
    }

    /// Get step size (band + gap)
    pub fn step(&self) -> f64 {
        if self.domain_count == 0 {
            return 0.0;
        }

        let (r_min, r_max) = self.range;
        (r_max - r_min) / self.domain_count as f64
    }

    /// Get position for index
    pub fn scale(&self, index: usize) -> f64 {
        if self.domain_count == 0 {
            return self.range.0;
        }

        let (r_min, _) = self.range;
        let step = self.step();
        let offset = self.padding_outer * step;

        r_min + offset + index as f64 * step
    }

    /// Get center position for index
    pub fn scale_center(&self, index: usize) -> f64 {
        self.scale(index) + self.bandwidth() / 2.0
    }
}

impl Default for BandScale {
    fn default() -> Self {
        Self::new(10)
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        write!(self.commands, "M{:.2},{:.2}", x, y).unwrap();
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        write!(self.commands, "L{:.2},{:.2}", x, y).unwrap();
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        write!(self.commands, "H{:.2}", x).unwrap();
        self
    }

    pub fn vertical_to(mut self, y: f64) -> Self {
        write!(self.commands, "V{:.2}", y).unwrap();
        self
    }

    pub fn arc_to(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        write!(
            self.commands,
            "A{:.2},{:.2},{:.2},{},{},{:.2},{:.2}",
            rx,
            ry,
            rotation,
            large_arc as u8,
            sweep as u8,
            x,
            y
        )
        .unwrap();
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

// ============================================================================
// PATH GENERATORS
// ============================================================================

/// Generate line path (non-closed)
pub fn line_path(points: &[(f64, f64)]) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut path = String::with_capacity(points.len() * 20);
    let (x, y) = points[0];
    write!(path, "M{:.2},{:.2}", x, y).unwrap();

    for &(x, y) in &points[1..] {
        write!(path, "L{:.2},{:.2}", x, y).unwrap();
    }

    path
}

/// Generate closed area path with a flat baseline
pub fn area_path(points: &[(f64, f64)], baseline_y: f64) -> String {
    if points.is_empty() {
        return String::new();
    }

    let mut builder = PathBuilder::new()
        .move_to(points[0].0, baseline_y)
        .line_to(points[0].0, points[0].1);

    for &(x, y) in &points[1..] {
        builder = builder.line_to(x, y);
    }

    if let Some(&(last_x, _)) = points.last() {
        builder = builder.line_to(last_x, baseline_y);
    }

    builder.close().build()
}

/// Generate closed band path between an upper and lower point series.
/// Used for stacked areas where the baseline is the previous layer.
pub fn band_path(upper: &[(f64, f64)], lower: &[(f64, f64)]) -> String {
    if upper.is_empty() || lower.is_empty() {
        return String::new();
    }

    let mut builder = PathBuilder::new().move_to(upper[0].0, upper[0].1);
    for &(x, y) in &upper[1..] {
        builder = builder.line_to(x, y);
    }
    for &(x, y) in lower.iter().rev() {
        builder = builder.line_to(x, y);
    }

    builder.close().build()
}

// ============================================================================
// STACKING
// ============================================================================

/// Cumulative (baseline, top) pairs per series for stacked encodings.
///
/// Output is indexed `[series][row]`. Missing or text cells contribute zero
/// so a sparse row cannot break the stack above it.
pub fn stack_series(data: &Dataset, keys: &[String]) -> Vec<Vec<(f64, f64)>> {
    let mut totals = vec![0.0; data.len()];
    let mut layers = Vec::with_capacity(keys.len());

    for key in keys {
        let layer: Vec<(f64, f64)> = data
            .iter()
            .zip(totals.iter_mut())
            .map(|(record, total)| {
                let v = record.number(key).unwrap_or(0.0).max(0.0);
                let base = *total;
                *total += v;
                (base, *total)
            })
            .collect();
        layers.push(layer);
    }

    layers
}

// ============================================================================
// LABELS & TICK FORMATTING
// ============================================================================

/// Longest category label rendered before truncation
pub const MAX_LABEL_CHARS: usize = 12;

/// Truncate long category labels to keep axis text from colliding
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() > MAX_LABEL_CHARS {
        let head: String = label.chars().take(9).collect();
        format!("{}...", head)
    } else {
        label.to_string()
    }
}

/// Format a numeric axis tick with K/M/B compaction
pub fn format_tick(value: f64) -> String {
    CompactNumberFormatter.format(value)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use insight_core::Record;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 250.0);
        assert_eq!(scale.scale(100.0), 500.0);
    }

    #[test]
    fn test_linear_scale_invert() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);

        assert_eq!(scale.invert(250.0), 50.0);
    }

    #[test]
    fn test_band_scale() {
        let scale = BandScale::new(5).range(0.0, 100.0);
        let bw = scale.bandwidth();
        assert!(bw > 0.0);
        assert!(bw < 20.0); // Should be less than 100/5
    }

    #[test]
    fn test_path_builder_arc() {
        let path = PathBuilder::new()
            .move_to(0.0, 0.0)
            .arc_to(50.0, 50.0, 0.0, true, false, 100.0, 0.0)
            .close()
            .build();

        assert!(path.starts_with("M0.00,0.00"));
        assert!(path.contains("A50.00,50.00,0.00,1,0,100.00,0.00"));
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn test_line_path() {
        let path = line_path(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)]);

        assert!(path.starts_with("M0.00,0.00"));
        assert!(path.contains("L50.00,50.00"));
    }

    #[test]
    fn test_stack_series_accumulates() {
        let data = vec![
            Record::new().field("m", "Jan").field("a", 10.0).field("b", 5.0),
            Record::new().field("m", "Feb").field("a", 20.0).field("b", 8.0),
        ];
        let layers = stack_series(&data, &["a".to_string(), "b".to_string()]);

        assert_eq!(layers[0], vec![(0.0, 10.0), (0.0, 20.0)]);
        assert_eq!(layers[1], vec![(10.0, 15.0), (20.0, 28.0)]);
    }

    #[test]
    fn test_stack_series_skips_missing_cells() {
        let data = vec![
            Record::new().field("m", "Jan").field("a", 10.0),
            Record::new().field("m", "Feb").field("a", 20.0).field("b", 8.0),
        ];
        let layers = stack_series(&data, &["a".to_string(), "b".to_string()]);

        // Missing "b" in Jan contributes zero, not a hole
        assert_eq!(layers[1][0], (10.0, 10.0));
        assert_eq!(layers[1][1], (20.0, 28.0));
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Revenue"), "Revenue");
        assert_eq!(truncate_label("North America"), "North Ame...");
        // Boundary: exactly 12 chars is untouched
        assert_eq!(truncate_label("abcdefghijkl"), "abcdefghijkl");
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(1_500_000.0), "1.5M");
        assert_eq!(format_tick(2_500.0), "2.5K");
        assert_eq!(format_tick(85.0), "85");
    }
}
