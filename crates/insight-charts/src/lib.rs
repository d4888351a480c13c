//! # insight-charts
//!
//! D3.js-style SVG charting library built with Leptos.
//! Renders the closed set of chart encodings a report section may request.
//!
//! ## Architecture
//!
//! Uses Strategy pattern for:
//! - Scale computation (linear, band)
//! - Axis domain derivation (padding profiles)
//! - Path generation (line, area, arc)
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: scales, paths, tick formatting
//! - `domain` - Data-driven axis domain calculator
//! - `chart` - Chart-kind dispatch entry point
//! - `series` - Line, area, and stacked area charts
//! - `bar` - Vertical, horizontal, grouped, and stacked bars
//! - `pie` - Pie and donut charts
//! - `scatter` - Labeled scatter plots
//! - `treemap` - Area-proportional tile layout
//! - `funnel` - Stage conversion funnels
//! - `combo` - Bar + line composites

pub mod bar;
pub mod chart;
pub mod chartkit;
pub mod combo;
pub mod domain;
pub mod funnel;
pub mod pie;
pub mod scatter;
pub mod series;
pub mod treemap;

pub use bar::*;
pub use chart::*;
pub use chartkit::*;
pub use combo::*;
pub use domain::*;
pub use funnel::*;
pub use pie::*;
pub use scatter::*;
pub use series::*;
pub use treemap::*;

// Re-export colors from insight-core for convenience
pub use insight_core::colors;

/// Chart margin configuration
#[derive(Debug, Clone, Copy)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Standard section chart margins (left gutter fits tick labels)
    pub const fn standard() -> Self {
        Self::new(16.0, 16.0, 36.0, 56.0)
    }

    /// Horizontal bar layout (wide left gutter for category labels)
    pub const fn category_axis() -> Self {
        Self::new(16.0, 24.0, 28.0, 110.0)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::standard()
    }
}

/// Chart dimensions with margin handling
#[derive(Debug, Clone, Copy)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Inner width (excluding margins)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Inner height (excluding margins)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// SVG transform for inner chart area
    pub fn inner_transform(&self) -> String {
        format!("translate({}, {})", self.margin.left, self.margin.top)
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::new(640.0, 320.0)
    }
}
