//! # insight-core
//!
//! Core domain types for the Insight analytics dashboard.
//! Implements Strategy pattern for value formatting.

pub mod agent;
pub mod data;
pub mod report;
pub mod seed;

pub use agent::*;
pub use data::*;
pub use report::*;

// ============================================================================
// STRATEGY PATTERN: Formatters
// ============================================================================

/// Strategy trait for rendering metric values as display strings
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Currency formatter with thousands separators ("$1,250,000")
#[derive(Debug, Clone, Default)]
pub struct CurrencyFormatter;

impl ValueFormatter for CurrencyFormatter {
    fn format(&self, value: f64) -> String {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}${}", sign, group_thousands(value.abs()))
    }
}

/// Percentage formatter ("22.8%")
#[derive(Debug, Clone)]
pub struct PercentFormatter {
    pub decimals: usize,
}

impl Default for PercentFormatter {
    fn default() -> Self {
        Self { decimals: 1 }
    }
}

impl ValueFormatter for PercentFormatter {
    fn format(&self, value: f64) -> String {
        // Drop trailing ".0" for whole percentages
        if value.fract() == 0.0 {
            format!("{}%", value as i64)
        } else {
            format!("{:.prec$}%", value, prec = self.decimals)
        }
    }
}

/// Plain number formatter with thousands separators ("8,540")
#[derive(Debug, Clone, Default)]
pub struct PlainNumberFormatter;

impl ValueFormatter for PlainNumberFormatter {
    fn format(&self, value: f64) -> String {
        let sign = if value < 0.0 { "-" } else { "" };
        format!("{}{}", sign, group_thousands(value.abs()))
    }
}

/// Compact formatter for large numbers (K, M, B suffixes)
#[derive(Debug, Clone, Default)]
pub struct CompactNumberFormatter;

impl ValueFormatter for CompactNumberFormatter {
    fn format(&self, num: f64) -> String {
        let abs = num.abs();
        let sign = if num < 0.0 { "-" } else { "" };

        if abs >= 1_000_000_000.0 {
            format!("{}{:.2}B", sign, abs / 1_000_000_000.0)
        } else if abs >= 1_000_000.0 {
            format!("{}{:.1}M", sign, abs / 1_000_000.0)
        } else if abs >= 1_000.0 {
            format!("{}{:.1}K", sign, abs / 1_000.0)
        } else if abs.fract() == 0.0 {
            format!("{}{}", sign, abs as i64)
        } else {
            format!("{}{:.1}", sign, abs)
        }
    }
}

fn group_thousands(value: f64) -> String {
    let whole = value.trunc() as i64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

// ============================================================================
// CONNECTION STATE
// ============================================================================

/// Agent bridge connection state FSM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Reconnecting,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Disconnected => "Assistant offline",
            Self::Connecting => "Connecting...",
            Self::Connected => "Assistant online",
            Self::Reconnecting => "Reconnecting...",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Disconnected => "conn-disconnected",
            Self::Connecting => "conn-connecting",
            Self::Connected => "conn-connected",
            Self::Reconnecting => "conn-reconnecting",
        }
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    /// Categorical series palette, assigned to chart series in order
    pub const SERIES: [&str; 12] = [
        "#3b82f6", "#10b981", "#6366f1", "#f59e0b", "#ef4444", "#8b5cf6",
        "#ec4899", "#14b8a6", "#f97316", "#64748b", "#06b6d4", "#84cc16",
    ];

    /// Funnel stage palette, top to bottom
    pub const FUNNEL: [&str; 6] = [
        "#3b82f6", "#6366f1", "#8b5cf6", "#a855f7", "#c026d3", "#d946ef",
    ];

    pub const POSITIVE: &str = "#16a34a";
    pub const NEGATIVE: &str = "#dc2626";
    pub const BG_CARD: &str = "#ffffff";
    pub const BORDER: &str = "#e5e7eb";
    pub const GRID: &str = "#e5e7eb";
    pub const TEXT_PRIMARY: &str = "#111827";
    pub const TEXT_MUTED: &str = "#6b7280";

    pub fn series(i: usize) -> &'static str {
        SERIES[i % SERIES.len()]
    }

    pub fn series_alpha(i: usize, alpha: f64) -> String {
        let hex = SERIES[i % SERIES.len()];
        let r = u8::from_str_radix(&hex[1..3], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[3..5], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[5..7], 16).unwrap_or(0);
        format!("rgba({}, {}, {}, {:.2})", r, g, b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_formatter() {
        let f = CurrencyFormatter;
        assert_eq!(f.format(12_500_000.0), "$12,500,000");
        assert_eq!(f.format(980.0), "$980");
        assert_eq!(f.format(-4_200.0), "-$4,200");
    }

    #[test]
    fn test_percent_formatter() {
        let f = PercentFormatter::default();
        assert_eq!(f.format(22.8), "22.8%");
        assert_eq!(f.format(95.0), "95%");
    }

    #[test]
    fn test_compact_formatter() {
        let f = CompactNumberFormatter;
        assert_eq!(f.format(1_500_000.0), "1.5M");
        assert_eq!(f.format(2_500.0), "2.5K");
        assert_eq!(f.format(500.0), "500");
        assert_eq!(f.format(2_400_000_000.0), "2.40B");
    }

    #[test]
    fn test_series_alpha() {
        assert_eq!(colors::series_alpha(0, 0.2), "rgba(59, 130, 246, 0.20)");
    }
}
