//! Multi-page report model: pages, sections, visualization payloads.

use crate::{ChartKind, Dataset, KeySpec, ScaleDirectives};
use serde::{Deserialize, Serialize};

/// Number of pages a report navigation accepts (1-based)
pub const PAGE_COUNT: u8 = 6;

/// A complete multi-page report
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub pages: Vec<ReportPage>,
}

impl Report {
    pub fn page(&self, number: u8) -> Option<&ReportPage> {
        self.pages.iter().find(|p| p.number == number)
    }

    pub fn all_sections(&self) -> impl Iterator<Item = &Section> {
        self.pages.iter().flat_map(|p| p.sections.iter())
    }
}

/// One dashboard page: a numbered tab holding an ordered list of sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPage {
    pub number: u8,
    pub title: String,
    pub sections: Vec<Section>,
}

/// A titled card on a page wrapping one visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub viz: SectionViz,
    /// Wide sections span the full dashboard grid
    #[serde(default)]
    pub wide: bool,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>, viz: SectionViz) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            viz,
            wide: false,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn wide(mut self) -> Self {
        self.wide = true;
        self
    }
}

/// Visualization payload carried by a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SectionViz {
    Kpis {
        kpis: Vec<Kpi>,
    },
    Chart {
        kind: ChartKind,
        data: Dataset,
        keys: KeySpec,
        #[serde(default)]
        scales: ScaleDirectives,
    },
    Table {
        headers: Vec<String>,
        rows: Dataset,
    },
}

impl SectionViz {
    pub fn chart(kind: ChartKind, data: Dataset, keys: KeySpec) -> Self {
        Self::Chart {
            kind,
            data,
            keys,
            scales: ScaleDirectives::default(),
        }
    }
}

// ============================================================================
// KPI CARDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KpiFormat {
    Currency,
    Percent,
    #[default]
    Number,
}

/// One top-level metric card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub metric: String,
    pub value: f64,
    /// Period-over-period change in percent; negative means decline
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub target: f64,
    #[serde(default)]
    pub format: KpiFormat,
}

impl Kpi {
    pub fn new(metric: impl Into<String>, value: f64, change: f64, target: f64, format: KpiFormat) -> Self {
        Self {
            metric: metric.into(),
            value,
            change,
            target,
            format,
        }
    }

    /// Formatted display value per the KPI's format tag
    pub fn display_value(&self) -> String {
        use crate::{CurrencyFormatter, PercentFormatter, PlainNumberFormatter, ValueFormatter};
        match self.format {
            KpiFormat::Currency => CurrencyFormatter.format(self.value),
            KpiFormat::Percent => PercentFormatter::default().format(self.value),
            KpiFormat::Number => PlainNumberFormatter.format(self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;

    #[test]
    fn test_report_page_lookup() {
        let report = Report {
            title: "T".into(),
            pages: vec![
                ReportPage { number: 1, title: "One".into(), sections: vec![] },
                ReportPage { number: 2, title: "Two".into(), sections: vec![] },
            ],
        };
        assert_eq!(report.page(2).map(|p| p.title.as_str()), Some("Two"));
        assert!(report.page(9).is_none());
    }

    #[test]
    fn test_kpi_display_value() {
        let k = Kpi::new("Total Revenue", 12_500_000.0, 15.3, 12_000_000.0, KpiFormat::Currency);
        assert_eq!(k.display_value(), "$12,500,000");

        let p = Kpi::new("Retention", 94.5, 2.1, 95.0, KpiFormat::Percent);
        assert_eq!(p.display_value(), "94.5%");
    }

    #[test]
    fn test_section_viz_serde() {
        let viz = SectionViz::chart(
            ChartKind::Line,
            vec![Record::from_pairs([("month", "Jan")]).field("revenue", 10.0)],
            KeySpec::new().x("month").y("revenue"),
        );
        let section = Section::new("rev", "Revenue", viz).describe("Monthly revenue").wide();

        let json = serde_json::to_string(&section).unwrap();
        assert!(json.contains(r#""type":"chart""#));
        assert!(json.contains(r#""kind":"line""#));

        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back, section);
    }
}
