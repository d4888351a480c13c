//! Chart dataset model: records, key specifications, scale directives.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// CELL VALUES & RECORDS
// ============================================================================

/// A single field value: either free text or a numeric measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Numeric view of the cell; text cells yield `None`
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Display string, used for tick labels and table cells
    pub fn display(&self) -> String {
        match self {
            Self::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

/// One row of a dataset: an ordered field-name to value mapping.
///
/// Field order is preserved so table columns derived from the first record
/// appear in their authored order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<CellValue>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Builder-style field append
    pub fn field(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Exact-key lookup
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Case-insensitive lookup, used for header-to-key matching in tables
    pub fn get_ci(&self, key: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    /// Numeric value for a key, `None` for text or missing fields
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(CellValue::as_number)
    }

    /// Display string for a key; missing fields yield an empty string
    pub fn display(&self, key: &str) -> String {
        self.get(key).map(CellValue::display).unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of field names to string or number values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Record, A::Error> {
                let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, CellValue>()? {
                    fields.push((key, value));
                }
                Ok(Record { fields })
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

/// Ordered sequence of records. Insertion order defines the category axis.
pub type Dataset = Vec<Record>;

/// Collect every numeric value the given keys hold across a dataset
pub fn numeric_values(data: &Dataset, keys: &[String]) -> Vec<f64> {
    let mut values = Vec::new();
    for record in data {
        for key in keys {
            if let Some(n) = record.number(key) {
                values.push(n);
            }
        }
    }
    values
}

// ============================================================================
// KEY SPECIFICATION
// ============================================================================

/// Maps logical chart roles (x, y, value, name, label) to dataset field names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeySpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub y: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl KeySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x(mut self, key: impl Into<String>) -> Self {
        self.x = Some(key.into());
        self
    }

    pub fn y(mut self, key: impl Into<String>) -> Self {
        self.y.push(key.into());
        self
    }

    pub fn ys<K: Into<String>>(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.y.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn value(mut self, key: impl Into<String>) -> Self {
        self.value = Some(key.into());
        self
    }

    pub fn name(mut self, key: impl Into<String>) -> Self {
        self.name = Some(key.into());
        self
    }

    pub fn label(mut self, key: impl Into<String>) -> Self {
        self.label = Some(key.into());
        self
    }

    /// Category/index key: the x role, falling back to the name role
    pub fn index_key(&self) -> Option<&str> {
        self.x.as_deref().or(self.name.as_deref())
    }

    /// Numeric series keys: the y list, falling back to the value role
    pub fn series_keys(&self) -> Vec<String> {
        if !self.y.is_empty() {
            self.y.clone()
        } else {
            self.value.iter().cloned().collect()
        }
    }

    /// Name key for part-of-whole charts: name role, falling back to x
    pub fn name_key(&self) -> Option<&str> {
        self.name.as_deref().or(self.x.as_deref())
    }

    /// Value key for part-of-whole charts: value role, falling back to first y
    pub fn value_key(&self) -> Option<&str> {
        self.value.as_deref().or(self.y.first().map(String::as_str))
    }

    /// Point label key for scatter charts
    pub fn label_key(&self) -> Option<&str> {
        self.label.as_deref().or(self.name.as_deref())
    }
}

// ============================================================================
// SCALE DIRECTIVES
// ============================================================================

/// Policy controlling how an axis domain is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScaleType {
    /// Data-driven bounds with heuristic padding
    #[serde(rename = "auto")]
    Auto,
    /// Lower bound pinned to zero, upper bound delegated to the renderer
    #[default]
    #[serde(rename = "fromZero")]
    FromZero,
    /// Fixed 0-100 regardless of data
    #[serde(rename = "percentage")]
    Percentage,
    /// Caller-supplied explicit bounds
    #[serde(rename = "custom")]
    Custom,
}

/// One axis bound: a concrete number or "let the renderer auto-fit"
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisBound {
    Value(f64),
    Auto,
}

impl AxisBound {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Auto => None,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

/// Computed axis range: (lower bound, upper bound)
pub type Domain = (AxisBound, AxisBound);

/// Per-axis scaling configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisScale {
    #[serde(default)]
    pub scale: ScaleType,
    /// Explicit bounds; always wins when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<(f64, f64)>,
    /// Padding percent override for Auto mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_percent: Option<f64>,
}

impl AxisScale {
    pub fn auto() -> Self {
        Self {
            scale: ScaleType::Auto,
            ..Default::default()
        }
    }

    pub fn from_zero() -> Self {
        Self {
            scale: ScaleType::FromZero,
            ..Default::default()
        }
    }

    pub fn percentage() -> Self {
        Self {
            scale: ScaleType::Percentage,
            ..Default::default()
        }
    }

    pub fn custom(min: f64, max: f64) -> Self {
        Self {
            scale: ScaleType::Custom,
            bounds: Some((min, max)),
            padding_percent: None,
        }
    }
}

/// Scale directives for both axes
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScaleDirectives {
    #[serde(default)]
    pub x: AxisScale,
    #[serde(default)]
    pub y: AxisScale,
}

impl ScaleDirectives {
    /// Default chart scaling: value axis auto-fit from zero
    pub fn standard() -> Self {
        Self {
            x: AxisScale::auto(),
            y: AxisScale::auto(),
        }
    }
}

// ============================================================================
// CHART KINDS
// ============================================================================

/// Closed set of supported chart encodings, plus a preserved unknown tag
/// so unrecognized wire values degrade to a visible fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Area,
    StackedArea,
    Bar,
    HorizontalBar,
    GroupedBar,
    StackedBar,
    Pie,
    Donut,
    Scatter,
    Treemap,
    Funnel,
    BarLine,
    StackedBarLine,
    Unknown(String),
}

impl ChartKind {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "line" => Self::Line,
            "area" => Self::Area,
            "stacked-area" => Self::StackedArea,
            "bar" => Self::Bar,
            "horizontal-bar" => Self::HorizontalBar,
            "grouped-bar" => Self::GroupedBar,
            "stacked-bar" => Self::StackedBar,
            "pie" => Self::Pie,
            "donut" => Self::Donut,
            "scatter" => Self::Scatter,
            "treemap" => Self::Treemap,
            "funnel" => Self::Funnel,
            "bar-line" => Self::BarLine,
            "stacked-bar-line" => Self::StackedBarLine,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::Line => "line",
            Self::Area => "area",
            Self::StackedArea => "stacked-area",
            Self::Bar => "bar",
            Self::HorizontalBar => "horizontal-bar",
            Self::GroupedBar => "grouped-bar",
            Self::StackedBar => "stacked-bar",
            Self::Pie => "pie",
            Self::Donut => "donut",
            Self::Scatter => "scatter",
            Self::Treemap => "treemap",
            Self::Funnel => "funnel",
            Self::BarLine => "bar-line",
            Self::StackedBarLine => "stacked-bar-line",
            Self::Unknown(tag) => tag,
        }
    }
}

impl Serialize for ChartKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for ChartKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::parse(&tag))
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record::from_pairs([("month", CellValue::from("Jan"))]).field("revenue", 980_000.0)
    }

    #[test]
    fn test_record_lookup() {
        let r = sample_record();
        assert_eq!(r.number("revenue"), Some(980_000.0));
        assert_eq!(r.number("month"), None);
        assert_eq!(r.display("month"), "Jan");
        assert_eq!(r.display("missing"), "");
    }

    #[test]
    fn test_record_case_insensitive_lookup() {
        let r = sample_record();
        assert_eq!(r.get_ci("Revenue").and_then(CellValue::as_number), Some(980_000.0));
        assert_eq!(r.get_ci("MONTH").map(CellValue::display).as_deref(), Some("Jan"));
        assert!(r.get_ci("nope").is_none());
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let r = sample_record();
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"month":"Jan","revenue":980000.0}"#);

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_record_preserves_field_order() {
        let json = r#"{"z":1,"a":2,"m":3}"#;
        let r: Record = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = r.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_numeric_values_skips_text_and_missing() {
        let data = vec![
            Record::from_pairs([("m", CellValue::from("Jan"))]).field("v", 10.0),
            Record::from_pairs([("m", CellValue::from("Feb"))]),
            Record::from_pairs([("m", CellValue::from("Mar"))]).field("v", 30.0),
        ];
        assert_eq!(numeric_values(&data, &["v".to_string()]), vec![10.0, 30.0]);
    }

    #[test]
    fn test_key_spec_fallbacks() {
        let spec = KeySpec::new().name("region").value("revenue");
        assert_eq!(spec.index_key(), Some("region"));
        assert_eq!(spec.series_keys(), vec!["revenue".to_string()]);
        assert_eq!(spec.value_key(), Some("revenue"));

        let multi = KeySpec::new().x("month").ys(["a", "b"]);
        assert_eq!(multi.index_key(), Some("month"));
        assert_eq!(multi.series_keys(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_chart_kind_wire_tags() {
        assert_eq!(ChartKind::parse("stacked-bar-line"), ChartKind::StackedBarLine);
        assert_eq!(ChartKind::StackedBarLine.tag(), "stacked-bar-line");

        let unknown = ChartKind::parse("hexbin");
        assert_eq!(unknown, ChartKind::Unknown("hexbin".to_string()));
        assert_eq!(unknown.tag(), "hexbin");
    }

    #[test]
    fn test_scale_type_wire_names() {
        assert_eq!(serde_json::to_string(&ScaleType::FromZero).unwrap(), r#""fromZero""#);
        let parsed: ScaleType = serde_json::from_str(r#""percentage""#).unwrap();
        assert_eq!(parsed, ScaleType::Percentage);
    }
}
