//! Wire types of the analysis service's `analyzeResult` object.
//!
//! Only the fields the normalizer reads are declared; everything else is
//! ignored. Every field tolerates being absent or `null`, and positional
//! fields also tolerate values of the wrong type.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize `null` as the type's default.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserialize an integer field, treating any non-integer value as absent.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer).map(|v| v.as_ref().and_then(Value::as_i64))
}

/// Deserialize a polygon, keeping coordinate positions.
///
/// Non-numeric entries become NaN so the x,y alternation is preserved.
fn lenient_polygon<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .map(|v| v.as_f64().unwrap_or(f64::NAN))
                .collect(),
        ),
        _ => None,
    })
}

/// Top-level analysis result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzeResult {
    pub model_id: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub content: String,
    #[serde(deserialize_with = "null_default")]
    pub pages: Vec<RawPage>,
    #[serde(deserialize_with = "null_default")]
    pub paragraphs: Vec<RawParagraph>,
    #[serde(deserialize_with = "null_default")]
    pub tables: Vec<RawTable>,
    #[serde(deserialize_with = "null_default")]
    pub sections: Vec<RawSection>,
    #[serde(deserialize_with = "null_default")]
    pub key_value_pairs: Vec<RawKeyValuePair>,
    #[serde(deserialize_with = "null_default")]
    pub figures: Vec<RawFigure>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct RawSpan {
    #[serde(deserialize_with = "lenient_int")]
    pub offset: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    pub length: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawBoundingRegion {
    #[serde(deserialize_with = "lenient_int")]
    pub page_number: Option<i64>,
    #[serde(deserialize_with = "lenient_polygon")]
    pub polygon: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawWord {
    #[serde(deserialize_with = "null_default")]
    pub content: String,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPage {
    pub page_number: Option<i64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub unit: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub words: Vec<RawWord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawParagraph {
    pub role: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub content: String,
    #[serde(deserialize_with = "null_default")]
    pub spans: Vec<RawSpan>,
    #[serde(deserialize_with = "null_default")]
    pub bounding_regions: Vec<RawBoundingRegion>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTableCell {
    #[serde(deserialize_with = "lenient_int")]
    pub row_index: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    pub column_index: Option<i64>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTable {
    #[serde(deserialize_with = "lenient_int")]
    pub row_count: Option<i64>,
    #[serde(deserialize_with = "lenient_int")]
    pub column_count: Option<i64>,
    #[serde(deserialize_with = "null_default")]
    pub cells: Vec<RawTableCell>,
    #[serde(deserialize_with = "null_default")]
    pub spans: Vec<RawSpan>,
    #[serde(deserialize_with = "null_default")]
    pub bounding_regions: Vec<RawBoundingRegion>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSection {
    #[serde(deserialize_with = "null_default")]
    pub spans: Vec<RawSpan>,
    #[serde(deserialize_with = "null_default")]
    pub elements: Vec<String>,
}

/// Key or value side of a key/value pair.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawKeyValueElement {
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawKeyValuePair {
    pub key: Option<RawKeyValueElement>,
    pub value: Option<RawKeyValueElement>,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCaption {
    pub content: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub spans: Vec<RawSpan>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFigure {
    pub id: Option<String>,
    pub caption: Option<RawCaption>,
    #[serde(deserialize_with = "null_default")]
    pub spans: Vec<RawSpan>,
    #[serde(deserialize_with = "null_default")]
    pub bounding_regions: Vec<RawBoundingRegion>,
}
