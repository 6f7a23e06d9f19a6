//! Conversion of analysis results into output payloads.
//!
//! A conversion parses one analysis result, renders its reading order and
//! packages the outcome either as the HTML string or as the passthrough JSON
//! payload (the original `analyzeResult` with `contentFormat` and `metadata`
//! added).
//!
//! # Example
//!
//! ```no_run
//! use unlayout::convert::{convert_file, ContentFormat, ConvertOptions, LocalOutputStore, OutputStore};
//!
//! fn main() -> unlayout::Result<()> {
//!     let options = ConvertOptions::new().with_content_format(ContentFormat::Html);
//!     let result = convert_file("statement.json", &options)?;
//!     LocalOutputStore::new().save(&result.payload, "data/raw/raw_statement.json".as_ref())?;
//!     Ok(())
//! }
//! ```

mod store;

pub use store::{default_output_path, LocalOutputStore, OutputStore};

use crate::detect::unwrap_analyze_result;
use crate::error::{Error, Result};
use crate::model::Metadata;
use crate::parser::{normalize, read_value, AnalyzeResult};
use crate::render::{to_html, to_html_with_stats, ExtractionStats, RenderOptions};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Options for document conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Rendering options
    pub render: RenderOptions,

    /// Content format recorded in the JSON payload
    pub content_format: ContentFormat,

    /// Output format
    pub output_format: OutputFormat,

    /// Whether to collect statistics during conversion
    pub collect_stats: bool,

    /// Convert batches in parallel
    pub parallel: bool,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Set the content format.
    pub fn with_content_format(mut self, format: ContentFormat) -> Self {
        self.content_format = format;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Enable or disable parallel batch conversion.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    fn needs_html(&self) -> bool {
        self.collect_stats
            || self.output_format == OutputFormat::Html
            || self.content_format == ContentFormat::Html
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            content_format: ContentFormat::default(),
            output_format: OutputFormat::default(),
            collect_stats: false,
            parallel: true,
        }
    }
}

/// Content format recorded as `contentFormat` in JSON payloads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    /// Plain text content
    #[default]
    Text,

    /// Markdown content
    Markdown,

    /// Rendered HTML replaces `content`
    Html,
}

impl ContentFormat {
    /// Wire name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentFormat::Text => "text",
            ContentFormat::Markdown => "markdown",
            ContentFormat::Html => "html",
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ContentFormat::Text),
            "markdown" => Ok(ContentFormat::Markdown),
            "html" => Ok(ContentFormat::Html),
            other => Err(Error::InvalidInput(format!(
                "unknown content format '{}' (expected text, markdown or html)",
                other
            ))),
        }
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Passthrough JSON payload
    #[default]
    Json,

    /// Rendered HTML only
    Html,
}

impl OutputFormat {
    /// File extension of outputs in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }
}

/// Converted output, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// An HTML document
    Html(String),

    /// A JSON payload object
    Json(Value),
}

impl Payload {
    /// MIME type of the payload.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Payload::Html(_) => "text/html",
            Payload::Json(_) => "application/json",
        }
    }

    /// The HTML string, if this is an HTML payload.
    pub fn as_html(&self) -> Option<&str> {
        match self {
            Payload::Html(html) => Some(html),
            Payload::Json(_) => None,
        }
    }

    /// The JSON object, if this is a JSON payload.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Html(_) => None,
        }
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Converted payload
    pub payload: Payload,

    /// Source document metadata
    pub metadata: Metadata,

    /// Extraction statistics (if collected)
    pub stats: Option<ExtractionStats>,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(payload: Payload, metadata: Metadata) -> Self {
        Self {
            payload,
            metadata,
            stats: None,
        }
    }

    /// Set extraction statistics.
    pub fn with_stats(mut self, stats: ExtractionStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// MIME type of the payload.
    pub fn mime_type(&self) -> &'static str {
        self.payload.mime_type()
    }
}

/// Convert an analysis-result JSON value (bare or enveloped).
pub fn convert_value(value: Value, options: &ConvertOptions) -> Result<ConvertResult> {
    let mut raw = unwrap_analyze_result(value)?;
    let doc = normalize(AnalyzeResult::deserialize(&raw)?);
    let metadata = doc.metadata();

    let mut stats = None;
    let html = if !options.needs_html() {
        None
    } else if options.collect_stats {
        let rendered = to_html_with_stats(&doc, &options.render)?;
        stats = Some(rendered.stats);
        Some(rendered.content)
    } else {
        Some(to_html(&doc, &options.render)?)
    };

    let payload = match (options.output_format, html) {
        (OutputFormat::Html, Some(html)) => Payload::Html(html),
        (_, html) => {
            let obj = raw.as_object_mut().ok_or_else(|| {
                Error::InvalidInput("analyzeResult must be a JSON object".to_string())
            })?;
            if let (ContentFormat::Html, Some(html)) = (options.content_format, html) {
                obj.insert("content".to_string(), Value::String(html));
            }
            obj.insert(
                "contentFormat".to_string(),
                Value::String(options.content_format.as_str().to_string()),
            );
            obj.insert("metadata".to_string(), serde_json::to_value(&metadata)?);
            Payload::Json(raw)
        }
    };

    let result = ConvertResult::new(payload, metadata);
    Ok(match stats {
        Some(stats) => result.with_stats(stats),
        None => result,
    })
}

/// Convert an analysis-result file.
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<ConvertResult> {
    convert_value(read_value(path)?, options)
}

/// Convert many analysis-result files.
///
/// Each file is converted independently; results are returned in input
/// order. With [`ConvertOptions::parallel`] the files are spread over the
/// rayon thread pool.
pub fn convert_files(paths: &[PathBuf], options: &ConvertOptions) -> Vec<Result<ConvertResult>> {
    convert_files_with_progress(paths, options, |_, _| {})
}

/// Convert many analysis-result files, reporting each finished file.
///
/// `progress` is called once per file as soon as its conversion completes,
/// possibly from several threads at once.
pub fn convert_files_with_progress<F>(
    paths: &[PathBuf],
    options: &ConvertOptions,
    progress: F,
) -> Vec<Result<ConvertResult>>
where
    F: Fn(&Path, &Result<ConvertResult>) + Send + Sync,
{
    log::debug!(
        "Converting {} files ({})",
        paths.len(),
        if options.parallel { "parallel" } else { "sequential" }
    );

    let convert_one = |path: &PathBuf| {
        let result = convert_file(path, options);
        progress(path, &result);
        result
    };

    if options.parallel {
        paths.par_iter().map(convert_one).collect()
    } else {
        paths.iter().map(convert_one).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "modelId": "prebuilt-layout",
            "content": "Fees\nAnnual Fee\n$50",
            "pages": [{"pageNumber": 1}],
            "paragraphs": [
                {"role": "title", "content": "Fees", "spans": [{"offset": 0, "length": 4}]},
                {"content": "Annual Fee", "spans": [{"offset": 5, "length": 10}]},
                {"content": "$50", "spans": [{"offset": 16, "length": 3}]}
            ]
        })
    }

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new()
            .with_content_format(ContentFormat::Markdown)
            .with_format(OutputFormat::Html)
            .with_stats(true)
            .with_parallel(false);

        assert_eq!(options.content_format, ContentFormat::Markdown);
        assert_eq!(options.output_format, OutputFormat::Html);
        assert!(options.collect_stats);
        assert!(!options.parallel);
        assert!(ConvertOptions::default().parallel);
    }

    #[test]
    fn test_content_format_parse() {
        assert_eq!("HTML".parse::<ContentFormat>().unwrap(), ContentFormat::Html);
        assert_eq!(ContentFormat::Markdown.to_string(), "markdown");
        assert!("docx".parse::<ContentFormat>().is_err());
        assert_eq!(serde_json::to_value(ContentFormat::Text).unwrap(), json!("text"));
    }

    #[test]
    fn test_json_payload_keeps_content() {
        let result = convert_value(sample(), &ConvertOptions::default()).unwrap();
        let payload = result.payload.as_json().unwrap();

        assert_eq!(payload["content"], json!("Fees\nAnnual Fee\n$50"));
        assert_eq!(payload["contentFormat"], json!("text"));
        assert_eq!(payload["metadata"]["subject"], json!("Fees"));
        assert_eq!(payload["metadata"]["paragraphs_count"], json!(3));
        assert_eq!(payload["modelId"], json!("prebuilt-layout"));
        assert!(result.stats.is_none());
        assert_eq!(result.mime_type(), "application/json");
    }

    #[test]
    fn test_json_payload_html_content() {
        let options = ConvertOptions::new().with_content_format(ContentFormat::Html);
        let result = convert_value(sample(), &options).unwrap();
        let payload = result.payload.as_json().unwrap();

        let content = payload["content"].as_str().unwrap();
        assert!(content.starts_with("<!doctype html>"));
        assert!(content.contains("<th>Annual Fee</th><td>$50</td>"));
        assert_eq!(payload["contentFormat"], json!("html"));
    }

    #[test]
    fn test_html_output() {
        let options = ConvertOptions::new()
            .with_format(OutputFormat::Html)
            .with_stats(true);
        let result = convert_value(sample(), &options).unwrap();

        let html = result.payload.as_html().unwrap();
        assert!(html.contains("<h1>Fees</h1>"));
        assert_eq!(result.stats.unwrap().key_value_count, 1);
        assert_eq!(result.metadata.pages_count, 1);
    }

    #[test]
    fn test_envelope_is_unwrapped() {
        let wrapped = json!({"status": "succeeded", "analyzeResult": sample()});
        let result = convert_value(wrapped, &ConvertOptions::default()).unwrap();
        let payload = result.payload.as_json().unwrap();
        assert!(payload.get("status").is_none());
        assert_eq!(payload["contentFormat"], json!("text"));
    }

    #[test]
    fn test_failed_operation() {
        let failed = json!({
            "status": "failed",
            "error": {"code": "InvalidRequest", "message": "bad file"}
        });
        let err = convert_value(failed, &ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Upstream { ref code, .. } if code == "InvalidRequest"));
    }

    #[test]
    fn test_convert_files_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.json");
        let missing = dir.path().join("missing.json");
        let second = dir.path().join("second.json");
        std::fs::write(&first, sample().to_string()).unwrap();
        std::fs::write(&second, json!({"paragraphs": []}).to_string()).unwrap();

        let paths = vec![first, missing, second];
        for parallel in [true, false] {
            let options = ConvertOptions::new().with_parallel(parallel);
            let results = convert_files(&paths, &options);
            assert_eq!(results.len(), 3);
            assert_eq!(results[0].as_ref().unwrap().metadata.paragraphs_count, 3);
            assert!(matches!(results[1], Err(Error::NotFound(_))));
            assert_eq!(results[2].as_ref().unwrap().metadata.paragraphs_count, 0);
        }
    }

    #[test]
    fn test_convert_files_reports_progress() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let dir = tempfile::tempdir().unwrap();
        let paths: Vec<PathBuf> = (0..4)
            .map(|i| {
                let path = dir.path().join(format!("doc{}.json", i));
                std::fs::write(&path, sample().to_string()).unwrap();
                path
            })
            .collect();

        let done = AtomicUsize::new(0);
        let failed = AtomicUsize::new(0);
        let results = convert_files_with_progress(&paths, &ConvertOptions::new(), |_, result| {
            done.fetch_add(1, Ordering::SeqCst);
            if result.is_err() {
                failed.fetch_add(1, Ordering::SeqCst);
            }
        });

        assert_eq!(results.len(), 4);
        assert_eq!(done.load(Ordering::SeqCst), 4);
        assert_eq!(failed.load(Ordering::SeqCst), 0);
    }
}
