//! # unlayout
//!
//! Reading-order reconstruction for document-analysis results.
//!
//! This library takes the JSON result of a layout-analysis service
//! (paragraphs, tables, figures and sections with character spans, page
//! numbers and polygons) and rebuilds one linear, human-readable HTML
//! document in the original reading order.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unlayout::{parse_file, render};
//!
//! fn main() -> unlayout::Result<()> {
//!     // Parse an analysis result
//!     let doc = parse_file("statement.json")?;
//!
//!     // Render the reading order as HTML
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&doc, &options)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Span-first ordering**: content offsets, then section hierarchy, then page geometry
//! - **Deduplication**: paragraphs repeated inside tables or as figure captions are dropped
//! - **Semantic HTML**: headings, bullet lists, label/value rows, tables, figures
//! - **Passthrough payloads**: the original result with rendered content and metadata
//! - **Parallel processing**: Uses Rayon for batch conversion

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod reorder;

// Re-export commonly used types
pub use convert::{
    ContentFormat, ConvertOptions, ConvertResult, LocalOutputStore, OutputFormat, OutputStore,
    Payload,
};
pub use detect::{detect_format_from_value, is_analysis_json, InputFormat};
pub use error::{Error, ErrorCategory, Result};
pub use model::{
    BoundingRegion, Document, ElementRef, Figure, Metadata, Page, Paragraph, ParagraphRole,
    Section, Span, Table,
};
pub use parser::{parse_reader, parse_slice, parse_str, parse_value};
pub use render::{ExtractionStats, JsonFormat, RenderOptions, RenderResult};
pub use reorder::{sequence, ReadingOrder};

use std::path::Path;

/// Parse an analysis-result file and return the normalized document.
///
/// # Arguments
///
/// * `path` - Path to the analysis-result JSON file
///
/// # Returns
///
/// A `Result` containing the parsed `Document` or an error.
///
/// # Example
///
/// ```no_run
/// use unlayout::parse_file;
///
/// let doc = parse_file("statement.json").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    parser::parse_file(path)
}

/// Render an analysis-result file as HTML.
///
/// # Example
///
/// ```no_run
/// use unlayout::to_html;
///
/// let html = to_html("statement.json").unwrap();
/// std::fs::write("statement.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    to_html_with_options(path, &RenderOptions::default())
}

/// Render an analysis-result file as HTML with custom options.
///
/// # Example
///
/// ```no_run
/// use unlayout::{to_html_with_options, RenderOptions};
///
/// let options = RenderOptions::new()
///     .with_title("Card Agreement")
///     .with_key_value_pairing(false);
/// let html = to_html_with_options("statement.json", &options).unwrap();
/// ```
pub fn to_html_with_options<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_html(&doc, options)
}

/// Convert an analysis-result file to the normalized JSON view.
///
/// # Example
///
/// ```no_run
/// use unlayout::{to_json, JsonFormat};
///
/// let json = to_json("statement.json", JsonFormat::Pretty).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Convert an analysis-result file into an output payload.
///
/// # Example
///
/// ```no_run
/// use unlayout::{convert_file, ContentFormat, ConvertOptions};
///
/// let options = ConvertOptions::new().with_content_format(ContentFormat::Html);
/// let result = convert_file("statement.json", &options).unwrap();
/// println!("{:?}", result.metadata.subject);
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P, options: &ConvertOptions) -> Result<ConvertResult> {
    convert::convert_file(path, options)
}

/// Builder for parsing and rendering analysis results.
///
/// # Example
///
/// ```no_run
/// use unlayout::Unlayout;
///
/// let html = Unlayout::new()
///     .with_title("Statement")
///     .without_stylesheet()
///     .parse("statement.json")?
///     .to_html()?;
/// # Ok::<(), unlayout::Error>(())
/// ```
pub struct Unlayout {
    render_options: RenderOptions,
}

impl Unlayout {
    /// Create a new Unlayout builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Set the HTML title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Leave the stylesheet out of the HTML head.
    pub fn without_stylesheet(mut self) -> Self {
        self.render_options = self.render_options.with_stylesheet(false);
        self
    }

    /// Enable or disable label/value pairing.
    pub fn with_key_value_pairing(mut self, pair: bool) -> Self {
        self.render_options = self.render_options.with_key_value_pairing(pair);
        self
    }

    /// Enable or disable figure output.
    pub fn with_figures(mut self, include: bool) -> Self {
        self.render_options = self.render_options.with_figures(include);
        self
    }

    /// Parse an analysis-result file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UnlayoutResult> {
        let document = parse_file(path)?;
        Ok(self.wrap(document))
    }

    /// Parse an analysis result from a JSON string.
    pub fn parse_str(self, json: &str) -> Result<UnlayoutResult> {
        let document = parser::parse_str(json)?;
        Ok(self.wrap(document))
    }

    fn wrap(self, document: Document) -> UnlayoutResult {
        UnlayoutResult {
            document,
            render_options: self.render_options,
        }
    }
}

impl Default for Unlayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing an analysis result.
pub struct UnlayoutResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl UnlayoutResult {
    /// Render to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Render to HTML with statistics.
    pub fn to_html_with_stats(&self) -> Result<RenderResult> {
        render::to_html_with_stats(&self.document, &self.render_options)
    }

    /// Convert to the normalized JSON view.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Compute the reading order.
    pub fn reading_order(&self) -> ReadingOrder<'_> {
        sequence(&self.document)
    }

    /// Get the document metadata.
    pub fn metadata(&self) -> Metadata {
        self.document.metadata()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
