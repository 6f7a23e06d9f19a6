//! Rendering result with metadata and statistics.

use crate::model::Metadata;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML
    pub content: String,

    /// Document metadata
    pub metadata: Metadata,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: ExtractionStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }
}

/// Statistics collected while sequencing and rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Blocks in the reading order
    pub block_count: u32,

    /// Plain `<p>` paragraphs emitted
    pub paragraph_count: u32,

    /// `<h1>`/`<h2>` headings emitted
    pub heading_count: u32,

    /// `<ul>` lists opened
    pub list_count: u32,

    /// `<li>` items emitted
    pub list_item_count: u32,

    /// Extracted tables emitted
    pub table_count: u32,

    /// Label/value pairs rendered as table rows
    pub key_value_count: u32,

    /// Figures emitted
    pub figure_count: u32,

    /// Paragraphs dropped for overlapping a table or figure
    pub contained_paragraph_count: u32,

    /// Paragraphs dropped for repeating a figure caption
    pub caption_paragraph_count: u32,

    /// Blocks placed with help of the section hierarchy
    pub section_ranked_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment list count.
    pub fn add_list(&mut self) {
        self.list_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment key/value pair count.
    pub fn add_key_value(&mut self) {
        self.key_value_count += 1;
    }

    /// Increment figure count.
    pub fn add_figure(&mut self) {
        self.figure_count += 1;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.block_count += other.block_count;
        self.paragraph_count += other.paragraph_count;
        self.heading_count += other.heading_count;
        self.list_count += other.list_count;
        self.list_item_count += other.list_item_count;
        self.table_count += other.table_count;
        self.key_value_count += other.key_value_count;
        self.figure_count += other.figure_count;
        self.contained_paragraph_count += other.contained_paragraph_count;
        self.caption_paragraph_count += other.caption_paragraph_count;
        self.section_ranked_count += other.section_ranked_count;
    }
}
