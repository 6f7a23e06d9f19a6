//! Removal of paragraphs that duplicate table or figure content.
//!
//! The analysis service reports table cell text and figure text as ordinary
//! paragraphs too. A paragraph is dropped when its range overlaps any table or
//! figure range at all; partial overlap counts the same as full containment.

use super::span::{span_range, SpanRange};
use crate::model::{Document, Paragraph, Span};
use std::collections::HashSet;

/// Why a paragraph was left out of the reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// No visible text
    Empty,
    /// Overlaps a table range
    Table,
    /// Overlaps a figure range
    Figure,
    /// Repeats a figure caption
    Caption,
}

/// Table/figure ranges and caption texts of one document.
#[derive(Debug, Clone, Default)]
pub struct ContainmentFilter {
    table_ranges: Vec<SpanRange>,
    figure_ranges: Vec<SpanRange>,
    captions: HashSet<String>,
}

impl ContainmentFilter {
    /// Collect reference ranges and captions from a document.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            table_ranges: doc
                .tables
                .iter()
                .filter_map(|t| span_range(&t.spans))
                .collect(),
            figure_ranges: doc
                .figures
                .iter()
                .filter_map(|f| span_range(&f.spans))
                .collect(),
            captions: doc
                .figures
                .iter()
                .filter_map(|f| f.caption_text())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Check whether spans overlap any table.
    pub fn in_table(&self, spans: &[Span]) -> bool {
        overlaps_any(spans, &self.table_ranges)
    }

    /// Check whether spans overlap any figure.
    pub fn in_figure(&self, spans: &[Span]) -> bool {
        overlaps_any(spans, &self.figure_ranges)
    }

    /// Check whether text equals a figure caption (both trimmed).
    pub fn is_caption(&self, text: &str) -> bool {
        self.captions.contains(text.trim())
    }

    /// Decide whether a paragraph is left out, and why.
    pub fn exclusion(&self, paragraph: &Paragraph) -> Option<Exclusion> {
        if paragraph.is_empty() {
            Some(Exclusion::Empty)
        } else if self.in_table(&paragraph.spans) {
            Some(Exclusion::Table)
        } else if self.in_figure(&paragraph.spans) {
            Some(Exclusion::Figure)
        } else if self.is_caption(&paragraph.text) {
            Some(Exclusion::Caption)
        } else {
            None
        }
    }
}

/// Check whether a block's range overlaps any of the reference ranges.
///
/// A block without a resolvable range never overlaps.
pub fn overlaps_any(spans: &[Span], ranges: &[SpanRange]) -> bool {
    match span_range(spans) {
        Some(range) => ranges.iter().any(|r| range.overlaps(r)),
        None => false,
    }
}
