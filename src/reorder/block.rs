//! Render-time content blocks.

use crate::model::{BoundingRegion, ElementRef, Figure, Paragraph, Span, Table};

/// The element a block wraps.
#[derive(Debug, Clone, Copy)]
pub enum BlockContent<'a> {
    /// A paragraph that survived filtering
    Paragraph(&'a Paragraph),
    /// A table
    Table(&'a Table),
    /// A figure
    Figure(&'a Figure),
}

/// One unit of the linearized document.
#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    /// Wrapped element
    pub content: BlockContent<'a>,

    /// Reference to the element in its source collection
    pub source: ElementRef,

    /// Insertion order among blocks of the same type
    pub seq: usize,
}

impl<'a> Block<'a> {
    /// Wrap the paragraph at `index`.
    pub fn paragraph(paragraph: &'a Paragraph, index: usize, seq: usize) -> Self {
        Self {
            content: BlockContent::Paragraph(paragraph),
            source: ElementRef::Paragraph(index),
            seq,
        }
    }

    /// Wrap the table at `index`.
    pub fn table(table: &'a Table, index: usize, seq: usize) -> Self {
        Self {
            content: BlockContent::Table(table),
            source: ElementRef::Table(index),
            seq,
        }
    }

    /// Wrap the figure at `index`.
    pub fn figure(figure: &'a Figure, index: usize, seq: usize) -> Self {
        Self {
            content: BlockContent::Figure(figure),
            source: ElementRef::Figure(index),
            seq,
        }
    }

    /// Content-stream spans of the wrapped element.
    pub fn spans(&self) -> &'a [Span] {
        match self.content {
            BlockContent::Paragraph(p) => &p.spans,
            BlockContent::Table(t) => &t.spans,
            BlockContent::Figure(f) => &f.spans,
        }
    }

    /// Bounding regions of the wrapped element.
    pub fn bounding_regions(&self) -> &'a [BoundingRegion] {
        match self.content {
            BlockContent::Paragraph(p) => &p.bounding_regions,
            BlockContent::Table(t) => &t.bounding_regions,
            BlockContent::Figure(f) => &f.bounding_regions,
        }
    }

    /// The wrapped paragraph, if this is a paragraph block.
    pub fn as_paragraph(&self) -> Option<&'a Paragraph> {
        match self.content {
            BlockContent::Paragraph(p) => Some(p),
            _ => None,
        }
    }
}
