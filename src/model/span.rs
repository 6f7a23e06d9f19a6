//! Positional metadata shared by every content element.

use serde::{Deserialize, Serialize};

/// A slice of the document's global content stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Character offset into the content stream
    pub offset: Option<u64>,

    /// Number of characters covered
    pub length: Option<u64>,
}

impl Span {
    /// Create a span with both fields present.
    pub fn new(offset: u64, length: u64) -> Self {
        Self {
            offset: Some(offset),
            length: Some(length),
        }
    }

    /// End offset (exclusive), if both fields are present.
    pub fn end(&self) -> Option<u64> {
        Some(self.offset? + self.length?)
    }
}

/// The visual location of an element on one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingRegion {
    /// Page number (1-indexed)
    pub page_number: Option<u32>,

    /// Alternating x,y coordinates
    pub polygon: Option<Vec<f64>>,
}

impl BoundingRegion {
    /// Create a region on a page with the given polygon.
    pub fn new(page_number: u32, polygon: Vec<f64>) -> Self {
        Self {
            page_number: Some(page_number),
            polygon: Some(polygon),
        }
    }

    /// Create a region that only knows its page.
    pub fn on_page(page_number: u32) -> Self {
        Self {
            page_number: Some(page_number),
            polygon: None,
        }
    }

    /// Y coordinates of the polygon (odd indices).
    pub fn y_coordinates(&self) -> impl Iterator<Item = f64> + '_ {
        self.polygon
            .as_deref()
            .unwrap_or_default()
            .iter()
            .skip(1)
            .step_by(2)
            .copied()
    }
}
