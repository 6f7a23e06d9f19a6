//! Figure types.

use super::{BoundingRegion, Span};
use serde::{Deserialize, Serialize};

/// A figure detected by the analysis model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Figure identifier (e.g. `"1.2"`)
    pub id: String,

    /// Caption text
    pub caption: Option<String>,

    /// Positions of the caption in the content stream
    pub caption_spans: Vec<Span>,

    /// Positions in the content stream
    pub spans: Vec<Span>,

    /// Visual locations
    pub bounding_regions: Vec<BoundingRegion>,

    /// Page of the first bounding region
    pub page_number: Option<u32>,
}

impl Figure {
    /// Create a figure with an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the caption and return self.
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Attach a span and return self.
    pub fn span(mut self, offset: u64, length: u64) -> Self {
        self.spans.push(Span::new(offset, length));
        self
    }

    /// Attach a bounding region and return self, keeping `page_number` in sync.
    pub fn region(mut self, region: BoundingRegion) -> Self {
        if self.bounding_regions.is_empty() {
            self.page_number = region.page_number;
        }
        self.bounding_regions.push(region);
        self
    }

    /// Trimmed caption text, if non-empty.
    pub fn caption_text(&self) -> Option<&str> {
        self.caption
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_sets_page() {
        let fig = Figure::new("1.1")
            .region(BoundingRegion::on_page(3))
            .region(BoundingRegion::on_page(4));
        assert_eq!(fig.page_number, Some(3));
    }

    #[test]
    fn test_caption_text() {
        assert_eq!(Figure::new("a").caption("  Fig 1 ").caption_text(), Some("Fig 1"));
        assert_eq!(Figure::new("a").caption("   ").caption_text(), None);
        assert_eq!(Figure::new("a").caption_text(), None);
    }
}
