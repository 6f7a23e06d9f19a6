//! Character-offset ranges of content elements.

use crate::model::Span;

/// A half-open `[start, end)` range in the content stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpanRange {
    /// First covered offset
    pub start: u64,
    /// One past the last covered offset
    pub end: u64,
}

impl SpanRange {
    /// Create a range.
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Check whether two ranges share at least one offset.
    pub fn overlaps(&self, other: &SpanRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Minimum offset over spans that have one.
pub fn span_start(spans: &[Span]) -> Option<u64> {
    spans.iter().filter_map(|s| s.offset).min()
}

/// Maximum `offset + length` over spans that have both.
pub fn span_end(spans: &[Span]) -> Option<u64> {
    spans.iter().filter_map(Span::end).max()
}

/// The range covered by a set of spans, if both ends resolve.
pub fn span_range(spans: &[Span]) -> Option<SpanRange> {
    Some(SpanRange::new(span_start(spans)?, span_end(spans)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_start_end() {
        let spans = [Span::new(30, 5), Span::new(10, 4)];
        assert_eq!(span_start(&spans), Some(10));
        assert_eq!(span_end(&spans), Some(35));
        assert_eq!(span_range(&spans), Some(SpanRange::new(10, 35)));
    }

    #[test]
    fn test_partial_spans() {
        let offset_only = Span {
            offset: Some(7),
            length: None,
        };
        let length_only = Span {
            offset: None,
            length: Some(3),
        };
        assert_eq!(span_start(&[offset_only]), Some(7));
        assert_eq!(span_end(&[offset_only]), None);
        assert_eq!(span_range(&[offset_only]), None);
        assert_eq!(span_start(&[length_only]), None);
        assert_eq!(span_end(&[offset_only, Span::new(2, 2)]), Some(4));
    }

    #[test]
    fn test_empty_spans() {
        assert_eq!(span_start(&[]), None);
        assert_eq!(span_end(&[]), None);
    }

    #[test]
    fn test_overlaps() {
        let a = SpanRange::new(10, 20);
        assert!(a.overlaps(&SpanRange::new(15, 30)));
        assert!(a.overlaps(&SpanRange::new(0, 11)));
        assert!(a.overlaps(&SpanRange::new(12, 13)));
        assert!(!a.overlaps(&SpanRange::new(20, 25)));
        assert!(!a.overlaps(&SpanRange::new(0, 10)));
    }
}
