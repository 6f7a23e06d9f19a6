//! Sort keys and ordering of blocks.
//!
//! Character offsets are the most reliable reading-order signal, so blocks
//! anchored in the content stream always come first, ordered by offset.
//! Section rank breaks ties and orders unanchored blocks; page and vertical
//! position are the last fallback.

use super::block::Block;
use super::sections::SectionOrder;
use super::span::span_start;
use crate::model::BoundingRegion;
use std::cmp::Ordering;

/// Offset used for blocks without a span start.
pub const SPAN_SENTINEL: u64 = 1_000_000_000_000;
/// Rank used for blocks no section reaches.
pub const RANK_SENTINEL: usize = 1_000_000_000;
/// Page used for blocks without a page number.
pub const PAGE_SENTINEL: u32 = 1_000_000_000;
/// Y position used for blocks without polygon data.
pub const Y_SENTINEL: f64 = 1e9;

/// Composite ordering key of a block, compared field by field.
#[derive(Debug, Clone, Copy)]
pub struct SortKey {
    /// Whether the block lacks a span start
    pub span_missing: bool,
    /// Span start, or [`SPAN_SENTINEL`]
    pub span_start: u64,
    /// Section rank, or [`RANK_SENTINEL`]
    pub section_rank: usize,
    /// Smallest page number, or [`PAGE_SENTINEL`]
    pub page: u32,
    /// Smallest y coordinate, or [`Y_SENTINEL`]
    pub y: f64,
    /// Per-type insertion sequence
    pub seq: usize,
}

impl SortKey {
    /// Compute the key of a block.
    pub fn for_block(block: &Block<'_>, sections: &SectionOrder) -> Self {
        let start = span_start(block.spans());
        let regions = block.bounding_regions();
        Self {
            span_missing: start.is_none(),
            span_start: start.unwrap_or(SPAN_SENTINEL),
            section_rank: sections.rank(block.source).unwrap_or(RANK_SENTINEL),
            page: page_hint(regions).unwrap_or(PAGE_SENTINEL),
            y: y_hint(regions).unwrap_or(Y_SENTINEL),
            seq: block.seq,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.span_missing
            .cmp(&other.span_missing)
            .then(self.span_start.cmp(&other.span_start))
            .then(self.section_rank.cmp(&other.section_rank))
            .then(self.page.cmp(&other.page))
            .then(self.y.total_cmp(&other.y))
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

/// Smallest page number across bounding regions.
pub fn page_hint(regions: &[BoundingRegion]) -> Option<u32> {
    regions.iter().filter_map(|r| r.page_number).min()
}

/// Smallest y coordinate across bounding-region polygons.
pub fn y_hint(regions: &[BoundingRegion]) -> Option<f64> {
    regions
        .iter()
        .flat_map(|r| r.y_coordinates())
        .filter(|y| !y.is_nan())
        .min_by(f64::total_cmp)
}

/// Sort blocks into reading order.
///
/// The sort is stable, so blocks with identical keys keep their insertion
/// order.
pub fn sort_blocks(blocks: &mut [Block<'_>], sections: &SectionOrder) {
    blocks.sort_by_cached_key(|b| SortKey::for_block(b, sections));
}
