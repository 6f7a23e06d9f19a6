//! Reading-order reconstruction.
//!
//! Turns the unordered element collections of a [`Document`] into one linear
//! sequence of [`Block`]s:
//!
//! 1. paragraphs duplicating table/figure text are filtered out
//!    ([`ContainmentFilter`]),
//! 2. the section hierarchy is walked for a fallback order ([`SectionOrder`]),
//! 3. every surviving block gets a composite [`SortKey`] and the blocks are
//!    stably sorted.
//!
//! The whole pipeline is total: missing or inconsistent positional data only
//! moves blocks further down the fallback chain.

mod block;
mod containment;
mod sections;
mod sequencer;
mod span;

pub use block::{Block, BlockContent};
pub use containment::{overlaps_any, ContainmentFilter, Exclusion};
pub use sections::SectionOrder;
pub use sequencer::{
    page_hint, sort_blocks, y_hint, SortKey, PAGE_SENTINEL, RANK_SENTINEL, SPAN_SENTINEL,
    Y_SENTINEL,
};
pub use span::{span_end, span_range, span_start, SpanRange};

use crate::model::Document;

/// Counts of paragraphs left out of the reading order, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExclusionCounts {
    /// Paragraphs without visible text
    pub empty: usize,
    /// Paragraphs overlapping a table
    pub table: usize,
    /// Paragraphs overlapping a figure
    pub figure: usize,
    /// Paragraphs repeating a figure caption
    pub caption: usize,
}

impl ExclusionCounts {
    fn record(&mut self, exclusion: Exclusion) {
        match exclusion {
            Exclusion::Empty => self.empty += 1,
            Exclusion::Table => self.table += 1,
            Exclusion::Figure => self.figure += 1,
            Exclusion::Caption => self.caption += 1,
        }
    }

    /// Total number of excluded paragraphs.
    pub fn total(&self) -> usize {
        self.empty + self.table + self.figure + self.caption
    }
}

/// The linearized blocks of a document.
#[derive(Debug, Clone)]
pub struct ReadingOrder<'a> {
    /// Blocks in reading order
    pub blocks: Vec<Block<'a>>,

    /// Paragraphs that were filtered out
    pub excluded: ExclusionCounts,

    /// Section walk used for ordering
    pub sections: SectionOrder,
}

impl<'a> ReadingOrder<'a> {
    /// Number of blocks whose element is reached by the section walk.
    pub fn section_ranked(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| self.sections.rank(b.source).is_some())
            .count()
    }
}

/// Compute the reading order of a document.
pub fn sequence(doc: &Document) -> ReadingOrder<'_> {
    let filter = ContainmentFilter::from_document(doc);
    let mut excluded = ExclusionCounts::default();
    let mut blocks =
        Vec::with_capacity(doc.paragraphs.len() + doc.tables.len() + doc.figures.len());

    let mut seq = 0;
    for (index, paragraph) in doc.paragraphs.iter().enumerate() {
        if let Some(exclusion) = filter.exclusion(paragraph) {
            excluded.record(exclusion);
            continue;
        }
        blocks.push(Block::paragraph(paragraph, index, seq));
        seq += 1;
    }

    blocks.extend(
        doc.tables
            .iter()
            .enumerate()
            .map(|(index, table)| Block::table(table, index, index)),
    );
    blocks.extend(
        doc.figures
            .iter()
            .enumerate()
            .map(|(index, figure)| Block::figure(figure, index, index)),
    );

    let sections = SectionOrder::walk(&doc.sections);
    sort_blocks(&mut blocks, &sections);

    log::debug!(
        "Sequenced {} blocks ({} paragraphs excluded, {} section-ranked elements)",
        blocks.len(),
        excluded.total(),
        sections.len()
    );

    ReadingOrder {
        blocks,
        excluded,
        sections,
    }
}
