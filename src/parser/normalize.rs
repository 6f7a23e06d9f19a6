//! Mapping from wire types to the canonical document model.

use super::raw::{
    AnalyzeResult, RawBoundingRegion, RawFigure, RawKeyValuePair, RawPage, RawParagraph,
    RawSection, RawSpan, RawTable, RawTableCell,
};
use crate::model::{
    BoundingRegion, Document, Figure, KeyValuePair, Page, Paragraph, ParagraphRole, Section, Span,
    Table, Word,
};

/// Convert a raw analysis result into a canonical [`Document`].
///
/// Never fails: absent collections become empty, negative offsets and page
/// numbers become absent, and table cells outside the declared grid are
/// dropped.
pub fn normalize(raw: AnalyzeResult) -> Document {
    let doc = Document {
        model_id: raw.model_id,
        content: raw.content,
        pages: raw.pages.into_iter().map(convert_page).collect(),
        paragraphs: raw.paragraphs.into_iter().map(convert_paragraph).collect(),
        tables: raw
            .tables
            .into_iter()
            .enumerate()
            .map(|(i, t)| convert_table(i, t))
            .collect(),
        sections: raw.sections.into_iter().map(convert_section).collect(),
        key_value_pairs: raw
            .key_value_pairs
            .into_iter()
            .map(convert_key_value_pair)
            .collect(),
        figures: raw.figures.into_iter().map(convert_figure).collect(),
    };

    log::debug!(
        "Normalized analysis result: {} pages, {} paragraphs, {} tables, {} figures, {} sections",
        doc.pages.len(),
        doc.paragraphs.len(),
        doc.tables.len(),
        doc.figures.len(),
        doc.sections.len()
    );

    doc
}

fn non_negative(value: Option<i64>) -> Option<u64> {
    value.and_then(|v| u64::try_from(v).ok())
}

fn page_number(value: Option<i64>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

fn convert_spans(spans: Vec<RawSpan>) -> Vec<Span> {
    spans
        .into_iter()
        .map(|s| Span {
            offset: non_negative(s.offset),
            length: non_negative(s.length),
        })
        .collect()
}

fn convert_regions(regions: Vec<RawBoundingRegion>) -> Vec<BoundingRegion> {
    regions
        .into_iter()
        .map(|r| BoundingRegion {
            page_number: page_number(r.page_number),
            polygon: r.polygon,
        })
        .collect()
}

fn convert_page(page: RawPage) -> Page {
    Page {
        page_number: page_number(page.page_number).unwrap_or(0),
        width: page.width,
        height: page.height,
        unit: page.unit,
        words: page
            .words
            .into_iter()
            .map(|w| Word {
                text: w.content,
                confidence: w.confidence,
            })
            .collect(),
    }
}

fn convert_paragraph(paragraph: RawParagraph) -> Paragraph {
    Paragraph {
        role: paragraph.role.map(ParagraphRole::from),
        text: paragraph.content,
        spans: convert_spans(paragraph.spans),
        bounding_regions: convert_regions(paragraph.bounding_regions),
    }
}

fn convert_table(index: usize, table: RawTable) -> Table {
    let declared_rows = non_negative(table.row_count).unwrap_or(0);
    let declared_columns = non_negative(table.column_count).unwrap_or(0);

    // The grid never extends past the cells that actually occupy it.
    let occupied = |axis: fn(&RawTableCell) -> Option<i64>| {
        table
            .cells
            .iter()
            .filter_map(|c| non_negative(axis(c)))
            .map(|i| i.saturating_add(1))
            .max()
            .unwrap_or(0)
    };
    let rows = declared_rows.min(occupied(|c| c.row_index)) as usize;
    let columns = declared_columns.min(occupied(|c| c.column_index)) as usize;
    if (rows as u64, columns as u64) != (declared_rows, declared_columns) {
        log::warn!(
            "Table {}: clamping declared {}x{} grid to occupied {}x{}",
            index,
            declared_rows,
            declared_columns,
            rows,
            columns
        );
    }
    let mut out = Table::new(rows, columns);

    for cell in table.cells {
        let position = non_negative(cell.row_index).zip(non_negative(cell.column_index));
        let placed = match position {
            Some((r, c)) => out.set_cell(r as usize, c as usize, cell.content.unwrap_or_default()),
            None => false,
        };
        if !placed {
            log::warn!(
                "Table {}: dropping cell at ({:?}, {:?}) outside {}x{} grid",
                index,
                cell.row_index,
                cell.column_index,
                rows,
                columns
            );
        }
    }

    out.spans = convert_spans(table.spans);
    out.bounding_regions = convert_regions(table.bounding_regions);
    out
}

fn convert_section(section: RawSection) -> Section {
    Section {
        spans: convert_spans(section.spans),
        elements: section.elements,
    }
}

fn convert_key_value_pair(kv: RawKeyValuePair) -> KeyValuePair {
    KeyValuePair {
        key: kv.key.and_then(|k| k.content),
        value: kv.value.and_then(|v| v.content),
        confidence: kv.confidence,
    }
}

fn convert_figure(figure: RawFigure) -> Figure {
    let bounding_regions = convert_regions(figure.bounding_regions);
    let (caption, caption_spans) = match figure.caption {
        Some(c) => (c.content, convert_spans(c.spans)),
        None => (None, Vec::new()),
    };

    Figure {
        id: figure.id.unwrap_or_default(),
        caption,
        caption_spans,
        spans: convert_spans(figure.spans),
        page_number: bounding_regions.first().and_then(|r| r.page_number),
        bounding_regions,
    }
}
