//! HTML rendering of the reading order.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Result;
use crate::model::{Document, Figure, Paragraph, ParagraphRole, Table};
use crate::reorder::{sequence, Block, BlockContent, ReadingOrder};

use super::{ExtractionStats, RenderOptions, RenderResult};

/// Inline stylesheet for extracted tables.
pub const STYLESHEET: &str = "body{font-family:Arial,sans-serif;line-height:1.45}\
table{border-collapse:collapse;margin:12px 0;width:100%}\
th,td{border:1px solid #ccc;padding:6px;vertical-align:top}\
th{text-align:left;background:#f6f6f6}";

const BULLET_MARKERS: [&str; 2] = ["· ", "- "];

/// Convert a document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to HTML with statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = HtmlRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// Escape text for HTML element content and attribute values.
///
/// Quotes are escaped too, so the result is safe inside either kind of
/// quoted attribute.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Check whether text looks like a standalone value.
///
/// Matches amounts (`$1,250.00`, `42`, `19.9%`, `.5%`), `N/A` and runs of
/// `•` masking glyphs.
pub fn is_value_like(text: &str) -> bool {
    static VALUE_PATTERN: OnceLock<Regex> = OnceLock::new();
    VALUE_PATTERN
        .get_or_init(|| {
            Regex::new(r"^(?:N/A|\$?\d[\d,]*(?:\.\d+)?%?|\.\d+%|•+)$")
                .expect("value pattern is valid")
        })
        .is_match(text.trim())
}

/// Text of a bulleted paragraph without its marker.
pub fn strip_bullet(text: &str) -> Option<&str> {
    BULLET_MARKERS
        .iter()
        .find_map(|marker| text.strip_prefix(marker))
        .map(str::trim)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    stats: ExtractionStats,
    in_list: bool,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: ExtractionStats::new(),
            in_list: false,
        }
    }

    /// Render a document to HTML.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        Ok(self.render_internal(doc))
    }

    /// Render a document to HTML with extraction statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc);
        Ok(RenderResult::new(content, doc.metadata(), self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> String {
        let order = sequence(doc);
        if self.options.collect_stats {
            self.record_order(&order);
        }

        let mut output = String::with_capacity(doc.content.len() + 512);
        self.render_head(&mut output);
        output.push_str("<body>");

        let blocks = &order.blocks;
        let mut index = 0;
        while index < blocks.len() {
            index += match blocks[index].content {
                BlockContent::Figure(figure) => {
                    self.render_figure(&mut output, figure);
                    1
                }
                BlockContent::Table(table) => {
                    self.render_table(&mut output, table);
                    1
                }
                BlockContent::Paragraph(paragraph) => {
                    self.render_paragraph(&mut output, paragraph, blocks.get(index + 1))
                }
            };
        }
        self.close_list(&mut output);

        output.push_str("</body></html>");
        output
    }

    fn record_order(&mut self, order: &ReadingOrder<'_>) {
        self.stats.block_count = order.blocks.len() as u32;
        self.stats.contained_paragraph_count = (order.excluded.table + order.excluded.figure) as u32;
        self.stats.caption_paragraph_count = order.excluded.caption as u32;
        self.stats.section_ranked_count = order.section_ranked() as u32;
    }

    fn render_head(&self, output: &mut String) {
        output.push_str("<!doctype html><html><head><meta charset='utf-8'><title>");
        output.push_str(escape_html(&self.options.title).as_ref());
        output.push_str("</title>");
        if self.options.include_stylesheet {
            output.push_str("<style>");
            output.push_str(STYLESHEET);
            output.push_str("</style>");
        }
        output.push_str("</head>");
    }

    fn open_list(&mut self, output: &mut String) {
        if !self.in_list {
            output.push_str("<ul>");
            self.in_list = true;
            if self.options.collect_stats {
                self.stats.add_list();
            }
        }
    }

    fn close_list(&mut self, output: &mut String) {
        if self.in_list {
            output.push_str("</ul>");
            self.in_list = false;
        }
    }

    fn render_figure(&mut self, output: &mut String, figure: &Figure) {
        if !self.options.include_figures {
            return;
        }
        self.close_list(output);
        if self.options.collect_stats {
            self.stats.add_figure();
        }
        output.push_str("<figure id=\"");
        output.push_str(escape_html(&figure.id).as_ref());
        output.push_str("\">");
        let caption = figure.caption.as_deref().unwrap_or_default();
        output.push_str(escape_html(caption).as_ref());
        output.push_str("</figure>");
    }

    fn render_table(&mut self, output: &mut String, table: &Table) {
        self.close_list(output);
        if table.is_empty() {
            return;
        }
        if self.options.collect_stats {
            self.stats.add_table();
        }

        output.push_str("<table><tbody>");
        for (row_index, row) in table.data.iter().enumerate() {
            let tag = if row_index == 0 { "th" } else { "td" };
            output.push_str("<tr>");
            for cell in row {
                push_element(output, tag, cell);
            }
            output.push_str("</tr>");
        }
        output.push_str("</tbody></table>");
    }

    /// Render a paragraph and return how many blocks were consumed.
    fn render_paragraph(
        &mut self,
        output: &mut String,
        paragraph: &Paragraph,
        next: Option<&Block<'_>>,
    ) -> usize {
        let text = paragraph.text.trim();

        let heading_tag = match paragraph.role {
            Some(ParagraphRole::Title) => Some("h1"),
            Some(ParagraphRole::SectionHeading) => Some("h2"),
            _ => None,
        };
        if let Some(tag) = heading_tag {
            self.close_list(output);
            if self.options.collect_stats {
                self.stats.add_heading();
            }
            push_element(output, tag, text);
            return 1;
        }

        if let Some(item) = strip_bullet(text) {
            self.open_list(output);
            if self.options.collect_stats {
                self.stats.add_list_item();
            }
            push_element(output, "li", item);
            return 1;
        }

        self.close_list(output);

        if let Some(value) = self.paired_value(paragraph, next) {
            if self.options.collect_stats {
                self.stats.add_key_value();
            }
            output.push_str("<table><tbody><tr>");
            push_element(output, "th", text);
            push_element(output, "td", value);
            output.push_str("</tr></tbody></table>");
            return 2;
        }

        if self.options.collect_stats {
            self.stats.add_paragraph();
        }
        push_element(output, "p", text);
        1
    }

    /// Value text of the following block when it completes a label/value pair.
    fn paired_value<'b>(&self, label: &Paragraph, next: Option<&Block<'b>>) -> Option<&'b str> {
        if !self.options.pair_key_values || label.role.is_some() || is_value_like(&label.text) {
            return None;
        }

        let candidate = next?.as_paragraph()?;
        let value = candidate.text.trim();
        let pairs = candidate.role.is_none()
            && !value.is_empty()
            && strip_bullet(value).is_none()
            && is_value_like(value);
        pairs.then_some(value)
    }
}

fn push_element(output: &mut String, tag: &str, text: &str) {
    output.push('<');
    output.push_str(tag);
    output.push('>');
    output.push_str(escape_html(text).as_ref());
    output.push_str("</");
    output.push_str(tag);
    output.push('>');
}
