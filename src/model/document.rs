//! Document-level types.

use super::{Figure, KeyValuePair, Page, Paragraph, ParagraphRole, Section, Table};
use serde::{Deserialize, Serialize};

/// The canonical form of one analysis result.
///
/// Every collection is in the order reported by the analysis model; element
/// references in [`Section`]s index into these vectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier of the analysis model that produced the result
    pub model_id: Option<String>,

    /// The global content stream that spans point into
    pub content: String,

    /// Pages in the document
    pub pages: Vec<Page>,

    /// Paragraphs, including those that repeat table or figure text
    pub paragraphs: Vec<Paragraph>,

    /// Tables
    pub tables: Vec<Table>,

    /// Section hierarchy nodes
    pub sections: Vec<Section>,

    /// Detected key/value pairs
    pub key_value_pairs: Vec<KeyValuePair>,

    /// Figures
    pub figures: Vec<Figure>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Add a paragraph, returning its index.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> usize {
        self.paragraphs.push(paragraph);
        self.paragraphs.len() - 1
    }

    /// Add a table, returning its index.
    pub fn add_table(&mut self, table: Table) -> usize {
        self.tables.push(table);
        self.tables.len() - 1
    }

    /// Add a figure, returning its index.
    pub fn add_figure(&mut self, figure: Figure) -> usize {
        self.figures.push(figure);
        self.figures.len() - 1
    }

    /// Add a section, returning its index.
    pub fn add_section(&mut self, section: Section) -> usize {
        self.sections.push(section);
        self.sections.len() - 1
    }

    /// Text of the first paragraph with the given role.
    pub fn first_with_role(&self, role: &ParagraphRole) -> Option<&str> {
        self.paragraphs
            .iter()
            .find(|p| p.role.as_ref() == Some(role))
            .map(|p| p.text.as_str())
    }

    /// Document title (first `title` paragraph).
    pub fn title(&self) -> Option<&str> {
        self.first_with_role(&ParagraphRole::Title)
    }

    /// Check if the document has no renderable elements.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty() && self.figures.is_empty()
    }

    /// Summary metadata of this document.
    pub fn metadata(&self) -> Metadata {
        Metadata {
            subject: self.title().map(str::to_string),
            category: self
                .first_with_role(&ParagraphRole::SectionHeading)
                .map(str::to_string),
            model_id: self.model_id.clone(),
            pages_count: self.pages.len(),
            paragraphs_count: self.paragraphs.len(),
            tables_count: self.tables.len(),
            figures_count: self.figures.len(),
        }
    }
}

/// Summary metadata attached to output payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Text of the first title paragraph
    pub subject: Option<String>,

    /// Text of the first section heading
    pub category: Option<String>,

    /// Analysis model identifier
    pub model_id: Option<String>,

    /// Number of pages
    pub pages_count: usize,

    /// Number of paragraphs (before reading-order filtering)
    pub paragraphs_count: usize,

    /// Number of tables
    pub tables_count: usize,

    /// Number of figures
    pub figures_count: usize,
}
