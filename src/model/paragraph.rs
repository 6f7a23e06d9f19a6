//! Paragraph types.

use super::{BoundingRegion, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A paragraph of text content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Semantic role assigned by the analysis model
    pub role: Option<ParagraphRole>,

    /// Paragraph text
    pub text: String,

    /// Positions in the content stream
    pub spans: Vec<Span>,

    /// Visual locations
    pub bounding_regions: Vec<BoundingRegion>,
}

impl Paragraph {
    /// Create a roleless paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Create a paragraph with a role.
    pub fn with_role(text: impl Into<String>, role: ParagraphRole) -> Self {
        Self {
            role: Some(role),
            ..Self::with_text(text)
        }
    }

    /// Attach a span and return self.
    pub fn span(mut self, offset: u64, length: u64) -> Self {
        self.spans.push(Span::new(offset, length));
        self
    }

    /// Attach a bounding region and return self.
    pub fn region(mut self, region: BoundingRegion) -> Self {
        self.bounding_regions.push(region);
        self
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Check if this paragraph is a title or section heading.
    pub fn is_heading(&self) -> bool {
        matches!(
            self.role,
            Some(ParagraphRole::Title) | Some(ParagraphRole::SectionHeading)
        )
    }
}

/// Paragraph role as reported by the analysis model.
///
/// Unknown roles are kept verbatim so they survive a JSON round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParagraphRole {
    /// Document title
    Title,
    /// Section heading
    SectionHeading,
    /// Running page header
    PageHeader,
    /// Running page footer
    PageFooter,
    /// Page number
    PageNumber,
    /// Footnote
    Footnote,
    /// Display formula
    FormulaBlock,
    /// Any other role string
    Other(String),
}

impl ParagraphRole {
    /// The wire name of the role.
    pub fn as_str(&self) -> &str {
        match self {
            ParagraphRole::Title => "title",
            ParagraphRole::SectionHeading => "sectionHeading",
            ParagraphRole::PageHeader => "pageHeader",
            ParagraphRole::PageFooter => "pageFooter",
            ParagraphRole::PageNumber => "pageNumber",
            ParagraphRole::Footnote => "footnote",
            ParagraphRole::FormulaBlock => "formulaBlock",
            ParagraphRole::Other(s) => s,
        }
    }
}

impl From<&str> for ParagraphRole {
    fn from(s: &str) -> Self {
        match s {
            "title" => ParagraphRole::Title,
            "sectionHeading" => ParagraphRole::SectionHeading,
            "pageHeader" => ParagraphRole::PageHeader,
            "pageFooter" => ParagraphRole::PageFooter,
            "pageNumber" => ParagraphRole::PageNumber,
            "footnote" => ParagraphRole::Footnote,
            "formulaBlock" => ParagraphRole::FormulaBlock,
            other => ParagraphRole::Other(other.to_string()),
        }
    }
}

impl From<String> for ParagraphRole {
    fn from(s: String) -> Self {
        ParagraphRole::from(s.as_str())
    }
}

impl From<ParagraphRole> for String {
    fn from(role: ParagraphRole) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for ParagraphRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
