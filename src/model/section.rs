//! Section hierarchy and element references.

use super::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A grouping node referencing child sections and content elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Positions in the content stream
    pub spans: Vec<Span>,

    /// Element references such as `/paragraphs/3` or `/sections/1`
    pub elements: Vec<String>,
}

impl Section {
    /// Create a section from element reference strings.
    pub fn with_elements<S: Into<String>>(elements: impl IntoIterator<Item = S>) -> Self {
        Self {
            spans: Vec::new(),
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }

    /// Parsed element references; malformed ones are skipped.
    pub fn references(&self) -> impl Iterator<Item = ElementRef> + '_ {
        self.elements.iter().filter_map(|e| ElementRef::parse(e))
    }
}

/// A typed reference into one of the document's element collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementRef {
    /// `/paragraphs/<i>`
    Paragraph(usize),
    /// `/tables/<i>`
    Table(usize),
    /// `/figures/<i>`
    Figure(usize),
    /// `/sections/<i>`
    Section(usize),
}

impl ElementRef {
    /// Parse a reference string. Returns `None` for unknown collections or
    /// non-numeric indices.
    pub fn parse(s: &str) -> Option<Self> {
        let rest = s.trim().strip_prefix('/')?;
        let (collection, index) = rest.split_once('/')?;
        let index: usize = index.parse().ok()?;
        match collection {
            "paragraphs" => Some(ElementRef::Paragraph(index)),
            "tables" => Some(ElementRef::Table(index)),
            "figures" => Some(ElementRef::Figure(index)),
            "sections" => Some(ElementRef::Section(index)),
            _ => None,
        }
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRef::Paragraph(i) => write!(f, "/paragraphs/{}", i),
            ElementRef::Table(i) => write!(f, "/tables/{}", i),
            ElementRef::Figure(i) => write!(f, "/figures/{}", i),
            ElementRef::Section(i) => write!(f, "/sections/{}", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_references() {
        assert_eq!(
            ElementRef::parse("/paragraphs/12"),
            Some(ElementRef::Paragraph(12))
        );
        assert_eq!(ElementRef::parse("/tables/0"), Some(ElementRef::Table(0)));
        assert_eq!(ElementRef::parse("/sections/3"), Some(ElementRef::Section(3)));
        assert_eq!(ElementRef::parse("/figures/1"), Some(ElementRef::Figure(1)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(ElementRef::parse("/paragraphs/x"), None);
        assert_eq!(ElementRef::parse("/paragraphs/-1"), None);
        assert_eq!(ElementRef::parse("paragraphs/1"), None);
        assert_eq!(ElementRef::parse("/words/1"), None);
        assert_eq!(ElementRef::parse(""), None);
    }

    #[test]
    fn test_display_round_trip() {
        let r = ElementRef::Section(7);
        assert_eq!(r.to_string(), "/sections/7");
        assert_eq!(ElementRef::parse(&r.to_string()), Some(r));
    }

    #[test]
    fn test_section_references_skip_malformed() {
        let section = Section::with_elements(["/paragraphs/0", "/bogus", "/tables/2"]);
        let refs: Vec<_> = section.references().collect();
        assert_eq!(refs, vec![ElementRef::Paragraph(0), ElementRef::Table(2)]);
    }
}
