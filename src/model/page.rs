//! Page-level types.

use serde::{Deserialize, Serialize};

/// A single page of the analyzed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Page width in `unit`
    pub width: Option<f64>,

    /// Page height in `unit`
    pub height: Option<f64>,

    /// Length unit of the page coordinates (e.g. `"inch"`, `"pixel"`)
    pub unit: Option<String>,

    /// Recognized words on the page
    pub words: Vec<Word>,
}

impl Page {
    /// Create a page with the given number and dimensions.
    pub fn new(page_number: u32, width: f64, height: f64, unit: impl Into<String>) -> Self {
        Self {
            page_number,
            width: Some(width),
            height: Some(height),
            unit: Some(unit.into()),
            words: Vec::new(),
        }
    }

    /// Create a US Letter page measured in inches.
    pub fn letter(page_number: u32) -> Self {
        Self::new(page_number, 8.5, 11.0, "inch")
    }

    /// Get the number of words on the page.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// A recognized word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Word text
    pub text: String,

    /// Recognition confidence (0.0 - 1.0)
    pub confidence: Option<f64>,
}

/// A key/value pair detected by the analysis model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyValuePair {
    /// Key text
    pub key: Option<String>,

    /// Value text
    pub value: Option<String>,

    /// Detection confidence (0.0 - 1.0)
    pub confidence: Option<f64>,
}
