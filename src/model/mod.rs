//! Document model types for analysis-result content.
//!
//! This module defines the canonical intermediate representation that
//! bridges the raw analysis-service output and the reading-order engine.
//! Every optional upstream field is explicit here, so nothing downstream
//! has to probe for presence.

mod document;
mod figure;
mod page;
mod paragraph;
mod section;
mod span;
mod table;

pub use document::{Document, Metadata};
pub use figure::Figure;
pub use page::{KeyValuePair, Page, Word};
pub use paragraph::{Paragraph, ParagraphRole};
pub use section::{ElementRef, Section};
pub use span::{BoundingRegion, Span};
pub use table::Table;
