//! Rendering module for converting documents to output formats.

mod html;
mod json;
mod options;
mod result;

pub use html::{
    escape_html, is_value_like, strip_bullet, to_html, to_html_with_stats, HtmlRenderer,
    STYLESHEET,
};
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, DEFAULT_TITLE};
pub use result::{ExtractionStats, RenderResult};
