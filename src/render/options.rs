//! Rendering options and configuration.

/// Default `<title>` of rendered documents.
pub const DEFAULT_TITLE: &str = "Document Intelligence Output";

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Text of the `<title>` element
    pub title: String,

    /// Embed the table stylesheet in `<head>`
    pub include_stylesheet: bool,

    /// Render label/value paragraph pairs as two-cell table rows
    pub pair_key_values: bool,

    /// Render figures as `<figure>` elements
    pub include_figures: bool,

    /// Collect extraction statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enable or disable the embedded stylesheet.
    pub fn with_stylesheet(mut self, include: bool) -> Self {
        self.include_stylesheet = include;
        self
    }

    /// Enable or disable key/value pairing.
    pub fn with_key_value_pairing(mut self, pair: bool) -> Self {
        self.pair_key_values = pair;
        self
    }

    /// Enable or disable figure output.
    pub fn with_figures(mut self, include: bool) -> Self {
        self.include_figures = include;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            include_stylesheet: true,
            pair_key_values: true,
            include_figures: true,
            collect_stats: false,
        }
    }
}
