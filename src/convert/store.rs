//! Persistence of converted payloads.

use super::{OutputFormat, Payload};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

const FALLBACK_STEM: &str = "document";

/// Destination for converted payloads.
pub trait OutputStore: Send + Sync {
    /// Write a payload to `path`.
    fn save(&self, payload: &Payload, path: &Path) -> Result<()>;
}

/// Stores payloads on the local filesystem.
///
/// Strings are written verbatim; JSON is pretty-printed with non-ASCII text
/// left unescaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalOutputStore;

impl LocalOutputStore {
    /// Create a new local store.
    pub fn new() -> Self {
        Self
    }
}

impl OutputStore for LocalOutputStore {
    fn save(&self, payload: &Payload, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        match payload {
            Payload::Html(html) => fs::write(path, html)?,
            Payload::Json(value) => fs::write(path, serde_json::to_string_pretty(value)?)?,
        }

        log::debug!("Saved {} payload to {}", payload.mime_type(), path.display());
        Ok(())
    }
}

/// Default location of an output under the data directory.
///
/// JSON payloads go to `<data>/raw/raw_<stem>.json`, HTML to
/// `<data>/html/<stem>.html`.
pub fn default_output_path(data_dir: &Path, source: &Path, format: OutputFormat) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_STEM);

    match format {
        OutputFormat::Json => data_dir.join("raw").join(format!("raw_{}.json", stem)),
        OutputFormat::Html => data_dir.join("html").join(format!("{}.html", stem)),
    }
}
