//! Analysis-result parsing module.
//!
//! Reads the service's JSON (bare or wrapped in an operation envelope) and
//! normalizes it into a [`Document`].

mod normalize;
pub mod raw;

pub use normalize::normalize;
pub use raw::AnalyzeResult;

use crate::detect::{check_input_path, unwrap_analyze_result};
use crate::error::Result;
use crate::model::Document;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parse an analysis result from an already-decoded JSON value.
pub fn parse_value(value: Value) -> Result<Document> {
    let result = unwrap_analyze_result(value)?;
    let raw: AnalyzeResult = serde_json::from_value(result)?;
    Ok(normalize(raw))
}

/// Parse an analysis result from a JSON string.
pub fn parse_str(json: &str) -> Result<Document> {
    parse_value(serde_json::from_str(json)?)
}

/// Parse an analysis result from JSON bytes.
pub fn parse_slice(data: &[u8]) -> Result<Document> {
    parse_value(serde_json::from_slice(data)?)
}

/// Parse an analysis result from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    parse_value(serde_json::from_reader(reader)?)
}

/// Read the raw JSON value of an analysis-result file.
///
/// The envelope, if any, is removed; the returned value is the bare
/// `analyzeResult` object used for passthrough payloads.
pub fn read_value<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    check_input_path(path)?;
    log::debug!("Reading analysis result from {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    let value: Value = serde_json::from_reader(reader)?;
    unwrap_analyze_result(value)
}

/// Parse an analysis-result file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    parse_value(read_value(path)?)
}
