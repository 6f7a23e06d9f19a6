//! Input format detection and validation.
//!
//! Analysis results arrive either as a bare `analyzeResult` object or wrapped
//! in the long-running-operation envelope returned when polling the service:
//!
//! ```json
//! {"status": "succeeded", "createdDateTime": "...", "analyzeResult": { ... }}
//! ```

use crate::error::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// File extensions accepted as analysis-result input.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["json"];

const ENVELOPE_KEY: &str = "analyzeResult";

/// Shape of an analysis-result JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFormat {
    /// A bare `analyzeResult` object
    AnalyzeResult,
    /// An operation envelope carrying an `analyzeResult`
    Operation {
        /// Operation status (`succeeded`, `failed`, `running`, ...)
        status: Option<String>,
    },
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::AnalyzeResult => write!(f, "analyze result"),
            InputFormat::Operation { status: Some(s) } => write!(f, "operation ({})", s),
            InputFormat::Operation { status: None } => write!(f, "operation"),
        }
    }
}

/// Detect the input shape of a parsed JSON value.
///
/// # Returns
/// * `Err(Error::InvalidInput)` if the root is not a JSON object
pub fn detect_format_from_value(value: &Value) -> Result<InputFormat> {
    let obj = value.as_object().ok_or_else(|| {
        Error::InvalidInput(format!("expected a JSON object, found {}", kind_of(value)))
    })?;

    // `analyzeResult` itself never carries a `status`.
    if obj.contains_key(ENVELOPE_KEY) || obj.contains_key("status") {
        let status = obj.get("status").and_then(Value::as_str).map(str::to_string);
        return Ok(InputFormat::Operation { status });
    }

    Ok(InputFormat::AnalyzeResult)
}

/// Extract the `analyzeResult` object from either input shape.
///
/// A failed operation becomes [`Error::Upstream`] carrying the service's error
/// code and message; an unfinished one is reported the same way with its
/// status as the code.
pub fn unwrap_analyze_result(value: Value) -> Result<Value> {
    let status = match detect_format_from_value(&value)? {
        InputFormat::AnalyzeResult => return Ok(value),
        InputFormat::Operation { status } => status.unwrap_or_else(|| "succeeded".to_string()),
    };
    let Value::Object(mut obj) = value else {
        return Err(Error::InvalidInput("expected a JSON object".to_string()));
    };

    match status.as_str() {
        "succeeded" => match obj.remove(ENVELOPE_KEY) {
            Some(result @ Value::Object(_)) => Ok(result),
            Some(other) => Err(Error::InvalidInput(format!(
                "analyzeResult must be an object, found {}",
                kind_of(&other)
            ))),
            None => Err(Error::InvalidInput(
                "operation succeeded but carries no analyzeResult".to_string(),
            )),
        },
        "failed" => {
            let error = obj.remove("error").unwrap_or(Value::Null);
            let field = |name: &str| {
                error
                    .get(name)
                    .and_then(Value::as_str)
                    .map(str::to_string)
            };
            Err(Error::Upstream {
                code: field("code").unwrap_or_else(|| "failed".to_string()),
                message: field("message")
                    .unwrap_or_else(|| "analysis operation failed".to_string()),
            })
        }
        other => Err(Error::Upstream {
            code: other.to_string(),
            message: "analysis operation has not completed".to_string(),
        }),
    }
}

/// Validate that a path names an existing analysis-result file.
///
/// # Returns
/// * `Err(Error::NotFound)` if the file does not exist
/// * `Err(Error::UnsupportedFormat)` if the extension is not accepted
pub fn check_input_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        let shown = if ext.is_empty() { "<none>" } else { ext.as_str() };
        return Err(Error::UnsupportedFormat(format!(
            "{} (expected an analysis-result .json file; convert the source document with the analysis service first)",
            shown
        )));
    }

    Ok(())
}

/// Check if a path is an accepted analysis-result file.
pub fn is_analysis_json<P: AsRef<Path>>(path: P) -> bool {
    check_input_path(path).is_ok()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
