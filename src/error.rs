//! Error types for unlayout library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for unlayout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading analysis results and building payloads.
///
/// The reordering and rendering core never produces these: malformed positional
/// metadata only degrades ordering quality.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input file extension is not an accepted analysis-result format.
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// The input is well-formed JSON but not an analysis result.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The analysis service reported a failure (or had not finished) for this document.
    #[error("Analysis service error ({code}): {message}")]
    Upstream {
        /// Service error code, or the operation status when no error object is present
        code: String,
        /// Service error message
        message: String,
    },

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

/// User-visible failure category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The requested input does not exist.
    NotFound,
    /// The input was rejected as malformed or unsupported.
    BadRequest,
    /// The upstream analysis service failed.
    UpstreamService,
    /// Anything else (I/O, rendering).
    Internal,
}

impl Error {
    /// Classify this error for reporting.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::NotFound(_) => ErrorCategory::NotFound,
            Error::Json(_) | Error::UnsupportedFormat(_) | Error::InvalidInput(_) => {
                ErrorCategory::BadRequest
            }
            Error::Upstream { .. } => ErrorCategory::UpstreamService,
            Error::Io(e) if e.kind() == io::ErrorKind::NotFound => ErrorCategory::NotFound,
            Error::Io(_) | Error::Render(_) => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Upstream {
            code: "InvalidContent".to_string(),
            message: "The file is corrupted".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Analysis service error (InvalidContent): The file is corrupted"
        );

        let err = Error::NotFound(PathBuf::from("missing.json"));
        assert_eq!(err.to_string(), "File not found: missing.json");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            Error::UnsupportedFormat("pdf".into()).category(),
            ErrorCategory::BadRequest
        );
        assert_eq!(
            Error::InvalidInput("root is not an object".into()).category(),
            ErrorCategory::BadRequest
        );
        assert_eq!(
            Error::Render("x".into()).category(),
            ErrorCategory::Internal
        );
    }
}
