//! Error types for ocrgauge.
//!
//! All fallible operations in the library return [`Result`], built on
//! [`OcrGaugeError`]:
//!
//! - Use `thiserror` for automatic `Error` trait implementation
//! - Preserve error chains with `#[source]` attributes
//! - Include context in error messages (file paths, stage names)
//!
//! # Error Handling Philosophy
//!
//! **System errors always bubble up unchanged:**
//! - `OcrGaugeError::Io` (from `std::io::Error`) - file system errors,
//!   permission errors. Never wrapped or suppressed.
//!
//! **Application errors are wrapped with context:**
//! - `InputFormat` - malformed OCR token rows, out-of-range confidence
//! - `Ocr` - recognition failures
//! - `Parsing` - PDF text extraction or page rendering failures
//! - `Validation` - invalid configuration values
//! - `EmptyGroundTruth` - nothing to score against at a given granularity
//! - `MissingDependency` - required external binary not installed
//!
//! The library never turns an error into a partial result: a failing
//! document surfaces to the caller with enough context to report it
//! per-file without aborting the rest of a batch.
use thiserror::Error;

/// Result type alias using `OcrGaugeError`.
pub type Result<T> = std::result::Result<T, OcrGaugeError>;

/// Main error type for all ocrgauge operations.
#[derive(Debug, Error)]
pub enum OcrGaugeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input format error: {message}")]
    InputFormat {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("OCR error: {message}")]
    Ocr {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Parsing error: {message}")]
    Parsing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Ground truth is empty at the given granularity ("characters" or
    /// "words"), so the normalized accuracy denominator would be zero.
    #[error("Empty ground truth: no {0} to score against")]
    EmptyGroundTruth(String),

    #[error("Missing dependency: {0}")]
    MissingDependency(String),
}

impl From<crate::ocr::error::OcrError> for OcrGaugeError {
    fn from(err: crate::ocr::error::OcrError) -> Self {
        use crate::ocr::error::OcrError;
        match err {
            OcrError::BinaryNotFound(msg) => OcrGaugeError::MissingDependency(msg),
            OcrError::MalformedOutput(msg) => OcrGaugeError::InputFormat {
                message: msg,
                source: None,
            },
            other => OcrGaugeError::Ocr {
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }
}

impl From<crate::pdf::error::PdfError> for OcrGaugeError {
    fn from(err: crate::pdf::error::PdfError) -> Self {
        use crate::pdf::error::PdfError;
        match err {
            PdfError::ToolNotFound(msg) => OcrGaugeError::MissingDependency(msg),
            other => OcrGaugeError::Parsing {
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }
}

macro_rules! error_constructor {
    ($name:ident, $variant:ident) => {
        pastey::paste! {
            #[doc = "Create a " $variant " error"]
            pub fn $name<S: Into<String>>(message: S) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: None,
                }
            }

            #[doc = "Create a " $variant " error with source"]
            pub fn [<$name _with_source>]<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
                message: S,
                source: E,
            ) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: Some(Box::new(source)),
                }
            }
        }
    };
}

impl OcrGaugeError {
    error_constructor!(input_format, InputFormat);
    error_constructor!(ocr, Ocr);
    error_constructor!(parsing, Parsing);
    error_constructor!(validation, Validation);

    /// Create an `EmptyGroundTruth` error for the given unit of scoring.
    pub fn empty_ground_truth(granularity: &str) -> Self {
        Self::EmptyGroundTruth(granularity.to_string())
    }
}
