use std::fmt;

/// OCR-specific errors.
#[derive(Debug, Clone)]
pub enum OcrError {
    BinaryNotFound(String),
    RecognitionFailed(String),
    MalformedOutput(String),
    IoError(String),
}

impl fmt::Display for OcrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BinaryNotFound(msg) => write!(f, "OCR binary not found: {}", msg),
            Self::RecognitionFailed(msg) => write!(f, "OCR recognition failed: {}", msg),
            Self::MalformedOutput(msg) => write!(f, "Malformed OCR output: {}", msg),
            Self::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for OcrError {}
