use std::fmt;

/// PDF collaborator errors (text extraction and page rendering).
#[derive(Debug, Clone)]
pub enum PdfError {
    ToolNotFound(String),
    ExtractionFailed(String),
    RenderFailed(String),
    IoError(String),
}

impl fmt::Display for PdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToolNotFound(msg) => write!(f, "PDF tool not found: {}", msg),
            Self::ExtractionFailed(msg) => write!(f, "PDF text extraction failed: {}", msg),
            Self::RenderFailed(msg) => write!(f, "PDF page rendering failed: {}", msg),
            Self::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for PdfError {}
