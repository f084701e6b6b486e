//! Ground-truth text extraction from the PDF text layer.

use std::path::Path;
use std::process::Command;

use super::error::PdfError;

/// Extract the raw text layer of a PDF via `pdftotext`.
///
/// Returns the text exactly as poppler renders it; whitespace and
/// character-substitution cleanup belongs to [`crate::text::clean`].
pub fn extract_text(path: &Path) -> Result<String, PdfError> {
    let output = Command::new("pdftotext").arg(path).arg("-").output();

    match output {
        Ok(output) => {
            if output.status.success() {
                Ok(String::from_utf8_lossy(&output.stdout).to_string())
            } else {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(PdfError::ExtractionFailed(format!(
                    "pdftotext failed on {}: {}",
                    path.display(),
                    stderr.trim()
                )))
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(PdfError::ToolNotFound(
            "pdftotext not found (install poppler-utils)".to_string(),
        )),
        Err(e) => Err(PdfError::IoError(e.to_string())),
    }
}
