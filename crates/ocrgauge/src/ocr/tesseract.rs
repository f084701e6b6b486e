//! Tesseract OCR backend.
//!
//! Invokes the system `tesseract` binary in TSV output mode and parses the
//! result into typed words. No image preprocessing happens here; callers
//! hand in already-rendered page images.

use std::path::Path;
use std::process::Command;

use super::error::OcrError;
use super::tsv::parse_words_from_tsv;
use crate::types::RecognizedWord;

/// Tesseract OCR backend using the system binary.
#[derive(Debug, Clone)]
pub struct TesseractBackend {
    language: String,
}

impl TesseractBackend {
    /// Create a backend recognizing the given Tesseract language code.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    /// Recognize one page image, tagging every word with `page`.
    ///
    /// Words are returned in Tesseract's emission order (left-to-right,
    /// top-to-bottom scan order), which downstream line reconstruction
    /// relies on.
    pub fn recognize_page(&self, image_path: &Path, page: u32) -> Result<Vec<RecognizedWord>, OcrError> {
        let tsv = self.run_tesseract(image_path)?;
        parse_words_from_tsv(&tsv, page)
    }

    fn run_tesseract(&self, image_path: &Path) -> Result<String, OcrError> {
        let output = Command::new("tesseract")
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.language])
            .arg("tsv")
            .output();

        match output {
            Ok(output) => {
                if output.status.success() {
                    Ok(String::from_utf8_lossy(&output.stdout).to_string())
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    Err(OcrError::RecognitionFailed(format!(
                        "tesseract failed on {}: {}",
                        image_path.display(),
                        stderr.trim()
                    )))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(OcrError::BinaryNotFound(
                "tesseract not found (install tesseract-ocr)".to_string(),
            )),
            Err(e) => Err(OcrError::IoError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_keeps_language() {
        let backend = TesseractBackend::new("lit");
        assert_eq!(backend.language, "lit");
    }
}
