//! Per-file evaluation pipeline.
//!
//! Composes the collaborators sequentially for one document: render pages,
//! recognize words, reconstruct reading-order text, extract and clean the
//! ground truth, score. Each run is independent and carries no state between
//! invocations, so documents can safely be evaluated concurrently by
//! separate callers.

use std::path::Path;

use tracing::debug;

use crate::core::config::EvaluationConfig;
use crate::error::Result;
use crate::layout::reconstruct_lines;
use crate::metrics::evaluate;
use crate::ocr::TesseractBackend;
use crate::pdf;
use crate::text::clean_ground_truth;
use crate::types::{FileEvaluation, RecognizedWord};

/// Evaluate one PDF: OCR its rendered pages and score the reconstructed
/// text against the cleaned text layer.
///
/// Page images are written to a temporary directory that is removed when
/// the run finishes. Errors from any stage propagate unchanged; nothing is
/// retried here.
pub fn evaluate_file(path: &Path, config: &EvaluationConfig) -> Result<FileEvaluation> {
    config.validate()?;

    let recognized = recognize_document(path, config)?;
    debug!(path = %path.display(), "reconstructed {} characters", recognized.len());

    let raw_truth = pdf::extract_text(path)?;
    let ground_truth = clean_ground_truth(&raw_truth);

    let report = evaluate(&ground_truth, &recognized)?;

    Ok(FileEvaluation {
        path: path.to_path_buf(),
        recognized,
        ground_truth,
        report,
    })
}

/// Render and recognize every page, then rebuild reading-order text.
fn recognize_document(path: &Path, config: &EvaluationConfig) -> Result<String> {
    let pages_dir = tempfile::tempdir()?;
    let images = pdf::render_pages(path, config.dpi, pages_dir.path())?;
    debug!(path = %path.display(), "rendered {} pages", images.len());

    let backend = TesseractBackend::new(&config.language);
    let mut words: Vec<RecognizedWord> = Vec::new();
    for (page, image) in images.iter().enumerate() {
        words.extend(backend.recognize_page(image, page as u32)?);
    }
    debug!(path = %path.display(), "recognized {} words", words.len());

    Ok(reconstruct_lines(&words, config.confidence_threshold, config.line_band))
}
