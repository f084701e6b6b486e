//! Shared data model.
//!
//! A [`RecognizedWord`] is one OCR-recognized word with the engine's
//! confidence and its pixel position on the page. Words are immutable inputs
//! for one evaluation run; reconstructed lines and reports are derived and
//! rebuilt per document.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One OCR-recognized word or symbol.
///
/// `left`/`top` drive line reconstruction; `width`/`height` complete the
/// bounding box as reported by Tesseract but are not used for clustering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedWord {
    pub text: String,
    /// Engine confidence in the 0-100 range.
    pub confidence: f64,
    /// Zero-based page index within the document.
    pub page: u32,
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

/// Character- and word-level accuracy for one document.
///
/// Both values are `1 - edit_distance / ground_truth_length` at the
/// respective granularity. Identical texts score 1.0; heavily mismatched
/// recognition can score below zero, which is preserved rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyReport {
    pub char_accuracy: f64,
    pub word_accuracy: f64,
}

/// Full evaluation result for one input file.
#[derive(Debug, Clone, Serialize)]
pub struct FileEvaluation {
    pub path: PathBuf,
    /// Reading-order text reconstructed from the OCR word boxes.
    pub recognized: String,
    /// Cleaned text extracted from the PDF text layer.
    pub ground_truth: String,
    pub report: AccuracyReport,
}
