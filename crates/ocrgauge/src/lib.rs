//! ocrgauge - OCR Accuracy Evaluation Library
//!
//! Measures how faithfully an OCR engine reproduces the known-correct text
//! layer of a PDF. Page images are recognized with Tesseract, the word boxes
//! are reassembled into reading-order lines (tolerant of slightly rotated
//! scans), and the result is scored against the cleaned `pdftotext` output
//! with normalized edit distance at character and word granularity.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ocrgauge::{EvaluationConfig, evaluate_file};
//!
//! # fn main() -> ocrgauge::Result<()> {
//! let config = EvaluationConfig::default();
//! let evaluation = evaluate_file("document.pdf".as_ref(), &config)?;
//! println!(
//!     "{:.2}, {:.2}",
//!     evaluation.report.char_accuracy, evaluation.report.word_accuracy
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Core** (`core`): configuration loading and the per-file pipeline
//! - **Layout** (`layout`): reading-order line reconstruction from word boxes
//! - **Metrics** (`metrics`): Levenshtein-based accuracy scoring
//! - **OCR** (`ocr`): Tesseract subprocess backend and TSV parsing
//! - **PDF** (`pdf`): poppler-based text extraction and page rendering
//! - **Text** (`text`): Lithuanian ground-truth cleanup

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod ocr;
pub mod pdf;
pub mod text;
pub mod types;

pub use error::{OcrGaugeError, Result};
pub use types::{AccuracyReport, FileEvaluation, RecognizedWord};

pub use core::config::EvaluationConfig;
pub use core::pipeline::evaluate_file;

pub use layout::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_LINE_BAND, filter_by_confidence, reconstruct_lines};
pub use metrics::{evaluate, levenshtein};
pub use text::clean_ground_truth;
