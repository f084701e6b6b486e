//! OCR subsystem.
//!
//! Wraps the system Tesseract binary: page images go in, typed
//! [`RecognizedWord`](crate::types::RecognizedWord)s come out, parsed from
//! Tesseract's word-level TSV output. Confidence filtering is deliberately
//! not done here; the line reconstructor owns the threshold.

pub mod error;
pub mod tesseract;
pub mod tsv;

pub use error::OcrError;
pub use tesseract::TesseractBackend;
pub use tsv::parse_words_from_tsv;
