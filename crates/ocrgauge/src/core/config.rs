//! Configuration loading and management.
//!
//! [`EvaluationConfig`] carries every tunable of an evaluation run. It can be
//! created programmatically, loaded from a TOML file, or discovered as
//! `ocrgauge.toml` in the current directory or any parent.

use crate::{OcrGaugeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Evaluation configuration.
///
/// # Example
///
/// ```rust
/// use ocrgauge::EvaluationConfig;
///
/// let config = EvaluationConfig::default();
/// assert_eq!(config.confidence_threshold, 50.0);
/// assert_eq!(config.line_band, 40);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Minimum rounded word confidence to keep a word (0-100).
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,

    /// Vertical tolerance band in pixels for same-line clustering.
    #[serde(default = "default_line_band")]
    pub line_band: i64,

    /// Tesseract language code.
    #[serde(default = "default_language")]
    pub language: String,

    /// Rendering resolution for OCR page images.
    #[serde(default = "default_dpi")]
    pub dpi: u32,
}

fn default_confidence_threshold() -> f64 {
    crate::layout::DEFAULT_CONFIDENCE_THRESHOLD
}

fn default_line_band() -> i64 {
    crate::layout::DEFAULT_LINE_BAND
}

fn default_language() -> String {
    "lit".to_string()
}

fn default_dpi() -> u32 {
    300
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            line_band: default_line_band(),
            language: default_language(),
            dpi: default_dpi(),
        }
    }
}

impl EvaluationConfig {
    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `OcrGaugeError::Validation` for a non-finite or out-of-range
    /// confidence threshold, a non-positive band, an empty language code, or
    /// a zero DPI.
    pub fn validate(&self) -> Result<()> {
        if !self.confidence_threshold.is_finite()
            || !(0.0..=100.0).contains(&self.confidence_threshold)
        {
            return Err(OcrGaugeError::validation(format!(
                "confidence_threshold must be within 0-100, got {}",
                self.confidence_threshold
            )));
        }
        if self.line_band <= 0 {
            return Err(OcrGaugeError::validation(format!(
                "line_band must be positive, got {}",
                self.line_band
            )));
        }
        if self.language.is_empty() {
            return Err(OcrGaugeError::validation("language must not be empty"));
        }
        if self.dpi == 0 {
            return Err(OcrGaugeError::validation("dpi must be positive"));
        }
        Ok(())
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `OcrGaugeError::Validation` if the file doesn't exist or is
    /// invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            OcrGaugeError::validation(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            OcrGaugeError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e))
        })
    }

    /// Discover a configuration file in parent directories.
    ///
    /// Searches for `ocrgauge.toml` in the current directory and every
    /// parent, returning `None` when no file is found.
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(OcrGaugeError::Io)?;

        loop {
            let candidate = current.join("ocrgauge.toml");
            if candidate.exists() {
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }
}
