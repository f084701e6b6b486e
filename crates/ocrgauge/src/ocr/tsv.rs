//! Tesseract TSV output parsing.
//!
//! Tesseract's `tsv` output format emits one row per layout element
//! (`level, page_num, block_num, par_num, line_num, word_num, left, top,
//! width, height, conf, text`). Only word-level rows (level 5) carry
//! recognized text; page/block/paragraph rows are skipped, as are the header
//! row and empty-text rows Tesseract sometimes produces.

use super::error::OcrError;
use crate::types::RecognizedWord;

/// Row level for words in Tesseract TSV output.
pub(crate) const TSV_WORD_LEVEL: u32 = 5;
/// Field count of a complete TSV row.
pub(crate) const TSV_MIN_FIELDS: usize = 12;

fn parse_field<T: std::str::FromStr>(fields: &[&str], index: usize, name: &str, line_num: usize) -> Result<T, OcrError> {
    fields[index].parse::<T>().map_err(|_| {
        OcrError::MalformedOutput(format!(
            "row {}: unparseable {} field '{}'",
            line_num, name, fields[index]
        ))
    })
}

/// Parse word-level TSV rows into [`RecognizedWord`]s tagged with `page`.
///
/// Words are returned in emission order; no confidence filtering happens
/// here. A word row with unparseable coordinates or a confidence outside
/// 0-100 is a malformed-output error rather than being silently dropped.
pub fn parse_words_from_tsv(tsv_data: &str, page: u32) -> Result<Vec<RecognizedWord>, OcrError> {
    let mut words = Vec::new();

    for (line_num, line) in tsv_data.lines().enumerate() {
        if line_num == 0 {
            continue;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < TSV_MIN_FIELDS {
            continue;
        }

        let level = fields[0].parse::<u32>().unwrap_or(0);
        if level != TSV_WORD_LEVEL {
            continue;
        }

        // Some Tesseract versions emit word-level rows with empty text and
        // confidence -1; they carry nothing and are skipped before the
        // range check.
        let text = fields[11].trim();
        if text.is_empty() {
            continue;
        }

        let confidence: f64 = parse_field(&fields, 10, "conf", line_num)?;
        if !(0.0..=100.0).contains(&confidence) {
            return Err(OcrError::MalformedOutput(format!(
                "row {}: confidence {} outside the 0-100 range",
                line_num, confidence
            )));
        }

        words.push(RecognizedWord {
            text: text.to_string(),
            confidence,
            page,
            left: parse_field(&fields, 6, "left", line_num)?,
            top: parse_field(&fields, 7, "top", line_num)?,
            width: parse_field(&fields, 8, "width", line_num)?,
            height: parse_field(&fields, 9, "height", line_num)?,
        });
    }

    Ok(words)
}
