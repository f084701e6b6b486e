//! Reading-order line reconstruction from OCR word boxes.
//!
//! Tesseract emits words in scan order with pixel positions, but a slightly
//! rotated page makes the `top` coordinate of a single printed line drift a
//! few pixels from word to word. This module clusters words into lines with
//! a vertical tolerance band and rebuilds the document text in reading
//! order:
//!
//! 1. Drop words whose rounded confidence is below the threshold.
//! 2. Sequentially cluster consecutive words whose tops differ by less than
//!    the band (strictly, in either direction) on the same page; every word
//!    in a cluster is assigned the top of the word that opened it.
//! 3. Stable-sort by `(page, line top, left)` and group adjacent words that
//!    share `(page, line top)` into lines.
//!
//! Using the first top of a cluster rather than a running average keeps the
//! clustering decision local and order-sensitive, which matches how the
//! engine emits words (left-to-right, top-to-bottom).

use crate::types::RecognizedWord;

/// Default minimum rounded confidence for a word to participate in
/// reconstruction.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 50.0;

/// Default vertical tolerance band in pixels.
pub const DEFAULT_LINE_BAND: i64 = 40;

/// Filter words by rounded confidence, preserving input order.
///
/// A word passes when `confidence.round() >= threshold`; exactly at the
/// threshold passes, below is dropped entirely and never influences
/// clustering or output.
pub fn filter_by_confidence(words: &[RecognizedWord], threshold: f64) -> Vec<&RecognizedWord> {
    words.iter().filter(|w| w.confidence.round() >= threshold).collect()
}

/// Assign each word the canonical top of the line cluster it belongs to.
///
/// Walks the words in input order, keeping an open cluster of consecutive
/// tops. A word continues the cluster iff its vertical distance to the
/// previous word's top is strictly less than `band` in both directions and
/// the page is unchanged; otherwise the cluster is flushed and a new one
/// opens. Every member of a cluster gets the top recorded by the cluster's
/// first word.
///
/// Returns one canonical top per input word, index-aligned.
fn assign_line_tops(words: &[&RecognizedWord], band: i64) -> Vec<i64> {
    let mut tops = Vec::with_capacity(words.len());
    let mut cluster_first = 0i64;
    let mut cluster_len = 0usize;
    let mut previous: Option<(u32, i64)> = None;

    for word in words {
        let continues = match previous {
            None => false,
            Some((prev_page, prev_top)) => {
                prev_top + band > word.top && prev_top < word.top + band && prev_page == word.page
            }
        };

        if continues {
            cluster_len += 1;
        } else {
            tops.extend(std::iter::repeat_n(cluster_first, cluster_len));
            cluster_first = word.top;
            cluster_len = 1;
        }
        previous = Some((word.page, word.top));
    }
    // last cluster never saw a break
    tops.extend(std::iter::repeat_n(cluster_first, cluster_len));

    tops
}

/// Reconstruct reading-order document text from OCR words.
///
/// Words are consumed in input order (no pre-sort); the output is one string
/// with lines separated by `\n`, each line the space-joined word texts in
/// left-to-right order. An empty (or fully filtered) input yields an empty
/// string.
pub fn reconstruct_lines(words: &[RecognizedWord], threshold: f64, band: i64) -> String {
    let kept = filter_by_confidence(words, threshold);
    let tops = assign_line_tops(&kept, band);

    let mut records: Vec<(u32, i64, i64, &str)> = kept
        .iter()
        .zip(tops)
        .map(|(w, top)| (w.page, top, w.left, w.text.as_str()))
        .collect();
    // Stable sort: words with identical (page, top, left) keep input order.
    records.sort_by_key(|&(page, top, left, _)| (page, top, left));

    let mut lines: Vec<String> = Vec::new();
    let mut current_key: Option<(u32, i64)> = None;
    for (page, top, _, text) in records {
        match lines.last_mut() {
            Some(line) if current_key == Some((page, top)) => {
                line.push(' ');
                line.push_str(text);
            }
            _ => {
                lines.push(text.to_string());
                current_key = Some((page, top));
            }
        }
    }

    lines.join("\n")
}
