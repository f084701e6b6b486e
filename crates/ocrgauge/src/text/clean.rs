//! Ground-truth cleaning for Lithuanian PDFs.
//!
//! The poppler text layer of older Lithuanian documents renders several
//! letters with Western-encoding lookalikes. The remap table below is fixed
//! data, not an algorithm; extend it only when a new substitution artifact
//! shows up in real documents.

use once_cell::sync::Lazy;
use regex::Regex;

/// Character-substitution artifacts observed in pdftotext output.
const LITHUANIAN_REPLACEMENTS: &[(char, char)] = &[
    ('Á', 'Į'),
    ('è', 'č'),
    ('é', 'č'),
    ('ë', 'ė'),
    ('ø', 'ų'),
    ('Ø', 'Ų'),
    ('¥', 'Ą'),
    ('û', 'ū'),
];

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex pattern is valid and should compile"));

/// Map encoding-artifact characters back to the Lithuanian letters they
/// stand for. Unlisted characters pass through unchanged.
pub fn fix_lithuanian_letters(text: &str) -> String {
    text.chars()
        .map(|ch| {
            LITHUANIAN_REPLACEMENTS
                .iter()
                .find(|(artifact, _)| *artifact == ch)
                .map_or(ch, |(_, letter)| *letter)
        })
        .collect()
}

/// Collapse every within-line whitespace run to a single space and trim
/// each line. Line structure is preserved.
pub fn collapse_whitespace(text: &str) -> String {
    text.split('\n')
        .map(|line| WHITESPACE_RUN.replace_all(line, " ").trim().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full ground-truth cleaning: character remapping, then whitespace
/// normalization.
pub fn clean_ground_truth(text: &str) -> String {
    collapse_whitespace(&fix_lithuanian_letters(text))
}
