//! Accuracy scoring and ground-truth cleaning through the public API.

use ocrgauge::{OcrGaugeError, RecognizedWord, clean_ground_truth, evaluate, reconstruct_lines};

#[test]
fn identical_texts_score_one_at_both_granularities() {
    let text = "Lietuvos nacionalinė biblioteka\nVilnius";
    let report = evaluate(text, text).unwrap();
    assert_eq!(report.char_accuracy, 1.0);
    assert_eq!(report.word_accuracy, 1.0);
}

#[test]
fn empty_ground_truth_is_a_typed_error() {
    let err = evaluate("", "anything").unwrap_err();
    assert!(matches!(err, OcrGaugeError::EmptyGroundTruth(_)));
}

#[test]
fn overlong_recognition_scores_below_zero() {
    let report = evaluate("a", "abcdef").unwrap();
    assert_eq!(report.char_accuracy, -4.0);
}

#[test]
fn dropped_word_lowers_word_accuracy_proportionally() {
    let truth = "vienas du trys keturi";
    let recognized = "vienas du keturi";
    let report = evaluate(truth, recognized).unwrap();
    assert!((report.word_accuracy - 0.75).abs() < 1e-12);
}

#[test]
fn cleaning_feeds_scoring() {
    // pdftotext output with encoding artifacts and ragged whitespace scores
    // 1.0 against an OCR reading of the proper Lithuanian text.
    let raw_truth = "  Ávadas   û  \n tësinys ";
    let cleaned = clean_ground_truth(raw_truth);
    assert_eq!(cleaned, "Įvadas ū\ntėsinys");

    let report = evaluate(&cleaned, "Įvadas ū\ntėsinys").unwrap();
    assert_eq!(report.char_accuracy, 1.0);
    assert_eq!(report.word_accuracy, 1.0);
}

#[test]
fn reconstruction_output_scores_against_ground_truth() {
    let words = vec![
        RecognizedWord {
            text: "Labas".to_string(),
            confidence: 96.0,
            page: 0,
            left: 10,
            top: 100,
            width: 60,
            height: 20,
        },
        RecognizedWord {
            text: "rytas".to_string(),
            confidence: 94.0,
            page: 0,
            left: 90,
            top: 103,
            width: 60,
            height: 20,
        },
    ];

    let recognized = reconstruct_lines(&words, 50.0, 40);
    let report = evaluate("Labas rytas", &recognized).unwrap();
    assert_eq!(report.char_accuracy, 1.0);
    assert_eq!(report.word_accuracy, 1.0);
}
