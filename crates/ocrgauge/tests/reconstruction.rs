//! Line reconstruction scenarios through the public API.

use ocrgauge::{RecognizedWord, reconstruct_lines};

fn word(text: &str, confidence: f64, page: u32, left: i64, top: i64) -> RecognizedWord {
    RecognizedWord {
        text: text.to_string(),
        confidence,
        page,
        left,
        top,
        width: 50,
        height: 20,
    }
}

#[test]
fn reconstructs_two_lines_from_drifting_tops() {
    let words = vec![
        word("Hello", 90.0, 1, 10, 100),
        word("World", 90.0, 1, 60, 102),
        word("Foo", 90.0, 1, 10, 200),
    ];

    assert_eq!(reconstruct_lines(&words, 50.0, 40), "Hello World\nFoo");
}

#[test]
fn drops_low_confidence_words_entirely() {
    let words = vec![
        word("Hello", 90.0, 1, 10, 100),
        word("World", 30.0, 1, 60, 102),
        word("Foo", 90.0, 1, 10, 200),
    ];

    let reconstructed = reconstruct_lines(&words, 50.0, 40);
    assert_eq!(reconstructed, "Hello\nFoo");
    assert!(!reconstructed.contains("World"));
    // the dropped word cannot even form an empty line
    assert_eq!(reconstructed.lines().count(), 2);
}

#[test]
fn rebuilds_a_rotated_page_in_reading_order() {
    // A mildly rotated two-column-free page: tops drift ~5 px per word,
    // words arrive in scan order.
    let words = vec![
        word("Vilniaus", 88.0, 0, 12, 104),
        word("universiteto", 91.0, 0, 150, 109),
        word("biblioteka", 85.0, 0, 340, 115),
        word("įkurta", 93.0, 0, 14, 210),
        word("1570", 97.0, 0, 120, 214),
        word("metais", 90.0, 0, 200, 219),
    ];

    assert_eq!(
        reconstruct_lines(&words, 50.0, 40),
        "Vilniaus universiteto biblioteka\nįkurta 1570 metais"
    );
}

#[test]
fn page_boundary_splits_lines_with_equal_tops() {
    let words = vec![
        word("end", 90.0, 0, 500, 700),
        word("start", 90.0, 1, 10, 700),
    ];

    assert_eq!(reconstruct_lines(&words, 50.0, 40), "end\nstart");
}

#[test]
fn band_edge_exactly_at_forty_pixels_splits() {
    let words = vec![
        word("upper", 90.0, 0, 10, 100),
        word("lower", 90.0, 0, 10, 140),
    ];
    assert_eq!(reconstruct_lines(&words, 50.0, 40), "upper\nlower");

    let words = vec![
        word("upper", 90.0, 0, 10, 100),
        word("lower", 90.0, 0, 60, 139),
    ];
    assert_eq!(reconstruct_lines(&words, 50.0, 40), "upper lower");
}

#[test]
fn unsorted_lefts_are_reordered_within_a_line() {
    let words = vec![
        word("trečias", 90.0, 0, 300, 100),
        word("pirmas", 90.0, 0, 10, 101),
        word("antras", 90.0, 0, 150, 99),
    ];

    assert_eq!(reconstruct_lines(&words, 50.0, 40), "pirmas antras trečias");
}

#[test]
fn empty_and_single_word_documents() {
    assert_eq!(reconstruct_lines(&[], 50.0, 40), "");

    let words = vec![word("vienintelis", 60.0, 0, 10, 10)];
    assert_eq!(reconstruct_lines(&words, 50.0, 40), "vienintelis");
}
