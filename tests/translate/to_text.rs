//! Integration tests for notation to text
//!
//! Tests the English inverse grammar.

use chess_nlp::{ChessNlp, Options};

#[test]
fn notation_to_text() {
    let nlp = ChessNlp::new(Options::new()).unwrap();
    let cases = [
        ("e4", "e4"),
        ("hxg2", "h captures g2"),
        ("axb8=Q", "a captures b8 promote to queen"),
        ("cxd1=Q+", "c captures d1 promote to queen check"),
        ("d8=Q#", "d8 promote to queen checkmate"),
        ("f1=N", "f1 promote to knight"),
        ("Kg2", "king to g2"),
        ("Qh7", "queen to h7"),
        ("Rab7", "rook a to b7"),
        ("Bc4", "bishop to c4"),
        ("N6e7", "knight 6 to e7"),
        ("Qc2d3", "queen c2 to d3"),
        ("Qxh8", "queen captures h8"),
        ("O-O", "castle kingside"),
        ("O-O-O", "castle queenside"),
        ("0-1", "black wins"),
        ("1-0", "white wins"),
        ("1/2-1/2", "draw"),
    ];
    for (san, expected) in cases {
        assert_eq!(nlp.to_text(san).unwrap(), expected, "{san}");
    }
}

#[test]
fn unparseable_notation_fails() {
    let nlp = ChessNlp::new(Options::new()).unwrap();
    let err = nlp.to_text("foo").unwrap_err();
    assert!(err.is_invalid_move());
    assert!(err.to_string().contains("Invalid move: foo"));
}

#[test]
fn notation_is_exact() {
    let nlp = ChessNlp::new(Options::new()).unwrap();
    for san in ["E4", "kg2", "Kg2 ", "Pe4", "O-O-O-O", "e9", "i4", ""] {
        assert!(nlp.to_text(san).is_err(), "{san:?}");
    }
}

#[test]
fn results_take_no_suffix() {
    let nlp = ChessNlp::new(Options::new()).unwrap();
    for san in ["1-0+", "0-1#", "1/2-1/2#", "1/2-1/2+"] {
        let err = nlp.to_text(san).unwrap_err();
        assert!(err.is_invalid_move(), "{san}");
    }
    assert_eq!(nlp.to_text("O-O-O#").unwrap(), "castle queenside checkmate");
}

#[test]
fn rendered_text_reads_back() {
    let nlp = ChessNlp::new(Options::new()).unwrap();
    for san in ["Rab7", "N6e7", "Qc2d3", "cxd1=Q+", "O-O-O", "1/2-1/2"] {
        let text = nlp.to_text(san).unwrap();
        assert_eq!(nlp.to_notation(&text).unwrap(), san, "{text}");
    }
}

// =============================================================================
// Arbitrary input
// =============================================================================

mod arbitrary {
    use chess_nlp::{ChessNlp, Options};
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Unrecognized input always fails as an invalid move.
        #[test]
        fn failures_are_invalid_moves(input in "[a-hxKQRBNO1-8=+#/ -]{0,10}") {
            let nlp = ChessNlp::new(Options::new()).unwrap();
            if let Err(err) = nlp.to_text(&input) {
                prop_assert!(err.is_invalid_move());
            }
            if let Err(err) = nlp.to_notation(&input) {
                prop_assert!(err.is_invalid_move() || err.is_invalid_en_passant());
            }
        }
    }
}
