//! Integration tests for text to notation
//!
//! Tests the English forward grammar with default vocabulary.

use chess_nlp::{ChessNlp, ErrorKind, Options};

fn nlp() -> ChessNlp {
    ChessNlp::new(Options::new()).unwrap()
}

fn assert_notation(cases: &[(&str, &str)]) {
    let nlp = nlp();
    for (text, expected) in cases {
        assert_eq!(nlp.to_notation(text).unwrap(), *expected, "{text}");
    }
}

// =============================================================================
// Piece Moves
// =============================================================================

#[test]
fn piece_moves() {
    assert_notation(&[
        ("bishop to D7", "Bd7"),
        ("rook A1", "Ra1"),
        ("queen captures H8", "Qxh8"),
        ("king takes F5", "Kxf5"),
        ("king dseven", "Kd7"),
        ("queen a-4", "Qa4"),
    ]);
}

#[test]
fn disambiguated_piece_moves() {
    assert_notation(&[
        ("knight a to B4", "Nab4"),
        ("Bishop 2 h8", "B2h8"),
        ("Queen C2D3", "Qc2d3"),
        ("queen c 2 d 3", "Qc2d3"),
        ("rook a takes a3", "Raxa3"),
        ("rook six f eight", "R6f8"),
    ]);
}

// =============================================================================
// Pawn Moves
// =============================================================================

#[test]
fn pawn_moves() {
    assert_notation(&[
        ("E5", "e5"),
        ("h take G6", "hxg6"),
        ("e one", "e1"),
        ("Cfive", "c5"),
        ("f six", "f6"),
    ]);
}

#[test]
fn en_passant() {
    assert_notation(&[
        ("F captures G4 en passant", "fxg3"),
        ("a takes b5 en passant", "axb4"),
    ]);
}

#[test]
fn en_passant_on_other_ranks_fails() {
    let err = nlp().to_notation("g takes h7 en passant").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidEnPassant { .. }));
    assert!(err.to_string().contains("Invalid en passant capture"));
}

#[test]
fn promotions() {
    assert_notation(&[
        ("c8 promote to Queen", "c8=Q"),
        ("F captures E8 promote to knight", "fxe8=N"),
    ]);
}

// =============================================================================
// Suffixes, Castling, Outcomes
// =============================================================================

#[test]
fn check_and_checkmate() {
    assert_notation(&[
        ("rook takes b7 mate", "Rxb7#"),
        ("Bishop A c3 check", "Bac3+"),
        ("E7 check", "e7+"),
        ("bishop captures A two", "Bxa2"),
        ("queen to b three check", "Qb3+"),
        ("knight take hfour checkmate", "Nxh4#"),
    ]);
}

#[test]
fn castling() {
    assert_notation(&[
        ("castle kingside", "O-O"),
        ("castle Queenside", "O-O-O"),
        ("castle King Side", "O-O"),
        ("castle queen-side", "O-O-O"),
    ]);
}

#[test]
fn resignations_and_outcomes() {
    assert_notation(&[
        ("Black Resigns", "1-0"),
        ("white resigns", "0-1"),
        ("white wins", "1-0"),
        ("black wins", "0-1"),
        ("draw", "1/2-1/2"),
    ]);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn unparseable_text_fails() {
    let err = nlp().to_notation("foo").unwrap_err();
    assert!(err.is_invalid_move());
    assert!(err.to_string().contains("Invalid move: foo"));
}

#[test]
fn suffix_needs_a_move() {
    assert!(nlp().to_notation("check").is_err());
    assert!(nlp().to_notation("e4 check check").is_err());
}

#[test]
fn empty_input_fails() {
    assert!(nlp().to_notation("").unwrap_err().is_invalid_move());
    assert!(nlp().to_notation("   ").unwrap_err().is_invalid_move());
}
