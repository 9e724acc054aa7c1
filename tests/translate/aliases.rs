//! Integration tests for caller-supplied aliases
//!
//! Tests that alias terms extend the forward vocabulary for every slot kind.

use chess_nlp::{ChessNlp, ErrorKind, Options};

fn with_alias(slot: &str, terms: &[&str]) -> ChessNlp {
    ChessNlp::new(Options::new().alias(slot, terms.iter().copied())).unwrap()
}

#[test]
fn piece_aliases() {
    let cases: &[(&str, &[&str], &str, &str)] = &[
        ("king", &["foo", "bar"], "bar takes c7", "Kxc7"),
        ("queen", &["kween"], "KwEen to A8", "Qa8"),
        ("rook", &["Brooke", "brook", "hook"], "brook A d6", "Rad6"),
        ("bishop", &["foo", "bar"], "foo 2 e4", "B2e4"),
        ("knight", &["night", "nite"], "Night captures b2 mate", "Nxb2#"),
    ];
    for (slot, terms, text, expected) in cases {
        assert_eq!(with_alias(slot, terms).to_notation(text).unwrap(), *expected, "{text}");
    }
}

#[test]
fn file_aliases() {
    let cases: &[(&str, &[&str], &str, &str)] = &[
        ("a", &["alpha"], "ALPHA takes b4", "axb4"),
        ("b", &["beta", "bravo"], "rook bravo to beta7", "Rbb7"),
        ("c", &["charlie"], "charlie6", "c6"),
        ("d", &["delta"], "Queen captures DELTA1 checkmate", "Qxd1#"),
        ("e", &["echo"], "Echo5", "e5"),
        ("f", &["foxtrot"], "knight foxtrot 3", "Nf3"),
        ("g", &["golf"], "rook golf takes golf2", "Rgxg2"),
        ("h", &["hotel", "hey"], "rook hey takes hotel 6", "Rhxh6"),
    ];
    for (slot, terms, text, expected) in cases {
        assert_eq!(with_alias(slot, terms).to_notation(text).unwrap(), *expected, "{text}");
    }
}

#[test]
fn rank_aliases() {
    let cases: &[(&str, &[&str], &str, &str)] = &[
        ("1", &["i", "won"], "rook won takes a i", "R1xa1"),
        ("2", &["too", "to"], "e too", "e2"),
        ("3", &["iii"], "knight to fiii", "Nf3"),
        ("4", &["force"], "bishop g force", "Bg4"),
        ("5", &["v"], "Knight V to b7", "N5b7"),
        ("6", &["vi"], "hvi", "h6"),
        ("7", &["vii"], "Queen to c vii check", "Qc7+"),
        ("8", &["ate"], "king b ate", "Kb8"),
    ];
    for (slot, terms, text, expected) in cases {
        assert_eq!(with_alias(slot, terms).to_notation(text).unwrap(), *expected, "{text}");
    }
}

#[test]
fn keyword_aliases() {
    let nlp = ChessNlp::new(
        Options::new()
            .alias("capture", ["eats"])
            .alias("castle", ["castles"])
            .alias("checkmate", ["game over"])
            .alias("en_passant", ["in passing"]),
    )
    .unwrap();
    assert_eq!(nlp.to_notation("knight eats e5").unwrap(), "Nxe5");
    assert_eq!(nlp.to_notation("castles long").unwrap(), "O-O-O");
    assert_eq!(nlp.to_notation("queen h7 game over").unwrap(), "Qh7#");
    assert_eq!(nlp.to_notation("d eats e5 in passing").unwrap(), "dxe4");
}

#[test]
fn longer_aliases_win_regardless_of_order() {
    let nlp = with_alias("4", &["for", "fore"]);
    assert_eq!(nlp.to_notation("knight to h fore").unwrap(), "Nh4");
    let nlp = with_alias("4", &["fore", "for"]);
    assert_eq!(nlp.to_notation("knight to h fore").unwrap(), "Nh4");
}

#[test]
fn duplicate_aliases_are_harmless() {
    let nlp = with_alias("knight", &["night", "Night", "NIGHT", "knight"]);
    assert_eq!(nlp.to_notation("night to c3").unwrap(), "Nc3");
}

#[test]
fn aliases_do_not_touch_the_inverse() {
    let nlp = with_alias("knight", &["night"]);
    assert_eq!(nlp.to_text("Nc3").unwrap(), "knight to c3");
}

#[test]
fn alias_punctuation_is_literal() {
    let nlp = with_alias("queen", &["q.", "\"queen\""]);
    assert_eq!(nlp.to_notation("Q. to d1").unwrap(), "Qd1");
    assert_eq!(nlp.to_notation("\"queen\" to d1").unwrap(), "Qd1");
}

#[test]
fn invalid_alias_configuration() {
    let err = ChessNlp::new(Options::new().alias("pawn", ["p"])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownSlot(ref slot) if slot == "pawn"));

    let err = ChessNlp::new(Options::new().alias("king", ["  "])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyAlias { .. }));

    let err = ChessNlp::new(Options::new().alias("bishop", ["Rook"])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ConflictingAlias { .. }));
}
