//! Integration tests for Language
//!
//! Tests language tags, parsing, and localized messages.

use chess_nlp_foundation::{Direction, ErrorKind, Language};

#[test]
fn tags_round_trip() {
    for language in Language::ALL {
        assert_eq!(language.tag().parse::<Language>().unwrap(), language);
        assert_eq!(language.to_string(), language.tag());
    }
}

#[test]
fn names_are_accepted() {
    assert_eq!("English".parse::<Language>().unwrap(), Language::English);
    assert_eq!(" deutsch ".parse::<Language>().unwrap(), Language::German);
}

#[test]
fn unknown_tags_are_rejected() {
    let err = "fr".parse::<Language>().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedLanguage(ref tag) if tag == "fr"));
}

#[test]
fn messages_are_localized() {
    assert_eq!(
        Language::English.invalid_move("foo", Direction::TextToNotation),
        "Invalid move: foo (text to notation)"
    );
    assert_eq!(
        Language::German.invalid_move("foo", Direction::NotationToText),
        "Ungültiger Zug: foo (Notation zu Text)"
    );
    assert!(Language::German.invalid_en_passant("x").starts_with("Ungültiger En-passant-Schlag"));
}
