//! Integration tests for German
//!
//! Tests the German forward and inverse grammars and localized errors.

use chess_nlp::{ChessNlp, Language, Options};

fn nlp() -> ChessNlp {
    ChessNlp::new(Options::new().language(Language::German)).unwrap()
}

#[test]
fn text_to_notation() {
    let nlp = nlp();
    let cases = [
        ("Läufer nach D7", "Bd7"),
        ("Turm A1", "Ra1"),
        ("Dame schlägt H8", "Qxh8"),
        ("König nimmt F5", "Kxf5"),
        ("Springer a nach B4", "Nab4"),
        ("Läufer 2 h8", "B2h8"),
        ("Dame C2D3", "Qc2d3"),
        ("dame c zwei d drei", "Qc2d3"),
        ("F schlägt G4 en passant", "fxg3"),
        ("a nimmt b fünf en passant", "axb4"),
        ("E5", "e5"),
        ("e eins", "e1"),
        ("c8 Umwandlung in Dame", "c8=Q"),
        ("F schlägt E8 verwandelt in Springer", "fxe8=N"),
        ("Turm schlägt b7 matt", "Rxb7#"),
        ("Läufer A c3 Schach", "Bac3+"),
        ("Springer schlägt h vier Schachmatt", "Nxh4#"),
        ("Turm sechs f acht", "R6f8"),
        ("kurze Rochade", "O-O"),
        ("lange Rochade", "O-O-O"),
        ("Rochade Königsseite", "O-O"),
        ("Schwarz gibt auf", "1-0"),
        ("Weiss gibt auf", "0-1"),
        ("Weiß gewinnt", "1-0"),
        ("Remis", "1/2-1/2"),
    ];
    for (text, expected) in cases {
        assert_eq!(nlp.to_notation(text).unwrap(), expected, "{text}");
    }
}

#[test]
fn notation_to_text() {
    let nlp = nlp();
    let cases = [
        ("e4", "e4"),
        ("hxg2", "h schlägt g2"),
        ("axb8=Q", "a schlägt b8 umwandlung in dame"),
        ("cxd1=Q+", "c schlägt d1 umwandlung in dame schach"),
        ("d8=Q#", "d8 umwandlung in dame schachmatt"),
        ("Kg2", "könig nach g2"),
        ("Rab7", "turm a nach b7"),
        ("N6e7", "springer 6 nach e7"),
        ("O-O", "kurze rochade"),
        ("O-O-O", "lange rochade"),
        ("1-0", "weiß gewinnt"),
        ("0-1", "schwarz gewinnt"),
        ("1/2-1/2", "remis"),
    ];
    for (san, expected) in cases {
        assert_eq!(nlp.to_text(san).unwrap(), expected, "{san}");
    }
}

#[test]
fn results_take_no_suffix() {
    let nlp = nlp();
    assert!(nlp.to_text("0-1+").unwrap_err().is_invalid_move());
    assert!(nlp.to_text("1-0#").unwrap_err().is_invalid_move());
    assert!(nlp.to_notation("Weiß gibt auf Schach").unwrap_err().is_invalid_move());
}

#[test]
fn german_aliases() {
    let nlp = ChessNlp::new(
        Options::new()
            .language(Language::German)
            .alias("knight", ["pferd"])
            .alias("capture", ["frisst"]),
    )
    .unwrap();
    assert_eq!(nlp.to_notation("Pferd frisst e5").unwrap(), "Nxe5");
}

#[test]
fn english_terms_are_not_german() {
    assert!(nlp().to_notation("bishop to d7").is_err());
}

#[test]
fn errors_are_localized() {
    let nlp = nlp();
    let err = nlp.to_notation("foo").unwrap_err();
    assert!(err.to_string().starts_with("Ungültiger Zug: foo"));

    let err = nlp.to_text("foo").unwrap_err();
    assert_eq!(err.to_string(), "Ungültiger Zug: foo (Notation zu Text)");

    let err = nlp.to_notation("g schlägt h7 en passant").unwrap_err();
    assert!(err.is_invalid_en_passant());
    assert!(err.to_string().starts_with("Ungültiger En-passant-Schlag"));
}
