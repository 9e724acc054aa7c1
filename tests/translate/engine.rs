//! Integration tests for engine construction
//!
//! Tests options, language selection, and sharing an engine across threads.

use std::sync::Arc;
use std::thread;

use chess_nlp::{ChessNlp, ErrorKind, Language, Options};

#[test]
fn engine_with_defaults() {
    let nlp = ChessNlp::new(Options::default()).unwrap();
    assert_eq!(nlp.language(), Language::English);
    assert!(nlp.aliases().is_empty());
}

#[test]
fn engine_keeps_caller_aliases() {
    let options = Options::new().alias("knight", ["night"]).alias("4", ["for"]);
    let nlp = ChessNlp::new(options.clone()).unwrap();
    assert_eq!(nlp.aliases(), &options.aliases);
}

#[test]
fn engine_from_language_tag() {
    let nlp = ChessNlp::new(Options::new().language_tag("de").unwrap()).unwrap();
    assert_eq!(nlp.language(), Language::German);

    let err = Options::new().language_tag("xx").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedLanguage(_)));
}

#[test]
fn method_aliases_match() {
    let nlp = ChessNlp::new(Options::new()).unwrap();
    assert_eq!(nlp.to_san("bishop to D7").unwrap(), nlp.to_notation("bishop to D7").unwrap());
    assert_eq!(nlp.from_san("Kg2").unwrap(), nlp.to_text("Kg2").unwrap());
    assert!(nlp.to_san("foo").unwrap_err().is_invalid_move());
    assert!(nlp.from_san("foo").unwrap_err().is_invalid_move());
}

#[test]
fn engines_are_independent() {
    let plain = ChessNlp::new(Options::new()).unwrap();
    let aliased = ChessNlp::new(Options::new().alias("knight", ["night"])).unwrap();
    assert!(plain.to_notation("night to c3").is_err());
    assert_eq!(aliased.to_notation("night to c3").unwrap(), "Nc3");
}

#[test]
fn engine_is_shared_across_threads() {
    let nlp = Arc::new(ChessNlp::new(Options::new()).unwrap());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let nlp = Arc::clone(&nlp);
            thread::spawn(move || {
                let san = format!("N{}", ["a1", "b2", "c3", "d4", "e5", "f6", "g7", "h8"][i]);
                let text = nlp.to_text(&san).unwrap();
                assert_eq!(nlp.to_notation(&text).unwrap(), san);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[cfg(feature = "serde")]
#[test]
fn engine_from_serialized_options() {
    let options: Options =
        serde_json::from_str(r#"{"language": "en", "aliases": {"knight": ["night"]}}"#).unwrap();
    let nlp = ChessNlp::new(options).unwrap();
    assert_eq!(nlp.to_notation("night takes e5").unwrap(), "Nxe5");
}
