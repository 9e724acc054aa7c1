//! Integration tests for the matcher
//!
//! Tests ordered choice, values, hooks, and failure reporting.

use chess_nlp_grammar::{Bindings, HookError, Hooks, MatchError, Matcher, compile, parse};

fn lower(bindings: &Bindings<'_>) -> Result<String, HookError> {
    Ok(bindings.concat().to_lowercase())
}

fn matcher(source: &str) -> Matcher {
    compile(&parse(source).unwrap(), &Hooks::new().with("lower", lower)).unwrap()
}

// =============================================================================
// Values
// =============================================================================

#[test]
fn match_concatenates_values() {
    let m = matcher(
        "start = _ piece _ square _\n\
         piece = 'knight'i { \"N\" } / 'night'i { \"N\" }\n\
         square = [a-h]i [1-8] { lower }\n\
         _ = [ \\t]* { \"\" }",
    );
    assert_eq!(m.parse("  Knight\tF3 ").unwrap(), "Nf3");
    assert_eq!(m.parse("nightc6").unwrap(), "Nc6");
}

#[test]
fn match_words_hook() {
    let m = matcher("start = piece action square { words }\npiece = 'K' { \"king\" }\naction = 'x' { \"captures\" } / '' { \"to\" }\nsquare = [a-h] [1-8]");
    assert_eq!(m.parse("Kg2").unwrap(), "king to g2");
    assert_eq!(m.parse("Kxg2").unwrap(), "king captures g2");
}

// =============================================================================
// Ordered choice
// =============================================================================

#[test]
fn match_longest_alternative_must_come_first() {
    let shadowed = matcher("start = ('for'i / 'fore'i) { \"4\" }");
    assert!(shadowed.parse("fore").is_err());

    let ordered = matcher("start = ('fore'i / 'for'i) { \"4\" }");
    assert_eq!(ordered.parse("fore").unwrap(), "4");
}

#[test]
fn match_backtracks_between_alternatives() {
    let m = matcher("start = 'a' 'b' 'c' / 'a' 'b' / 'a'");
    assert_eq!(m.parse("ab").unwrap(), "ab");
    assert_eq!(m.parse("a").unwrap(), "a");
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn match_failure_reports_furthest_offset() {
    let m = matcher("start = 'bishop'i ' ' [a-h] [1-8]");
    match m.parse("bishop z4").unwrap_err() {
        MatchError::Syntax { offset, expected } => {
            assert_eq!(offset, 7);
            assert_eq!(expected, vec!["[a-h]".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn match_hook_rejection_is_distinct() {
    fn odd_only(bindings: &Bindings<'_>) -> Result<String, HookError> {
        let digit = bindings.concat();
        if digit.parse::<u8>().is_ok_and(|d| d % 2 == 1) {
            Ok(digit)
        } else {
            Err(HookError::new("even"))
        }
    }
    let hooks = Hooks::new().with("odd_only", odd_only);
    let m = compile(&parse("start = d:[0-9] { odd_only }").unwrap(), &hooks).unwrap();
    assert_eq!(m.parse("3").unwrap(), "3");
    assert!(matches!(m.parse("4"), Err(MatchError::Rejected { ref message, .. }) if message == "even"));
    assert!(matches!(m.parse("x"), Err(MatchError::Syntax { .. })));
}
