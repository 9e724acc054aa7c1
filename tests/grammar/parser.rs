//! Integration tests for the grammar parser
//!
//! Tests parsing of grammar text to a Grammar AST.

use chess_nlp_foundation::ErrorKind;
use chess_nlp_grammar::{Action, Expr, Grammar, Rule, parse};

// =============================================================================
// Rules
// =============================================================================

#[test]
fn parse_rules_in_order() {
    let grammar = parse("start = a b\na = 'a'\nb = 'b'").unwrap();
    let names: Vec<_> = grammar.rules.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["start", "a", "b"]);
    assert_eq!(grammar.start().unwrap().name, "start");
}

#[test]
fn parse_records_rule_positions() {
    let grammar = parse("start = a\n\n  a = 'a'").unwrap();
    let rule = grammar.rule("a").unwrap();
    assert_eq!((rule.span.line, rule.span.column), (3, 3));
}

#[test]
fn parse_comments_are_ignored() {
    let grammar = parse("// moves\nstart = /* inline */ 'e4'").unwrap();
    assert_eq!(grammar.rules.len(), 1);
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn parse_actions() {
    let grammar = parse("start = 'takes'i { \"x\" } / 'to'i { words }").unwrap();
    assert_eq!(
        grammar.rules[0].expr,
        Expr::choice(vec![
            Expr::literal_i("takes").yields("x"),
            Expr::literal_i("to").calls("words"),
        ])
    );
}

#[test]
fn parse_labels_and_suffixes() {
    let grammar = parse("start = from:file '-'? rank+").unwrap();
    match &grammar.rules[0].expr {
        Expr::Sequence(items) => {
            assert!(matches!(&items[0], Expr::Labeled(label, _) if label == "from"));
            assert!(matches!(&items[1], Expr::Optional(_)));
            assert!(matches!(&items[2], Expr::OneOrMore(_)));
        }
        other => panic!("expected sequence, got {other}"),
    }
}

#[test]
fn parse_action_binds_whole_sequence() {
    let grammar = parse("start = 'a' 'b' { \"ab\" }").unwrap();
    assert!(matches!(
        &grammar.rules[0].expr,
        Expr::Action(inner, Action::Const(value)) if value == "ab" && matches!(**inner, Expr::Sequence(_))
    ));
}

#[test]
fn display_parses_back() {
    let source = "start = (piece / pawn) _ ('-' { \"\" })? [a-h]i !. { lower }";
    let grammar = parse(source).unwrap();
    let reparsed = parse(&grammar.to_string()).unwrap();
    assert_eq!(grammar.rules[0].expr, reparsed.rules[0].expr);
}

#[test]
fn generated_rules_render_as_grammar_text() {
    let mut grammar = Grammar::new();
    grammar.push(Rule::generated(
        "side",
        Expr::choice(vec![
            Expr::literal_i("king side").yields("O-O"),
            Expr::literal_i("queen side").yields("O-O-O"),
        ]),
    ));
    assert_eq!(
        grammar.to_string(),
        "side = \"king side\"i { \"O-O\" } / \"queen side\"i { \"O-O-O\" }\n"
    );
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn parse_errors_carry_position() {
    let err = parse("start = 'a'\nnext = ('b'").unwrap_err();
    match err.kind {
        ErrorKind::GrammarDefinition { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn parse_rejects_missing_equals() {
    assert!(parse("start 'a'").is_err());
}

#[test]
fn parse_rejects_unterminated_literal() {
    assert!(parse("start = 'abc").is_err());
}
