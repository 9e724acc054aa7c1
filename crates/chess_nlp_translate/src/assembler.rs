//! Grammar assembly: template text plus generated vocabulary rules.
//!
//! A template refers to vocabulary by rule name without defining it. For each
//! such name the assembler appends a generated rule:
//!
//! ```text
//! rook   = "brooke"i / "brook"i / "rook"i { "R" }          // slot rule
//! piece  = "bishop"i { "B" } / "knight"i { "N" } / ...     // category rule
//! ```
//!
//! Generated rules are built as AST values, so terms containing quotes or
//! backslashes need no escaping.

use chess_nlp_foundation::Result;
use chess_nlp_grammar::{Expr, Grammar, Hooks, Matcher, Rule, compile, parse};
use tracing::debug;

use crate::vocabulary::{AliasTable, Category, Slot};

/// Parses `template` and appends a rule for every vocabulary name it uses but
/// does not define.
///
/// Names that are neither a [`Category`] nor a [`Slot`] rule are left alone;
/// compiling reports them as undefined.
///
/// # Errors
/// Returns a grammar definition error if the template does not parse.
pub fn assemble(template: &str, aliases: &AliasTable) -> Result<Grammar> {
    let mut grammar = parse(template)?;

    let wanted: Vec<String> = grammar
        .undefined_references()
        .into_iter()
        .map(str::to_string)
        .collect();

    for name in &wanted {
        if let Some(category) = Category::from_rule_name(name) {
            grammar.push(category_rule(category, aliases));
        } else if let Some(slot) = Slot::from_rule_name(name) {
            grammar.push(slot_rule(slot, aliases));
        }
    }

    Ok(grammar)
}

/// Assembles and compiles `template`.
///
/// # Errors
/// Returns a grammar definition error if the template does not parse or the
/// assembled grammar does not compile.
pub fn build(template: &str, aliases: &AliasTable, hooks: &Hooks) -> Result<Matcher> {
    let grammar = assemble(template, aliases)?;
    let matcher = compile(&grammar, hooks)?;
    debug!(
        language = %aliases.language(),
        rules = matcher.rule_count(),
        "assembled grammar"
    );
    Ok(matcher)
}

/// `slot = "term"i / ... { "symbol" }`
pub fn slot_rule(slot: Slot, aliases: &AliasTable) -> Rule {
    let terms = aliases.resolve(slot).into_iter().map(Expr::literal_i).collect();
    Rule::generated(slot.rule_name(), Expr::choice(terms).yields(slot.symbol()))
}

/// `category = "term"i { "symbol" } / ...` over every slot of the category.
pub fn category_rule(category: Category, aliases: &AliasTable) -> Rule {
    let alternatives = aliases
        .category_terms(category)
        .into_iter()
        .map(|(slot, term)| Expr::literal_i(term).yields(slot.symbol()))
        .collect();
    Rule::generated(category.rule_name(), Expr::choice(alternatives))
}
