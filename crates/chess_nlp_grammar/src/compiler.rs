//! Compiler from [`Grammar`] to [`Matcher`].
//!
//! Compilation resolves rule references to indices and hook names to function
//! pointers, then checks the grammar terminates on every input:
//!
//! - every referenced rule and hook exists, and no rule is defined twice
//! - no rule can reach itself without consuming input (left recursion)
//! - no `*` or `+` repeats an expression that can match the empty string
//!
//! Any violation is a [`GrammarDefinition`](chess_nlp_foundation::ErrorKind::GrammarDefinition)
//! error pointing at the offending rule.

use std::collections::HashMap;

use chess_nlp_foundation::{Error, Result};
use tracing::debug;

use crate::ast::{Action, CharClass, Expr, Grammar, Rule};
use crate::hooks::{HookFn, Hooks};
use crate::matcher::Matcher;

/// A compiled rule.
#[derive(Clone, Debug)]
pub(crate) struct CompiledRule {
    pub(crate) name: String,
    pub(crate) node: Node,
}

/// A sequence element with its optional label.
#[derive(Clone, Debug)]
pub(crate) struct Element {
    pub(crate) label: Option<String>,
    pub(crate) node: Node,
}

/// A resolved action.
#[derive(Clone, Debug)]
pub(crate) enum CompiledAction {
    Const(String),
    Hook { name: String, hook: HookFn },
}

/// A compiled parsing expression.
#[derive(Clone, Debug)]
pub(crate) enum Node {
    Literal { text: String, ignore_case: bool },
    Class(CharClass),
    Any,
    Call(usize),
    Sequence(Vec<Element>),
    Choice(Vec<Node>),
    Optional(Box<Node>),
    ZeroOrMore(Box<Node>),
    OneOrMore(Box<Node>),
    And(Box<Node>),
    Not(Box<Node>),
    Action(Box<Node>, CompiledAction),
}

/// Compiles grammars against a hook table.
pub struct Compiler<'h> {
    hooks: &'h Hooks,
}

impl<'h> Compiler<'h> {
    /// Creates a compiler that resolves actions against `hooks`.
    #[must_use]
    pub fn new(hooks: &'h Hooks) -> Self {
        Self { hooks }
    }

    /// Compiles a grammar into a matcher.
    ///
    /// # Errors
    /// Returns a grammar definition error if the grammar is empty, defines a
    /// rule twice, references an unknown rule or hook, is left recursive, or
    /// repeats an expression that can match empty input.
    pub fn compile(&self, grammar: &Grammar) -> Result<Matcher> {
        let Some(start) = grammar.start() else {
            return Err(Error::grammar("grammar has no rules", 0, 0));
        };

        let mut index: HashMap<&str, usize> = HashMap::with_capacity(grammar.rules.len());
        for (i, rule) in grammar.rules.iter().enumerate() {
            if index.insert(rule.name.as_str(), i).is_some() {
                return Err(rule_error(rule, &format!("rule `{}` defined twice", rule.name)));
            }
        }

        let rules = grammar
            .rules
            .iter()
            .map(|rule| {
                Ok(CompiledRule {
                    name: rule.name.clone(),
                    node: self.lower(rule, &rule.expr, &index)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let nullable = nullable_rules(&rules);
        for (rule, compiled) in grammar.rules.iter().zip(&rules) {
            if has_nullable_repetition(&compiled.node, &nullable) {
                return Err(rule_error(
                    rule,
                    &format!(
                        "rule `{}` repeats an expression that can match empty input",
                        rule.name
                    ),
                ));
            }
        }
        if let Some(i) = find_left_recursion(&rules, &nullable) {
            let rule = &grammar.rules[i];
            return Err(rule_error(
                rule,
                &format!("rule `{}` is left recursive", rule.name),
            ));
        }

        debug!(
            rules = rules.len(),
            start = %start.name,
            "compiled grammar"
        );

        Ok(Matcher::from_rules(rules, 0))
    }

    fn lower(&self, rule: &Rule, expr: &Expr, index: &HashMap<&str, usize>) -> Result<Node> {
        let lower = |e: &Expr| self.lower(rule, e, index);
        let boxed = |e: &Expr| self.lower(rule, e, index).map(Box::new);

        Ok(match expr {
            Expr::Literal { text, ignore_case } => Node::Literal {
                text: text.clone(),
                ignore_case: *ignore_case,
            },
            Expr::Class(class) => Node::Class(class.clone()),
            Expr::Any => Node::Any,
            Expr::Rule(name) => match index.get(name.as_str()) {
                Some(&i) => Node::Call(i),
                None => {
                    return Err(rule_error(
                        rule,
                        &format!("undefined rule `{name}` referenced from `{}`", rule.name),
                    ));
                }
            },
            Expr::Sequence(items) => Node::Sequence(
                items
                    .iter()
                    .map(|item| match item {
                        Expr::Labeled(label, inner) => Ok(Element {
                            label: Some(label.clone()),
                            node: lower(inner)?,
                        }),
                        other => Ok(Element {
                            label: None,
                            node: lower(other)?,
                        }),
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            Expr::Labeled(label, inner) => Node::Sequence(vec![Element {
                label: Some(label.clone()),
                node: lower(inner)?,
            }]),
            Expr::Choice(items) => Node::Choice(items.iter().map(lower).collect::<Result<_>>()?),
            Expr::Optional(inner) => Node::Optional(boxed(inner)?),
            Expr::ZeroOrMore(inner) => Node::ZeroOrMore(boxed(inner)?),
            Expr::OneOrMore(inner) => Node::OneOrMore(boxed(inner)?),
            Expr::And(inner) => Node::And(boxed(inner)?),
            Expr::Not(inner) => Node::Not(boxed(inner)?),
            Expr::Action(inner, action) => {
                let action = match action {
                    Action::Const(value) => CompiledAction::Const(value.clone()),
                    Action::Call(name) => match self.hooks.get(name) {
                        Some(hook) => CompiledAction::Hook {
                            name: name.clone(),
                            hook,
                        },
                        None => {
                            return Err(rule_error(
                                rule,
                                &format!("unknown hook `{name}` in rule `{}`", rule.name),
                            ));
                        }
                    },
                };
                Node::Action(boxed(inner)?, action)
            }
        })
    }
}

/// Compiles a grammar into a matcher using the given hooks.
///
/// # Errors
/// See [`Compiler::compile`].
pub fn compile(grammar: &Grammar, hooks: &Hooks) -> Result<Matcher> {
    Compiler::new(hooks).compile(grammar)
}

fn rule_error(rule: &Rule, message: &str) -> Error {
    Error::grammar(message, rule.span.line, rule.span.column)
}

fn nullable(node: &Node, rules: &[bool]) -> bool {
    match node {
        Node::Literal { text, .. } => text.is_empty(),
        Node::Class(_) | Node::Any => false,
        Node::Call(i) => rules[*i],
        Node::Sequence(elements) => elements.iter().all(|e| nullable(&e.node, rules)),
        Node::Choice(alternatives) => alternatives.iter().any(|n| nullable(n, rules)),
        Node::Optional(_) | Node::ZeroOrMore(_) | Node::And(_) | Node::Not(_) => true,
        Node::OneOrMore(inner) | Node::Action(inner, _) => nullable(inner, rules),
    }
}

/// Computes which rules can succeed without consuming input.
fn nullable_rules(rules: &[CompiledRule]) -> Vec<bool> {
    let mut result = vec![false; rules.len()];
    loop {
        let mut changed = false;
        for (i, rule) in rules.iter().enumerate() {
            if !result[i] && nullable(&rule.node, &result) {
                result[i] = true;
                changed = true;
            }
        }
        if !changed {
            return result;
        }
    }
}

fn has_nullable_repetition(node: &Node, rules: &[bool]) -> bool {
    match node {
        Node::ZeroOrMore(inner) | Node::OneOrMore(inner) => {
            nullable(inner, rules) || has_nullable_repetition(inner, rules)
        }
        Node::Sequence(elements) => elements
            .iter()
            .any(|e| has_nullable_repetition(&e.node, rules)),
        Node::Choice(alternatives) => alternatives
            .iter()
            .any(|n| has_nullable_repetition(n, rules)),
        Node::Optional(inner) | Node::And(inner) | Node::Not(inner) | Node::Action(inner, _) => {
            has_nullable_repetition(inner, rules)
        }
        Node::Literal { .. } | Node::Class(_) | Node::Any | Node::Call(_) => false,
    }
}

/// Collects the rules `node` may call before consuming any input.
fn left_calls(node: &Node, rules: &[bool], out: &mut Vec<usize>) {
    match node {
        Node::Call(i) => out.push(*i),
        Node::Sequence(elements) => {
            for element in elements {
                left_calls(&element.node, rules, out);
                if !nullable(&element.node, rules) {
                    break;
                }
            }
        }
        Node::Choice(alternatives) => {
            for alternative in alternatives {
                left_calls(alternative, rules, out);
            }
        }
        Node::Optional(inner)
        | Node::ZeroOrMore(inner)
        | Node::OneOrMore(inner)
        | Node::And(inner)
        | Node::Not(inner)
        | Node::Action(inner, _) => left_calls(inner, rules, out),
        Node::Literal { .. } | Node::Class(_) | Node::Any => {}
    }
}

/// Returns a rule on a left-recursive cycle, if any.
fn find_left_recursion(rules: &[CompiledRule], nullable: &[bool]) -> Option<usize> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unvisited,
        Active,
        Done,
    }

    fn visit(
        i: usize,
        edges: &[Vec<usize>],
        marks: &mut [Mark],
    ) -> Option<usize> {
        marks[i] = Mark::Active;
        for &next in &edges[i] {
            match marks[next] {
                Mark::Active => return Some(next),
                Mark::Unvisited => {
                    if let Some(found) = visit(next, edges, marks) {
                        return Some(found);
                    }
                }
                Mark::Done => {}
            }
        }
        marks[i] = Mark::Done;
        None
    }

    let edges: Vec<Vec<usize>> = rules
        .iter()
        .map(|rule| {
            let mut out = Vec::new();
            left_calls(&rule.node, nullable, &mut out);
            out
        })
        .collect();

    let mut marks = vec![Mark::Unvisited; rules.len()];
    (0..rules.len()).find_map(|i| {
        if marks[i] == Mark::Unvisited {
            visit(i, &edges, &mut marks)
        } else {
            None
        }
    })
}
