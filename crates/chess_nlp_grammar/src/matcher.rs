//! Matcher for compiled grammars.
//!
//! A [`Matcher`] runs ordered-choice (PEG) matching: alternatives are tried in
//! order and the first one that succeeds wins, with no backtracking into an
//! alternative once it has succeeded. The start rule must consume the whole
//! input.
//!
//! Every match runs on call-local state, so one matcher can be shared between
//! threads.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::ast::CharClass;
use crate::compiler::{CompiledAction, CompiledRule, Element, Node};
use crate::hooks::{Binding, Bindings};

/// Why a match failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// No alternative matched.
    #[error("no match at offset {offset}, expected one of: {}", .expected.join(", "))]
    Syntax {
        /// Furthest byte offset any alternative reached.
        offset: usize,
        /// Terminals that would have let matching continue at `offset`.
        expected: Vec<String>,
    },

    /// A hook refused the matched text.
    #[error("rule `{rule}` rejected input at offset {offset}: {message}")]
    Rejected {
        /// The rule whose action failed.
        rule: String,
        /// The hook that failed.
        hook: String,
        /// Byte offset where the rejected expression started.
        offset: usize,
        /// The hook's message.
        message: String,
    },

    /// The requested entry rule does not exist.
    #[error("unknown rule: {0}")]
    UnknownRule(String),
}

/// A compiled grammar, ready to match input.
#[derive(Clone, Debug)]
pub struct Matcher {
    rules: Vec<CompiledRule>,
    start: usize,
}

impl Matcher {
    pub(crate) fn from_rules(rules: Vec<CompiledRule>, start: usize) -> Self {
        Self { rules, start }
    }

    /// Matches the whole input against the start rule and returns its value.
    ///
    /// # Errors
    /// Returns [`MatchError::Syntax`] if the input does not match and
    /// [`MatchError::Rejected`] if a hook refused it.
    pub fn parse(&self, input: &str) -> Result<String, MatchError> {
        self.run(self.start, input)
    }

    /// Matches the whole input against a named rule.
    ///
    /// # Errors
    /// As [`parse`](Self::parse), plus [`MatchError::UnknownRule`].
    pub fn parse_rule(&self, rule: &str, input: &str) -> Result<String, MatchError> {
        let index = self
            .rules
            .iter()
            .position(|r| r.name == rule)
            .ok_or_else(|| MatchError::UnknownRule(rule.to_string()))?;
        self.run(index, input)
    }

    /// Returns the name of the start rule.
    #[must_use]
    pub fn start_rule(&self) -> &str {
        &self.rules[self.start].name
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the rule names in definition order.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    fn run(&self, rule: usize, input: &str) -> Result<String, MatchError> {
        let mut state = State {
            rules: &self.rules,
            input,
            furthest: 0,
            expected: BTreeSet::new(),
            silent: 0,
            rule,
        };

        match state.eval(&Node::Call(rule), 0) {
            Ok(Some((end, value))) if end == input.len() => Ok(value),
            Ok(Some((end, _))) => {
                state.expect(end, "end of input".to_string());
                Err(state.syntax_error())
            }
            Ok(None) => Err(state.syntax_error()),
            Err(rejection) => Err(MatchError::Rejected {
                rule: self.rules[rejection.rule].name.clone(),
                hook: rejection.hook,
                offset: rejection.offset,
                message: rejection.message,
            }),
        }
    }
}

/// A hook failure travelling up the call stack.
struct Rejection {
    rule: usize,
    hook: String,
    offset: usize,
    message: String,
}

/// `Ok(None)` is an ordinary failure; `Err` aborts the whole match.
type Step = Result<Option<(usize, String)>, Rejection>;

/// Per-call matching state.
struct State<'m, 'i> {
    rules: &'m [CompiledRule],
    input: &'i str,
    /// Furthest offset at which a terminal failed.
    furthest: usize,
    /// Terminals that failed at `furthest`.
    expected: BTreeSet<String>,
    /// Lookahead depth; failures inside predicates are not reported.
    silent: usize,
    /// Rule currently being evaluated.
    rule: usize,
}

impl<'m> State<'m, '_> {
    fn eval(&mut self, node: &'m Node, pos: usize) -> Step {
        match node {
            Node::Literal { text, ignore_case } => {
                match self.match_literal(text, *ignore_case, pos) {
                    Some(end) => Ok(Some((end, self.input[pos..end].to_string()))),
                    None => {
                        self.expect(pos, describe_literal(text, *ignore_case));
                        Ok(None)
                    }
                }
            }
            Node::Class(class) => match self.input[pos..].chars().next() {
                Some(c) if class.contains(c) => Ok(Some((pos + c.len_utf8(), c.to_string()))),
                _ => {
                    self.expect(pos, describe_class(class));
                    Ok(None)
                }
            },
            Node::Any => match self.input[pos..].chars().next() {
                Some(c) => Ok(Some((pos + c.len_utf8(), c.to_string()))),
                None => {
                    self.expect(pos, "any character".to_string());
                    Ok(None)
                }
            },
            Node::Call(i) => {
                let rules = self.rules;
                let caller = std::mem::replace(&mut self.rule, *i);
                let result = self.eval(&rules[*i].node, pos);
                self.rule = caller;
                result
            }
            Node::Sequence(elements) => Ok(self
                .eval_sequence(elements, pos)?
                .map(|(end, bindings)| (end, Bindings::new(&bindings).concat()))),
            Node::Choice(alternatives) => {
                for alternative in alternatives {
                    if let Some(found) = self.eval(alternative, pos)? {
                        return Ok(Some(found));
                    }
                }
                Ok(None)
            }
            Node::Optional(inner) => Ok(Some(
                self.eval(inner, pos)?.unwrap_or((pos, String::new())),
            )),
            Node::ZeroOrMore(inner) => Ok(Some(self.repeat(inner, pos, String::new())?)),
            Node::OneOrMore(inner) => match self.eval(inner, pos)? {
                Some((end, first)) => Ok(Some(self.repeat(inner, end, first)?)),
                None => Ok(None),
            },
            Node::And(inner) => {
                self.silent += 1;
                let result = self.eval(inner, pos);
                self.silent -= 1;
                Ok(result?.map(|_| (pos, String::new())))
            }
            Node::Not(inner) => {
                self.silent += 1;
                let result = self.eval(inner, pos);
                self.silent -= 1;
                Ok(match result? {
                    Some(_) => None,
                    None => Some((pos, String::new())),
                })
            }
            Node::Action(inner, action) => self.eval_action(inner, action, pos),
        }
    }

    fn repeat(&mut self, inner: &'m Node, mut pos: usize, mut value: String) -> Result<(usize, String), Rejection> {
        while let Some((end, more)) = self.eval(inner, pos)? {
            if end == pos {
                break;
            }
            value.push_str(&more);
            pos = end;
        }
        Ok((pos, value))
    }

    fn eval_sequence(
        &mut self,
        elements: &'m [Element],
        mut pos: usize,
    ) -> Result<Option<(usize, Vec<Binding<'m>>)>, Rejection> {
        let mut bindings = Vec::with_capacity(elements.len());
        for element in elements {
            match self.eval(&element.node, pos)? {
                Some((end, value)) => {
                    bindings.push(Binding {
                        label: element.label.as_deref(),
                        value,
                    });
                    pos = end;
                }
                None => return Ok(None),
            }
        }
        Ok(Some((pos, bindings)))
    }

    fn eval_action(&mut self, inner: &'m Node, action: &'m CompiledAction, pos: usize) -> Step {
        let matched = match inner {
            Node::Sequence(elements) => self.eval_sequence(elements, pos)?,
            other => self.eval(other, pos)?.map(|(end, value)| {
                (end, vec![Binding { label: None, value }])
            }),
        };
        let Some((end, bindings)) = matched else {
            return Ok(None);
        };

        let value = match action {
            CompiledAction::Const(value) => value.clone(),
            CompiledAction::Hook { name, hook } => {
                hook(&Bindings::new(&bindings)).map_err(|err| Rejection {
                    rule: self.rule,
                    hook: name.clone(),
                    offset: pos,
                    message: err.0,
                })?
            }
        };
        Ok(Some((end, value)))
    }

    fn match_literal(&self, text: &str, ignore_case: bool, pos: usize) -> Option<usize> {
        let rest = &self.input[pos..];
        if !ignore_case {
            return rest.starts_with(text).then(|| pos + text.len());
        }

        let mut chars = rest.char_indices();
        for expected in text.chars() {
            let (_, actual) = chars.next()?;
            if !eq_ignore_case(expected, actual) {
                return None;
            }
        }
        let consumed = chars.next().map_or(rest.len(), |(i, _)| i);
        Some(pos + consumed)
    }

    fn expect(&mut self, pos: usize, description: String) {
        if self.silent > 0 || pos < self.furthest {
            return;
        }
        if pos > self.furthest {
            self.furthest = pos;
            self.expected.clear();
        }
        self.expected.insert(description);
    }

    fn syntax_error(&mut self) -> MatchError {
        MatchError::Syntax {
            offset: self.furthest,
            expected: std::mem::take(&mut self.expected).into_iter().collect(),
        }
    }
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn describe_literal(text: &str, ignore_case: bool) -> String {
    if ignore_case {
        format!("{text:?}i")
    } else {
        format!("{text:?}")
    }
}

fn describe_class(class: &CharClass) -> String {
    crate::ast::Expr::Class(class.clone()).to_string()
}
