//! Abstract syntax tree for parsing expression grammars.
//!
//! A [`Grammar`] is an ordered list of [`Rule`]s. The first rule is the start
//! rule. Grammars are produced by the [`parser`](crate::parser) from rule text
//! or built directly by callers that generate rules at runtime, and they render
//! back to rule text through [`Display`](fmt::Display).

use std::collections::BTreeSet;
use std::fmt;

use crate::span::Span;

/// A complete grammar: ordered rules, first rule is the start rule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Grammar {
    /// Rules in definition order.
    pub rules: Vec<Rule>,
}

impl Grammar {
    /// Creates an empty grammar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Appends every rule of another grammar after this grammar's rules.
    pub fn extend(&mut self, other: Grammar) {
        self.rules.extend(other.rules);
    }

    /// Looks up a rule by name.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Returns the start rule, if the grammar has any rules.
    #[must_use]
    pub fn start(&self) -> Option<&Rule> {
        self.rules.first()
    }

    /// Returns every rule name referenced by any rule body.
    #[must_use]
    pub fn references(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        for rule in &self.rules {
            rule.expr.collect_references(&mut names);
        }
        names
    }

    /// Returns the names of referenced rules that no rule defines.
    #[must_use]
    pub fn undefined_references(&self) -> BTreeSet<&str> {
        self.references()
            .into_iter()
            .filter(|name| self.rule(name).is_none())
            .collect()
    }
}

/// A named rule.
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    /// Rule name.
    pub name: String,
    /// Rule body.
    pub expr: Expr,
    /// Where the rule was defined.
    pub span: Span,
}

impl Rule {
    /// Creates a rule defined in source text.
    #[must_use]
    pub fn new(name: impl Into<String>, expr: Expr, span: Span) -> Self {
        Self {
            name: name.into(),
            expr,
            span,
        }
    }

    /// Creates a rule that was generated at runtime.
    #[must_use]
    pub fn generated(name: impl Into<String>, expr: Expr) -> Self {
        Self::new(name, expr, Span::generated())
    }
}

/// A semantic action attached to an expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Replace the matched value with a constant: `{ "x" }`.
    Const(String),
    /// Call a named hook with the expression's bindings: `{ words }`.
    Call(String),
}

/// A set of characters: `[a-h]`, `[^ ]`, `[a-h]i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharClass {
    /// Inclusive ranges; single characters are `(c, c)`.
    pub ranges: Vec<(char, char)>,
    /// Matches characters outside the ranges.
    pub negated: bool,
    /// Compare lowercased characters.
    pub ignore_case: bool,
}

impl CharClass {
    /// Returns true if the class accepts `c`.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        let hit = |c: char| self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi);
        let found = if self.ignore_case {
            hit(c) || c.to_lowercase().any(hit) || c.to_uppercase().any(hit)
        } else {
            hit(c)
        };
        found != self.negated
    }
}

/// A parsing expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Literal text, optionally case-insensitive.
    Literal {
        /// Text to match.
        text: String,
        /// Compare lowercased characters.
        ignore_case: bool,
    },
    /// One character from a class.
    Class(CharClass),
    /// Any single character.
    Any,
    /// A reference to another rule.
    Rule(String),
    /// All expressions in order.
    Sequence(Vec<Expr>),
    /// The first alternative that matches.
    Choice(Vec<Expr>),
    /// Zero or one.
    Optional(Box<Expr>),
    /// Zero or more, greedy.
    ZeroOrMore(Box<Expr>),
    /// One or more, greedy.
    OneOrMore(Box<Expr>),
    /// Positive lookahead; consumes nothing.
    And(Box<Expr>),
    /// Negative lookahead; consumes nothing.
    Not(Box<Expr>),
    /// A labeled element of a sequence, visible to hooks by name.
    Labeled(String, Box<Expr>),
    /// An expression whose value is replaced by an action.
    Action(Box<Expr>, Action),
}

impl Expr {
    /// A case-sensitive literal.
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal {
            text: text.into(),
            ignore_case: false,
        }
    }

    /// A case-insensitive literal.
    #[must_use]
    pub fn literal_i(text: impl Into<String>) -> Self {
        Self::Literal {
            text: text.into(),
            ignore_case: true,
        }
    }

    /// A rule reference.
    #[must_use]
    pub fn rule(name: impl Into<String>) -> Self {
        Self::Rule(name.into())
    }

    /// An expression whose value is a constant.
    #[must_use]
    pub fn yields(self, value: impl Into<String>) -> Self {
        Self::Action(Box::new(self), Action::Const(value.into()))
    }

    /// An expression whose value is computed by a hook.
    #[must_use]
    pub fn calls(self, hook: impl Into<String>) -> Self {
        Self::Action(Box::new(self), Action::Call(hook.into()))
    }

    /// An ordered choice. A single alternative is returned unwrapped.
    #[must_use]
    pub fn choice(mut alternatives: Vec<Expr>) -> Self {
        if alternatives.len() == 1 {
            alternatives.remove(0)
        } else {
            Self::Choice(alternatives)
        }
    }

    /// A sequence. A single element is returned unwrapped.
    #[must_use]
    pub fn sequence(mut elements: Vec<Expr>) -> Self {
        if elements.len() == 1 {
            elements.remove(0)
        } else {
            Self::Sequence(elements)
        }
    }

    fn collect_references<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Self::Rule(name) => {
                names.insert(name);
            }
            Self::Sequence(items) | Self::Choice(items) => {
                for item in items {
                    item.collect_references(names);
                }
            }
            Self::Optional(inner)
            | Self::ZeroOrMore(inner)
            | Self::OneOrMore(inner)
            | Self::And(inner)
            | Self::Not(inner)
            | Self::Labeled(_, inner)
            | Self::Action(inner, _) => inner.collect_references(names),
            Self::Literal { .. } | Self::Class(_) | Self::Any => {}
        }
    }

    /// Binding strength used when rendering: higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Self::Choice(_) => 0,
            Self::Action(..) => 1,
            Self::Sequence(_) => 2,
            Self::Labeled(..) => 3,
            Self::And(_) | Self::Not(_) => 4,
            Self::Optional(_) | Self::ZeroOrMore(_) | Self::OneOrMore(_) => 5,
            Self::Literal { .. } | Self::Class(_) | Self::Any | Self::Rule(_) => 6,
        }
    }

    fn fmt_at(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        if self.precedence() < min {
            write!(f, "(")?;
            self.fmt_at(f, 0)?;
            return write!(f, ")");
        }
        match self {
            Self::Literal { text, ignore_case } => {
                write_quoted(f, text)?;
                if *ignore_case {
                    write!(f, "i")?;
                }
                Ok(())
            }
            Self::Class(class) => {
                write!(f, "[")?;
                if class.negated {
                    write!(f, "^")?;
                }
                for &(lo, hi) in &class.ranges {
                    write_class_char(f, lo)?;
                    if lo != hi {
                        write!(f, "-")?;
                        write_class_char(f, hi)?;
                    }
                }
                write!(f, "]")?;
                if class.ignore_case {
                    write!(f, "i")?;
                }
                Ok(())
            }
            Self::Any => write!(f, "."),
            Self::Rule(name) => write!(f, "{name}"),
            Self::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    item.fmt_at(f, 3)?;
                }
                Ok(())
            }
            Self::Choice(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " / ")?;
                    }
                    item.fmt_at(f, 1)?;
                }
                Ok(())
            }
            Self::Optional(inner) => {
                inner.fmt_at(f, 6)?;
                write!(f, "?")
            }
            Self::ZeroOrMore(inner) => {
                inner.fmt_at(f, 6)?;
                write!(f, "*")
            }
            Self::OneOrMore(inner) => {
                inner.fmt_at(f, 6)?;
                write!(f, "+")
            }
            Self::And(inner) => {
                write!(f, "&")?;
                inner.fmt_at(f, 5)
            }
            Self::Not(inner) => {
                write!(f, "!")?;
                inner.fmt_at(f, 5)
            }
            Self::Labeled(label, inner) => {
                write!(f, "{label}:")?;
                inner.fmt_at(f, 4)
            }
            Self::Action(inner, action) => {
                inner.fmt_at(f, 2)?;
                match action {
                    Action::Const(value) => {
                        write!(f, " {{ ")?;
                        write_quoted(f, value)?;
                        write!(f, " }}")
                    }
                    Action::Call(hook) => write!(f, " {{ {hook} }}"),
                }
            }
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    match c {
        '\\' => write!(f, "\\\\"),
        '\n' => write!(f, "\\n"),
        '\r' => write!(f, "\\r"),
        '\t' => write!(f, "\\t"),
        c => write!(f, "{c}"),
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in text.chars() {
        if c == '"' {
            write!(f, "\\\"")?;
        } else {
            write_escaped(f, c)?;
        }
    }
    write!(f, "\"")
}

fn write_class_char(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    match c {
        ']' | '[' | '-' | '^' => write!(f, "\\{c}"),
        c => write_escaped(f, c),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at(f, 0)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.expr)
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
