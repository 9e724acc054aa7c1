//! Error types for chess_nlp.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::language::Language;
use crate::notation::Direction;

/// Result type alias using the chess_nlp [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for chess_nlp operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where matching stopped.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a syntax failure for input that matched no grammar alternative.
    #[must_use]
    pub fn invalid_move(language: Language, direction: Direction, input: &str) -> Self {
        Self::new(ErrorKind::InvalidMove {
            direction,
            input: input.to_string(),
            message: language.invalid_move(input, direction),
        })
    }

    /// Creates a semantic failure for an en passant capture on an impossible rank.
    #[must_use]
    pub fn invalid_en_passant(language: Language, input: &str) -> Self {
        Self::new(ErrorKind::InvalidEnPassant {
            input: input.to_string(),
            message: language.invalid_en_passant(input),
        })
    }

    /// Creates an error for a grammar template that failed to parse or compile.
    #[must_use]
    pub fn grammar(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::new(ErrorKind::GrammarDefinition {
            message: message.into(),
            line,
            column,
        })
    }

    /// Returns true if this is a syntax failure from either direction.
    #[must_use]
    pub fn is_invalid_move(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidMove { .. })
    }

    /// Returns true if this is an en passant semantic failure.
    #[must_use]
    pub fn is_invalid_en_passant(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidEnPassant { .. })
    }

    /// Returns true if this error was raised while building an engine.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::GrammarDefinition { .. }
                | ErrorKind::UnknownSlot(_)
                | ErrorKind::EmptyAlias { .. }
                | ErrorKind::ConflictingAlias { .. }
                | ErrorKind::UnsupportedLanguage(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Input matched no alternative of the grammar.
    #[error("{message}")]
    InvalidMove {
        /// Which translation was attempted.
        direction: Direction,
        /// The original input, verbatim.
        input: String,
        /// Localized message embedding the input.
        message: String,
    },

    /// Input had the en passant shape but named a rank no capture can land on.
    #[error("{message}")]
    InvalidEnPassant {
        /// The original input, verbatim.
        input: String,
        /// Localized message embedding the input.
        message: String,
    },

    /// A grammar template is malformed.
    #[error("grammar error at {line}:{column}: {message}")]
    GrammarDefinition {
        /// Description of the problem.
        message: String,
        /// Line number in the template (1-indexed, 0 when not applicable).
        line: u32,
        /// Column number in the template (1-indexed, 0 when not applicable).
        column: u32,
    },

    /// An alias was supplied for a slot name that does not exist.
    #[error("unknown alias slot: {0}")]
    UnknownSlot(String),

    /// An alias term was empty after trimming.
    #[error("empty alias for slot {slot}")]
    EmptyAlias {
        /// The slot the empty term was supplied for.
        slot: String,
    },

    /// The same term was claimed by two slots of one category.
    #[error("alias {term:?} is claimed by both {first} and {second}")]
    ConflictingAlias {
        /// The conflicting term.
        term: String,
        /// The slot that claimed the term first.
        first: String,
        /// The slot that claimed it second.
        second: String,
    },

    /// A language tag did not name a supported language.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where matching stopped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The rule that raised the error, if a rule action failed.
    pub rule: Option<String>,
    /// Byte offset in the input of the furthest position reached.
    pub offset: Option<usize>,
    /// Terminals that would have allowed matching to continue at `offset`.
    pub expected: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule name.
    #[must_use]
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    /// Sets the input offset.
    #[must_use]
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Adds an expected terminal description.
    #[must_use]
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected.push(expected.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "in rule {rule}")?;
        }
        if let Some(offset) = self.offset {
            if self.rule.is_some() {
                write!(f, " ")?;
            }
            write!(f, "at offset {offset}")?;
        }
        if !self.expected.is_empty() {
            write!(f, ", expected one of: {}", self.expected.join(", "))?;
        }
        Ok(())
    }
}
