//! Token types for grammar text.
//!
//! Tokens are the output of the lexer and input to the parser.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Token types for grammar text.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Rule name or hook name like `piece_move`
    Ident(String),
    /// Quoted literal like `"takes"` or `'takes'i`
    Literal {
        /// Unescaped text.
        text: String,
        /// Trailing `i` flag.
        ignore_case: bool,
    },
    /// Character class like `[a-h]i` or `[^ ]`
    Class {
        /// Inclusive character ranges; single characters are `(c, c)`.
        ranges: Vec<(char, char)>,
        /// Leading `^`.
        negated: bool,
        /// Trailing `i` flag.
        ignore_case: bool,
    },
    /// `.` (any character)
    Dot,
    /// `=`
    Equals,
    /// `/`
    Slash,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `?`
    Question,
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `&`
    Amp,
    /// `!`
    Bang,
    /// `// ...` or `/* ... */`
    Comment(String),
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns true if this token kind should be ignored during parsing.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ident(_) => "identifier",
            Self::Literal { .. } => "literal",
            Self::Class { .. } => "character class",
            Self::Dot => "'.'",
            Self::Equals => "'='",
            Self::Slash => "'/'",
            Self::Colon => "':'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Question => "'?'",
            Self::Star => "'*'",
            Self::Plus => "'+'",
            Self::Amp => "'&'",
            Self::Bang => "'!'",
            Self::Comment(_) => "comment",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
