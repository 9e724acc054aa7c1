//! Parser for grammar text.
//!
//! The parser converts a stream of tokens into a [`Grammar`].
//!
//! ```text
//! grammar  = rule*
//! rule     = IDENT '=' choice
//! choice   = action ('/' action)*
//! action   = sequence ('{' (LITERAL / IDENT) '}')?
//! sequence = labeled+
//! labeled  = (IDENT ':')? prefixed
//! prefixed = ('&' / '!')? suffixed
//! suffixed = primary ('?' / '*' / '+')?
//! primary  = LITERAL / CLASS / '.' / IDENT !'=' / '(' choice ')'
//! ```
//!
//! Rules need no terminator: a sequence ends where the next `IDENT '='` starts.

use chess_nlp_foundation::{Error, Result};

use crate::ast::{Action, CharClass, Expr, Grammar, Rule};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser for grammar source text.
pub struct Parser<'src> {
    /// Non-trivia tokens, ending in `Eof`.
    tokens: Vec<Token>,
    /// Index of the current token.
    pos: usize,
    /// Source text (for error messages).
    source: &'src str,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let tokens = Lexer::tokenize_all(source)
            .into_iter()
            .filter(|t| !t.kind.is_trivia())
            .collect();
        Self {
            tokens,
            pos: 0,
            source,
        }
    }

    /// Parses every rule in the source.
    ///
    /// # Errors
    /// Returns an error if the source is not valid grammar text.
    pub fn parse_grammar(&mut self) -> Result<Grammar> {
        let mut grammar = Grammar::new();
        while self.current().kind != TokenKind::Eof {
            grammar.push(self.parse_rule()?);
        }
        Ok(grammar)
    }

    fn parse_rule(&mut self) -> Result<Rule> {
        let start = self.current().span;
        let name = match &self.current().kind {
            TokenKind::Ident(name) => name.clone(),
            TokenKind::Error(msg) => return Err(self.error(msg)),
            other => {
                return Err(self.error(&format!("expected rule name, found {}", other.name())));
            }
        };
        self.advance();
        self.expect(&TokenKind::Equals)?;
        let expr = self.parse_choice()?;
        let end = self.previous().span;
        Ok(Rule::new(name, expr, start.to(end)))
    }

    fn parse_choice(&mut self) -> Result<Expr> {
        let mut alternatives = vec![self.parse_action()?];
        while self.current().kind == TokenKind::Slash {
            self.advance();
            alternatives.push(self.parse_action()?);
        }
        Ok(Expr::choice(alternatives))
    }

    fn parse_action(&mut self) -> Result<Expr> {
        let expr = self.parse_sequence()?;
        if self.current().kind != TokenKind::LBrace {
            return Ok(expr);
        }
        self.advance();
        let action = match &self.current().kind {
            TokenKind::Literal { text, .. } => Action::Const(text.clone()),
            TokenKind::Ident(hook) => Action::Call(hook.clone()),
            other => {
                return Err(self.error(&format!(
                    "expected literal or hook name in action, found {}",
                    other.name()
                )));
            }
        };
        self.advance();
        self.expect(&TokenKind::RBrace)?;
        Ok(Expr::Action(Box::new(expr), action))
    }

    fn parse_sequence(&mut self) -> Result<Expr> {
        let mut elements = Vec::new();
        while self.starts_element() {
            elements.push(self.parse_labeled()?);
        }
        if elements.is_empty() {
            return Err(self.error(&format!(
                "expected expression, found {}",
                self.current().kind.name()
            )));
        }
        Ok(Expr::sequence(elements))
    }

    /// Returns true if the current token can begin a sequence element.
    fn starts_element(&self) -> bool {
        match &self.current().kind {
            TokenKind::Ident(_) => self.peek().kind != TokenKind::Equals,
            TokenKind::Literal { .. }
            | TokenKind::Class { .. }
            | TokenKind::Dot
            | TokenKind::LParen
            | TokenKind::Amp
            | TokenKind::Bang
            | TokenKind::Error(_) => true,
            _ => false,
        }
    }

    fn parse_labeled(&mut self) -> Result<Expr> {
        if let TokenKind::Ident(label) = &self.current().kind {
            if self.peek().kind == TokenKind::Colon {
                let label = label.clone();
                self.advance();
                self.advance();
                let inner = self.parse_prefixed()?;
                return Ok(Expr::Labeled(label, Box::new(inner)));
            }
        }
        self.parse_prefixed()
    }

    fn parse_prefixed(&mut self) -> Result<Expr> {
        match self.current().kind {
            TokenKind::Amp => {
                self.advance();
                Ok(Expr::And(Box::new(self.parse_suffixed()?)))
            }
            TokenKind::Bang => {
                self.advance();
                Ok(Expr::Not(Box::new(self.parse_suffixed()?)))
            }
            _ => self.parse_suffixed(),
        }
    }

    fn parse_suffixed(&mut self) -> Result<Expr> {
        let primary = self.parse_primary()?;
        let expr = match self.current().kind {
            TokenKind::Question => Expr::Optional(Box::new(primary)),
            TokenKind::Star => Expr::ZeroOrMore(Box::new(primary)),
            TokenKind::Plus => Expr::OneOrMore(Box::new(primary)),
            _ => return Ok(primary),
        };
        self.advance();
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let expr = match &self.current().kind {
            TokenKind::Literal { text, ignore_case } => Expr::Literal {
                text: text.clone(),
                ignore_case: *ignore_case,
            },
            TokenKind::Class {
                ranges,
                negated,
                ignore_case,
            } => Expr::Class(CharClass {
                ranges: ranges.clone(),
                negated: *negated,
                ignore_case: *ignore_case,
            }),
            TokenKind::Dot => Expr::Any,
            TokenKind::Ident(name) => Expr::Rule(name.clone()),
            TokenKind::LParen => {
                let open = self.current().span;
                self.advance();
                let inner = self.parse_choice()?;
                if self.current().kind != TokenKind::RParen {
                    return Err(self.error_at(open, "unterminated group"));
                }
                self.advance();
                return Ok(inner);
            }
            TokenKind::Error(msg) => return Err(self.error(msg)),
            other => {
                return Err(self.error(&format!("expected expression, found {}", other.name())));
            }
        };
        self.advance();
        Ok(expr)
    }

    fn current(&self) -> &Token {
        // The token list always ends in Eof and `advance` never moves past it.
        &self.tokens[self.pos]
    }

    fn peek(&self) -> &Token {
        &self.tokens[(self.pos + 1).min(self.tokens.len() - 1)]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: &TokenKind) -> Result<()> {
        let matches =
            std::mem::discriminant(&self.current().kind) == std::mem::discriminant(expected);

        if matches {
            self.advance();
            Ok(())
        } else {
            Err(self.error(&format!(
                "expected {}, found {}",
                expected.name(),
                self.current().kind.name()
            )))
        }
    }

    fn error(&self, message: &str) -> Error {
        self.error_at(self.current().span, message)
    }

    fn error_at(&self, span: Span, message: &str) -> Error {
        let line = self.line_at(span);
        Error::grammar(format!("{message} near `{line}`"), span.line, span.column)
    }

    /// Returns the trimmed source line containing a span.
    fn line_at(&self, span: Span) -> &str {
        let start = span.start.min(self.source.len());
        let line_start = self.source[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = self.source[start..]
            .find('\n')
            .map_or(self.source.len(), |i| start + i);
        self.source[line_start..line_end].trim()
    }
}

/// Parses grammar text.
///
/// # Errors
/// Returns an error if the source is not valid grammar text.
pub fn parse(source: &str) -> Result<Grammar> {
    Parser::new(source).parse_grammar()
}
