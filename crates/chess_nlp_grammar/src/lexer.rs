//! Lexer for grammar text.
//!
//! The lexer converts rule text into a stream of tokens.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for grammar source text.
pub struct Lexer<'src> {
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
            );
        };

        let kind = match c {
            '=' => self.single(TokenKind::Equals),
            ':' => self.single(TokenKind::Colon),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '?' => self.single(TokenKind::Question),
            '*' => self.single(TokenKind::Star),
            '+' => self.single(TokenKind::Plus),
            '&' => self.single(TokenKind::Amp),
            '!' => self.single(TokenKind::Bang),
            '.' => self.single(TokenKind::Dot),
            '/' => match self.peek_char_n(1) {
                Some('/') => self.scan_line_comment(),
                Some('*') => self.scan_block_comment(),
                _ => self.single(TokenKind::Slash),
            },
            '"' | '\'' => self.scan_literal(c),
            '[' => self.scan_class(),
            c if is_ident_start(c) => self.scan_ident(),
            c => {
                self.advance();
                TokenKind::Error(format!("unexpected character: {c}"))
            }
        };

        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes all source and returns a vector of tokens ending in `Eof`.
    ///
    /// Comments are included in the output.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn scan_line_comment(&mut self) -> TokenKind {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.advance();
        }
        TokenKind::Comment(text)
    }

    fn scan_block_comment(&mut self) -> TokenKind {
        let mut text = String::new();
        loop {
            match self.peek_char() {
                Some('*') if self.peek_char_n(1) == Some('/') => {
                    self.advance();
                    self.advance();
                    text.push_str("*/");
                    return TokenKind::Comment(text);
                }
                Some(c) => {
                    text.push(c);
                    self.advance();
                }
                None => return TokenKind::Error("unterminated block comment".into()),
            }
        }
    }

    /// Consumes a trailing `i` flag unless it starts an identifier.
    fn scan_ignore_case_flag(&mut self) -> bool {
        if self.peek_char() == Some('i') && !self.peek_char_n(1).is_some_and(is_ident_continue) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Scans an escape sequence after the backslash has been consumed.
    fn scan_escape(&mut self) -> Result<char, String> {
        let c = self
            .peek_char()
            .ok_or_else(|| "unexpected end of input in escape".to_string())?;
        self.advance();
        match c {
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            '\\' | '"' | '\'' | ']' | '[' | '-' | '^' => Ok(c),
            other => Err(format!("invalid escape sequence: \\{other}")),
        }
    }

    fn scan_literal(&mut self, quote: char) -> TokenKind {
        self.advance();
        let mut text = String::new();
        loop {
            match self.peek_char() {
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.scan_escape() {
                        Ok(c) => text.push(c),
                        Err(msg) => return TokenKind::Error(msg),
                    }
                }
                Some('\n') | None => {
                    return TokenKind::Error("unterminated literal".into());
                }
                Some(c) => {
                    self.advance();
                    text.push(c);
                }
            }
        }
        let ignore_case = self.scan_ignore_case_flag();
        TokenKind::Literal { text, ignore_case }
    }

    fn scan_class_char(&mut self) -> Result<char, String> {
        match self.peek_char() {
            Some('\\') => {
                self.advance();
                self.scan_escape()
            }
            Some('\n') | None => Err("unterminated character class".into()),
            Some(c) => {
                self.advance();
                Ok(c)
            }
        }
    }

    fn scan_class(&mut self) -> TokenKind {
        self.advance();
        let negated = if self.peek_char() == Some('^') {
            self.advance();
            true
        } else {
            false
        };

        let mut ranges = Vec::new();
        while self.peek_char() != Some(']') {
            let low = match self.scan_class_char() {
                Ok(c) => c,
                Err(msg) => return TokenKind::Error(msg),
            };
            let high = if self.peek_char() == Some('-')
                && self.peek_char_n(1).is_some_and(|c| c != ']')
            {
                self.advance();
                match self.scan_class_char() {
                    Ok(c) => c,
                    Err(msg) => return TokenKind::Error(msg),
                }
            } else {
                low
            };
            if high < low {
                return TokenKind::Error(format!("invalid class range: {low}-{high}"));
            }
            ranges.push((low, high));
        }
        self.advance();

        let ignore_case = self.scan_ignore_case_flag();
        TokenKind::Class {
            ranges,
            negated,
            ignore_case,
        }
    }

    fn scan_ident(&mut self) -> TokenKind {
        let mut name = String::new();
        while let Some(c) = self.peek_char() {
            if !is_ident_continue(c) {
                break;
            }
            name.push(c);
            self.advance();
        }
        TokenKind::Ident(name)
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
