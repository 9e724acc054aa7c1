//! Notation to text.
//!
//! Notation is matched exactly: case-sensitive and without whitespace, since
//! `B` is a bishop and `b` a file. Phrasing is fixed per language.

use chess_nlp_foundation::{Direction, Language, Result};
use chess_nlp_grammar::{Hooks, Matcher, compile, parse};

use crate::forward::match_failure;
use crate::templates;

/// Compiled notation-to-text grammar for one language.
#[derive(Clone, Debug)]
pub struct Inverse {
    language: Language,
    matcher: Matcher,
}

impl Inverse {
    /// Compiles the inverse grammar for `language`.
    ///
    /// # Errors
    /// Returns a grammar definition error if the template does not compile.
    pub fn new(language: Language) -> Result<Self> {
        let matcher = compile(&parse(templates::inverse(language))?, &Hooks::new())?;
        Ok(Self { language, matcher })
    }

    /// Translates notation into a phrase.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidMove`](chess_nlp_foundation::ErrorKind::InvalidMove)
    /// if the notation is not recognized.
    pub fn translate(&self, notation: &str) -> Result<String> {
        self.matcher
            .parse(notation)
            .map_err(|err| match_failure(self.language, Direction::NotationToText, notation, err))
    }
}
