//! Engine configuration.

use std::collections::BTreeMap;

use chess_nlp_foundation::{Language, Result};

/// Configuration for a [`ChessNlp`](crate::ChessNlp) engine.
///
/// `aliases` maps slot keys (`"knight"`, `"a"`, `"4"`, `"capture"`, ...) to
/// extra terms the forward direction should recognize.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Language of the grammars and error messages.
    pub language: Language,
    /// Caller-supplied terms per slot key.
    pub aliases: BTreeMap<String, Vec<String>>,
}

impl Options {
    /// English, no aliases.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the language.
    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Sets the language from a tag such as `"en"` or `"de"`.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnsupportedLanguage`](chess_nlp_foundation::ErrorKind::UnsupportedLanguage)
    /// for an unknown tag.
    pub fn language_tag(self, tag: &str) -> Result<Self> {
        Ok(self.language(tag.parse()?))
    }

    /// Appends terms for a slot.
    #[must_use]
    pub fn alias<I, S>(mut self, slot: impl Into<String>, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases
            .entry(slot.into())
            .or_default()
            .extend(terms.into_iter().map(Into::into));
        self
    }
}
