//! Supported natural languages.
//!
//! A [`Language`] selects the grammar templates, the default vocabulary and
//! the wording of caller-facing error messages.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};
use crate::notation::Direction;

/// A natural language the translator understands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// English (`en`), the primary language.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    English,
    /// German (`de`).
    #[cfg_attr(feature = "serde", serde(rename = "de"))]
    German,
}

impl Language {
    /// All supported languages, primary first.
    pub const ALL: [Self; 2] = [Self::English, Self::German];

    /// Returns the short tag for this language.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
        }
    }

    /// Returns the localized name of a translation direction.
    #[must_use]
    pub const fn direction_name(self, direction: Direction) -> &'static str {
        match (self, direction) {
            (Self::English, Direction::TextToNotation) => "text to notation",
            (Self::English, Direction::NotationToText) => "notation to text",
            (Self::German, Direction::TextToNotation) => "Text zu Notation",
            (Self::German, Direction::NotationToText) => "Notation zu Text",
        }
    }

    /// Returns the message for input that could not be parsed.
    #[must_use]
    pub fn invalid_move(self, input: &str, direction: Direction) -> String {
        let direction = self.direction_name(direction);
        match self {
            Self::English => format!("Invalid move: {input} ({direction})"),
            Self::German => format!("Ungültiger Zug: {input} ({direction})"),
        }
    }

    /// Returns the message for an en passant capture on an impossible rank.
    #[must_use]
    pub fn invalid_en_passant(self, input: &str) -> String {
        match self {
            Self::English => format!("Invalid en passant capture: {input}"),
            Self::German => format!("Ungültiger En-passant-Schlag: {input}"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "de" | "german" | "deutsch" => Ok(Self::German),
            _ => Err(Error::new(ErrorKind::UnsupportedLanguage(s.to_string()))),
        }
    }
}
