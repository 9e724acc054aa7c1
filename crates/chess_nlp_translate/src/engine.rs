//! The translation engine.

use std::collections::BTreeMap;

use chess_nlp_foundation::{Direction, Language, Result};
use tracing::{debug, trace};

use crate::forward::Forward;
use crate::inverse::Inverse;
use crate::options::Options;
use crate::vocabulary::AliasTable;

/// Translates move descriptions to notation and back.
///
/// Both grammars are assembled once in [`new`](Self::new); translating only
/// reads them, so one engine can serve any number of threads.
///
/// ```
/// use chess_nlp_translate::{ChessNlp, Options};
///
/// let nlp = ChessNlp::new(Options::new().alias("knight", ["night"])).unwrap();
/// assert_eq!(nlp.to_notation("night takes f3").unwrap(), "Nxf3");
/// assert_eq!(nlp.to_text("Nxf3").unwrap(), "knight captures f3");
/// ```
#[derive(Clone, Debug)]
pub struct ChessNlp {
    options: Options,
    table: AliasTable,
    forward: Forward,
    inverse: Inverse,
}

impl ChessNlp {
    /// Builds an engine.
    ///
    /// # Errors
    /// Returns a configuration error for an unknown slot key, a blank or
    /// conflicting alias, or a grammar that fails to assemble.
    pub fn new(options: Options) -> Result<Self> {
        let mut table = AliasTable::new(options.language);
        for (slot, terms) in &options.aliases {
            table.add_named(slot, terms)?;
        }

        let forward = Forward::new(&table)?;
        let inverse = Inverse::new(options.language)?;

        debug!(
            language = %options.language,
            aliases = table.added(),
            "engine ready"
        );

        Ok(Self {
            options,
            table,
            forward,
            inverse,
        })
    }

    /// Translates a move description into notation.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidMove`](chess_nlp_foundation::ErrorKind::InvalidMove)
    /// if the text describes no move, or
    /// [`ErrorKind::InvalidEnPassant`](chess_nlp_foundation::ErrorKind::InvalidEnPassant)
    /// for an en passant capture onto an impossible rank.
    pub fn to_notation(&self, text: &str) -> Result<String> {
        self.translate(Direction::TextToNotation, text)
    }

    /// Alias of [`to_notation`](Self::to_notation).
    ///
    /// # Errors
    /// As [`to_notation`](Self::to_notation).
    pub fn to_san(&self, text: &str) -> Result<String> {
        self.translate(Direction::TextToNotation, text)
    }

    /// Translates notation into a phrase.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidMove`](chess_nlp_foundation::ErrorKind::InvalidMove)
    /// if the notation is not recognized.
    pub fn to_text(&self, notation: &str) -> Result<String> {
        self.translate(Direction::NotationToText, notation)
    }

    /// Alias of [`to_text`](Self::to_text).
    ///
    /// # Errors
    /// As [`to_text`](Self::to_text).
    pub fn from_san(&self, notation: &str) -> Result<String> {
        self.translate(Direction::NotationToText, notation)
    }

    /// Returns the configured language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.options.language
    }

    /// Returns the caller-supplied aliases, as configured.
    #[must_use]
    pub fn aliases(&self) -> &BTreeMap<String, Vec<String>> {
        &self.options.aliases
    }

    /// Returns the effective alias table: defaults plus caller terms.
    #[must_use]
    pub fn alias_table(&self) -> &AliasTable {
        &self.table
    }

    /// Returns the options this engine was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    fn translate(&self, direction: Direction, input: &str) -> Result<String> {
        let result = match direction {
            Direction::TextToNotation => self.forward.translate(input),
            Direction::NotationToText => self.inverse.translate(input),
        };
        trace!(
            language = %self.options.language,
            ?direction,
            input,
            ok = result.is_ok(),
            "translate"
        );
        result
    }
}
