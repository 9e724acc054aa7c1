//! Text to notation.

use chess_nlp_foundation::{
    Color, Direction, Error, ErrorContext, ErrorKind, Language, Rank, Result,
};
use chess_nlp_grammar::{Bindings, HookError, Hooks, MatchError, Matcher};

use crate::assembler;
use crate::templates;
use crate::vocabulary::AliasTable;

/// Hook name used by the en passant rule of every forward template.
pub const EN_PASSANT_HOOK: &str = "en_passant_target";

/// Hook name for "<color> resigns".
pub const RESIGNATION_HOOK: &str = "resignation";

/// Hook name for "<color> wins".
pub const VICTORY_HOOK: &str = "victory";

/// Compiled text-to-notation grammar for one language and alias table.
#[derive(Clone, Debug)]
pub struct Forward {
    language: Language,
    matcher: Matcher,
}

impl Forward {
    /// Assembles the forward grammar for the table's language.
    ///
    /// # Errors
    /// Returns a grammar definition error if assembly fails.
    pub fn new(aliases: &AliasTable) -> Result<Self> {
        let language = aliases.language();
        let matcher = assembler::build(templates::forward(language), aliases, &hooks())?;
        Ok(Self { language, matcher })
    }

    /// Translates a move description into notation.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidMove`] if the text matches no move and
    /// [`ErrorKind::InvalidEnPassant`] if it describes an en passant capture
    /// onto a rank no such capture can reach.
    pub fn translate(&self, text: &str) -> Result<String> {
        self.matcher.parse(text).map_err(|err| match err {
            MatchError::Rejected { rule, hook, offset, .. } if hook == EN_PASSANT_HOOK => {
                Error::invalid_en_passant(self.language, text)
                    .with_context(ErrorContext::new().with_rule(rule).with_offset(offset))
            }
            other => match_failure(self.language, Direction::TextToNotation, text, other),
        })
    }
}

/// Hooks available to forward templates.
#[must_use]
pub fn hooks() -> Hooks {
    Hooks::new()
        .with(EN_PASSANT_HOOK, en_passant_target)
        .with(RESIGNATION_HOOK, resignation)
        .with(VICTORY_HOOK, victory)
}

/// Writes an en passant capture the way notation records it: onto the square
/// the captured pawn skipped.
fn en_passant_target(bindings: &Bindings<'_>) -> std::result::Result<String, HookError> {
    let from = bindings.get("from").unwrap_or_default();
    let to_file = bindings.get("to_file").unwrap_or_default();
    let target = bindings
        .get("to_rank")
        .and_then(|rank| rank.chars().next())
        .and_then(Rank::from_char)
        .and_then(Rank::en_passant_target)
        .ok_or_else(|| HookError::new("invalid en passant capture"))?;
    Ok(format!("{from}x{to_file}{target}"))
}

fn resignation(bindings: &Bindings<'_>) -> std::result::Result<String, HookError> {
    Ok(player(bindings)?.resigns().notation().to_string())
}

fn victory(bindings: &Bindings<'_>) -> std::result::Result<String, HookError> {
    Ok(player(bindings)?.wins().notation().to_string())
}

/// The color bound to `by`, as its one-letter code.
fn player(bindings: &Bindings<'_>) -> std::result::Result<Color, HookError> {
    bindings
        .get("by")
        .and_then(|code| code.chars().next())
        .and_then(Color::from_symbol)
        .ok_or_else(|| HookError::new("no color bound"))
}

/// Converts a failed match into a caller-facing error.
pub(crate) fn match_failure(
    language: Language,
    direction: Direction,
    input: &str,
    err: MatchError,
) -> Error {
    match err {
        MatchError::Syntax { offset, expected } => {
            let context = expected
                .into_iter()
                .fold(ErrorContext::new().with_offset(offset), ErrorContext::with_expected);
            Error::invalid_move(language, direction, input).with_context(context)
        }
        other => Error::new(ErrorKind::Internal(other.to_string())),
    }
}
