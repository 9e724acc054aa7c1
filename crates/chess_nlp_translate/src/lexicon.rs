//! Default surface terms per language.

use chess_nlp_foundation::{CastleSide, Color, Language, Piece};

use crate::vocabulary::Slot;

static FILES: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

static EN_RANKS: [[&str; 2]; 8] = [
    ["1", "one"],
    ["2", "two"],
    ["3", "three"],
    ["4", "four"],
    ["5", "five"],
    ["6", "six"],
    ["7", "seven"],
    ["8", "eight"],
];

static DE_RANKS: [[&str; 2]; 8] = [
    ["1", "eins"],
    ["2", "zwei"],
    ["3", "drei"],
    ["4", "vier"],
    ["5", "fünf"],
    ["6", "sechs"],
    ["7", "sieben"],
    ["8", "acht"],
];

/// Returns the built-in terms for `slot`, in preference order.
///
/// Every slot has at least one default term.
pub(crate) fn defaults(language: Language, slot: Slot) -> &'static [&'static str] {
    match (language, slot) {
        (_, Slot::File(file)) => std::slice::from_ref(&FILES[file.index()]),
        (Language::English, Slot::Rank(rank)) => &EN_RANKS[rank.index()],
        (Language::German, Slot::Rank(rank)) => &DE_RANKS[rank.index()],
        (Language::English, other) => english(other),
        (Language::German, other) => german(other),
    }
}

fn english(slot: Slot) -> &'static [&'static str] {
    match slot {
        Slot::Piece(Piece::King) => &["king"],
        Slot::Piece(Piece::Queen) => &["queen"],
        Slot::Piece(Piece::Rook) => &["rook"],
        Slot::Piece(Piece::Bishop) => &["bishop"],
        Slot::Piece(Piece::Knight) => &["knight"],
        Slot::Side(CastleSide::Kingside) => &["kingside", "king side", "king-side", "short"],
        Slot::Side(CastleSide::Queenside) => &["queenside", "queen side", "queen-side", "long"],
        Slot::Color(Color::White) => &["white"],
        Slot::Color(Color::Black) => &["black"],
        Slot::Capture => &["captures", "capture", "takes", "take"],
        Slot::Move => &["moves to", "move to", "to"],
        Slot::Check => &["check"],
        Slot::Checkmate => &["checkmate", "mate"],
        Slot::Castle => &["castle"],
        Slot::Resigns => &["resigns"],
        Slot::Wins => &["wins", "won"],
        Slot::Draw => &["draw"],
        Slot::Promote => &["promote to", "promotes to"],
        Slot::EnPassant => &["en passant", "e.p."],
        Slot::File(_) | Slot::Rank(_) => &[],
    }
}

fn german(slot: Slot) -> &'static [&'static str] {
    match slot {
        Slot::Piece(Piece::King) => &["könig"],
        Slot::Piece(Piece::Queen) => &["dame"],
        Slot::Piece(Piece::Rook) => &["turm"],
        Slot::Piece(Piece::Bishop) => &["läufer"],
        Slot::Piece(Piece::Knight) => &["springer"],
        Slot::Side(CastleSide::Kingside) => &["königsseite", "kurze", "kurz"],
        Slot::Side(CastleSide::Queenside) => &["damenseite", "lange", "lang"],
        Slot::Color(Color::White) => &["weiß", "weiss"],
        Slot::Color(Color::Black) => &["schwarz"],
        Slot::Capture => &["schlägt", "nimmt"],
        Slot::Move => &["zieht nach", "nach"],
        Slot::Check => &["schach"],
        Slot::Checkmate => &["schachmatt", "matt"],
        Slot::Castle => &["rochade"],
        Slot::Resigns => &["gibt auf"],
        Slot::Wins => &["gewinnt"],
        Slot::Draw => &["remis", "unentschieden"],
        Slot::Promote => &["umwandlung in", "verwandelt in"],
        Slot::EnPassant => &["en passant", "e.p."],
        Slot::File(_) | Slot::Rank(_) => &[],
    }
}
