//! Alias slots and the alias table.
//!
//! Every piece of vocabulary the forward grammar recognizes lives in a
//! [`Slot`]: a fixed canonical symbol plus the surface terms that produce it.
//! Slots are grouped into [`Category`]s; all terms of a category are matched
//! together, longest first, so a caller term like `"fore"` is never shadowed
//! by its prefix `"for"`.

use std::fmt;

use chess_nlp_foundation::{
    CastleSide, Color, Error, ErrorKind, File, Language, Outcome, Piece, Rank, Result,
};
use im::{OrdMap, Vector};

use crate::lexicon;

/// A group of slots matched by one rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// King, queen, rook, bishop, knight.
    Piece,
    /// Files `a` through `h`.
    File,
    /// Ranks `1` through `8`.
    Rank,
    /// Castling sides.
    Side,
    /// Capture or plain move.
    Action,
    /// Check or checkmate.
    Suffix,
    /// White or black.
    Color,
    /// Castle, resigns, wins, draw, promote, en passant.
    Keyword,
}

impl Category {
    /// All categories.
    pub const ALL: [Self; 8] = [
        Self::Piece,
        Self::File,
        Self::Rank,
        Self::Side,
        Self::Action,
        Self::Suffix,
        Self::Color,
        Self::Keyword,
    ];

    /// Returns the grammar rule name that matches any term of this category.
    #[must_use]
    pub const fn rule_name(self) -> &'static str {
        match self {
            Self::Piece => "piece",
            Self::File => "file",
            Self::Rank => "rank",
            Self::Side => "side",
            Self::Action => "action",
            Self::Suffix => "suffix",
            Self::Color => "color",
            Self::Keyword => "keyword",
        }
    }

    /// Looks up a category by its rule name.
    #[must_use]
    pub fn from_rule_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.rule_name() == name)
    }

    /// Returns the slots of this category in slot order.
    pub fn slots(self) -> impl Iterator<Item = Slot> {
        Slot::all().filter(move |slot| slot.category() == self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule_name())
    }
}

/// A configurable vocabulary entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// A piece name.
    Piece(Piece),
    /// A file letter or its aliases.
    File(File),
    /// A rank digit or its aliases.
    Rank(Rank),
    /// A castling side.
    Side(CastleSide),
    /// A player color.
    Color(Color),
    /// "captures", "takes".
    Capture,
    /// "to", "moves to".
    Move,
    /// "check".
    Check,
    /// "checkmate", "mate".
    Checkmate,
    /// "castle".
    Castle,
    /// "resigns".
    Resigns,
    /// "wins".
    Wins,
    /// "draw".
    Draw,
    /// "promote to".
    Promote,
    /// "en passant".
    EnPassant,
}

const FILE_KEYS: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];
const FILE_RULES: [&str; 8] = [
    "file_a", "file_b", "file_c", "file_d", "file_e", "file_f", "file_g", "file_h",
];
const RANK_KEYS: [&str; 8] = ["1", "2", "3", "4", "5", "6", "7", "8"];
const RANK_RULES: [&str; 8] = [
    "rank_1", "rank_2", "rank_3", "rank_4", "rank_5", "rank_6", "rank_7", "rank_8",
];

impl Slot {
    /// Returns every slot, grouped by category.
    pub fn all() -> impl Iterator<Item = Self> {
        Piece::ALL
            .into_iter()
            .map(Self::Piece)
            .chain(File::ALL.into_iter().map(Self::File))
            .chain(Rank::ALL.into_iter().map(Self::Rank))
            .chain(CastleSide::ALL.into_iter().map(Self::Side))
            .chain([Self::Capture, Self::Move, Self::Check, Self::Checkmate])
            .chain(Color::ALL.into_iter().map(Self::Color))
            .chain([
                Self::Castle,
                Self::Resigns,
                Self::Wins,
                Self::Draw,
                Self::Promote,
                Self::EnPassant,
            ])
    }

    /// Returns the category this slot is matched in.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Piece(_) => Category::Piece,
            Self::File(_) => Category::File,
            Self::Rank(_) => Category::Rank,
            Self::Side(_) => Category::Side,
            Self::Color(_) => Category::Color,
            Self::Capture | Self::Move => Category::Action,
            Self::Check | Self::Checkmate => Category::Suffix,
            Self::Castle
            | Self::Resigns
            | Self::Wins
            | Self::Draw
            | Self::Promote
            | Self::EnPassant => Category::Keyword,
        }
    }

    /// Returns the name callers use to supply aliases for this slot.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Piece(piece) => piece.name(),
            Self::File(file) => FILE_KEYS[file.index()],
            Self::Rank(rank) => RANK_KEYS[rank.index()],
            Self::Side(CastleSide::Kingside) => "kingside",
            Self::Side(CastleSide::Queenside) => "queenside",
            Self::Color(Color::White) => "white",
            Self::Color(Color::Black) => "black",
            Self::Capture => "capture",
            Self::Move => "move",
            Self::Check => "check",
            Self::Checkmate => "checkmate",
            Self::Castle => "castle",
            Self::Resigns => "resigns",
            Self::Wins => "wins",
            Self::Draw => "draw",
            Self::Promote => "promote",
            Self::EnPassant => "en_passant",
        }
    }

    /// Looks up a slot by its caller-facing key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().find(|slot| slot.key() == key)
    }

    /// Returns the grammar rule name that matches exactly this slot's terms.
    #[must_use]
    pub const fn rule_name(self) -> &'static str {
        match self {
            Self::File(file) => FILE_RULES[file.index()],
            Self::Rank(rank) => RANK_RULES[rank.index()],
            other => other.key(),
        }
    }

    /// Looks up a slot by its rule name.
    #[must_use]
    pub fn from_rule_name(name: &str) -> Option<Self> {
        Self::all().find(|slot| slot.rule_name() == name)
    }

    /// Returns the canonical notation this slot produces.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Piece(Piece::King) => "K",
            Self::Piece(Piece::Queen) => "Q",
            Self::Piece(Piece::Rook) => "R",
            Self::Piece(Piece::Bishop) => "B",
            Self::Piece(Piece::Knight) => "N",
            Self::File(file) => FILE_KEYS[file.index()],
            Self::Rank(rank) => RANK_KEYS[rank.index()],
            Self::Side(side) => side.notation(),
            Self::Color(Color::White) => "w",
            Self::Color(Color::Black) => "b",
            Self::Capture => "x",
            Self::Check => "+",
            Self::Checkmate => "#",
            Self::Promote => "=",
            Self::Draw => Outcome::Draw.notation(),
            Self::Move | Self::Castle | Self::Resigns | Self::Wins | Self::EnPassant => "",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Surface terms for every slot: language defaults plus caller aliases.
///
/// Backed by persistent collections, so cloning a table to derive a variant
/// is cheap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasTable {
    language: Language,
    terms: OrdMap<Slot, Vector<String>>,
    added: usize,
}

impl AliasTable {
    /// Creates a table holding the default terms of `language`.
    #[must_use]
    pub fn new(language: Language) -> Self {
        let terms: OrdMap<Slot, Vector<String>> = Slot::all()
            .map(|slot| {
                let defaults: Vector<String> = lexicon::defaults(language, slot)
                    .iter()
                    .map(|term| (*term).to_string())
                    .collect();
                (slot, defaults)
            })
            .collect();
        Self {
            language,
            terms,
            added: 0,
        }
    }

    /// Returns the language whose defaults seeded this table.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Returns how many caller terms were added.
    #[must_use]
    pub const fn added(&self) -> usize {
        self.added
    }

    /// Adds caller terms to a slot.
    ///
    /// Terms are trimmed. A term already present in the slot (ignoring case)
    /// is skipped.
    ///
    /// # Errors
    /// Returns [`ErrorKind::EmptyAlias`] for a blank term and
    /// [`ErrorKind::ConflictingAlias`] if another slot of the same category
    /// already claims the term.
    pub fn add<I, S>(&mut self, slot: Slot, terms: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            let term = term.as_ref().trim();
            if term.is_empty() {
                return Err(Error::new(ErrorKind::EmptyAlias {
                    slot: slot.key().to_string(),
                }));
            }
            if let Some(owner) = self.owner(slot.category(), term) {
                if owner == slot {
                    continue;
                }
                return Err(Error::new(ErrorKind::ConflictingAlias {
                    term: term.to_string(),
                    first: owner.key().to_string(),
                    second: slot.key().to_string(),
                }));
            }
            let mut list = self.terms.get(&slot).cloned().unwrap_or_default();
            list.push_back(term.to_string());
            self.terms.insert(slot, list);
            self.added += 1;
        }
        Ok(())
    }

    /// Adds caller terms to the slot named `key`.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnknownSlot`] if `key` names no slot, otherwise as
    /// [`add`](Self::add).
    pub fn add_named<I, S>(&mut self, key: &str, terms: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let slot =
            Slot::from_key(key).ok_or_else(|| Error::new(ErrorKind::UnknownSlot(key.to_string())))?;
        self.add(slot, terms)
    }

    /// Returns the terms of one slot, longest first.
    #[must_use]
    pub fn resolve(&self, slot: Slot) -> Vec<&str> {
        let mut terms: Vec<&str> = self
            .terms
            .get(&slot)
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();
        terms.sort_by_key(|term| std::cmp::Reverse(term.chars().count()));
        terms
    }

    /// Returns the terms of every slot in a category, longest first.
    ///
    /// Terms of equal length keep slot order, then insertion order.
    #[must_use]
    pub fn category_terms(&self, category: Category) -> Vec<(Slot, &str)> {
        let mut terms: Vec<(Slot, &str)> = category
            .slots()
            .flat_map(|slot| {
                self.terms
                    .get(&slot)
                    .into_iter()
                    .flatten()
                    .map(move |term| (slot, term.as_str()))
            })
            .collect();
        terms.sort_by_key(|(_, term)| std::cmp::Reverse(term.chars().count()));
        terms
    }

    /// Returns the slot in `category` that already claims `term`.
    fn owner(&self, category: Category, term: &str) -> Option<Slot> {
        let wanted = term.to_lowercase();
        category.slots().find(|slot| {
            self.terms
                .get(slot)
                .is_some_and(|terms| terms.iter().any(|t| t.to_lowercase() == wanted))
        })
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
