//! Notation primitives.
//!
//! These are the building blocks of Standard Algebraic Notation. The
//! translator never validates moves against a position; these types only
//! know how they are written.

use std::fmt;

/// A translation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Free text to algebraic notation.
    TextToNotation,
    /// Algebraic notation to free text.
    NotationToText,
}

/// A piece that has its own symbol in notation. Pawns have none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Piece {
    /// `K`
    King,
    /// `Q`
    Queen,
    /// `R`
    Rook,
    /// `B`
    Bishop,
    /// `N`
    Knight,
}

impl Piece {
    /// All pieces, in notation order.
    pub const ALL: [Self; 5] = [
        Self::King,
        Self::Queen,
        Self::Rook,
        Self::Bishop,
        Self::Knight,
    ];

    /// Returns the notation symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Rook => 'R',
            Self::Bishop => 'B',
            Self::Knight => 'N',
        }
    }

    /// Returns the lowercase English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::King => "king",
            Self::Queen => "queen",
            Self::Rook => "rook",
            Self::Bishop => "bishop",
            Self::Knight => "knight",
        }
    }
}

/// A board file, `a` through `h`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct File(u8);

impl File {
    /// All files, `a` first.
    pub const ALL: [Self; 8] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    /// Parses a file letter, ignoring case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        if ('a'..='h').contains(&c) {
            Some(Self(c as u8 - b'a'))
        } else {
            None
        }
    }

    /// Returns the lowercase file letter.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Returns the zero-based index (`a` = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A board rank, `1` through `8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    /// All ranks, `1` first.
    pub const ALL: [Self; 8] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    /// Parses a rank digit.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if ('1'..='8').contains(&c) {
            Some(Self(c as u8 - b'1'))
        } else {
            None
        }
    }

    /// Returns the rank digit.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'1' + self.0) as char
    }

    /// Returns the zero-based index (rank `1` = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Maps the rank named in a spoken en passant capture to the rank written
    /// in notation.
    ///
    /// Speakers name the square of the pawn being captured (`g4` after g2-g4),
    /// while notation names the square the capturing pawn lands on (`g3`).
    /// Only black capturing on rank 4 and white capturing on rank 5 are
    /// possible; every other rank yields `None`.
    #[must_use]
    pub const fn en_passant_target(self) -> Option<Self> {
        match self.0 {
            3 => Some(Self(2)),
            4 => Some(Self(3)),
            _ => None,
        }
    }
}

/// The side of the board a king castles towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CastleSide {
    /// Short castling, `O-O`.
    Kingside,
    /// Long castling, `O-O-O`.
    Queenside,
}

impl CastleSide {
    /// Both sides, kingside first.
    pub const ALL: [Self; 2] = [Self::Kingside, Self::Queenside];

    /// Returns the castling literal.
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Self::Kingside => "O-O",
            Self::Queenside => "O-O-O",
        }
    }
}

/// A player color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// White.
    White,
    /// Black.
    Black,
}

impl Color {
    /// Both colors, white first.
    pub const ALL: [Self; 2] = [Self::White, Self::Black];

    /// Returns the single-letter color code.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    /// Looks up a color by its single-letter code.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'w' => Some(Self::White),
            'b' => Some(Self::Black),
            _ => None,
        }
    }

    /// Returns the opposing color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// The outcome when this color wins.
    #[must_use]
    pub const fn wins(self) -> Outcome {
        match self {
            Self::White => Outcome::WhiteWins,
            Self::Black => Outcome::BlackWins,
        }
    }

    /// The outcome when this color resigns. The literal names the winner.
    #[must_use]
    pub const fn resigns(self) -> Outcome {
        self.opponent().wins()
    }
}

/// A finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// `1-0`
    WhiteWins,
    /// `0-1`
    BlackWins,
    /// `1/2-1/2`
    Draw,
}

impl Outcome {
    /// Returns the result literal.
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Self::WhiteWins => "1-0",
            Self::BlackWins => "0-1",
            Self::Draw => "1/2-1/2",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notation())
    }
}
