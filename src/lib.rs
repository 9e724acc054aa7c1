//! chess_nlp - Chess move descriptions to algebraic notation and back
//!
//! This crate re-exports all layers of the chess_nlp system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: chess_nlp_translate - Alias table, grammar assembly, both directions
//! Layer 1: chess_nlp_grammar    - Grammar text, compiler, ordered-choice matcher
//! Layer 0: chess_nlp_foundation - Core types (Error, Language, Piece, File, Rank)
//! ```
//!
//! ```
//! use chess_nlp::{ChessNlp, Options};
//!
//! let nlp = ChessNlp::new(Options::new().alias("4", ["for", "fore"])).unwrap();
//! assert_eq!(nlp.to_notation("knight to h fore").unwrap(), "Nh4");
//! assert_eq!(nlp.to_text("Nh4").unwrap(), "knight to h4");
//! ```

pub use chess_nlp_foundation as foundation;
pub use chess_nlp_grammar as grammar;
pub use chess_nlp_translate as translate;

pub use chess_nlp_foundation::{Error, ErrorKind, Language, Result};
pub use chess_nlp_translate::{ChessNlp, Options};
