//! Translation between chess move descriptions and algebraic notation.
//!
//! - [`AliasTable`] - Surface terms per vocabulary [`Slot`], defaults plus aliases
//! - [`assemble`] - Template text plus generated vocabulary rules
//! - [`Forward`] - Text to notation
//! - [`Inverse`] - Notation to text
//! - [`ChessNlp`] - Both directions behind one configured engine
//!
//! ```
//! use chess_nlp_translate::{ChessNlp, Options};
//!
//! let nlp = ChessNlp::new(Options::new()).unwrap();
//! assert_eq!(nlp.to_notation("bishop a takes e4").unwrap(), "Baxe4");
//! assert_eq!(nlp.to_notation("f captures g4 en passant").unwrap(), "fxg3");
//! assert_eq!(nlp.to_text("O-O-O").unwrap(), "castle queenside");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod assembler;
pub mod engine;
pub mod forward;
pub mod inverse;
mod lexicon;
pub mod options;
pub mod templates;
pub mod vocabulary;


pub use assembler::{assemble, build};
pub use engine::ChessNlp;
pub use forward::Forward;
pub use inverse::Inverse;
pub use options::Options;
pub use vocabulary::{AliasTable, Category, Slot};
