//! Core types for chess_nlp.
//!
//! This crate provides the foundational pieces shared by every layer:
//! - [`Error`] and [`ErrorKind`] - Error handling
//! - [`Language`] - Supported natural languages and their messages
//! - [`Piece`], [`File`], [`Rank`], [`CastleSide`], [`Color`], [`Outcome`] -
//!   Notation primitives

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod language;
pub mod notation;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use language::Language;
pub use notation::{CastleSide, Color, Direction, File, Outcome, Piece, Rank};
