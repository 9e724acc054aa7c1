//! Runtime-compiled parsing expression grammars for chess_nlp.
//!
//! Grammars are plain text assembled at runtime, so new vocabulary can be
//! spliced in before compiling:
//!
//! ```text
//! source ──Lexer──▶ tokens ──Parser──▶ Grammar ──Compiler──▶ Matcher
//!                                        ▲                     │
//!                          generated Rules                 parse(input)
//! ```
//!
//! - [`Lexer`] - Tokenization of grammar text
//! - [`Parser`] - Parsing tokens into a [`Grammar`]
//! - [`Compiler`] - Resolving rules and hooks, rejecting grammars that loop
//! - [`Matcher`] - Ordered-choice matching of whole inputs
//!
//! # Grammar text
//!
//! ```text
//! start  = piece _ square
//! piece  = 'bishop'i { "B" } / 'knight'i { "N" }
//! square = file:[a-h] rank:[1-8] { words }
//! _      = [ \t]* { "" }
//! ```
//!
//! A rule's value is the concatenation of its elements' values; a literal or
//! class yields the input text it matched. `{ "text" }` replaces the value
//! with a constant and `{ name }` computes it with a [hook](Hooks).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod compiler;
pub mod hooks;
pub mod lexer;
pub mod matcher;
pub mod parser;
pub mod span;
pub mod token;


pub use ast::{Action, CharClass, Expr, Grammar, Rule};
pub use compiler::{Compiler, compile};
pub use hooks::{Binding, Bindings, HookError, HookFn, Hooks};
pub use lexer::Lexer;
pub use matcher::{MatchError, Matcher};
pub use parser::{Parser, parse};
pub use span::Span;
pub use token::{Token, TokenKind};
