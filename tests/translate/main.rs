//! Integration tests for Layer 2: Translate
//!
//! Tests for both translation directions, caller aliases, languages, and
//! engine configuration.

mod aliases;
mod engine;
mod german;
mod to_notation;
mod to_text;
