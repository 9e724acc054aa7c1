//! Integration tests for Layer 1: Grammar
//!
//! Tests for grammar text parsing, compilation checks, and matching.

mod matcher;
mod parser;
