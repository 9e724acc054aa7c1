//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Error, Language, and notation primitives.

mod language;
