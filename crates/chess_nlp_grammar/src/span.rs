//! Source location tracking for grammar text.

/// A span of grammar source text.
///
/// Tracks byte offsets and line/column positions so that template errors can
/// point at the offending rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset where this span starts.
    pub start: usize,
    /// Byte offset where this span ends (exclusive).
    pub end: usize,
    /// 1-based line number where this span starts.
    pub line: u32,
    /// 1-based column number where this span starts.
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// A span for rules that were generated rather than written.
    ///
    /// Line and column are zero so errors can tell the two apart.
    #[must_use]
    pub const fn generated() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Returns true if this span points into real source text.
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        self.line == 0
    }

    /// Creates a span covering the range from this span to another.
    #[must_use]
    pub fn to(self, other: Self) -> Self {
        Self {
            start: self.start,
            end: other.end,
            line: self.line,
            column: self.column,
        }
    }

    /// Returns the text this span covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}
