//! Source positions for error reporting
//!
//! The lexer hands out byte ranges (logos spans). Nothing in the tree keeps a position, so the
//! only consumer of line/column information is error reporting: when a token is rejected we turn
//! its byte offset into a [`Position`] through a [`SourceLocation`] index.
//!
//! ```text
//! Source: "UNIT[\n\"m\",1]"
//!          01234 5 67890
//! line_starts = [0, 6]
//! byte_to_position(7) -> line 2, column 2
//! ```
//!
//! Lines and columns are 1-based, the way editors and the WKT tooling this crate replaces count
//! them. Columns are counted in characters, not bytes.

use serde::Serialize;
use std::fmt;

/// A position in the WKT source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    /// Byte offset from the start of the text
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation<'src> {
    source: &'src str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'src> SourceLocation<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a line/column position.
    ///
    /// Offsets past the end of the text are clamped to the end.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(self.source.len());
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..byte_offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(byte_offset - line_start);

        Position::new(line + 1, column + 1, byte_offset)
    }

    /// Position just past the last character, used for premature end-of-text
    pub fn end(&self) -> Position {
        self.byte_to_position(self.source.len())
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
