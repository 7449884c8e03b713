//! Span - Source code location
//!
//! A Span covers the characters of one lexeme, used to point
//! diagnostics at the offending text.

/// A position in the character stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line (1-indexed)
    pub line: u32,
    /// Column (1-indexed)
    pub column: u32,
    /// Character offset from the beginning of the input
    pub offset: usize,
}

impl Position {
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

/// A region of the input (start inclusive, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position
    pub start: Position,
    /// End position
    pub end: Position,
    /// Source file ID
    pub file_id: u32,
}

impl Span {
    pub fn new(start: Position, end: Position, file_id: u32) -> Self {
        Self { start, end, file_id }
    }

    /// Creates an empty span at a single position
    pub fn point(pos: Position, file_id: u32) -> Self {
        Self {
            start: pos,
            end: pos,
            file_id,
        }
    }

    /// Number of characters covered
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
