//! Bounded lexeme buffer

/// Longest lexeme the lexer keeps, in characters
pub const MAX_LEXEME_LEN: usize = 99;

/// Text of the token under construction.
///
/// Appends past the bound are dropped and counted; the buffer never
/// grows beyond `max_len` characters.
#[derive(Debug, Clone)]
pub struct Lexeme {
    text: String,
    len: usize,
    max_len: usize,
    dropped: usize,
}

impl Lexeme {
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::with_capacity(max_len.min(MAX_LEXEME_LEN)),
            len: 0,
            max_len,
            dropped: 0,
        }
    }

    /// Appends one character; returns `false` if it was dropped
    pub fn push(&mut self, ch: char) -> bool {
        if self.len < self.max_len {
            self.text.push(ch);
            self.len += 1;
            true
        } else {
            self.dropped += 1;
            false
        }
    }

    /// Empties the buffer for the next token
    pub fn clear(&mut self) {
        self.text.clear();
        self.len = 0;
        self.dropped = 0;
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }

    /// Characters dropped since the last clear
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl Default for Lexeme {
    fn default() -> Self {
        Self::new(MAX_LEXEME_LEN)
    }
}
