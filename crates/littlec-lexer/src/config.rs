//! Lexer configuration

use crate::lexeme::MAX_LEXEME_LEN;

/// How a lexeme-initial `-` is read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinusPolicy {
    /// Always start a negative literal, so `5 - 3` gives `5` and `-3`
    /// and a lone `-` is a negative integer literal with no digits.
    #[default]
    Fold,
    /// Start a negative literal only before a digit or `.` and when the
    /// previous token is not an operand; otherwise emit `Subtract`.
    Contextual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Longest lexeme kept, in characters
    pub max_lexeme_len: usize,
    pub minus: MinusPolicy,
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_lexeme_len(mut self, max_lexeme_len: usize) -> Self {
        self.max_lexeme_len = max_lexeme_len;
        self
    }

    pub fn with_minus_policy(mut self, minus: MinusPolicy) -> Self {
        self.minus = minus;
        self
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_lexeme_len: MAX_LEXEME_LEN,
            minus: MinusPolicy::Fold,
        }
    }
}
