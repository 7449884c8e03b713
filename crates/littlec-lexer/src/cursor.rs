//! Character cursor with one character of lookahead
//!
//! The cursor always holds the character after the one just consumed.
//! There is no pushback: callers branch on the held character and
//! advance only when they decide to keep it.

use crate::source::CharSource;
use littlec_error::span::Position;

/// Category of the character held by the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII letter
    Letter,
    /// ASCII decimal digit
    Digit,
    /// Whitespace, operators, punctuation and anything non-ASCII
    Other,
    /// Source exhausted
    EndOfInput,
}

impl CharClass {
    pub fn of(ch: Option<char>) -> Self {
        match ch {
            Some(c) if c.is_ascii_alphabetic() => CharClass::Letter,
            Some(c) if c.is_ascii_digit() => CharClass::Digit,
            Some(_) => CharClass::Other,
            None => CharClass::EndOfInput,
        }
    }
}

/// Whitespace as the C locale defines it (includes vertical tab)
pub fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub struct Cursor<S> {
    source: S,
    current: Option<char>,
    class: CharClass,
    /// Position of `current`
    pos: Position,
}

impl<S: CharSource> Cursor<S> {
    /// Creates a cursor holding the first character of `source`
    pub fn new(mut source: S) -> Self {
        let current = source.next_char();
        Self {
            source,
            current,
            class: CharClass::of(current),
            pos: Position::default(),
        }
    }

    pub fn current(&self) -> Option<char> {
        self.current
    }

    pub fn class(&self) -> CharClass {
        self.class
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    /// Whether the held character is `ch`
    pub fn is(&self, ch: char) -> bool {
        self.current == Some(ch)
    }

    pub fn is_at_end(&self) -> bool {
        self.class == CharClass::EndOfInput
    }

    /// Moves past the held character and returns the new one with its class.
    ///
    /// Once the source is exhausted this keeps returning `(None, EndOfInput)`
    /// without touching the source again.
    pub fn advance(&mut self) -> (Option<char>, CharClass) {
        let Some(ch) = self.current else {
            return (None, CharClass::EndOfInput);
        };

        self.pos.offset += 1;
        if ch == '\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += 1;
        }

        self.current = self.source.next_char();
        self.class = CharClass::of(self.current);
        (self.current, self.class)
    }

    /// Advances until the held character is not whitespace
    pub fn skip_whitespace(&mut self) {
        while self.current.is_some_and(is_blank) {
            self.advance();
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
