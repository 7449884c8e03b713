//! Lexer for Little C
//!
//! A hand-written state machine: the class of the first significant
//! character picks the recognizer, which consumes a maximal run of
//! characters and decides the token kind using one character of
//! lookahead held by the cursor.

use crate::config::{LexerConfig, MinusPolicy};
use crate::cursor::{CharClass, Cursor};
use crate::keywords::keyword_lookup;
use crate::lexeme::Lexeme;
use crate::source::{CharSource, StrSource};
use crate::token::{Token, TokenKind};
use littlec_error::{
    span::{Position, Span},
    Diagnostic, Diagnostics, ErrorCode,
};
use std::iter::FusedIterator;

/// Lexeme text of the end-of-input token
pub const EOF_LEXEME: &str = "EOF";

/// The Little C lexer. One instance scans one input.
pub struct Lexer<S> {
    cursor: Cursor<S>,
    /// Text of the token under construction
    lexeme: Lexeme,
    config: LexerConfig,
    /// Kind of the most recently produced token
    last_kind: Option<TokenKind>,
    /// Tokens produced so far
    emitted: usize,
    /// Source file ID stamped on spans
    file_id: u32,
    diagnostics: Diagnostics,
}

impl<'src> Lexer<StrSource<'src>> {
    /// Creates a lexer over an in-memory string
    pub fn from_text(source: &'src str) -> Self {
        Self::new(StrSource::new(source))
    }
}

impl<S: CharSource> Lexer<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: S, config: LexerConfig) -> Self {
        tracing::debug!(
            max_lexeme_len = config.max_lexeme_len,
            minus = ?config.minus,
            "starting scan"
        );

        Self {
            cursor: Cursor::new(source),
            lexeme: Lexeme::new(config.max_lexeme_len),
            config,
            last_kind: None,
            emitted: 0,
            file_id: 0,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Sets the file ID used in spans
    pub fn with_file_id(mut self, file_id: u32) -> Self {
        self.file_id = file_id;
        self
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Kind of the most recently produced token
    pub fn last_kind(&self) -> Option<TokenKind> {
        self.last_kind
    }

    /// Returns the accumulated diagnostics
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Consumes and returns the diagnostics
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn source_mut(&mut self) -> &mut S {
        self.cursor.source_mut()
    }

    /// Reads the next token.
    ///
    /// After the end-of-input token has been produced, every further
    /// call produces it again.
    pub fn next_token(&mut self) -> Token {
        self.lexeme.clear();
        self.cursor.skip_whitespace();

        let start = self.cursor.position();

        let kind = match (self.cursor.current(), self.cursor.class()) {
            (_, CharClass::Letter) => self.read_identifier(),
            (_, CharClass::Digit) => self.read_number(false),
            (Some(ch), CharClass::Other) => self.read_other(ch),
            _ => return self.end_of_input(start),
        };

        self.finish(kind, start)
    }

    /// Tokenizes the whole input, up to and including the end-of-input token
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        tokens
    }

    /// Adds the held character to the lexeme and moves past it
    fn bump(&mut self) {
        if let Some(ch) = self.cursor.current() {
            self.lexeme.push(ch);
            self.cursor.advance();
        }
    }

    fn eat_digits(&mut self) {
        while self.cursor.class() == CharClass::Digit {
            self.bump();
        }
    }

    /// Letter, then letters and digits; keywords are reclassified.
    /// A truncated lexeme is never a keyword.
    fn read_identifier(&mut self) -> TokenKind {
        while matches!(self.cursor.class(), CharClass::Letter | CharClass::Digit) {
            self.bump();
        }

        if self.lexeme.is_truncated() {
            return TokenKind::Identifier;
        }
        keyword_lookup(self.lexeme.as_str()).unwrap_or(TokenKind::Identifier)
    }

    /// Digit run with an optional `.` and fractional digit run.
    /// A lone `-` may already be in the lexeme.
    fn read_number(&mut self, negative: bool) -> TokenKind {
        self.eat_digits();

        let is_float = self.cursor.is('.');
        if is_float {
            self.bump();
            self.eat_digits();
        }

        match (negative, is_float) {
            (false, false) => TokenKind::IntegerLiteral,
            (false, true) => TokenKind::FloatLiteral,
            (true, false) => TokenKind::NegativeIntegerLiteral,
            (true, true) => TokenKind::NegativeFloatLiteral,
        }
    }

    fn read_other(&mut self, ch: char) -> TokenKind {
        match ch {
            '-' => self.read_minus(),
            '.' => self.read_leading_dot(),
            _ => self.read_operator(ch),
        }
    }

    fn read_minus(&mut self) -> TokenKind {
        self.bump();

        if self.config.minus == MinusPolicy::Contextual {
            let after_operand = self.last_kind.is_some_and(|k| k.is_operand());
            let starts_number = self.cursor.class() == CharClass::Digit || self.cursor.is('.');
            if after_operand || !starts_number {
                return TokenKind::Subtract;
            }
        }

        self.read_number(true)
    }

    /// `.5` is a float; a `.` with no digits after it is a period
    fn read_leading_dot(&mut self) -> TokenKind {
        self.bump();

        if self.cursor.class() == CharClass::Digit {
            self.eat_digits();
            TokenKind::FloatLiteral
        } else {
            TokenKind::Period
        }
    }

    /// Operators and punctuation
    fn read_operator(&mut self, ch: char) -> TokenKind {
        self.bump();

        match ch {
            '>' => self.pair('=', TokenKind::GreaterOrEqual, TokenKind::GreaterThan),
            '<' => self.pair('=', TokenKind::LessOrEqual, TokenKind::LessThan),
            '=' => self.pair('=', TokenKind::Equal, TokenKind::Assign),
            '!' => self.pair('=', TokenKind::NotEqual, TokenKind::Unknown),
            '&' => self.pair('&', TokenKind::And, TokenKind::Unknown),
            '|' => self.pair('|', TokenKind::Or, TokenKind::Unknown),
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '+' => TokenKind::Add,
            '*' => TokenKind::Multiply,
            '/' => TokenKind::Divide,
            '%' => TokenKind::Modulo,
            ';' => TokenKind::Semicolon,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ',' => TokenKind::Comma,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            '"' => TokenKind::Quote,
            ':' => TokenKind::Colon,
            _ => TokenKind::Unknown,
        }
    }

    /// Two-character operator if the held character is `second`.
    /// A non-matching lookahead stays in the cursor for the next token.
    fn pair(&mut self, second: char, matched: TokenKind, single: TokenKind) -> TokenKind {
        if self.cursor.is(second) {
            self.bump();
            matched
        } else {
            single
        }
    }

    fn end_of_input(&mut self, start: Position) -> Token {
        if self.last_kind != Some(TokenKind::EndOfInput) {
            self.emitted += 1;
            tracing::debug!(tokens = self.emitted, "end of input");
        }
        self.last_kind = Some(TokenKind::EndOfInput);

        Token::new(
            TokenKind::EndOfInput,
            EOF_LEXEME,
            Span::point(start, self.file_id),
        )
    }

    fn finish(&mut self, kind: TokenKind, start: Position) -> Token {
        let span = Span::new(start, self.cursor.position(), self.file_id);

        if self.lexeme.is_truncated() {
            self.report_truncation(span);
        }

        let token = Token::new(kind, self.lexeme.as_str(), span);
        tracing::trace!(
            code = kind.code(),
            name = kind.name(),
            lexeme = %token.lexeme,
            line = start.line,
            column = start.column,
            "token"
        );

        self.last_kind = Some(kind);
        self.emitted += 1;
        token
    }

    fn report_truncation(&mut self, span: Span) {
        let max = self.lexeme.max_len();
        let dropped = self.lexeme.dropped();

        tracing::warn!(
            lexeme = self.lexeme.as_str(),
            dropped,
            line = span.start.line,
            column = span.start.column,
            "lexeme too long"
        );

        self.diagnostics.push(
            Diagnostic::error(format!("lexeme too long: {}", self.lexeme.as_str()))
                .with_code(ErrorCode::LEXEME_TOO_LONG)
                .with_label(span, format!("only the first {} characters are kept", max))
                .with_note(format!("{} character(s) dropped", dropped)),
        );
    }
}

impl<S: CharSource> Iterator for Lexer<S> {
    type Item = Token;

    /// Yields tokens up to and including the end-of-input token
    fn next(&mut self) -> Option<Token> {
        if self.last_kind == Some(TokenKind::EndOfInput) {
            return None;
        }
        Some(self.next_token())
    }
}

impl<S: CharSource> FusedIterator for Lexer<S> {}

/// Tokenizes source text and returns the tokens with any diagnostics
pub fn tokenize(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut lexer = Lexer::from_text(source);
    let tokens = lexer.tokenize();
    (tokens, lexer.take_diagnostics())
}
