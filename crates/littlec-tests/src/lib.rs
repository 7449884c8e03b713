//! Integration tests for the Little C tokenizer
//!
//! This crate drives whole programs through the public lexer API:
//! Source → CharSource → Lexer → tokens + diagnostics

use littlec_error::Diagnostics;
use littlec_lexer::{CharSource, Lexer, LexerConfig, StrSource, Token, TokenKind};

/// Result of scanning a Little C source
#[derive(Debug)]
pub struct ScanResult {
    /// Every token, ending with the end-of-input token
    pub tokens: Vec<Token>,
    /// Diagnostics produced while scanning
    pub diagnostics: Diagnostics,
}

impl ScanResult {
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    pub fn lexemes(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.lexeme.as_str()).collect()
    }
}

/// Scans any character source to exhaustion
pub fn scan_source<S: CharSource>(source: S, config: LexerConfig) -> ScanResult {
    let mut lexer = Lexer::with_config(source, config);
    let tokens = lexer.tokenize();

    ScanResult {
        tokens,
        diagnostics: lexer.take_diagnostics(),
    }
}

/// Scans source text with the default configuration
pub fn scan(source: &str) -> ScanResult {
    scan_source(StrSource::new(source), LexerConfig::default())
}

/// Asserts the `(kind, lexeme)` pairs produced for `source`, end-of-input excluded
pub fn assert_tokens(source: &str, expected: &[(TokenKind, &str)]) {
    let result = scan(source);
    let actual: Vec<(TokenKind, &str)> = result
        .tokens
        .iter()
        .filter(|t| !t.is_eof())
        .map(|t| (t.kind, t.lexeme.as_str()))
        .collect();

    if actual != expected {
        panic!(
            "Unexpected tokens for {:?}\n\nexpected: {:?}\n  actual: {:?}",
            source, expected, actual
        );
    }
}

/// Asserts that `source` scans without any diagnostic
pub fn assert_scans_cleanly(source: &str) {
    let result = scan(source);
    if !result.diagnostics.is_empty() {
        panic!(
            "Expected no diagnostics, got:\n{:?}",
            result.diagnostics
        );
    }
}
