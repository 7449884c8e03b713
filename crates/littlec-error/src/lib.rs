//! littlec-error - Diagnostics system for the Little C front end
//!
//! This crate provides source locations and structured diagnostics,
//! rendered in the style of the Rust compiler.
//!
//! # Example
//!
//! ```rust
//! use littlec_error::{Diagnostic, ErrorCode, SourceCache, DiagnosticRenderer};
//! use littlec_error::span::{Span, Position};
//!
//! let mut cache = SourceCache::new();
//! let file_id = cache.add("example.lc", "float x;");
//!
//! let span = Span::new(
//!     Position::new(1, 7, 6),
//!     Position::new(1, 8, 7),
//!     file_id,
//! );
//!
//! let diagnostic = Diagnostic::error("lexeme too long")
//!     .with_code(ErrorCode::LEXEME_TOO_LONG)
//!     .with_label(span, "truncated here");
//!
//! let renderer = DiagnosticRenderer::new(&cache);
//! println!("{}", renderer.render(&diagnostic));
//! ```

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticRenderer, ErrorCode, Label, Level, SourceCache, SourceFile,
};
pub use span::{Position, Span};

/// Diagnostics accumulated while scanning
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.level == Level::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Renders all diagnostics
    pub fn render(&self, renderer: &DiagnosticRenderer<'_>) -> String {
        self.items
            .iter()
            .map(|d| renderer.render(d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
