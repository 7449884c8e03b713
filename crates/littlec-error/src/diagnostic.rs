//! Diagnostic - rustc-style error messages
//!
//! A diagnostic carries:
//! - Error code (EL001, ...)
//! - Location of the offending lexeme
//! - Source snippet, when the input text is cached
//! - Notes and help lines

use crate::span::Span;
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Error - the output is incomplete or altered
    Error,
    /// Warning - the output is intact
    Warning,
    /// Note - additional information
    Note,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
        }
    }

    /// ANSI escape used when rendering in color
    pub fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "\x1b[1;31m",   // Bold Red
            Level::Warning => "\x1b[1;33m", // Bold Yellow
            Level::Note => "\x1b[1;36m",    // Bold Cyan
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A label pointing at a region of the input
#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// Structured error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode {
    /// Category (L = Lexer)
    pub category: char,
    /// Error number
    pub number: u16,
}

impl ErrorCode {
    pub const fn new(category: char, number: u16) -> Self {
        Self { category, number }
    }

    // Lexer errors
    pub const LEXEME_TOO_LONG: Self = Self::new('L', 1);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}{:03}", self.category, self.number)
    }
}

/// A complete diagnostic
#[derive(Debug, Clone, Error)]
#[error("{level}: {message}")]
pub struct Diagnostic {
    /// Severity level
    pub level: Level,
    /// Error code (optional)
    pub code: Option<ErrorCode>,
    /// Main message
    pub message: String,
    /// Labels pointing at the input
    pub labels: Vec<Label>,
    /// Additional notes
    pub notes: Vec<String>,
    /// Help lines
    pub help: Vec<String>,
}

impl Diagnostic {
    fn with_level(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Creates a new error
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(Level::Error, message)
    }

    /// Creates a new warning
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(Level::Warning, message)
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }
}

/// Input files known to the renderer
#[derive(Debug, Default)]
pub struct SourceCache {
    files: Vec<SourceFile>,
}

#[derive(Debug)]
pub struct SourceFile {
    pub name: String,
    /// Full text, absent for inputs that were streamed rather than loaded
    source: Option<String>,
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            name: name.into(),
            source: Some(source),
            line_starts,
        }
    }

    /// A file known only by name
    pub fn streamed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: None,
            line_starts: Vec::new(),
        }
    }

    /// Returns a line of text (1-indexed), without its terminator
    pub fn get_line(&self, line: u32) -> Option<&str> {
        let source = self.source.as_deref()?;
        let line_idx = line.checked_sub(1)? as usize;
        let start = *self.line_starts.get(line_idx)?;
        let end = self
            .line_starts
            .get(line_idx + 1)
            .map(|&e| e.saturating_sub(1))
            .unwrap_or(source.len());

        source.get(start..end).map(|l| l.trim_end_matches('\r'))
    }
}

impl SourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with its text and returns its ID
    pub fn add(&mut self, name: impl Into<String>, source: impl Into<String>) -> u32 {
        self.push(SourceFile::new(name, source))
    }

    /// Adds a file whose text is not kept and returns its ID
    pub fn add_streamed(&mut self, name: impl Into<String>) -> u32 {
        self.push(SourceFile::streamed(name))
    }

    fn push(&mut self, file: SourceFile) -> u32 {
        let id = self.files.len() as u32;
        self.files.push(file);
        id
    }

    pub fn get(&self, id: u32) -> Option<&SourceFile> {
        self.files.get(id as usize)
    }
}

/// Renders diagnostics for display
pub struct DiagnosticRenderer<'a> {
    cache: &'a SourceCache,
    use_colors: bool,
}

impl<'a> DiagnosticRenderer<'a> {
    pub fn new(cache: &'a SourceCache) -> Self {
        Self {
            cache,
            use_colors: true,
        }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    fn paint(&self, code: &'static str) -> &'static str {
        if self.use_colors {
            code
        } else {
            ""
        }
    }

    /// Renders the diagnostic as a string
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();

        let reset = self.paint("\x1b[0m");
        let bold = self.paint("\x1b[1m");
        let blue = self.paint("\x1b[1;34m");
        let color = if self.use_colors {
            diagnostic.level.color_code()
        } else {
            ""
        };

        // error[EL001]: message
        output.push_str(color);
        output.push_str(diagnostic.level.as_str());
        if let Some(code) = &diagnostic.code {
            output.push_str(&format!("[{}]", code));
        }
        output.push_str(reset);
        output.push_str(&format!("{}: {}{}\n", bold, diagnostic.message, reset));

        for label in &diagnostic.labels {
            let Some(file) = self.cache.get(label.span.file_id) else {
                continue;
            };

            output.push_str(&format!(
                " {}-->{} {}:{}:{}\n",
                blue, reset, file.name, label.span.start.line, label.span.start.column
            ));

            match file.get_line(label.span.start.line) {
                Some(line_content) => {
                    let line_num = label.span.start.line;
                    let padding = " ".repeat(line_num.to_string().len());

                    output.push_str(&format!(" {} {}|{}\n", padding, blue, reset));
                    output.push_str(&format!(
                        " {}{}{} | {}\n",
                        blue, line_num, reset, line_content
                    ));

                    let col_start = label.span.start.column as usize;
                    let underline_len = if label.span.start.line == label.span.end.line {
                        label.span.len().max(1)
                    } else {
                        line_content.len().saturating_sub(col_start - 1).max(1)
                    };
                    let spaces = " ".repeat(col_start.saturating_sub(1));

                    output.push_str(&format!(
                        " {} {}|{} {}{}{}{} {}\n",
                        padding,
                        blue,
                        reset,
                        spaces,
                        color,
                        "^".repeat(underline_len),
                        reset,
                        label.message
                    ));
                }
                None => {
                    output.push_str(&format!("   {}={} {}\n", blue, reset, label.message));
                }
            }
        }

        for note in &diagnostic.notes {
            output.push_str(&format!("   = {}note{}: {}\n", bold, reset, note));
        }

        let green = self.paint("\x1b[1;32m");
        for help in &diagnostic.help {
            output.push_str(&format!("   = {}help{}: {}\n", green, reset, help));
        }

        output
    }
}
