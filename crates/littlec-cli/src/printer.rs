//! Token listings written by the driver loop

use littlec_lexer::Token;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Writes input bytes 0x80..=0xFF as `\xNN`.
///
/// The file source turns every byte into one `char`, so these are raw
/// bytes rather than Latin-1 text.
fn escape_lexeme(lexeme: &str) -> Cow<'_, str> {
    if lexeme.is_ascii() {
        return Cow::Borrowed(lexeme);
    }

    let mut out = String::with_capacity(lexeme.len() * 2);
    for ch in lexeme.chars() {
        match u32::from(ch) {
            byte @ 0x80..=0xFF => {
                let _ = write!(out, "\\x{:02X}", byte);
            }
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Consumes tokens as the lexer produces them
pub trait TokenSink {
    fn accept(&mut self, token: &Token) -> io::Result<()>;

    /// Called once after the end-of-input token
    fn finish(&mut self) -> io::Result<()>;
}

/// `Next token is: 11 (       IDENT), next lexeme is x`
pub struct TextPrinter<W: Write> {
    out: W,
}

impl<W: Write> TextPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> TokenSink for TextPrinter<W> {
    fn accept(&mut self, token: &Token) -> io::Result<()> {
        writeln!(
            self.out,
            "Next token is: {:2} ({:>12}), next lexeme is {}",
            token.kind.code(),
            token.kind.name(),
            escape_lexeme(&token.lexeme)
        )
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    code: i32,
    name: &'static str,
    lexeme: Cow<'a, str>,
    line: u32,
    column: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            code: token.kind.code(),
            name: token.kind.name(),
            lexeme: escape_lexeme(&token.lexeme),
            line: token.span.start.line,
            column: token.span.start.column,
        }
    }
}

/// One JSON object per line
pub struct JsonPrinter<W: Write> {
    out: W,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> TokenSink for JsonPrinter<W> {
    fn accept(&mut self, token: &Token) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, &TokenRecord::from(token))?;
        writeln!(self.out)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use littlec_error::span::Span;
    use littlec_lexer::{Lexer, TokenKind};

    fn render(mut sink: impl TokenSink, source: &str) {
        for token in Lexer::from_text(source) {
            sink.accept(&token).unwrap();
        }
        sink.finish().unwrap();
    }

    #[test]
    fn test_text_listing() {
        let mut out = Vec::new();
        render(TextPrinter::new(&mut out), "x >= 10");

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Next token is: 11 (       IDENT), next lexeme is x",
                "Next token is: 29 (     GTEQ_OP), next lexeme is >=",
                "Next token is: 10 (     INT_LIT), next lexeme is 10",
                "Next token is: -1 (         EOF), next lexeme is EOF",
            ]
        );
    }

    #[test]
    fn test_json_listing() {
        let mut out = Vec::new();
        render(JsonPrinter::new(&mut out), "a\n\"");

        let text = String::from_utf8(out).unwrap();
        let values: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(values.len(), 3);
        assert_eq!(values[0]["name"], "IDENT");
        assert_eq!(values[1]["code"], 61);
        assert_eq!(values[1]["lexeme"], "\"");
        assert_eq!(values[1]["line"], 2);
        assert_eq!(values[1]["column"], 1);
        assert_eq!(values[2]["lexeme"], "EOF");
    }

    #[test]
    fn test_high_bytes_are_escaped() {
        assert_eq!(escape_lexeme("abc"), "abc");
        assert_eq!(escape_lexeme("\u{C3}"), "\\xC3");
        assert_eq!(escape_lexeme("\u{A9}"), "\\xA9");

        let token = Token::new(TokenKind::Unknown, "\u{C3}", Span::default());
        let mut out = Vec::new();
        let mut printer = TextPrinter::new(&mut out);
        printer.accept(&token).unwrap();
        printer.finish().unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Next token is: 99 (     UNKNOWN), next lexeme is \\xC3\n"
        );
    }
}
