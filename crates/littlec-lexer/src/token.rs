//! Tokens for the Little C language
//!
//! Defines every token kind the lexer can produce, together with the
//! stable numeric codes and symbolic names used when printing them.

use littlec_error::span::Span;
use std::fmt;

/// All token kinds for Little C
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // =========================================
    // Literals
    // =========================================
    /// Integer literal: `42`
    IntegerLiteral,
    /// Identifier: `count`, `x1`
    Identifier,
    /// Float literal: `3.14`, `.5`, `7.`
    FloatLiteral,
    /// Negative integer literal: `-3`
    NegativeIntegerLiteral,
    /// Negative float literal: `-2.5`
    NegativeFloatLiteral,

    // =========================================
    // Operators
    // =========================================
    /// `=`
    Assign,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `==`
    Equal,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `<=`
    LessOrEqual,
    /// `>=`
    GreaterOrEqual,
    /// `!=`
    NotEqual,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `%`
    Modulo,

    // =========================================
    // Punctuation
    // =========================================
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `;`
    Semicolon,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `"`
    Quote,
    /// `.`
    Period,

    // =========================================
    // Keywords
    // =========================================
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `float`
    Float,
    /// `while`
    While,
    /// `void`
    Void,
    /// `main`
    Main,

    // =========================================
    // Sentinels
    // =========================================
    /// End of input, always the last token
    EndOfInput,
    /// Unrecognized character or malformed operator
    Unknown,
}

impl TokenKind {
    /// Every kind, in code order
    pub const ALL: [TokenKind; 39] = [
        TokenKind::IntegerLiteral,
        TokenKind::Identifier,
        TokenKind::FloatLiteral,
        TokenKind::NegativeIntegerLiteral,
        TokenKind::NegativeFloatLiteral,
        TokenKind::Assign,
        TokenKind::Add,
        TokenKind::Subtract,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::Equal,
        TokenKind::LessThan,
        TokenKind::GreaterThan,
        TokenKind::LessOrEqual,
        TokenKind::GreaterOrEqual,
        TokenKind::NotEqual,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Modulo,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::Semicolon,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::OpenBrace,
        TokenKind::CloseBrace,
        TokenKind::Colon,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::For,
        TokenKind::Float,
        TokenKind::Comma,
        TokenKind::Quote,
        TokenKind::Period,
        TokenKind::While,
        TokenKind::Void,
        TokenKind::Main,
        TokenKind::EndOfInput,
        TokenKind::Unknown,
    ];

    /// Stable numeric code of the kind
    pub fn code(&self) -> i32 {
        match self {
            TokenKind::IntegerLiteral => 10,
            TokenKind::Identifier => 11,
            TokenKind::FloatLiteral => 12,
            TokenKind::NegativeIntegerLiteral => 13,
            TokenKind::NegativeFloatLiteral => 14,
            TokenKind::Assign => 20,
            TokenKind::Add => 21,
            TokenKind::Subtract => 22,
            TokenKind::Multiply => 23,
            TokenKind::Divide => 24,
            TokenKind::Equal => 25,
            TokenKind::LessThan => 26,
            TokenKind::GreaterThan => 27,
            TokenKind::LessOrEqual => 28,
            TokenKind::GreaterOrEqual => 29,
            TokenKind::NotEqual => 30,
            TokenKind::And => 31,
            TokenKind::Or => 32,
            TokenKind::Modulo => 33,
            TokenKind::LeftParen => 40,
            TokenKind::RightParen => 41,
            TokenKind::Semicolon => 42,
            TokenKind::LeftBracket => 43,
            TokenKind::RightBracket => 44,
            TokenKind::OpenBrace => 45,
            TokenKind::CloseBrace => 46,
            TokenKind::Colon => 47,
            TokenKind::If => 50,
            TokenKind::Else => 51,
            TokenKind::For => 52,
            TokenKind::Float => 53,
            TokenKind::Comma => 60,
            TokenKind::Quote => 61,
            TokenKind::Period => 62,
            TokenKind::While => 63,
            TokenKind::Void => 90,
            TokenKind::Main => 91,
            TokenKind::EndOfInput => -1,
            TokenKind::Unknown => 99,
        }
    }

    /// Looks a kind up by its numeric code
    pub fn from_code(code: i32) -> Option<TokenKind> {
        TokenKind::ALL.iter().copied().find(|k| k.code() == code)
    }

    /// Symbolic name used in token listings
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::IntegerLiteral => "INT_LIT",
            TokenKind::Identifier => "IDENT",
            TokenKind::FloatLiteral => "FLOAT_LIT",
            TokenKind::NegativeIntegerLiteral => "NEG_INT_LIT",
            TokenKind::NegativeFloatLiteral => "NEG_FLOAT_LIT",
            TokenKind::Assign => "ASSIGN_OP",
            TokenKind::Add => "ADD_OP",
            TokenKind::Subtract => "SUB_OP",
            TokenKind::Multiply => "MULT_OP",
            TokenKind::Divide => "DIV_OP",
            TokenKind::Equal => "EQUAL_OP",
            TokenKind::LessThan => "LESSTHAN_OP",
            TokenKind::GreaterThan => "GREATERTHAN_OP",
            TokenKind::LessOrEqual => "LTEQ_OP",
            TokenKind::GreaterOrEqual => "GTEQ_OP",
            TokenKind::NotEqual => "NOTEQ_OP",
            TokenKind::And => "AND_OP",
            TokenKind::Or => "OR_OP",
            TokenKind::Modulo => "MOD_OP",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Semicolon => "SCOLON_TERM",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::OpenBrace => "OPEN_BRACKET",
            TokenKind::CloseBrace => "CLOSE_BRACKET",
            TokenKind::Colon => "COLON",
            TokenKind::If => "IF_KEY",
            TokenKind::Else => "ELSE_KEY",
            TokenKind::For => "FOR_KEY",
            TokenKind::Float => "FLOAT_KEY",
            TokenKind::Comma => "COMMA",
            TokenKind::Quote => "QUOTE",
            TokenKind::Period => "PERIOD",
            TokenKind::While => "WHILE_KEY",
            TokenKind::Void => "VOID_KEY",
            TokenKind::Main => "MAIN_KEY",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// Returns true if the kind is a reserved word
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::For
                | TokenKind::Float
                | TokenKind::While
                | TokenKind::Void
                | TokenKind::Main
        )
    }

    /// Returns true if the kind is a numeric literal
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::FloatLiteral
                | TokenKind::NegativeIntegerLiteral
                | TokenKind::NegativeFloatLiteral
        )
    }

    /// Returns true if a token of this kind can end an operand,
    /// so that a following `-` reads as a binary operator
    pub fn is_operand(&self) -> bool {
        self.is_literal()
            || matches!(
                self,
                TokenKind::Identifier | TokenKind::RightParen | TokenKind::RightBracket
            )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Assign => write!(f, "="),
            TokenKind::Add => write!(f, "+"),
            TokenKind::Subtract => write!(f, "-"),
            TokenKind::Multiply => write!(f, "*"),
            TokenKind::Divide => write!(f, "/"),
            TokenKind::Equal => write!(f, "=="),
            TokenKind::LessThan => write!(f, "<"),
            TokenKind::GreaterThan => write!(f, ">"),
            TokenKind::LessOrEqual => write!(f, "<="),
            TokenKind::GreaterOrEqual => write!(f, ">="),
            TokenKind::NotEqual => write!(f, "!="),
            TokenKind::And => write!(f, "&&"),
            TokenKind::Or => write!(f, "||"),
            TokenKind::Modulo => write!(f, "%"),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::LeftBracket => write!(f, "["),
            TokenKind::RightBracket => write!(f, "]"),
            TokenKind::OpenBrace => write!(f, "{{"),
            TokenKind::CloseBrace => write!(f, "}}"),
            TokenKind::Colon => write!(f, ":"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Quote => write!(f, "\""),
            TokenKind::Period => write!(f, "."),
            TokenKind::If => write!(f, "if"),
            TokenKind::Else => write!(f, "else"),
            TokenKind::For => write!(f, "for"),
            TokenKind::Float => write!(f, "float"),
            TokenKind::While => write!(f, "while"),
            TokenKind::Void => write!(f, "void"),
            TokenKind::Main => write!(f, "main"),
            other => write!(f, "{}", other.name()),
        }
    }
}

/// A token with its source text and location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token kind
    pub kind: TokenKind,
    /// Exact source text matched (`EOF` for the end-of-input token)
    pub lexeme: String,
    /// Location in the input
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn is_unknown(&self) -> bool {
        self.kind == TokenKind::Unknown
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) at {}:{}",
            self.kind.name(),
            self.lexeme,
            self.span.start.line,
            self.span.start.column
        )
    }
}
