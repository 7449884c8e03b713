//! littlec-lexer - Tokenizer for the Little C language
//!
//! This crate turns a stream of characters into a sequence of tokens:
//! identifiers, keywords, numeric literals, operators and punctuation.
//!
//! # Features
//!
//! - One character of lookahead, no pushback
//! - Negative numeric literals (`-3`, `-2.5`) recognized by the lexer
//! - Bounded lexemes (99 characters by default) with a diagnostic on overflow
//! - Streaming input through any `std::io::Read`
//!
//! # Example
//!
//! ```rust
//! use littlec_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::from_text("while (i < 10) { i = i + 1; }");
//! let tokens = lexer.tokenize();
//!
//! assert_eq!(tokens[0].kind, TokenKind::While);
//! for token in &tokens {
//!     println!("{} {}", token.kind.name(), token.lexeme);
//! }
//! ```

pub mod config;
pub mod cursor;
pub mod keywords;
pub mod lexeme;
pub mod lexer;
pub mod source;
pub mod token;

pub use config::{LexerConfig, MinusPolicy};
pub use cursor::CharClass;
pub use keywords::keyword_lookup;
pub use lexeme::MAX_LEXEME_LEN;
pub use lexer::{tokenize, Lexer, EOF_LEXEME};
pub use source::{CharSource, ReadSource, StrSource};
pub use token::{Token, TokenKind};
