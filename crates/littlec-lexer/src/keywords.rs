//! Reserved words of Little C

use crate::token::TokenKind;

/// Reserved words and the kinds they map to
pub const KEYWORDS: [(&str, TokenKind); 7] = [
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("while", TokenKind::While),
    ("main", TokenKind::Main),
    ("void", TokenKind::Void),
    ("float", TokenKind::Float),
];

/// Converts a word to a keyword kind, if it is one.
///
/// Matching is exact and case-sensitive: `If` is an identifier.
pub fn keyword_lookup(word: &str) -> Option<TokenKind> {
    match word {
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "for" => Some(TokenKind::For),
        "while" => Some(TokenKind::While),
        "main" => Some(TokenKind::Main),
        "void" => Some(TokenKind::Void),
        "float" => Some(TokenKind::Float),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_and_lookup_agree() {
        for (word, kind) in KEYWORDS {
            assert_eq!(keyword_lookup(word), Some(kind));
            assert!(kind.is_keyword());
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(keyword_lookup("If"), None);
        assert_eq!(keyword_lookup("WHILE"), None);
    }

    #[test]
    fn test_no_prefix_matches() {
        assert_eq!(keyword_lookup("iff"), None);
        assert_eq!(keyword_lookup("fo"), None);
        assert_eq!(keyword_lookup("mainly"), None);
        assert_eq!(keyword_lookup(""), None);
    }
}
