// Edge Case and Malformed Input Tests

use crate::token::Token;
use crate::{lex, lex_spanned};
use logos::Logos;

// Helper function to tokenize input and return all tokens
fn tokenize(input: &str) -> Vec<Result<Token, ()>> {
    Token::lexer(input).collect()
}

// ==================== EMPTY INPUT TESTS ====================

#[test]
fn test_empty_input() {
    assert_eq!(tokenize("").len(), 0, "Empty input should produce no tokens");
}

#[test]
fn test_mixed_whitespace_only() {
    assert_eq!(tokenize("  \t\n \r\n  ").len(), 0);
}

// ==================== COMMENT TESTS ====================

#[test]
fn test_comment_only() {
    assert_eq!(tokenize("// just a comment").len(), 0);
}

#[test]
fn test_comment_after_code() {
    let tokens = tokenize("a.plus(b) // sum");
    assert_eq!(tokens.len(), 6);
}

#[test]
fn test_comment_ends_at_newline() {
    let tokens = tokenize("// first\nx");
    assert_eq!(tokens, vec![Ok(Token::Identifier("x".to_string()))]);
}

// ==================== STRING TESTS ====================

#[test]
fn test_string_keeps_quotes() {
    assert_eq!(tokenize(r#""hi""#), vec![Ok(Token::String(r#""hi""#.to_string()))]);
}

#[test]
fn test_string_with_escapes() {
    let src = r#""a\"b\n""#;
    assert_eq!(tokenize(src), vec![Ok(Token::String(src.to_string()))]);
}

// ==================== INVALID INPUT TESTS ====================

#[test]
fn test_lex_drops_invalid_characters() {
    assert_eq!(
        lex("a # b"),
        vec![Token::Identifier("a".to_string()), Token::Identifier("b".to_string())]
    );
}

#[test]
fn test_lex_spanned_marks_invalid_characters() {
    let tokens = lex_spanned("a # b");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1], (Token::Error, 2..3));
}

#[test]
fn test_lex_spanned_byte_offsets() {
    let tokens = lex_spanned("x.equals(y)");
    let spans: Vec<_> = tokens.iter().map(|(_, s)| s.clone()).collect();
    assert_eq!(spans, vec![0..1, 1..2, 2..8, 8..9, 9..10, 10..11]);
}
