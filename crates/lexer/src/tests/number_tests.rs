// Number Literal Tests
//
// Integers and floats keep their exact source text.

use crate::token::Token;
use logos::Logos;

// Helper function to tokenize and assert single token
fn assert_single_token(input: &str, expected: Token) {
    let mut lexer = Token::lexer(input);
    let token = lexer.next();
    assert_eq!(
        token,
        Some(Ok(expected)),
        "Failed to match token for input: {}",
        input
    );
    assert_eq!(lexer.next(), None, "Expected single token, found more");
}

#[test]
fn test_int_zero() {
    assert_single_token("0", Token::Int("0".to_string()));
}

#[test]
fn test_int_keeps_leading_zeros() {
    // "00" is not the text "0", which matters for the compare-to-zero idiom
    assert_single_token("00", Token::Int("00".to_string()));
}

#[test]
fn test_int_large() {
    assert_single_token("123456789012345678901234567890", Token::Int("123456789012345678901234567890".to_string()));
}

#[test]
fn test_float_zero() {
    assert_single_token("0.0", Token::Float("0.0".to_string()));
}

#[test]
fn test_float_regular() {
    assert_single_token("3.14", Token::Float("3.14".to_string()));
}

#[test]
fn test_negative_number_is_two_tokens() {
    let tokens: Vec<_> = Token::lexer("-1").collect();
    assert_eq!(tokens, vec![Ok(Token::Minus), Ok(Token::Int("1".to_string()))]);
}
