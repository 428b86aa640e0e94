pub mod token;

use logos::Logos;
use std::ops::Range;
use token::Token;

/// Byte range of a token in the source
pub type Span = Range<usize>;

/// Tokenize a source string and return a Vec of tokens
pub fn lex(source: &str) -> Vec<Token> {
    Token::lexer(source)
        .filter_map(|t| t.ok())
        .collect()
}

/// Tokenize with byte spans. Rejected input becomes `Token::Error` at its span
/// so the parser can point at it.
pub fn lex_spanned(source: &str) -> Vec<(Token, Span)> {
    Token::lexer(source)
        .spanned()
        .map(|(t, span)| (t.unwrap_or(Token::Error), span))
        .collect()
}

#[cfg(test)]
mod tests;
