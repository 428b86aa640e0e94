pub mod ast;
pub mod error;
pub mod numbering;
pub mod parser;
pub mod printer;
pub mod tree;

use ast::Program;
use chumsky::{Parser, Stream};
use error::ParseError;
use lexer::token::Token;
use lexer::Span;

/// Parse already-lexed tokens (with byte spans) into a numbered program
pub fn parse_tokens(source_len: usize, tokens: Vec<(Token, Span)>) -> Result<Program, Vec<ParseError>> {
    let eoi = source_len..source_len;
    let mut program = parser::parser().parse(Stream::from_iter(eoi, tokens.into_iter()))?;
    numbering::assign_node_ids(&mut program);
    Ok(program)
}

/// Lex and parse a source string into a numbered program
pub fn parse_source(source: &str) -> Result<Program, Vec<ParseError>> {
    parse_tokens(source.len(), lexer::lex_spanned(source))
}

#[cfg(test)]
mod tests;
