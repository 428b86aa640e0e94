// Test module for parser
//
// Unit tests for the convop parser, tree index and printer.
// Tests are organized by category.

mod precedence_tests;

use crate::ast::{Expr, Program, StmtKind};

// Parse a whole program, panicking with the errors on failure
pub(crate) fn parse_program(input: &str) -> Program {
    crate::parse_source(input).unwrap_or_else(|e| panic!("Parse error for {:?}: {:?}", input, e))
}

// Parse source and extract the first statement's expression
pub(crate) fn parse_expr(input: &str) -> Result<Expr, String> {
    let program = crate::parse_source(input).map_err(|e| format!("Parse error: {:?}", e))?;

    match program.statements.first().map(|stmt| &stmt.kind) {
        Some(StmtKind::Expr(expr)) => Ok(expr.clone()),
        Some(_) => Err("First statement is not an expression".to_string()),
        None => Err("No statements in program".to_string()),
    }
}
