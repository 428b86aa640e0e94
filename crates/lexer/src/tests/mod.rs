// Test module for lexer
//
// Unit tests for the convop lexer, organized by category.

mod edge_cases;
mod number_tests;
