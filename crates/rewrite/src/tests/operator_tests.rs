// Operator Table Tests

use crate::operators::{
    convention_for, convention_names, inverted, is_comparison, name_for, token_for, Convention,
};
use parser::ast::BinaryOp;

#[test]
fn test_arithmetic_names_have_fixed_tokens() {
    assert_eq!(token_for("plus"), Some(BinaryOp::Add));
    assert_eq!(token_for("minus"), Some(BinaryOp::Sub));
    assert_eq!(token_for("times"), Some(BinaryOp::Mul));
    assert_eq!(token_for("div"), Some(BinaryOp::Div));
    assert_eq!(token_for("rem"), Some(BinaryOp::Rem));
    assert_eq!(token_for("rangeTo"), Some(BinaryOp::Range));
}

#[test]
fn test_equals_defaults_to_eq() {
    assert_eq!(convention_for("equals"), Some(Convention::Equals));
    assert_eq!(token_for("equals"), Some(BinaryOp::Eq));
}

#[test]
fn test_compare_to_has_no_fixed_token() {
    assert_eq!(convention_for("compareTo"), Some(Convention::CompareTo));
    assert_eq!(token_for("compareTo"), None);
}

#[test]
fn test_unknown_names() {
    assert_eq!(convention_for("equal"), None);
    assert_eq!(convention_for("Plus"), None);
    assert_eq!(convention_for(""), None);
    assert_eq!(token_for("toString"), None);
}

#[test]
fn test_name_for_is_inverse_of_token_for() {
    for name in convention_names() {
        if let Some(op) = token_for(name) {
            assert_eq!(name_for(op), Some(name));
        }
    }
}

#[test]
fn test_name_for_comparisons_and_logic() {
    assert_eq!(name_for(BinaryOp::NotEq), Some("equals"));
    assert_eq!(name_for(BinaryOp::Lt), Some("compareTo"));
    assert_eq!(name_for(BinaryOp::GtEq), Some("compareTo"));
    assert_eq!(name_for(BinaryOp::LogicalAnd), None);
    assert_eq!(name_for(BinaryOp::LogicalOr), None);
}

#[test]
fn test_comparison_subset() {
    let comparisons: Vec<BinaryOp> = [
        BinaryOp::Add,
        BinaryOp::Eq,
        BinaryOp::NotEq,
        BinaryOp::Lt,
        BinaryOp::Gt,
        BinaryOp::LtEq,
        BinaryOp::GtEq,
        BinaryOp::LogicalAnd,
    ]
    .into_iter()
    .filter(|op| is_comparison(*op))
    .collect();

    assert_eq!(comparisons, vec![BinaryOp::Lt, BinaryOp::Gt, BinaryOp::LtEq, BinaryOp::GtEq]);
}

#[test]
fn test_inversion() {
    assert_eq!(inverted(BinaryOp::Lt), Some(BinaryOp::Gt));
    assert_eq!(inverted(BinaryOp::Gt), Some(BinaryOp::Lt));
    assert_eq!(inverted(BinaryOp::LtEq), Some(BinaryOp::GtEq));
    assert_eq!(inverted(BinaryOp::GtEq), Some(BinaryOp::LtEq));
    assert_eq!(inverted(BinaryOp::Eq), None);
    assert_eq!(inverted(BinaryOp::Add), None);
}

#[test]
fn test_inversion_is_an_involution() {
    for op in [BinaryOp::Lt, BinaryOp::Gt, BinaryOp::LtEq, BinaryOp::GtEq] {
        assert_eq!(inverted(op).and_then(inverted), Some(op));
    }
}

#[test]
fn test_table_has_eight_names() {
    assert_eq!(convention_names().count(), 8);
}
