// Operator Precedence Tests
//
// Precedence, low to high: || && (== !=) (< > <= >=) .. (+ -) (* / %) prefix postfix

use super::parse_expr;
use crate::ast::{BinaryOp, ExprKind, UnaryOp};

fn top_op(src: &str) -> BinaryOp {
    match parse_expr(src).unwrap().kind {
        ExprKind::Binary { op, .. } => op,
        other => panic!("Expected binary at top of {}, got {:?}", src, other),
    }
}

#[test]
fn test_mul_over_add() {
    // 1 + 2 * 3 should be 1 + (2 * 3)
    match parse_expr("1 + 2 * 3").unwrap().kind {
        ExprKind::Binary { op: BinaryOp::Add, rhs, .. } => {
            assert!(matches!(rhs.kind, ExprKind::Binary { op: BinaryOp::Mul, .. }));
        }
        _ => panic!("Expected Add at top"),
    }
}

#[test]
fn test_rem_over_sub() {
    assert_eq!(top_op("a - b % c"), BinaryOp::Sub);
}

#[test]
fn test_add_over_range() {
    assert_eq!(top_op("a + 1..b"), BinaryOp::Range);
}

#[test]
fn test_range_over_comparison() {
    assert_eq!(top_op("a..b < c"), BinaryOp::Lt);
}

#[test]
fn test_comparison_over_equality() {
    assert_eq!(top_op("a < b == c > d"), BinaryOp::Eq);
}

#[test]
fn test_equality_over_and() {
    assert_eq!(top_op("a == b && c != d"), BinaryOp::LogicalAnd);
}

#[test]
fn test_and_over_or() {
    assert_eq!(top_op("a || b && c"), BinaryOp::LogicalOr);
}

#[test]
fn test_left_associative_sub() {
    // a - b - c is (a - b) - c
    match parse_expr("a - b - c").unwrap().kind {
        ExprKind::Binary { op: BinaryOp::Sub, lhs, rhs } => {
            assert!(matches!(lhs.kind, ExprKind::Binary { op: BinaryOp::Sub, .. }));
            assert_eq!(rhs.kind, ExprKind::Identifier("c".to_string()));
        }
        _ => panic!("Expected Sub"),
    }
}

#[test]
fn test_compare_to_against_zero_shape() {
    // The method call is the left operand of the comparison
    match parse_expr("a.compareTo(b) < 0").unwrap().kind {
        ExprKind::Binary { op: BinaryOp::Lt, lhs, .. } => {
            assert!(matches!(lhs.kind, ExprKind::MethodCall { .. }));
        }
        _ => panic!("Expected Lt"),
    }
}

#[test]
fn test_not_binds_tighter_than_member_call_receiver() {
    // !a.equals(b) is !(a.equals(b))
    match parse_expr("!a.equals(b)").unwrap().kind {
        ExprKind::Unary { op: UnaryOp::Not, expr } => {
            assert!(matches!(expr.kind, ExprKind::MethodCall { .. }));
        }
        _ => panic!("Expected not"),
    }
}

#[test]
fn test_unary_over_mul() {
    match parse_expr("-a * b").unwrap().kind {
        ExprKind::Binary { op: BinaryOp::Mul, lhs, .. } => {
            assert!(matches!(lhs.kind, ExprKind::Unary { op: UnaryOp::Negate, .. }));
        }
        _ => panic!("Expected Mul"),
    }
}
