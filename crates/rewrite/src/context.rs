// Context Analyzer
//
// Idioms that move the rewrite target above the call itself:
//   !a.equals(b)          ->  a != b       (target: the negation)
//   a.compareTo(b) < 0    ->  a < b        (target: the comparison)
//   0 < a.compareTo(b)    ->  a > b

use crate::operators;
use parser::ast::{BinaryOp, Expr, ExprKind, Literal, NodeId, UnaryOp};
use parser::tree::SyntaxIndex;

/// Which idiom decided the rewrite target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idiom {
    /// The call itself is replaced
    Plain,
    NegatedEquality,
    CompareToZero,
}

const ZERO: &str = "0";

/// Whether `expr` is written as exactly `0`
fn is_zero(expr: &Expr) -> bool {
    matches!(&expr.kind, ExprKind::Literal(Literal::Number(text)) if text == ZERO)
}

/// The `!` node wrapping `call`, looking through redundant parentheses.
pub fn negated_equality(index: &SyntaxIndex<'_>, call: NodeId) -> Option<NodeId> {
    let outer = index
        .ancestors(call)
        .find(|expr| !matches!(expr.kind, ExprKind::Paren(_)))?;

    match &outer.kind {
        ExprKind::Unary {
            op: UnaryOp::Not,
            expr,
        } if expr.deparenthesize().id == call => Some(outer.id),
        _ => None,
    }
}

/// The comparison against zero that `call` is the non-zero side of, with the
/// operator the call stands for once the zero is dropped.
pub fn compare_to_zero(index: &SyntaxIndex<'_>, call: NodeId) -> Option<(NodeId, BinaryOp)> {
    let parent = index.parent(call)?;
    let ExprKind::Binary { op, lhs, rhs } = &parent.kind else {
        return None;
    };

    if !operators::is_comparison(*op) {
        return None;
    }

    // Exactly one side may read "0"; the other side must be the call
    let call_is_left = match (is_zero(lhs), is_zero(rhs)) {
        (false, true) => true,
        (true, false) => false,
        _ => return None,
    };

    let value_side = if call_is_left { lhs } else { rhs };
    if value_side.id != call {
        return None;
    }

    let op = if call_is_left { Some(*op) } else { operators::inverted(*op) }?;
    Some((parent.id, op))
}
