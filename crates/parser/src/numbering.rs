/// Node Numbering
///
/// Gives every expression a unique `NodeId`, in pre-order.
/// This must run AFTER parsing: the parser leaves `NodeId::DUMMY` on every node.

use crate::ast::{Expr, NodeId, Program};

/// Number all expressions of the program and return how many ids were used
pub fn assign_node_ids(program: &mut Program) -> u32 {
    let mut next = 0;
    for stmt in &mut program.statements {
        for expr in stmt.exprs_mut() {
            number_expr(expr, &mut next);
        }
    }
    next
}

fn number_expr(expr: &mut Expr, next: &mut u32) {
    expr.id = NodeId(*next);
    *next += 1;
    for child in expr.children_mut() {
        number_expr(child, next);
    }
}
