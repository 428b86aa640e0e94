// Rewriter
//
// Builds the operator node for an approved call. The result is an
// instruction ("replace `target` with `replacement`"); nothing is mutated.

use crate::applicability::Applicability;
use crate::context::Idiom;
use crate::operators;
use parser::ast::{BinaryOp, Expr, ExprKind, NodeId, Program, Span};
use parser::tree::{self, SyntaxIndex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    /// Node to replace
    pub target: NodeId,
    /// Operator expression taking its place; carries the target's id and span
    pub replacement: Expr,
    pub op: BinaryOp,
    pub idiom: Idiom,
    pub callee_span: Span,
}

impl RewriteResult {
    /// The program with `target` replaced. `None` if the program has no such node.
    pub fn apply(&self, program: &Program) -> Option<Program> {
        tree::replace_expr(program, self.target, self.replacement.clone())
    }

    /// Source range the rewrite covers
    pub fn target_span(&self) -> &Span {
        &self.replacement.span
    }

    /// Convention name of the call being replaced
    pub fn callee(&self) -> &'static str {
        operators::name_for(self.op).unwrap_or("call")
    }

    pub fn description(&self) -> String {
        format!("Replace with '{}' operator", self.op.symbol())
    }
}

pub fn rewrite(index: &SyntaxIndex<'_>, approved: &Applicability<'_>) -> Option<RewriteResult> {
    let target = index.get(approved.target)?;

    let replacement = Expr {
        id: target.id,
        kind: ExprKind::Binary {
            op: approved.op,
            lhs: Box::new(approved.receiver.clone()),
            rhs: Box::new(approved.argument.clone()),
        },
        span: target.span.clone(),
    };

    Some(RewriteResult {
        target: target.id,
        replacement,
        op: approved.op,
        idiom: approved.idiom,
        callee_span: approved.callee_span.clone(),
    })
}
