// Applicability Checker
//
// Decides whether a convention call can become a binary operator without
// changing meaning, and which node the operator replaces.

use crate::context::{self, Idiom};
use crate::operators::{self, Convention};
use crate::resolve::{CallNode, ResolutionOracle};
use parser::ast::{BinaryOp, Expr, ExprKind, NodeId, Span};
use parser::tree::SyntaxIndex;
use tracing::{debug, trace};

/// An approved rewrite: what to build and where it goes
#[derive(Debug, Clone, Copy)]
pub struct Applicability<'a> {
    /// The convention call
    pub call: NodeId,
    /// The node being replaced: the call, its negation or its zero comparison
    pub target: NodeId,
    pub op: BinaryOp,
    pub idiom: Idiom,
    pub receiver: &'a Expr,
    pub argument: &'a Expr,
    /// Span of the method name, where hosts anchor their suggestion
    pub callee_span: &'a Span,
}

/// Checks one candidate node. `None` means no rewrite is available; the reason
/// is logged at debug level.
pub fn check<'a>(
    index: &SyntaxIndex<'a>,
    candidate: NodeId,
    oracle: &dyn ResolutionOracle,
) -> Option<Applicability<'a>> {
    let call = index.get(candidate).and_then(CallNode::from_expr)?;
    let name = call.name();
    trace!(id = call.id().0, callee = name, "checking candidate");

    let Some(convention) = operators::convention_for(name) else {
        trace!(callee = name, "not a convention name");
        return None;
    };

    if call.safe {
        debug!(callee = name, "declined: safe call");
        return None;
    }

    let resolved = match oracle.resolve(&call) {
        Ok(resolved) => resolved,
        Err(err) => {
            debug!(callee = name, error = %err, "declined: resolution failed");
            return None;
        }
    };
    if !resolved.is_really_success() {
        debug!(callee = name, status = ?resolved.status, "declined: resolution not successful");
        return None;
    }

    if call.type_args.is_some() {
        debug!(callee = name, "declined: explicit type arguments");
        return None;
    }

    let [argument] = call.args else {
        debug!(callee = name, count = call.args.len(), "declined: expected exactly one argument");
        return None;
    };
    if resolved.parameter_for(0) != Some(0) {
        debug!(callee = name, "declined: argument not bound to the first parameter");
        return None;
    }

    if !has_value(call.receiver, oracle) {
        debug!(callee = name, "declined: receiver is not a value");
        return None;
    }

    let (target, op, idiom) = match convention {
        Convention::Equals => match context::negated_equality(index, candidate) {
            Some(negation) => (negation, BinaryOp::NotEq, Idiom::NegatedEquality),
            None => (candidate, BinaryOp::Eq, Idiom::Plain),
        },
        Convention::CompareTo => match context::compare_to_zero(index, candidate) {
            Some((comparison, op)) => (comparison, op, Idiom::CompareToZero),
            None => {
                debug!(callee = name, "declined: no comparison against zero");
                return None;
            }
        },
        Convention::Binary(op) => (candidate, op, Idiom::Plain),
    };

    Some(Applicability {
        call: candidate,
        target,
        op,
        idiom,
        receiver: call.receiver,
        argument: &argument.value,
        callee_span: &call.method.span,
    })
}

/// Whether `receiver` evaluates to a value that can stand alone as an operand
fn has_value(receiver: &Expr, oracle: &dyn ResolutionOracle) -> bool {
    match &receiver.deparenthesize().kind {
        ExprKind::Super => false,
        ExprKind::Identifier(name) => !oracle.is_type_name(name),
        ExprKind::FieldAccess { field, .. } => !oracle.is_type_name(&field.name),
        _ => true,
    }
}
