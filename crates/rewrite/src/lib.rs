// Convention-call rewriting
//
// Turns `a.equals(b)`, `a.plus(b)`, `a.compareTo(b) < 0` and friends into
// binary operators when the call resolves cleanly and the receiver is a value.

pub mod applicability;
pub mod context;
pub mod operators;
pub mod resolve;
pub mod rewriter;
pub mod splice;

pub use applicability::Applicability;
pub use context::Idiom;
pub use resolve::{DeclarationOracle, ResolutionOracle, ResolveError, ResolvedCall};
pub use rewriter::RewriteResult;
pub use splice::{rewrite_source, ReparseError};

use parser::ast::{ExprKind, NodeId, Program, Span};
use parser::tree::SyntaxIndex;
use tracing::{debug, info};

/// Check one candidate and build its rewrite
pub fn try_rewrite(
    candidate: NodeId,
    index: &SyntaxIndex<'_>,
    oracle: &dyn ResolutionOracle,
) -> Option<RewriteResult> {
    let approved = applicability::check(index, candidate, oracle)?;
    rewriter::rewrite(index, &approved)
}

/// Every rewrite available in `program` right now, in source order. Nothing is applied.
///
/// Rewrites found here are independent of each other only when their targets
/// do not nest; use `rewrite_all` to apply them.
pub fn find_rewrites(program: &Program, oracle: &dyn ResolutionOracle) -> Vec<RewriteResult> {
    let index = SyntaxIndex::build(program);
    rewrites_in(&index, oracle).collect()
}

/// Rewrites of the indexed program, outer targets before the calls they contain
pub(crate) fn rewrites_in<'i>(
    index: &'i SyntaxIndex<'_>,
    oracle: &'i dyn ResolutionOracle,
) -> impl Iterator<Item = RewriteResult> + 'i {
    index
        .preorder()
        .filter(|expr| matches!(expr.kind, ExprKind::MethodCall { .. }))
        .filter_map(move |expr| try_rewrite(expr.id, index, oracle))
}

/// A rewrite that `rewrite_all` or `rewrite_source` performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedRewrite {
    /// Text of the replaced node before the rewrite
    pub before: String,
    /// Text of the operator expression
    pub after: String,
    /// Where the call's method name was written, in the text the rewrite was found in
    pub callee_span: Span,
    pub idiom: Idiom,
}

/// Applies rewrites to the tree one at a time until none is left. Printing
/// the result loses comments; `rewrite_source` keeps them.
///
/// Each step removes one method call from the tree, so the loop ends after
/// at most as many steps as the program has calls.
pub fn rewrite_all(mut program: Program, oracle: &dyn ResolutionOracle) -> (Program, Vec<AppliedRewrite>) {
    let mut applied = Vec::new();

    loop {
        let next = {
            let index = SyntaxIndex::build(&program);
            let first = rewrites_in(&index, oracle).next();
            first.and_then(|result| {
                let before = index.get(result.target)?.to_string();
                Some((before, result))
            })
        };

        let Some((before, result)) = next else {
            break;
        };

        let Some(rewritten) = result.apply(&program) else {
            debug!(node = result.target.0, "rewrite target vanished");
            break;
        };

        let after = result.replacement.to_string();
        info!(before = %before, after = %after, "applied rewrite");
        applied.push(AppliedRewrite {
            before,
            after,
            callee_span: result.callee_span,
            idiom: result.idiom,
        });
        program = rewritten;
    }

    (program, applied)
}

#[cfg(test)]
mod tests;
