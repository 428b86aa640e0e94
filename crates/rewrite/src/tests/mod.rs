// Rewrite Test Modules
//
// Sources are parsed with the real front end; the oracle is built from the
// declarations in the same source unless a test needs a custom one.

mod operator_tests;

use crate::resolve::DeclarationOracle;
use crate::rewriter::RewriteResult;
use parser::ast::{Expr, ExprKind, Program};
use parser::tree::SyntaxIndex;

pub(crate) fn parse(src: &str) -> Program {
    parser::parse_source(src).unwrap_or_else(|e| panic!("Parse error for {:?}: {:?}", src, e))
}

// First call to `name`, in source order
pub(crate) fn find_call<'a>(index: &SyntaxIndex<'a>, name: &str) -> &'a Expr {
    index
        .preorder()
        .find(|e| matches!(&e.kind, ExprKind::MethodCall { method, .. } if method.name == name))
        .unwrap_or_else(|| panic!("no call to {}", name))
}

// Rewrite offered for the first call to `name`
pub(crate) fn suggest(src: &str, name: &str) -> Option<RewriteResult> {
    let program = parse(src);
    let oracle = DeclarationOracle::from_program(&program);
    let index = SyntaxIndex::build(&program);
    let call = find_call(&index, name);
    crate::try_rewrite(call.id, &index, &oracle)
}

// Text of the replacement for the first call to `name`
pub(crate) fn rewritten(src: &str, name: &str) -> Option<String> {
    suggest(src, name).map(|result| result.replacement.to_string())
}
