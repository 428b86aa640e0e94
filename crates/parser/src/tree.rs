/// Tree Navigation
///
/// Ownership of the syntax tree runs strictly downward (`Box` and `Vec`
/// children). Upward queries go through `SyntaxIndex`, which records parent
/// links as plain id lookups built by one walk over a numbered program.

use crate::ast::{Expr, NodeId, Program};
use std::collections::HashMap;

pub struct SyntaxIndex<'a> {
    nodes: HashMap<NodeId, &'a Expr>,
    parents: HashMap<NodeId, NodeId>,
    preorder: Vec<NodeId>,
}

impl<'a> SyntaxIndex<'a> {
    /// Index a program whose ids were assigned by `assign_node_ids`
    pub fn build(program: &'a Program) -> Self {
        let mut index = SyntaxIndex {
            nodes: HashMap::new(),
            parents: HashMap::new(),
            preorder: Vec::new(),
        };

        for stmt in &program.statements {
            for expr in stmt.exprs() {
                index.visit(expr, None);
            }
        }

        index
    }

    fn visit(&mut self, expr: &'a Expr, parent: Option<NodeId>) {
        debug_assert_ne!(expr.id, NodeId::DUMMY, "program was not numbered");

        self.nodes.insert(expr.id, expr);
        self.preorder.push(expr.id);
        if let Some(parent) = parent {
            self.parents.insert(expr.id, parent);
        }

        for child in expr.children() {
            self.visit(child, Some(expr.id));
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&'a Expr> {
        self.nodes.get(&id).copied()
    }

    /// Enclosing expression, or `None` when the node sits directly under a statement
    pub fn parent(&self, id: NodeId) -> Option<&'a Expr> {
        self.parents.get(&id).and_then(|parent| self.get(*parent))
    }

    /// Enclosing expressions, innermost first
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &'a Expr> + '_ {
        std::iter::successors(self.parent(id), move |expr| self.parent(expr.id))
    }

    /// All expressions in source order (parents before children)
    pub fn preorder(&self) -> impl Iterator<Item = &'a Expr> + '_ {
        self.preorder.iter().filter_map(move |id| self.get(*id))
    }
}

/// Returns a copy of `program` where the expression `target` is replaced by
/// `replacement`. Everything else, ancestors included, is left as it was.
/// `None` when no expression has that id.
pub fn replace_expr(program: &Program, target: NodeId, replacement: Expr) -> Option<Program> {
    let mut result = program.clone();
    let mut pending = Some(replacement);

    for stmt in &mut result.statements {
        for expr in stmt.exprs_mut() {
            if replace_in(expr, target, &mut pending) {
                return Some(result);
            }
        }
    }

    None
}

fn replace_in(expr: &mut Expr, target: NodeId, pending: &mut Option<Expr>) -> bool {
    if expr.id == target {
        if let Some(replacement) = pending.take() {
            *expr = replacement;
            return true;
        }
        return false;
    }

    expr.children_mut()
        .into_iter()
        .any(|child| replace_in(child, target, pending))
}
