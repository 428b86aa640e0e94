// Call resolution
//
// The engine never resolves names itself. It asks a `ResolutionOracle` which
// declaration a call binds to and where each argument lands.
// `DeclarationOracle` is the shape-based oracle used by the command line:
// it knows the `fun` and `class` declarations of one program plus a prelude
// of built-in convention members.

use crate::operators;
use parser::ast::{Argument, Expr, ExprKind, FunctionDef, Ident, NodeId, Program, StmtKind, TypeRef};
use std::collections::HashSet;
use thiserror::Error;
use tracing::trace;

/// Borrowed view of a `receiver.method<T>(args)` node
#[derive(Debug, Clone, Copy)]
pub struct CallNode<'a> {
    pub expr: &'a Expr,
    pub receiver: &'a Expr,
    pub method: &'a Ident,
    pub type_args: Option<&'a [TypeRef]>,
    pub args: &'a [Argument],
    pub safe: bool,
}

impl<'a> CallNode<'a> {
    /// `None` unless `expr` is a method call
    pub fn from_expr(expr: &'a Expr) -> Option<Self> {
        match &expr.kind {
            ExprKind::MethodCall {
                receiver,
                method,
                type_args,
                args,
                safe,
            } => Some(CallNode {
                expr,
                receiver,
                method,
                type_args: type_args.as_deref(),
                args,
                safe: *safe,
            }),
            _ => None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.expr.id
    }

    pub fn name(&self) -> &'a str {
        &self.method.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStatus {
    /// Exactly one declaration accepts the call
    Success,
    /// Several declarations accept the call equally well
    Ambiguous,
    /// The only declaration by that name was chosen, but the arguments do not fit it
    Partial,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCall {
    pub status: ResolutionStatus,
    /// Index of the chosen declaration in the oracle, when one was chosen
    pub declaration: Option<usize>,
    /// Parameter position each argument is bound to, by argument position
    pub arguments: Vec<Option<usize>>,
}

impl ResolvedCall {
    /// Successful with every argument bound
    pub fn is_really_success(&self) -> bool {
        self.status == ResolutionStatus::Success && self.arguments.iter().all(Option::is_some)
    }

    pub fn parameter_for(&self, argument: usize) -> Option<usize> {
        self.arguments.get(argument).copied().flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unresolved reference '{0}'")]
    UnresolvedReference(String),

    #[error("none of the {candidates} declarations of '{name}' accept these arguments")]
    NoApplicableCandidate { name: String, candidates: usize },
}

/// Resolution service consumed by the applicability checker
pub trait ResolutionOracle {
    fn resolve(&self, call: &CallNode<'_>) -> Result<ResolvedCall, ResolveError>;

    /// Whether a bare name denotes a type rather than a value
    fn is_type_name(&self, _name: &str) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSig {
    pub name: String,
    pub has_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub params: Vec<ParamSig>,
    pub builtin: bool,
}

impl Signature {
    /// User declaration with required parameters
    pub fn new(name: &str, params: &[&str]) -> Self {
        Signature {
            name: name.to_string(),
            params: params
                .iter()
                .map(|p| ParamSig {
                    name: p.to_string(),
                    has_default: false,
                })
                .collect(),
            builtin: false,
        }
    }

    pub fn from_function(def: &FunctionDef) -> Self {
        Signature {
            name: def.name.clone(),
            params: def
                .params
                .iter()
                .map(|p| ParamSig {
                    name: p.name.clone(),
                    has_default: p.default.is_some(),
                })
                .collect(),
            builtin: false,
        }
    }

    /// Binds arguments to parameters: positional ones in order, named ones by name.
    /// Returns the binding per argument and whether the call fits this signature.
    fn bind(&self, args: &[Argument]) -> (Vec<Option<usize>>, bool) {
        let mut bound = vec![false; self.params.len()];
        let mut mapping = vec![None; args.len()];
        let mut fits = true;
        let mut seen_named = false;

        for (i, arg) in args.iter().enumerate() {
            let parameter = match &arg.name {
                Some(name) => {
                    seen_named = true;
                    self.params.iter().position(|p| p.name == name.name)
                }
                // Positional arguments may not follow named ones
                None if seen_named => None,
                None => (i < self.params.len()).then_some(i),
            };

            match parameter {
                Some(p) if !bound[p] => {
                    bound[p] = true;
                    mapping[i] = Some(p);
                }
                _ => fits = false,
            }
        }

        let missing = self
            .params
            .iter()
            .zip(&bound)
            .any(|(param, bound)| !bound && !param.has_default);

        (mapping, fits && !missing)
    }
}

/// Oracle backed by the declarations of a program.
///
/// User declarations of a name shadow the built-in convention members of
/// that name. Parameter types are not checked.
#[derive(Debug, Clone)]
pub struct DeclarationOracle {
    signatures: Vec<Signature>,
    type_names: HashSet<String>,
}

impl Default for DeclarationOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationOracle {
    /// Oracle with only the prelude: one `name(other)` member per convention name
    pub fn new() -> Self {
        let signatures = operators::convention_names()
            .map(|name| Signature {
                builtin: true,
                ..Signature::new(name, &["other"])
            })
            .collect();

        DeclarationOracle {
            signatures,
            type_names: HashSet::new(),
        }
    }

    pub fn from_program(program: &Program) -> Self {
        let mut oracle = Self::new();
        for stmt in &program.statements {
            match &stmt.kind {
                StmtKind::FunctionDef(def) => oracle.declare(Signature::from_function(def)),
                StmtKind::ClassDef { name } => oracle.declare_type(name),
                StmtKind::VariableDecl { .. } | StmtKind::Expr(_) => {}
            }
        }
        oracle
    }

    pub fn declare(&mut self, signature: Signature) {
        self.signatures.push(signature);
    }

    pub fn declare_type(&mut self, name: &str) {
        self.type_names.insert(name.to_string());
    }

    fn candidates(&self, name: &str) -> Vec<(usize, &Signature)> {
        let named = self.signatures.iter().enumerate().filter(|(_, s)| s.name == name);
        let user: Vec<_> = named.clone().filter(|(_, s)| !s.builtin).collect();
        if user.is_empty() { named.collect() } else { user }
    }
}

impl ResolutionOracle for DeclarationOracle {
    fn resolve(&self, call: &CallNode<'_>) -> Result<ResolvedCall, ResolveError> {
        let name = call.name();
        let candidates = self.candidates(name);
        if candidates.is_empty() {
            return Err(ResolveError::UnresolvedReference(name.to_string()));
        }

        let bindings: Vec<_> = candidates
            .iter()
            .map(|(index, signature)| (*index, signature.bind(call.args)))
            .collect();

        let mut applicable = bindings.iter().filter(|(_, (_, fits))| *fits);
        let first = applicable.next();
        let second = applicable.next();

        trace!(
            callee = name,
            candidates = candidates.len(),
            applicable = first.is_some() as usize + second.is_some() as usize,
            "resolved call"
        );

        match (first, second) {
            (Some((index, (mapping, _))), None) => Ok(ResolvedCall {
                status: ResolutionStatus::Success,
                declaration: Some(*index),
                arguments: mapping.clone(),
            }),
            (Some(_), Some(_)) => Ok(ResolvedCall {
                status: ResolutionStatus::Ambiguous,
                declaration: None,
                arguments: vec![None; call.args.len()],
            }),
            (None, _) => match bindings.as_slice() {
                [(index, (mapping, _))] => Ok(ResolvedCall {
                    status: ResolutionStatus::Partial,
                    declaration: Some(*index),
                    arguments: mapping.clone(),
                }),
                _ => Err(ResolveError::NoApplicableCandidate {
                    name: name.to_string(),
                    candidates: candidates.len(),
                }),
            },
        }
    }

    fn is_type_name(&self, name: &str) -> bool {
        self.type_names.contains(name)
    }
}
