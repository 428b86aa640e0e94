// crates/parser/src/ast.rs

use std::ops::Range;

/// Byte range in the source text
pub type Span = Range<usize>;

/// Identity of an expression node inside one program.
///
/// Ids are handed out by `numbering::assign_node_ids` after parsing; two
/// nodes are "the same node" exactly when their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Placeholder carried by freshly parsed nodes until numbering runs
    pub const DUMMY: NodeId = NodeId(u32::MAX);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Integer or float, kept as written
    Number(String),
    /// String literal including its quotes
    String(String),
    Bool(bool),
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Range,
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
    LogicalAnd,
    LogicalOr,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Range => "..",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
        }
    }

    /// Binding strength; higher binds tighter. All binary levels are left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::LogicalOr => 1,
            BinaryOp::LogicalAnd => 2,
            BinaryOp::Eq | BinaryOp::NotEq => 3,
            BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq => 4,
            BinaryOp::Range => 5,
            BinaryOp::Add | BinaryOp::Sub => 6,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Not,
    Negate,
    Plus,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Negate => "-",
            UnaryOp::Plus => "+",
        }
    }
}

/// A name together with where it was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

/// Type reference as written in type-argument lists and annotations (ex: `Map<K, V>`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub name: String,
    pub args: Vec<TypeRef>,
}

/// Call argument, positional (`x`) or named (`other = x`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: Option<Ident>,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub id: NodeId,
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    Literal(Literal),

    Identifier(String),

    /// `super` qualifier; only meaningful as a receiver
    Super,

    /// Grouping parentheses kept from the source
    Paren(Box<Expr>),

    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },

    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    FieldAccess {
        target: Box<Expr>,
        field: Ident,
        safe: bool,
    },

    /// `receiver.method<T>(args)`; the member-access and the call are one node
    MethodCall {
        receiver: Box<Expr>,
        method: Ident,
        type_args: Option<Vec<TypeRef>>,
        args: Vec<Argument>,
        safe: bool,
    },

    Call {
        func: Box<Expr>,
        args: Vec<Argument>,
    },
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self {
            id: NodeId::DUMMY,
            kind,
            span,
        }
    }

    /// Direct sub-expressions, left to right
    pub fn children(&self) -> Vec<&Expr> {
        match &self.kind {
            ExprKind::Literal(_) | ExprKind::Identifier(_) | ExprKind::Super => Vec::new(),
            ExprKind::Paren(inner) => vec![&**inner],
            ExprKind::Unary { expr, .. } => vec![&**expr],
            ExprKind::Binary { lhs, rhs, .. } => vec![&**lhs, &**rhs],
            ExprKind::FieldAccess { target, .. } => vec![&**target],
            ExprKind::MethodCall { receiver, args, .. } => std::iter::once(&**receiver)
                .chain(args.iter().map(|a| &a.value))
                .collect(),
            ExprKind::Call { func, args } => std::iter::once(&**func)
                .chain(args.iter().map(|a| &a.value))
                .collect(),
        }
    }

    pub fn children_mut(&mut self) -> Vec<&mut Expr> {
        match &mut self.kind {
            ExprKind::Literal(_) | ExprKind::Identifier(_) | ExprKind::Super => Vec::new(),
            ExprKind::Paren(inner) => vec![&mut **inner],
            ExprKind::Unary { expr, .. } => vec![&mut **expr],
            ExprKind::Binary { lhs, rhs, .. } => vec![&mut **lhs, &mut **rhs],
            ExprKind::FieldAccess { target, .. } => vec![&mut **target],
            ExprKind::MethodCall { receiver, args, .. } => std::iter::once(&mut **receiver)
                .chain(args.iter_mut().map(|a| &mut a.value))
                .collect(),
            ExprKind::Call { func, args } => std::iter::once(&mut **func)
                .chain(args.iter_mut().map(|a| &mut a.value))
                .collect(),
        }
    }

    /// Strips any number of grouping parentheses
    pub fn deparenthesize(&self) -> &Expr {
        let mut expr = self;
        while let ExprKind::Paren(inner) = &expr.kind {
            expr = &**inner;
        }
        expr
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub type_hint: Option<TypeRef>,
    pub default: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: Option<TypeRef>,
    pub body: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StmtKind {
    VariableDecl {
        name: String,
        type_hint: Option<TypeRef>,
        value: Expr,
        is_mutable: bool,
    },

    FunctionDef(FunctionDef),

    ClassDef {
        name: String,
    },

    Expr(Expr),
}

impl Stmt {
    /// Top-level expressions owned by this statement
    pub fn exprs(&self) -> Vec<&Expr> {
        match &self.kind {
            StmtKind::VariableDecl { value, .. } => vec![value],
            StmtKind::FunctionDef(def) => def
                .params
                .iter()
                .filter_map(|p| p.default.as_ref())
                .chain(def.body.as_ref())
                .collect(),
            StmtKind::ClassDef { .. } => Vec::new(),
            StmtKind::Expr(expr) => vec![expr],
        }
    }

    pub fn exprs_mut(&mut self) -> Vec<&mut Expr> {
        match &mut self.kind {
            StmtKind::VariableDecl { value, .. } => vec![value],
            StmtKind::FunctionDef(def) => def
                .params
                .iter_mut()
                .filter_map(|p| p.default.as_mut())
                .chain(def.body.as_mut())
                .collect(),
            StmtKind::ClassDef { .. } => Vec::new(),
            StmtKind::Expr(expr) => vec![expr],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}
