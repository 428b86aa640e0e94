// Source printer
//
// Turns trees back into convop source. Parentheses are inserted wherever the
// tree shape would otherwise be re-parsed differently, so a synthesized node
// such as `Binary(a, *, Binary(b, +, c))` prints as `a * (b + c)`.

use crate::ast::{
    Argument, BinaryOp, Expr, ExprKind, FunctionDef, Literal, NodeId, Param, Program, Stmt,
    StmtKind, TypeRef,
};
use std::fmt::{self, Write};

// Binding strength of non-binary forms, above every BinaryOp level
const PREFIX: u8 = 8;
const POSTFIX: u8 = 9;

/// Source text of an expression
pub fn print_expr(expr: &Expr) -> String {
    expr.to_string()
}

/// Source text of a whole program, one statement per line
pub fn print_program(program: &Program) -> String {
    program.to_string()
}

/// Binding strength of an expression as printed
pub fn precedence(expr: &Expr) -> u8 {
    match &expr.kind {
        ExprKind::Binary { op, .. } => op.precedence(),
        ExprKind::Unary { .. } => PREFIX,
        _ => POSTFIX,
    }
}

/// Minimum binding strength of the left and right operands of `op`
fn operand_levels(op: BinaryOp) -> (u8, u8) {
    let level = op.precedence();
    match op {
        // Comparisons do not chain: `a.b < c > (d)` re-parses as a call with type arguments
        BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq => (level + 1, level + 1),
        // Left-associative: an equal-level right operand needs parentheses
        _ => (level, level + 1),
    }
}

/// Weakest binding the child `child` of `parent` may have and still print
/// without parentheses. 0 for positions that are already delimited (arguments, groups).
pub fn required_precedence(parent: &Expr, child: NodeId) -> u8 {
    match &parent.kind {
        ExprKind::Binary { op, lhs, .. } => {
            let (left, right) = operand_levels(*op);
            if lhs.id == child { left } else { right }
        }
        ExprKind::Unary { .. } => PREFIX,
        ExprKind::FieldAccess { target: first, .. }
        | ExprKind::MethodCall { receiver: first, .. }
        | ExprKind::Call { func: first, .. }
            if first.id == child =>
        {
            POSTFIX
        }
        _ => 0,
    }
}

/// Writes `expr`, parenthesized when it binds looser than `min`
fn write_operand(f: &mut impl Write, expr: &Expr, min: u8) -> fmt::Result {
    if precedence(expr) < min {
        f.write_char('(')?;
        write_expr(f, expr)?;
        f.write_char(')')
    } else {
        write_expr(f, expr)
    }
}

fn write_expr(f: &mut impl Write, expr: &Expr) -> fmt::Result {
    match &expr.kind {
        ExprKind::Literal(literal) => match literal {
            Literal::Number(text) | Literal::String(text) => f.write_str(text),
            Literal::Bool(value) => write!(f, "{}", value),
            Literal::Null => f.write_str("null"),
        },
        ExprKind::Identifier(name) => f.write_str(name),
        ExprKind::Super => f.write_str("super"),
        ExprKind::Paren(inner) => {
            f.write_char('(')?;
            write_expr(f, inner)?;
            f.write_char(')')
        }
        ExprKind::Unary { op, expr } => {
            f.write_str(op.symbol())?;
            write_operand(f, expr, PREFIX)
        }
        ExprKind::Binary { op, lhs, rhs } => {
            let (left, right) = operand_levels(*op);
            write_operand(f, lhs, left)?;
            write!(f, " {} ", op.symbol())?;
            write_operand(f, rhs, right)
        }
        ExprKind::FieldAccess {
            target,
            field,
            safe,
        } => {
            write_operand(f, target, POSTFIX)?;
            f.write_str(if *safe { "?." } else { "." })?;
            f.write_str(&field.name)
        }
        ExprKind::MethodCall {
            receiver,
            method,
            type_args,
            args,
            safe,
        } => {
            write_operand(f, receiver, POSTFIX)?;
            f.write_str(if *safe { "?." } else { "." })?;
            f.write_str(&method.name)?;
            if let Some(type_args) = type_args {
                f.write_char('<')?;
                write_list(f, type_args, |f, ty| write!(f, "{}", ty))?;
                f.write_char('>')?;
            }
            write_args(f, args)
        }
        ExprKind::Call { func, args } => {
            write_operand(f, func, POSTFIX)?;
            write_args(f, args)
        }
    }
}

fn write_args(f: &mut impl Write, args: &[Argument]) -> fmt::Result {
    f.write_char('(')?;
    write_list(f, args, |f, arg| {
        if let Some(name) = &arg.name {
            write!(f, "{} = ", name.name)?;
        }
        write_expr(f, &arg.value)
    })?;
    f.write_char(')')
}

fn write_list<W: Write, T>(
    f: &mut W,
    items: &[T],
    mut write_item: impl FnMut(&mut W, &T) -> fmt::Result,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    Ok(())
}

fn write_param(f: &mut impl Write, param: &Param) -> fmt::Result {
    f.write_str(&param.name)?;
    if let Some(ty) = &param.type_hint {
        write!(f, ": {}", ty)?;
    }
    if let Some(default) = &param.default {
        f.write_str(" = ")?;
        write_expr(f, default)?;
    }
    Ok(())
}

fn write_function(f: &mut impl Write, def: &FunctionDef) -> fmt::Result {
    write!(f, "fun {}(", def.name)?;
    write_list(f, &def.params, |f, param| write_param(f, param))?;
    f.write_char(')')?;
    if let Some(ty) = &def.return_type {
        write!(f, ": {}", ty)?;
    }
    if let Some(body) = &def.body {
        f.write_str(" = ")?;
        write_expr(f, body)?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            f.write_char('<')?;
            write_list(f, &self.args, |f, ty| write!(f, "{}", ty))?;
            f.write_char('>')?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::VariableDecl {
                name,
                type_hint,
                value,
                is_mutable,
            } => {
                write!(f, "{} {}", if *is_mutable { "var" } else { "val" }, name)?;
                if let Some(ty) = type_hint {
                    write!(f, ": {}", ty)?;
                }
                write!(f, " = {}", value)
            }
            StmtKind::FunctionDef(def) => write_function(f, def),
            StmtKind::ClassDef { name } => write!(f, "class {}", name),
            StmtKind::Expr(expr) => write_expr(f, expr),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            writeln!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
