use crate::ast::{
    Argument, BinaryOp, Expr, ExprKind, FunctionDef, Ident, Literal, Param, Program, Span, Stmt,
    StmtKind, TypeRef, UnaryOp,
};
use chumsky::prelude::*;
use lexer::token::Token;

pub fn parser() -> impl Parser<Token, Program, Error = Simple<Token>> {
    let stmt = stmt_parser();

    stmt.repeated()
        .map(|statements| Program { statements })
        .then_ignore(end())
}

fn stmt_parser() -> impl Parser<Token, Stmt, Error = Simple<Token>> {
    let ident = select! { Token::Identifier(name) => name };

    // Optional annotation (: Type)
    let type_hint = just(Token::Colon).ignore_then(type_parser()).or_not();

    let decl = just(Token::Val)
        .to(false)
        .or(just(Token::Var).to(true))
        .then(ident.clone())
        .then(type_hint.clone())
        .then_ignore(just(Token::Eq))
        .then(expr_parser())
        .map(
            |(((is_mutable, name), type_hint), value)| StmtKind::VariableDecl {
                name,
                type_hint,
                value,
                is_mutable,
            },
        );

    // Parameters: (name: Type = default, ...)
    let param = ident
        .clone()
        .then(type_hint.clone())
        .then(just(Token::Eq).ignore_then(expr_parser()).or_not())
        .map(|((name, type_hint), default)| Param {
            name,
            type_hint,
            default,
        });

    // fun name(params): Type = body
    let function_def = just(Token::Fun)
        .ignore_then(ident.clone())
        .then(
            param
                .separated_by(just(Token::Comma))
                .allow_trailing()
                .delimited_by(just(Token::LParen), just(Token::RParen)),
        )
        .then(type_hint)
        .then(just(Token::Eq).ignore_then(expr_parser()).or_not())
        .map(|(((name, params), return_type), body)| {
            StmtKind::FunctionDef(FunctionDef {
                name,
                params,
                return_type,
                body,
            })
        });

    let class_def = just(Token::Class)
        .ignore_then(ident)
        .map(|name| StmtKind::ClassDef { name });

    let expr_stmt = expr_parser().map(StmtKind::Expr);

    decl.or(function_def)
        .or(class_def)
        .or(expr_stmt)
        .map_with_span(|kind, span| Stmt { kind, span })
        .then_ignore(just(Token::Semicolon).repeated())
        .boxed()
}

/// Type references: `Name` or `Name<Arg, ...>`
pub fn type_parser() -> impl Parser<Token, TypeRef, Error = Simple<Token>> + Clone {
    recursive(|ty| {
        select! { Token::Identifier(name) => name }
            .then(
                ty.separated_by(just(Token::Comma))
                    .at_least(1)
                    .delimited_by(just(Token::Lt), just(Token::Gt))
                    .or_not(),
            )
            .map(|(name, args)| TypeRef {
                name,
                args: args.unwrap_or_default(),
            })
    })
}

// Suffixes folded onto an atom, left to right
#[derive(Clone)]
enum Postfix {
    Member {
        safe: bool,
        name: Ident,
        call: Option<(Option<Vec<TypeRef>>, Vec<Argument>)>,
    },
    Call(Vec<Argument>),
}

pub fn expr_parser() -> impl Parser<Token, Expr, Error = Simple<Token>> + Clone {
    recursive(|expr| {
        let ident = select! { Token::Identifier(name) => name };
        let spanned_ident = ident.clone().map_with_span(|name, span| Ident { name, span });

        let literal = select! {
            Token::Int(n) => Literal::Number(n),
            Token::Float(n) => Literal::Number(n),
            Token::String(s) => Literal::String(s),
            Token::True => Literal::Bool(true),
            Token::False => Literal::Bool(false),
            Token::Null => Literal::Null,
        }
        .map(ExprKind::Literal);

        let atom = literal
            .or(just(Token::Super).to(ExprKind::Super))
            .or(ident.map(ExprKind::Identifier))
            .or(expr
                .clone()
                .delimited_by(just(Token::LParen), just(Token::RParen))
                .map(|inner| ExprKind::Paren(Box::new(inner))))
            .map_with_span(Expr::new);

        // Arguments: positional `x` or named `name = x`
        let argument = spanned_ident
            .clone()
            .then_ignore(just(Token::Eq))
            .or_not()
            .then(expr.clone())
            .map(|(name, value)| Argument { name, value });

        let args = argument
            .separated_by(just(Token::Comma))
            .allow_trailing()
            .delimited_by(just(Token::LParen), just(Token::RParen));

        let type_args = type_parser()
            .separated_by(just(Token::Comma))
            .at_least(1)
            .delimited_by(just(Token::Lt), just(Token::Gt));

        // `a.b<T>(c)` is a call only when the argument list follows; otherwise
        // the `<` backtracks into a comparison
        let member = just(Token::Dot)
            .to(false)
            .or(just(Token::SafeDot).to(true))
            .then(spanned_ident)
            .then(type_args.or_not().then(args.clone()).or_not())
            .map(|((safe, name), call)| Postfix::Member { safe, name, call });

        let call = args.map(Postfix::Call);

        let postfix = atom
            .then(
                member
                    .or(call)
                    .map_with_span(|suffix, span: Span| (suffix, span))
                    .repeated(),
            )
            .foldl(|lhs, (suffix, span)| {
                let span = lhs.span.start..span.end;
                let kind = match suffix {
                    Postfix::Member {
                        safe,
                        name,
                        call: Some((type_args, args)),
                    } => ExprKind::MethodCall {
                        receiver: Box::new(lhs),
                        method: name,
                        type_args,
                        args,
                        safe,
                    },
                    Postfix::Member {
                        safe,
                        name,
                        call: None,
                    } => ExprKind::FieldAccess {
                        target: Box::new(lhs),
                        field: name,
                        safe,
                    },
                    Postfix::Call(args) => ExprKind::Call {
                        func: Box::new(lhs),
                        args,
                    },
                };
                Expr::new(kind, span)
            })
            .boxed();

        // Prefix operators (!x, -x, +x)
        let unary = just(Token::Not)
            .to(UnaryOp::Not)
            .or(just(Token::Minus).to(UnaryOp::Negate))
            .or(just(Token::Plus).to(UnaryOp::Plus))
            .map_with_span(|op, span: Span| (op, span))
            .repeated()
            .then(postfix)
            .foldr(|(op, span), operand| {
                let span = span.start..operand.span.end;
                Expr::new(
                    ExprKind::Unary {
                        op,
                        expr: Box::new(operand),
                    },
                    span,
                )
            })
            .boxed();

        let product = binary_level(
            unary,
            just(Token::Star)
                .to(BinaryOp::Mul)
                .or(just(Token::Slash).to(BinaryOp::Div))
                .or(just(Token::Percent).to(BinaryOp::Rem)),
        )
        .boxed();

        let sum = binary_level(
            product,
            just(Token::Plus)
                .to(BinaryOp::Add)
                .or(just(Token::Minus).to(BinaryOp::Sub)),
        )
        .boxed();

        let range = binary_level(sum, just(Token::DotDot).to(BinaryOp::Range)).boxed();

        let comparison = binary_level(
            range,
            choice((
                just(Token::Lt).to(BinaryOp::Lt),
                just(Token::Gt).to(BinaryOp::Gt),
                just(Token::LtEq).to(BinaryOp::LtEq),
                just(Token::GtEq).to(BinaryOp::GtEq),
            )),
        )
        .boxed();

        let equality = binary_level(
            comparison,
            just(Token::DoubleEq)
                .to(BinaryOp::Eq)
                .or(just(Token::NotEq).to(BinaryOp::NotEq)),
        )
        .boxed();

        let logic_and = binary_level(equality, just(Token::And).to(BinaryOp::LogicalAnd)).boxed();

        let logic_or = binary_level(logic_and, just(Token::Or).to(BinaryOp::LogicalOr));

        logic_or.boxed()
    })
}

/// One left-associative precedence level: `operand (op operand)*`
fn binary_level<P, O>(
    operand: P,
    op: O,
) -> impl Parser<Token, Expr, Error = Simple<Token>> + Clone
where
    P: Parser<Token, Expr, Error = Simple<Token>> + Clone,
    O: Parser<Token, BinaryOp, Error = Simple<Token>> + Clone,
{
    operand
        .clone()
        .then(op.then(operand).repeated())
        .foldl(|lhs, (op, rhs)| {
            let span = lhs.span.start..rhs.span.end;
            Expr::new(
                ExprKind::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                span,
            )
        })
}
