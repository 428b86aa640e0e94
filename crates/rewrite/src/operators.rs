// Operator Table
//
// Convention method names and the binary operators they stand for. The table
// is a process-wide constant; every lookup is a pure scan over it.

use parser::ast::BinaryOp;

/// What a convention name means once looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// `equals`: `==`, or `!=` under a negation
    Equals,
    /// `compareTo`: the operator comes from the comparison against zero around the call
    CompareTo,
    /// Names with a fixed operator (`plus` -> `+`, ...)
    Binary(BinaryOp),
}

impl Convention {
    /// Operator used when no surrounding idiom applies. `compareTo` has none.
    pub fn default_op(self) -> Option<BinaryOp> {
        match self {
            Convention::Equals => Some(BinaryOp::Eq),
            Convention::CompareTo => None,
            Convention::Binary(op) => Some(op),
        }
    }
}

static CONVENTIONS: [(&str, Convention); 8] = [
    ("equals", Convention::Equals),
    ("compareTo", Convention::CompareTo),
    ("plus", Convention::Binary(BinaryOp::Add)),
    ("minus", Convention::Binary(BinaryOp::Sub)),
    ("times", Convention::Binary(BinaryOp::Mul)),
    ("div", Convention::Binary(BinaryOp::Div)),
    ("rem", Convention::Binary(BinaryOp::Rem)),
    ("rangeTo", Convention::Binary(BinaryOp::Range)),
];

/// Convention names, in table order
pub fn convention_names() -> impl Iterator<Item = &'static str> {
    CONVENTIONS.iter().map(|(name, _)| *name)
}

pub fn convention_for(name: &str) -> Option<Convention> {
    CONVENTIONS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, convention)| *convention)
}

/// Fixed operator for a convention name
pub fn token_for(name: &str) -> Option<BinaryOp> {
    convention_for(name).and_then(Convention::default_op)
}

/// Convention name an operator is written as when spelled out as a call
pub fn name_for(op: BinaryOp) -> Option<&'static str> {
    match op {
        BinaryOp::Eq | BinaryOp::NotEq => Some("equals"),
        op if is_comparison(op) => Some("compareTo"),
        op => CONVENTIONS
            .iter()
            .find(|(_, convention)| *convention == Convention::Binary(op))
            .map(|(name, _)| *name),
    }
}

pub fn is_comparison(op: BinaryOp) -> bool {
    matches!(op, BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq)
}

/// The comparison that holds when both operands swap sides
pub fn inverted(op: BinaryOp) -> Option<BinaryOp> {
    match op {
        BinaryOp::Lt => Some(BinaryOp::Gt),
        BinaryOp::Gt => Some(BinaryOp::Lt),
        BinaryOp::LtEq => Some(BinaryOp::GtEq),
        BinaryOp::GtEq => Some(BinaryOp::LtEq),
        _ => None,
    }
}
