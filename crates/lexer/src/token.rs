use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\n\f]+")] // Ignore spaces, tabs and line breaks automatically
#[logos(skip(r"//[^\n]*", allow_greedy = true))] // Line comments
pub enum Token {
    // --- Keywords ---
    #[token("fun")]
    Fun,

    #[token("val")]
    Val,

    #[token("var")]
    Var,

    #[token("class")]
    Class,

    #[token("super")]
    Super,

    #[token("true")]
    True,

    #[token("false")]
    False,

    #[token("null")]
    Null,

    // --- Literals ---

    // Identifiers: variable names, functions, members (ex: "compareTo")
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Numbers keep their source text so "0" and "0.0" stay distinguishable
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),

    #[regex(r"[0-9]+\.[0-9]+", |lex| lex.slice().to_string())]
    Float(String),

    // Strings, quotes included (ex: "hello")
    #[regex(r#""([^"\\]|\\["\\bnfrt$])*""#, |lex| lex.slice().to_string())]
    String(String),

    // --- Operators ---
    #[token("=")]
    Eq,

    #[token("==")]
    DoubleEq,

    #[token("!=")]
    NotEq,

    #[token("!")]
    Not,

    #[token("&&")]
    And,

    #[token("||")]
    Or,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token(">")]
    Gt,

    #[token("<")]
    Lt,

    #[token(">=")]
    GtEq,

    #[token("<=")]
    LtEq,

    #[token("..")]
    DotDot, // Range (a..b)

    #[token(".")]
    Dot,

    #[token("?.")]
    SafeDot, // Safe call (a?.b())

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    // --- Delimiters ---
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    // Stand-in for input the lexer rejected, so the parser can fail on it
    Error,
}

impl Token {
    /// Source spelling of fixed tokens, used by diagnostics
    pub fn spelling(&self) -> Option<&'static str> {
        let s = match self {
            Token::Fun => "fun",
            Token::Val => "val",
            Token::Var => "var",
            Token::Class => "class",
            Token::Super => "super",
            Token::True => "true",
            Token::False => "false",
            Token::Null => "null",
            Token::Eq => "=",
            Token::DoubleEq => "==",
            Token::NotEq => "!=",
            Token::Not => "!",
            Token::And => "&&",
            Token::Or => "||",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::Gt => ">",
            Token::Lt => "<",
            Token::GtEq => ">=",
            Token::LtEq => "<=",
            Token::DotDot => "..",
            Token::Dot => ".",
            Token::SafeDot => "?.",
            Token::Comma => ",",
            Token::Colon => ":",
            Token::Semicolon => ";",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::Identifier(_)
            | Token::Int(_)
            | Token::Float(_)
            | Token::String(_)
            | Token::Error => return None,
        };
        Some(s)
    }
}

// This helps to show the token prettily in the print
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Int(text) | Token::Float(text) | Token::String(text) => write!(f, "{}", text),
            Token::Error => write!(f, "<error>"),
            other => write!(f, "{}", other.spelling().unwrap_or_default()),
        }
    }
}
