//! Definitions of types used in the libweft scanner.

use crate::common::Span;
use core::fmt;

/// The type of a [Token](Token).
#[derive(PartialEq, Clone, Debug)]
pub enum TokenType {
    /// A number literal, stored in double precision.
    Number(f64),

    /// A string literal. The wrapping quotes are not part of the payload.
    Str(String),

    /// An identifier or dotted type name segment.
    Ident(String),

    /// `import` keyword
    Import,

    /// `function` keyword
    Function,

    /// `var` keyword
    Var,

    /// `return` keyword
    Return,

    /// `true` keyword
    True,

    /// `false` keyword
    False,

    /// { symbol
    OpenBrace,

    /// } symbol
    CloseBrace,

    /// ( symbol
    OpenParen,

    /// ) symbol
    CloseParen,

    /// : symbol
    Colon,

    /// ; symbol
    Semi,

    /// , symbol
    Comma,

    /// . symbol
    Dot,

    /// + symbol
    Plus,

    /// - symbol
    Minus,

    /// * symbol
    Mult,

    /// / symbol
    Div,

    /// % symbol
    Mod,

    /// < symbol
    Lt,

    /// > symbol
    Gt,

    /// <= symbol
    LtEq,

    /// >= symbol
    GtEq,

    /// == symbol
    EqEq,

    /// != symbol
    NotEq,

    /// = symbol
    Equal,

    /// ! symbol
    Not,

    /// An invalid token.
    Invalid(String),

    /// End of file.
    EOF,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenType::*;
        write!(
            f,
            "{}",
            match self {
                Number(num) => num.to_string(),
                Str(s) => format!("\"{}\"", s),
                Ident(s) => s.to_string(),
                Import => "import".into(),
                Function => "function".into(),
                Var => "var".into(),
                Return => "return".into(),
                True => "true".into(),
                False => "false".into(),
                OpenBrace => "{".into(),
                CloseBrace => "}".into(),
                OpenParen => "(".into(),
                CloseParen => ")".into(),
                Colon => ":".into(),
                Semi => ";".into(),
                Comma => ",".into(),
                Dot => ".".into(),
                Plus => "+".into(),
                Minus => "-".into(),
                Mult => "*".into(),
                Div => "/".into(),
                Mod => "%".into(),
                Lt => "<".into(),
                Gt => ">".into(),
                LtEq => "<=".into(),
                GtEq => ">=".into(),
                EqEq => "==".into(),
                NotEq => "!=".into(),
                Equal => "=".into(),
                Not => "!".into(),
                Invalid(s) => format!("Invalid({})", s),
                EOF => "end of file".into(),
            }
        )
    }
}

/// A token scanned from a weft document.
#[derive(PartialEq, Clone, Debug)]
pub struct Token {
    pub ty: TokenType,
    pub span: Span,
}

impl Token {
    pub(crate) fn new<S: Into<Span>>(ty: TokenType, span: S) -> Self {
        Self {
            ty,
            span: span.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ty.fmt(f)
    }
}
