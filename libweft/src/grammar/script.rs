use super::*;
use crate::common::Span;

/// A function declaration or function expression.
///
/// A declaration is a named function appearing as an object member; an expression may appear
/// wherever an expression does, and its name is optional. Both forms are one node kind, and both
/// contribute their [body](Block) as a structural range.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    /// The span of the `function` keyword.
    pub keyword: Span,
    pub name: Option<Ident>,
    pub params: Vec<Ident>,
    pub body: Block,
    pub span: Span,
}

/// A braces-delimited statement block.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    /// The span of the opening `{`.
    pub lbrace: Span,
    pub stmts: Vec<Stmt>,
    /// The span of the closing `}`. Zero-width at the recovery point if the block was never
    /// closed.
    pub rbrace: Span,
}

impl Block {
    /// The span of the block, braces inclusive.
    pub fn span(&self) -> Span {
        self.lbrace.to(self.rbrace)
    }
}

/// A statement in a [block](Block).
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// A variable declaration, e.g. `var area = w * h`.
    Var {
        name: Ident,
        init: Option<Expr>,
        span: Span,
    },
    /// A return statement.
    Return { value: Option<Expr>, span: Span },
    /// An expression statement.
    Expr(Expr),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Var { span, .. } => *span,
            Stmt::Return { span, .. } => *span,
            Stmt::Expr(expr) => expr.span,
        }
    }
}

/// An expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// The kind of an [expression](Expr).
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Number(f64),
    Str(String),
    Bool(bool),
    Ident(String),
    /// A parenthesized expression.
    Paren(Box<Expr>),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
    Field(FieldExpr),
    /// A function expression.
    Function(Box<Function>),
    /// A placeholder for an expression the parser could not produce.
    Error,
}

/// A unary expression, e.g. `!open` or `-margin`.
#[derive(Clone, Debug, PartialEq)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UnaryOp {
    /// -
    Neg,
    /// !
    Not,
}

/// A binary expression, e.g. `width < 10 + margin`.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BinaryOp {
    /// +
    Add,
    /// -
    Sub,
    /// *
    Mul,
    /// /
    Div,
    /// %
    Rem,
    /// <
    Lt,
    /// >
    Gt,
    /// <=
    LtEq,
    /// >=
    GtEq,
    /// ==
    Eq,
    /// !=
    NotEq,
}

/// A call expression, e.g. `layout(w, h)`.
#[derive(Clone, Debug, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
}

/// A field access, e.g. `parent.width`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldExpr {
    pub base: Box<Expr>,
    pub field: Ident,
}
