//! Module `parser` parses token streams into weft [documents](crate::grammar::Document).

#[macro_use]
mod errors;

pub use errors::ParseErrors;

use crate::common::Span;
use crate::diagnostics::Diagnostic;
use crate::grammar::*;
use crate::scanner::types::{Token, TokenType};
use crate::utils::PeekIter;
use errors::*;

/// The result of parsing a weft document.
pub struct ParseResult {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses a tokenized weft document, emitting the result and any diagnostics.
///
/// Parsing is total: malformed input produces diagnostics and best-effort nodes, never a
/// failure. A construct whose closing `}` is missing is closed at the recovery point with a
/// zero-width delimiter span.
pub fn parse_document(input: Vec<Token>, source: &str) -> ParseResult {
    let mut parser = DocumentParser::new(input, source);
    let document = parser.parse();
    ParseResult {
        document,
        diagnostics: parser.diagnostics,
    }
}

struct DocumentParser<'a> {
    input: PeekIter<Token>,
    source: &'a str,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> DocumentParser<'a> {
    fn new(input: Vec<Token>, source: &'a str) -> Self {
        Self {
            input: PeekIter::new(input.into_iter()),
            source,
            diagnostics: Vec::new(),
        }
    }

    fn parse(&mut self) -> Document {
        let imports = self.parse_imports();
        let root = self.parse_root_object();

        if !self.done() {
            let start = self.peek().span;
            let mut end = start;
            while !self.done() {
                end = self.next().span;
            }
            self.push_diag(ExtraRootObject!(start.to(end)));
        }

        Document {
            imports,
            root,
            span: Span::new(0, self.source.len()),
        }
    }

    fn parse_imports(&mut self) -> Vec<Import> {
        let mut imports = Vec::new();
        while let TokenType::Import = self.peek_ty(0) {
            let keyword = self.next().span;
            let path = match self.parse_qualified_id() {
                Some(path) => path,
                None => {
                    let tok = self.peek().clone();
                    self.push_diag(ExpectedToken!(tok.span, "an import path", tok.ty));
                    continue;
                }
            };
            let version = match self.peek_ty(0) {
                TokenType::Number(num) => Some((num, self.next().span)),
                _ => None,
            };
            let end = version.as_ref().map(|(_, span)| *span).unwrap_or(path.span);
            imports.push(Import {
                span: keyword.to(end),
                path,
                version,
            });
        }
        imports
    }

    fn parse_root_object(&mut self) -> Option<ObjectDefinition> {
        let mut reported = false;
        while !self.done() {
            if self.peek_object_start() {
                return self.parse_object();
            }
            let tok = self.next();
            if !reported {
                self.push_diag(ExpectedObject!(tok.span, tok.ty));
                reported = true;
            }
        }
        None
    }

    fn parse_object(&mut self) -> Option<ObjectDefinition> {
        if !self.peek_object_start() {
            return None;
        }
        let type_name = self.parse_qualified_id()?;
        let body = self.parse_object_body();
        let span = type_name.span.to(body.span());
        Some(ObjectDefinition {
            type_name,
            body,
            span,
        })
    }

    /// Parses an object body. The opening `{` must be the next token.
    fn parse_object_body(&mut self) -> ObjectBody {
        let lbrace = self.next().span;
        let mut members = Vec::new();
        let rbrace = loop {
            match self.peek_ty(0) {
                TokenType::CloseBrace => break self.next().span,
                TokenType::EOF => {
                    let at = self.peek().span;
                    self.push_diag(UnclosedDelimiter!(at, lbrace));
                    break Span::empty_at(at.lo);
                }
                _ => match self.parse_member() {
                    Some(member) => members.push(member),
                    None => self.recover_member(),
                },
            }
        };
        ObjectBody {
            lbrace,
            members,
            rbrace,
        }
    }

    fn parse_member(&mut self) -> Option<Member> {
        match self.peek_ty(0) {
            TokenType::Function => Some(Member::Function(self.parse_function(true))),
            TokenType::Ident(_) if self.peek_object_start() => {
                self.parse_object().map(Member::Object)
            }
            TokenType::Ident(_) => self.parse_binding().map(Member::Binding),
            ty => {
                let at = self.peek().span;
                self.push_diag(ExpectedMember!(at, ty));
                None
            }
        }
    }

    /// Skips past tokens that cannot start a member, so one malformed member does not take the
    /// rest of the body with it.
    fn recover_member(&mut self) {
        if matches!(self.peek_ty(0), TokenType::CloseBrace | TokenType::EOF) {
            return;
        }
        self.next();
        loop {
            match self.peek_ty(0) {
                TokenType::CloseBrace
                | TokenType::EOF
                | TokenType::Function
                | TokenType::Ident(_) => break,
                _ => {
                    self.next();
                }
            }
        }
    }

    fn parse_binding(&mut self) -> Option<Binding> {
        let name = self.parse_qualified_id()?;
        match self.peek_ty(0) {
            TokenType::Colon => {
                self.next();
            }
            ty => {
                let at = self.peek().span;
                self.push_diag(ExpectedToken!(at, "`:`", ty));
                return None;
            }
        }

        let value = if self.peek_object_start() {
            let type_name = self.parse_qualified_id()?;
            let body = self.parse_object_body();
            BindingValue::Object { type_name, body }
        } else if let TokenType::OpenBrace = self.peek_ty(0) {
            BindingValue::Block(self.parse_block())
        } else {
            BindingValue::Expr(self.parse_expr())
        };

        let end = match &value {
            BindingValue::Object { body, .. } => body.span(),
            BindingValue::Block(block) => block.span(),
            BindingValue::Expr(expr) => expr.span,
        };
        Some(Binding {
            span: name.span.to(end),
            name,
            value,
        })
    }

    /// Parses a function declaration (`require_name`) or function expression. The `function`
    /// keyword must be the next token.
    fn parse_function(&mut self, require_name: bool) -> Function {
        let keyword = self.next().span;

        let name = match self.peek_ty(0) {
            TokenType::Ident(_) => {
                let tok = self.next();
                let name = match tok.ty {
                    TokenType::Ident(name) => name,
                    _ => unreachable!("just peeked an identifier"),
                };
                Some(Ident {
                    name,
                    span: tok.span,
                })
            }
            ty => {
                if require_name {
                    let at = self.peek().span;
                    self.push_diag(ExpectedToken!(at, "a function name", ty));
                }
                None
            }
        };

        let params = self.parse_params();

        let body = if let TokenType::OpenBrace = self.peek_ty(0) {
            self.parse_block()
        } else {
            let tok = self.peek().clone();
            self.push_diag(ExpectedToken!(tok.span, "`{`", tok.ty));
            Block {
                lbrace: Span::empty_at(tok.span.lo),
                stmts: Vec::new(),
                rbrace: Span::empty_at(tok.span.lo),
            }
        };

        let span = keyword.to(body.span());
        Function {
            keyword,
            name,
            params,
            body,
            span,
        }
    }

    fn parse_params(&mut self) -> Vec<Ident> {
        let mut params = Vec::new();
        match self.peek_ty(0) {
            TokenType::OpenParen => {
                self.next();
            }
            ty => {
                let at = self.peek().span;
                self.push_diag(ExpectedToken!(at, "`(`", ty));
                return params;
            }
        }

        if !matches!(self.peek_ty(0), TokenType::CloseParen | TokenType::EOF) {
            loop {
                match self.peek_ty(0) {
                    TokenType::Ident(_) => {
                        let tok = self.next();
                        let name = match tok.ty {
                            TokenType::Ident(name) => name,
                            _ => unreachable!("just peeked an identifier"),
                        };
                        params.push(Ident {
                            name,
                            span: tok.span,
                        });
                    }
                    ty => {
                        let at = self.peek().span;
                        self.push_diag(ExpectedToken!(at, "a parameter name", ty));
                        break;
                    }
                }
                match self.peek_ty(0) {
                    TokenType::Comma => {
                        self.next();
                    }
                    _ => break,
                }
            }
        }

        match self.peek_ty(0) {
            TokenType::CloseParen => {
                self.next();
            }
            ty => {
                let at = self.peek().span;
                self.push_diag(ExpectedToken!(at, "`)`", ty));
            }
        }
        params
    }

    /// Parses a statement block. The opening `{` must be the next token.
    fn parse_block(&mut self) -> Block {
        let lbrace = self.next().span;
        let mut stmts = Vec::new();
        let rbrace = loop {
            match self.peek_ty(0) {
                TokenType::CloseBrace => break self.next().span,
                TokenType::EOF => {
                    let at = self.peek().span;
                    self.push_diag(UnclosedDelimiter!(at, lbrace));
                    break Span::empty_at(at.lo);
                }
                TokenType::Semi => {
                    self.next();
                }
                _ => stmts.push(self.parse_stmt()),
            }
        };
        Block {
            lbrace,
            stmts,
            rbrace,
        }
    }

    fn parse_stmt(&mut self) -> Stmt {
        match self.peek_ty(0) {
            TokenType::Var => {
                let keyword = self.next().span;
                match self.peek_ty(0) {
                    TokenType::Ident(_) => {
                        let tok = self.next();
                        let name = match tok.ty {
                            TokenType::Ident(name) => name,
                            _ => unreachable!("just peeked an identifier"),
                        };
                        let name = Ident {
                            name,
                            span: tok.span,
                        };
                        let init = match self.peek_ty(0) {
                            TokenType::Equal => {
                                self.next();
                                Some(self.parse_expr())
                            }
                            _ => None,
                        };
                        let end = init.as_ref().map(|init| init.span).unwrap_or(name.span);
                        Stmt::Var {
                            span: keyword.to(end),
                            name,
                            init,
                        }
                    }
                    ty => {
                        let at = self.peek().span;
                        self.push_diag(ExpectedToken!(at, "a variable name", ty));
                        Stmt::Expr(Expr {
                            kind: ExprKind::Error,
                            span: Span::empty_at(at.lo),
                        })
                    }
                }
            }
            TokenType::Return => {
                let keyword = self.next().span;
                let value = match self.peek_ty(0) {
                    TokenType::Semi | TokenType::CloseBrace | TokenType::EOF => None,
                    _ => Some(self.parse_expr()),
                };
                let end = value.as_ref().map(|value| value.span).unwrap_or(keyword);
                Stmt::Return {
                    span: keyword.to(end),
                    value,
                }
            }
            ty => {
                if can_start_expr(&ty) {
                    Stmt::Expr(self.parse_expr())
                } else {
                    let at = self.peek().span;
                    self.push_diag(ExpectedExpr!(at, ty));
                    // the block loop handles `}`, `;` and EOF before this point, so consuming
                    // here always makes progress without eating a closer
                    self.next();
                    Stmt::Expr(Expr {
                        kind: ExprKind::Error,
                        span: Span::empty_at(at.lo),
                    })
                }
            }
        }
    }

    fn parse_expr(&mut self) -> Expr {
        self.parse_equality()
    }

    fn parse_equality(&mut self) -> Expr {
        let mut expr = self.parse_relational();
        loop {
            let op = match self.peek_ty(0) {
                TokenType::EqEq => BinaryOp::Eq,
                TokenType::NotEq => BinaryOp::NotEq,
                _ => break,
            };
            self.next();
            let rhs = self.parse_relational();
            expr = binary(op, expr, rhs);
        }
        expr
    }

    fn parse_relational(&mut self) -> Expr {
        let mut expr = self.parse_additive();
        loop {
            let op = match self.peek_ty(0) {
                TokenType::Lt => BinaryOp::Lt,
                TokenType::Gt => BinaryOp::Gt,
                TokenType::LtEq => BinaryOp::LtEq,
                TokenType::GtEq => BinaryOp::GtEq,
                _ => break,
            };
            self.next();
            let rhs = self.parse_additive();
            expr = binary(op, expr, rhs);
        }
        expr
    }

    fn parse_additive(&mut self) -> Expr {
        let mut expr = self.parse_multiplicative();
        loop {
            let op = match self.peek_ty(0) {
                TokenType::Plus => BinaryOp::Add,
                TokenType::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.next();
            let rhs = self.parse_multiplicative();
            expr = binary(op, expr, rhs);
        }
        expr
    }

    fn parse_multiplicative(&mut self) -> Expr {
        let mut expr = self.parse_unary();
        loop {
            let op = match self.peek_ty(0) {
                TokenType::Mult => BinaryOp::Mul,
                TokenType::Div => BinaryOp::Div,
                TokenType::Mod => BinaryOp::Rem,
                _ => break,
            };
            self.next();
            let rhs = self.parse_unary();
            expr = binary(op, expr, rhs);
        }
        expr
    }

    fn parse_unary(&mut self) -> Expr {
        let op = match self.peek_ty(0) {
            TokenType::Minus => UnaryOp::Neg,
            TokenType::Not => UnaryOp::Not,
            _ => return self.parse_postfix(),
        };
        let op_span = self.next().span;
        let operand = self.parse_unary();
        Expr {
            span: op_span.to(operand.span),
            kind: ExprKind::Unary(UnaryExpr {
                op,
                operand: Box::new(operand),
            }),
        }
    }

    fn parse_postfix(&mut self) -> Expr {
        let mut expr = self.parse_primary();
        loop {
            match self.peek_ty(0) {
                TokenType::OpenParen => {
                    self.next();
                    let mut args = Vec::new();
                    if !matches!(self.peek_ty(0), TokenType::CloseParen | TokenType::EOF) {
                        loop {
                            args.push(self.parse_expr());
                            match self.peek_ty(0) {
                                TokenType::Comma => {
                                    self.next();
                                }
                                _ => break,
                            }
                        }
                    }
                    let end = match self.peek_ty(0) {
                        TokenType::CloseParen => self.next().span,
                        ty => {
                            let at = self.peek().span;
                            self.push_diag(ExpectedToken!(at, "`)`", ty));
                            Span::empty_at(at.lo)
                        }
                    };
                    expr = Expr {
                        span: expr.span.to(end),
                        kind: ExprKind::Call(CallExpr {
                            callee: Box::new(expr),
                            args,
                        }),
                    };
                }
                TokenType::Dot => match self.peek_ty(1) {
                    TokenType::Ident(_) => {
                        self.next();
                        let tok = self.next();
                        let name = match tok.ty {
                            TokenType::Ident(name) => name,
                            _ => unreachable!("just peeked an identifier"),
                        };
                        expr = Expr {
                            span: expr.span.to(tok.span),
                            kind: ExprKind::Field(FieldExpr {
                                base: Box::new(expr),
                                field: Ident {
                                    name,
                                    span: tok.span,
                                },
                            }),
                        };
                    }
                    ty => {
                        let dot = self.next().span;
                        self.push_diag(ExpectedToken!(dot, "a name after `.`", ty));
                        break;
                    }
                },
                _ => break,
            }
        }
        expr
    }

    fn parse_primary(&mut self) -> Expr {
        let tok = self.peek().clone();
        let span = tok.span;
        match tok.ty {
            TokenType::Number(num) => {
                self.next();
                Expr {
                    kind: ExprKind::Number(num),
                    span,
                }
            }
            TokenType::Str(s) => {
                self.next();
                Expr {
                    kind: ExprKind::Str(s),
                    span,
                }
            }
            TokenType::True => {
                self.next();
                Expr {
                    kind: ExprKind::Bool(true),
                    span,
                }
            }
            TokenType::False => {
                self.next();
                Expr {
                    kind: ExprKind::Bool(false),
                    span,
                }
            }
            TokenType::Ident(name) => {
                self.next();
                Expr {
                    kind: ExprKind::Ident(name),
                    span,
                }
            }
            TokenType::OpenParen => {
                let open = self.next().span;
                let inner = self.parse_expr();
                let close = match self.peek_ty(0) {
                    TokenType::CloseParen => self.next().span,
                    ty => {
                        let at = self.peek().span;
                        self.push_diag(ExpectedToken!(at, "`)`", ty));
                        Span::empty_at(at.lo)
                    }
                };
                Expr {
                    span: open.to(inner.span).to(close),
                    kind: ExprKind::Paren(Box::new(inner)),
                }
            }
            TokenType::Function => {
                let function = self.parse_function(false);
                Expr {
                    span: function.span,
                    kind: ExprKind::Function(Box::new(function)),
                }
            }
            ty => {
                self.push_diag(ExpectedExpr!(span, ty));
                // leave closers for the enclosing construct to recover with; anything else is
                // consumed so the parse makes progress
                if !matches!(
                    self.peek_ty(0),
                    TokenType::CloseBrace
                        | TokenType::CloseParen
                        | TokenType::Semi
                        | TokenType::Comma
                        | TokenType::EOF
                ) {
                    self.next();
                }
                Expr {
                    kind: ExprKind::Error,
                    span: Span::empty_at(span.lo),
                }
            }
        }
    }

    fn parse_qualified_id(&mut self) -> Option<QualifiedId> {
        match self.peek_ty(0) {
            TokenType::Ident(_) => {}
            _ => return None,
        }
        let tok = self.next();
        let mut name = match tok.ty {
            TokenType::Ident(name) => name,
            _ => unreachable!("just peeked an identifier"),
        };
        let mut span = tok.span;
        loop {
            match (self.peek_ty(0), self.peek_ty(1)) {
                (TokenType::Dot, TokenType::Ident(segment)) => {
                    self.next();
                    let seg_span = self.next().span;
                    name.push('.');
                    name.push_str(&segment);
                    span = span.to(seg_span);
                }
                _ => break,
            }
        }
        Some(QualifiedId { name, span })
    }

    /// Whether the upcoming tokens form `Name ('.' Name)* '{'`, i.e. the start of an object
    /// definition or of a bound object value.
    fn peek_object_start(&mut self) -> bool {
        match self.peek_ty(0) {
            TokenType::Ident(_) => {}
            _ => return false,
        }
        let mut i = 1;
        loop {
            match self.peek_ty(i) {
                TokenType::OpenBrace => return true,
                TokenType::Dot => match self.peek_ty(i + 1) {
                    TokenType::Ident(_) => i += 2,
                    _ => return false,
                },
                _ => return false,
            }
        }
    }

    fn peek(&mut self) -> &Token {
        self.input.peek().expect("token stream is EOF-terminated")
    }

    /// The type of the token `n` ahead of the cursor. Peeking past the end of input yields
    /// [EOF](TokenType::EOF).
    fn peek_ty(&mut self, n: usize) -> TokenType {
        self.input
            .peek_at(n)
            .map(|tok| tok.ty.clone())
            .unwrap_or(TokenType::EOF)
    }

    fn next(&mut self) -> Token {
        self.input.next().expect("token stream is EOF-terminated")
    }

    fn done(&mut self) -> bool {
        matches!(self.peek_ty(0), TokenType::EOF)
    }

    fn push_diag(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr {
        span: lhs.span.to(rhs.span),
        kind: ExprKind::Binary(BinaryExpr {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }),
    }
}

fn can_start_expr(ty: &TokenType) -> bool {
    matches!(
        ty,
        TokenType::Number(_)
            | TokenType::Str(_)
            | TokenType::True
            | TokenType::False
            | TokenType::Ident(_)
            | TokenType::OpenParen
            | TokenType::Minus
            | TokenType::Not
            | TokenType::Function
    )
}
