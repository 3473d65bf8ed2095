//! Traits for visiting weft grammar trees.

use super::*;
use crate::common::Span;

/// Descends down a document.
pub fn descend_document<'a, V: DocumentVisitor<'a>>(visitor: &mut V, document: &'a Document) {
    for import in &document.imports {
        visitor.visit_import(import);
    }
    if let Some(root) = &document.root {
        visitor.visit_object(root);
    }
}

/// Descends down an object definition.
pub fn descend_object<'a, V: DocumentVisitor<'a>>(visitor: &mut V, object: &'a ObjectDefinition) {
    visitor.visit_object_body(&object.body);
}

/// Descends down an object body.
pub fn descend_object_body<'a, V: DocumentVisitor<'a>>(visitor: &mut V, body: &'a ObjectBody) {
    for member in &body.members {
        visitor.visit_member(member);
    }
}

/// Descends down an object member.
pub fn descend_member<'a, V: DocumentVisitor<'a>>(visitor: &mut V, member: &'a Member) {
    match member {
        Member::Object(object) => visitor.visit_object(object),
        Member::Binding(binding) => visitor.visit_binding(binding),
        Member::Function(function) => visitor.visit_function(function),
    }
}

/// Descends down a binding.
pub fn descend_binding<'a, V: DocumentVisitor<'a>>(visitor: &mut V, binding: &'a Binding) {
    match &binding.value {
        BindingValue::Object { body, .. } => visitor.visit_object_body(body),
        BindingValue::Block(block) => visitor.visit_block(block),
        BindingValue::Expr(expr) => visitor.visit_expr(expr),
    }
}

/// Descends down a function.
pub fn descend_function<'a, V: DocumentVisitor<'a>>(visitor: &mut V, function: &'a Function) {
    visitor.visit_block(&function.body);
}

/// Descends down a statement block.
pub fn descend_block<'a, V: DocumentVisitor<'a>>(visitor: &mut V, block: &'a Block) {
    for stmt in &block.stmts {
        visitor.visit_stmt(stmt);
    }
}

/// Descends down a statement.
pub fn descend_stmt<'a, V: DocumentVisitor<'a>>(visitor: &mut V, stmt: &'a Stmt) {
    match stmt {
        Stmt::Var { init, .. } => {
            if let Some(init) = init {
                visitor.visit_expr(init);
            }
        }
        Stmt::Return { value, .. } => {
            if let Some(value) = value {
                visitor.visit_expr(value);
            }
        }
        Stmt::Expr(expr) => visitor.visit_expr(expr),
    }
}

/// Descends down an expression.
pub fn descend_expr<'a, V: DocumentVisitor<'a>>(visitor: &mut V, expr: &'a Expr) {
    match &expr.kind {
        ExprKind::Number(num) => visitor.visit_number(*num, expr.span),
        ExprKind::Str(s) => visitor.visit_string(s, expr.span),
        ExprKind::Bool(b) => visitor.visit_bool(*b, expr.span),
        ExprKind::Ident(name) => visitor.visit_ident(name, expr.span),
        ExprKind::Paren(inner) => visitor.visit_expr(inner),
        ExprKind::Unary(unary) => visitor.visit_unary(unary, expr.span),
        ExprKind::Binary(binary) => visitor.visit_binary(binary, expr.span),
        ExprKind::Call(call) => visitor.visit_call(call, expr.span),
        ExprKind::Field(field) => visitor.visit_field(field, expr.span),
        ExprKind::Function(function) => visitor.visit_function(function),
        ExprKind::Error => {}
    }
}

/// Descends down a unary expression.
pub fn descend_unary<'a, V: DocumentVisitor<'a>>(
    visitor: &mut V,
    unary: &'a UnaryExpr,
    _span: Span,
) {
    visitor.visit_expr(&unary.operand);
}

/// Descends down a binary expression.
pub fn descend_binary<'a, V: DocumentVisitor<'a>>(
    visitor: &mut V,
    binary: &'a BinaryExpr,
    _span: Span,
) {
    visitor.visit_expr(&binary.lhs);
    visitor.visit_expr(&binary.rhs);
}

/// Descends down a call expression.
pub fn descend_call<'a, V: DocumentVisitor<'a>>(visitor: &mut V, call: &'a CallExpr, _span: Span) {
    visitor.visit_expr(&call.callee);
    for arg in &call.args {
        visitor.visit_expr(arg);
    }
}

/// Descends down a field access.
pub fn descend_field<'a, V: DocumentVisitor<'a>>(
    visitor: &mut V,
    field: &'a FieldExpr,
    _span: Span,
) {
    visitor.visit_expr(&field.base);
}

/// Describes a [document](super::Document) visitor.
///
/// Every method has a default implementation descending further down the tree (or doing nothing
/// for leaves), so an implementor only handles the node kinds it cares about; all other kinds
/// pass through. Descent follows document order.
pub trait DocumentVisitor<'a>: Sized {
    /// Visits a document.
    fn visit_document(&mut self, document: &'a Document) {
        descend_document(self, document);
    }

    /// Visits an import.
    fn visit_import(&mut self, _import: &'a Import) {}

    /// Visits an object definition.
    fn visit_object(&mut self, object: &'a ObjectDefinition) {
        descend_object(self, object);
    }

    /// Visits an object body.
    fn visit_object_body(&mut self, body: &'a ObjectBody) {
        descend_object_body(self, body);
    }

    /// Visits an object member.
    fn visit_member(&mut self, member: &'a Member) {
        descend_member(self, member);
    }

    /// Visits a binding.
    fn visit_binding(&mut self, binding: &'a Binding) {
        descend_binding(self, binding);
    }

    /// Visits a function declaration or function expression.
    fn visit_function(&mut self, function: &'a Function) {
        descend_function(self, function);
    }

    /// Visits a statement block.
    fn visit_block(&mut self, block: &'a Block) {
        descend_block(self, block);
    }

    /// Visits a statement.
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        descend_stmt(self, stmt);
    }

    /// Visits an expression.
    fn visit_expr(&mut self, expr: &'a Expr) {
        descend_expr(self, expr);
    }

    /// Visits a number literal.
    fn visit_number(&mut self, _num: f64, _span: Span) {}

    /// Visits a string literal.
    fn visit_string(&mut self, _s: &'a str, _span: Span) {}

    /// Visits a boolean literal.
    fn visit_bool(&mut self, _b: bool, _span: Span) {}

    /// Visits an identifier.
    fn visit_ident(&mut self, _name: &'a str, _span: Span) {}

    /// Visits a unary expression.
    fn visit_unary(&mut self, unary: &'a UnaryExpr, span: Span) {
        descend_unary(self, unary, span);
    }

    /// Visits a binary expression.
    fn visit_binary(&mut self, binary: &'a BinaryExpr, span: Span) {
        descend_binary(self, binary, span);
    }

    /// Visits a call expression.
    fn visit_call(&mut self, call: &'a CallExpr, span: Span) {
        descend_call(self, call, span);
    }

    /// Visits a field access.
    fn visit_field(&mut self, field: &'a FieldExpr, span: Span) {
        descend_field(self, field, span);
    }
}
