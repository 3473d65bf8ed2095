use super::*;
use crate::common::Span;

/// A simple name, e.g. a function or parameter name.
#[derive(Clone, Debug, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

/// A possibly-dotted name, e.g. `width` or `display.Window`.
#[derive(Clone, Debug, PartialEq)]
pub struct QualifiedId {
    pub name: String,
    pub span: Span,
}

/// An object definition. For example,
///
/// ```text
/// Button { label: "ok" }
/// ```
///
/// defines a `Button` object whose body binds `label`.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectDefinition {
    pub type_name: QualifiedId,
    pub body: ObjectBody,
    pub span: Span,
}

/// The braces-delimited body of an object.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectBody {
    /// The span of the opening `{`.
    pub lbrace: Span,
    pub members: Vec<Member>,
    /// The span of the closing `}`. Zero-width at the recovery point if the body was never
    /// closed.
    pub rbrace: Span,
}

impl ObjectBody {
    /// The span of the body, braces inclusive.
    pub fn span(&self) -> Span {
        self.lbrace.to(self.rbrace)
    }
}

/// A member of an [object body](ObjectBody).
#[derive(Clone, Debug, PartialEq)]
pub enum Member {
    /// A child object definition.
    Object(ObjectDefinition),
    /// A property binding.
    Binding(Binding),
    /// A function declaration.
    Function(Function),
}

impl Member {
    pub fn span(&self) -> Span {
        match self {
            Member::Object(object) => object.span,
            Member::Binding(binding) => binding.span,
            Member::Function(function) => function.span,
        }
    }
}

/// A property binding, e.g. `width: 40`.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    pub name: QualifiedId,
    pub value: BindingValue,
    pub span: Span,
}

/// The right-hand side of a [binding](Binding).
#[derive(Clone, Debug, PartialEq)]
pub enum BindingValue {
    /// An object value, e.g. `header: Banner { height: 40 }`.
    ///
    /// The bound object's type name and body are held inline; there is no nested
    /// object-definition node for the value.
    Object {
        type_name: QualifiedId,
        body: ObjectBody,
    },
    /// A statement block value, e.g. `on_close: { save(); teardown(); }`.
    Block(Block),
    /// A plain expression value, e.g. `width: parent.width / 2`.
    Expr(Expr),
}
