use super::*;
use crate::common::Span;

/// A parsed weft document.
///
/// A document is a list of imports followed by at most one root object definition. A document
/// with no root object (empty source, or a source the parser could not extract an object from)
/// carries `root: None`.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub imports: Vec<Import>,
    pub root: Option<ObjectDefinition>,
    /// The span of the entire document.
    pub span: Span,
}

/// An import at the head of a document, e.g. `import display 1.2`.
#[derive(Clone, Debug, PartialEq)]
pub struct Import {
    pub path: QualifiedId,
    pub version: Option<(f64, Span)>,
    pub span: Span,
}
