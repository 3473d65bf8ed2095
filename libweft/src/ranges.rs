//! Module `ranges` computes the structural ranges of a weft document.
//!
//! A structural range is the braces-delimited extent of a construct an editor treats as one
//! block: an object body, a bound object's body, a function body, or a script binding's
//! statement block. Editor features map cursor positions to enclosing blocks through these
//! ranges — folding, scope highlighting, indentation boundaries.
//!
//! Collection walks a parsed tree once, in document order, and returns a flat list of possibly
//! nested ranges; [`find_closest_range`](find_closest_range) then answers "which block is the
//! cursor in" against that list. Collection never fails: a tree the parser recovered into still
//! yields a range for every construct, degenerate where delimiters were missing.

use crate::common::Span;
use crate::grammar::visit::{self, DocumentVisitor};
use crate::grammar::*;

/// A structural range in a weft document.
///
/// A range borrows its [originating node](RangeNode) and must not outlive the tree it was
/// collected from.
#[derive(Clone, Copy, Debug)]
pub struct Range<'a> {
    /// The node this range was collected from; `None` only in [the empty range](Range::empty).
    pub node: Option<RangeNode<'a>>,
    /// Byte offset of the start of the opening delimiter.
    pub begin: usize,
    /// Byte offset one past the end of the closing delimiter.
    pub end: usize,
}

/// The originating node of a [`Range`](Range).
#[derive(Clone, Copy, Debug)]
pub enum RangeNode<'a> {
    /// An object definition; the range is its body.
    Object(&'a ObjectDefinition),
    /// A binding with an object value; the range is the bound object's body.
    ObjectBinding(&'a Binding),
    /// A binding with a statement-block value; the range is the block.
    ScriptBinding(&'a Binding),
    /// A function declaration or expression; the range is its body.
    Function(&'a Function),
}

impl<'a> Range<'a> {
    /// The empty range: no node, zero width. This is the "not found" result of
    /// [`find_closest_range`](find_closest_range); collection never produces it.
    pub fn empty() -> Self {
        Self {
            node: None,
            begin: 0,
            end: 0,
        }
    }

    /// Whether this is [the empty range](Range::empty).
    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Whether `position` falls within this range. The closing delimiter's trailing edge
    /// counts: a cursor immediately after `}` still belongs to the block.
    pub fn encloses(&self, position: usize) -> bool {
        self.begin <= position && position <= self.end
    }

    /// The range of the block between `lbrace` and `rbrace`, delimiters inclusive. A recovered
    /// parse can leave the closing delimiter zero-width; the range is clamped so
    /// `begin <= end` always holds.
    fn over_block(node: RangeNode<'a>, lbrace: Span, rbrace: Span) -> Self {
        let begin = lbrace.lo;
        let end = if rbrace.hi < begin { begin } else { rbrace.hi };
        Self {
            node: Some(node),
            begin,
            end,
        }
    }

    fn width(&self) -> usize {
        self.end - self.begin
    }
}

/// Collects the structural ranges of a parsed document, in document order.
///
/// A document without a root object — empty source, or a source the parser could not extract an
/// object from — yields an empty list.
pub fn document_ranges(document: &Document) -> Vec<Range<'_>> {
    match &document.root {
        Some(root) => object_ranges(root),
        None => Vec::new(),
    }
}

/// Collects the structural ranges of the tree rooted at an object definition, in document
/// order.
pub fn object_ranges(object: &ObjectDefinition) -> Vec<Range<'_>> {
    let mut collector = RangeCollector { ranges: Vec::new() };
    collector.visit_object(object);
    collector.ranges
}

/// Finds the range most tightly enclosing `position`.
///
/// Among the ranges that enclose `position`, the narrowest wins; at equal width, the one
/// collected later wins — nested ranges are appended after the ranges containing them, so that
/// is the more deeply nested construct. Returns [the empty range](Range::empty) if no range
/// encloses `position`.
pub fn find_closest_range<'a>(ranges: &[Range<'a>], position: usize) -> Range<'a> {
    let mut closest = Range::empty();
    let mut enclosed = false;
    for range in ranges {
        if !range.encloses(position) {
            continue;
        }
        if !enclosed || range.width() <= closest.width() {
            closest = *range;
            enclosed = true;
        }
    }
    closest
}

struct RangeCollector<'a> {
    ranges: Vec<Range<'a>>,
}

impl<'a> DocumentVisitor<'a> for RangeCollector<'a> {
    fn visit_object(&mut self, object: &'a ObjectDefinition) {
        self.ranges.push(Range::over_block(
            RangeNode::Object(object),
            object.body.lbrace,
            object.body.rbrace,
        ));
        visit::descend_object(self, object);
    }

    fn visit_binding(&mut self, binding: &'a Binding) {
        match &binding.value {
            BindingValue::Object { body, .. } => self.ranges.push(Range::over_block(
                RangeNode::ObjectBinding(binding),
                body.lbrace,
                body.rbrace,
            )),
            BindingValue::Block(block) => self.ranges.push(Range::over_block(
                RangeNode::ScriptBinding(binding),
                block.lbrace,
                block.rbrace,
            )),
            BindingValue::Expr(_) => {}
        }
        visit::descend_binding(self, binding);
    }

    fn visit_function(&mut self, function: &'a Function) {
        self.ranges.push(Range::over_block(
            RangeNode::Function(function),
            function.body.lbrace,
            function.body.rbrace,
        ));
        visit::descend_function(self, function);
    }
}
