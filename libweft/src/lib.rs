//! Crate `libweft` parses weft documents — a small declarative UI dialect — and computes the
//! structural information editors need from them.
//!
//! The crate is a pipeline: [`scan`](scan) tokenizes a document, [`parse_document`](parse_document)
//! builds its [grammar](grammar) tree, and [`ranges`](ranges) walks the tree into the flat list
//! of block extents that backs folding and cursor-scope queries. Every stage is total — anomalies
//! become [diagnostics](diagnostics), not failures.

pub mod common;
pub mod diagnostics;

pub mod scanner;
pub use scanner::{scan, ScanResult};

mod parser;
pub use parser::{parse_document, ParseErrors, ParseResult};

pub mod grammar;
pub use grammar::*;

pub mod ranges;
pub use ranges::{document_ranges, find_closest_range, object_ranges, Range, RangeNode};

mod utils;

pub use common::Span;
