//! Module `document` describes the model by which weft text files are handled in a server
//! session.
//!
//! A document pairs a text file's source with the analyses made over it — the parsed tree and
//! its diagnostics — and answers the structural queries the server serves. The folding and
//! selection services here are thin consumers of [`libweft::ranges`](libweft::ranges).

use crate::shims;
use crate::source_map::SourceMap;

use libweft::diagnostics as w;
use libweft::{find_closest_range, ranges};
use tower_lsp::lsp_types::{Diagnostic, FoldingRange, Position, SelectionRange, Url};

/// A weft document known to a server session.
pub(crate) struct Document {
    /// The source text of the document.
    #[allow(dead_code)]
    source: String,
    /// The [`SourceMap`](SourceMap) for the text of the document.
    source_map: SourceMap,
    /// The parsed document tree.
    tree: libweft::Document,
    /// Diagnostics collected while scanning and parsing the document.
    diagnostics: Vec<w::Diagnostic>,
}

impl Document {
    /// Creates a document by parsing source text.
    pub fn parse(source: String) -> Self {
        let libweft::ScanResult {
            tokens,
            diagnostics,
        } = libweft::scan(&*source);
        let libweft::ParseResult {
            document: tree,
            diagnostics: parse_diagnostics,
        } = libweft::parse_document(tokens, &source);

        let mut diagnostics = diagnostics;
        diagnostics.extend(parse_diagnostics);
        let source_map = SourceMap::new(&source);

        Self {
            source,
            source_map,
            tree,
            diagnostics,
        }
    }

    /// The source text of the document.
    #[cfg(test)]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Retrieves all diagnostics for the document as LSP diagnostics.
    pub fn all_diagnostics(&self, uri: &Url) -> Vec<Diagnostic> {
        shims::convert_diagnostics(&self.diagnostics, "weft", uri, &self.source_map)
    }

    /// Returns the foldable block ranges of the document: one folding range per structural
    /// range, in document order.
    pub fn folding_ranges(&self) -> Vec<FoldingRange> {
        ranges::document_ranges(&self.tree)
            .into_iter()
            .map(|range| {
                let Position {
                    line: start_line,
                    character: start_character,
                } = self.source_map.to_position(range.begin);
                let Position {
                    line: end_line,
                    character: end_character,
                } = self.source_map.to_position(range.end);
                FoldingRange {
                    start_line,
                    start_character: Some(start_character),
                    end_line,
                    end_character: Some(end_character),
                    kind: None,
                }
            })
            .collect()
    }

    /// Returns the selection range hierarchy around a position: the block most tightly
    /// enclosing the position, chained to each successively wider enclosing block. `None` iff
    /// no block encloses the position.
    pub fn selection_range(&self, position: Position) -> Option<SelectionRange> {
        let offset = self.source_map.to_offset(position);
        let mut remaining = ranges::document_ranges(&self.tree);

        // Peel enclosing blocks tightest-first; each query's winner becomes the next link of
        // the hierarchy.
        let mut enclosing = Vec::new();
        loop {
            let closest = find_closest_range(&remaining, offset);
            if closest.is_empty() {
                break;
            }
            enclosing.push((closest.begin, closest.end));
            remaining.retain(|range| (range.begin, range.end) != (closest.begin, closest.end));
        }

        enclosing
            .into_iter()
            .rev()
            .fold(None, |parent, (begin, end)| {
                Some(Box::new(SelectionRange {
                    range: tower_lsp::lsp_types::Range::new(
                        self.source_map.to_position(begin),
                        self.source_map.to_position(end),
                    ),
                    parent,
                }))
            })
            .map(|boxed| *boxed)
    }
}

#[cfg(test)]
mod document_tests {
    use super::Document;
    use pretty_assertions::assert_eq;
    use tower_lsp::lsp_types::{Position, Url};

    fn weft_document(content: &str) -> Document {
        Document::parse(content.to_owned())
    }

    #[test]
    fn diagnostics() {
        let document = weft_document("Item { width: 40");
        let uri = Url::parse("file:///main.weft").unwrap();
        let diagnostics = document.all_diagnostics(&uri);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn folding_ranges_cover_blocks() {
        let document = weft_document("Item {\n  header: Banner {\n  }\n}\n");
        let folding_ranges = document.folding_ranges();
        assert_eq!(folding_ranges.len(), 2);
        assert_eq!(folding_ranges[0].start_line, 0);
        assert_eq!(folding_ranges[0].end_line, 3);
        assert_eq!(folding_ranges[1].start_line, 1);
        assert_eq!(folding_ranges[1].end_line, 2);
    }

    #[test]
    fn selection_range_is_tightest_first() {
        let document = weft_document("Item { on_close: { save() } }");
        let save = document.source().find("save").unwrap() as u64;
        let selection = document
            .selection_range(Position::new(0, save))
            .expect("position is inside two blocks");

        // innermost: the script binding block
        assert_eq!(selection.range.start, Position::new(0, 17));
        let parent = selection.parent.expect("the object body encloses the block");
        assert_eq!(parent.range.start, Position::new(0, 5));
        assert!(parent.parent.is_none());
    }

    #[test]
    fn selection_range_misses_outside_all_blocks() {
        let document = weft_document("Item { }");
        assert!(document.selection_range(Position::new(0, 0)).is_none());
    }
}
