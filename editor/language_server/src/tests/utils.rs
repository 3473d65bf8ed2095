//! Module `utils` provides test utilities for the weft language server.

use crate::source_map::SourceMap;

use tower_lsp::lsp_types::*;

/// The [`Range`](Range) of the first occurrence of `subtext` in `text`.
pub fn range_of(subtext: &str, text: &str) -> Range {
    let start = text
        .match_indices(subtext)
        .next()
        .expect("Subtext not found.")
        .0;
    let map = SourceMap::new(text);
    Range::new(
        map.to_position(start),
        map.to_position(start + subtext.len()),
    )
}
