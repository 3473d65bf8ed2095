//! Module `source_map` represents a document's text source and provides methods to convert
//! between offsets and positions in the source.

use parking_lot::RwLock;
use std::collections::HashMap;
use tower_lsp::lsp_types::Position;

/// Describes a source text, providing mappings between byte offsets and line/column positions in
/// the source text.
pub(crate) struct SourceMap {
    /// The lines in the source. Each line is represented by the byte offset of the start of the
    /// line and the length of the line.
    lines: Vec<(
        /* offset of line start */ usize,
        /* line length */ usize,
    )>,
    /// The total length of the source.
    len: usize,
    /// A cache of line/column positions -> byte offset mappings.
    cache_position2offset: RwLock<HashMap<WrappedPosition, usize>>,
    /// A cache of byte offset -> line/column positions mappings.
    cache_offset2position: RwLock<HashMap<usize, WrappedPosition>>,
}

impl SourceMap {
    /// Creates a new `SourceMap`.
    pub fn new(source: &str) -> Self {
        let mut offset = 0;
        let mut lines: Vec<_> = LinesWithEndings::from(source)
            .map(|line| {
                let line_offset_and_width = (offset, line.len() - 1);
                offset += line.len();
                line_offset_and_width
            })
            .collect();
        if let Some(l) = lines.last_mut() {
            l.1 += 1;
        }

        Self {
            lines,
            len: source.len(),
            cache_offset2position: Default::default(),
            cache_position2offset: Default::default(),
        }
    }

    /// Returns the byte offset corresponding to a line/column position in the source.
    ///
    /// Positions past the end of a line or of the source clamp to the end of the source, so a
    /// client asking about a position we never produced still gets an answer.
    pub fn to_offset(&self, position: Position) -> usize {
        let position = WrappedPosition::from(position);
        if !self.cache_position2offset.read().contains_key(&position) {
            let offset = match self.lines.get(position.line) {
                Some((line_start_offset, _)) => (line_start_offset + position.co).min(self.len),
                None => self.len,
            };
            self.cache_position2offset.write().insert(position, offset);
        }

        *self.cache_position2offset.read().get(&position).unwrap()
    }

    /// Returns the line/column position corresponding to a byte offset in the source.
    pub fn to_position(&self, offset: usize) -> Position {
        if self.lines.is_empty() {
            return Position::new(0, 0);
        }
        if !self.cache_offset2position.read().contains_key(&offset) {
            let line = self
                .lines
                .binary_search_by(|&(line_start_offset, line_len)| {
                    if offset < line_start_offset {
                        std::cmp::Ordering::Greater
                    } else if offset > line_start_offset + line_len {
                        std::cmp::Ordering::Less
                    } else {
                        std::cmp::Ordering::Equal
                    }
                })
                .unwrap_or(self.lines.len() - 1);
            let (line_start_offset, _) = self.lines[line];
            let position = WrappedPosition::new(line, offset - line_start_offset);
            self.cache_offset2position.write().insert(offset, position);
        }

        (*self.cache_offset2position.read().get(&offset).unwrap()).into()
    }
}

/// A [`Position`](Position) in `usize` coordinates, hashable for caching.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
struct WrappedPosition {
    line: usize,
    co: usize,
}

impl WrappedPosition {
    fn new(line: usize, co: usize) -> Self {
        Self { line, co }
    }
}

impl From<Position> for WrappedPosition {
    fn from(p: Position) -> Self {
        Self {
            line: p.line as usize,
            co: p.character as usize,
        }
    }
}

impl From<WrappedPosition> for Position {
    fn from(p: WrappedPosition) -> Self {
        Position::new(p.line as u64, p.co as u64)
    }
}

/// Iterator yielding every line in a string. The line includes the newline character.
struct LinesWithEndings<'a> {
    input: &'a str,
}

impl<'a> LinesWithEndings<'a> {
    fn from(input: &'a str) -> LinesWithEndings<'a> {
        LinesWithEndings { input }
    }
}

impl<'a> Iterator for LinesWithEndings<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.input.is_empty() {
            return None;
        }
        let split = self
            .input
            .find('\n')
            .map(|i| i + 1)
            .unwrap_or_else(|| self.input.len());
        let (line, rest) = self.input.split_at(split);
        self.input = rest;
        Some(line)
    }
}
