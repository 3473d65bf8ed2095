//! Module `registry` describes a stateful registry of [`Document`](Document)s in a server
//! session.

use crate::document::Document;

use std::collections::HashMap;
use tower_lsp::lsp_types::Url;

/// Describes a change to a [`Document`](Document).
pub(crate) enum Change {
    /// The [`Document`](Document) at the `Url` was modified with new content.
    Modified(Url, String),
    /// The [`Document`](Document) at the `Url` was removed.
    Removed(Url),
}

/// A stateful database of [`Document`](Document)s present in a session.
///
/// The registry applies [change](Change)s to the documents it holds and hands out parsed
/// documents for answering queries. Each change re-parses the changed document from scratch;
/// analyses never carry over between revisions.
pub(crate) struct DocumentRegistry {
    /// The actual mapping of LSP text documents (represented by a `Url`) to their
    /// [`Document`](Document) representation.
    registry: HashMap<Url, Document>,
}

impl DocumentRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            registry: Default::default(),
        }
    }

    /// Applies a [document change](Change) to the registry.
    pub fn apply_change(&mut self, change: Change) {
        match change {
            Change::Removed(uri) => {
                self.registry.remove(&uri);
            }
            Change::Modified(uri, source) => {
                self.registry.insert(uri, Document::parse(source));
            }
        }
    }

    /// Retrieves the [`Document`](Document) corresponding to an LSP `Url`, if any.
    pub fn document(&self, uri: &Url) -> Option<&Document> {
        self.registry.get(uri)
    }
}
