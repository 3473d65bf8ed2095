//! Crate `weft_ls` implements a language server for [weft](libweft) documents.

#![deny(warnings)]

use parking_lot::{
    MappedRwLockReadGuard, MappedRwLockWriteGuard, RwLock, RwLockReadGuard, RwLockWriteGuard,
};
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService, Server};

mod document;
mod init;
mod registry;
mod shims;
mod source_map;

use init::InitializationOptions;
use registry::{Change, DocumentRegistry};

#[cfg(test)]
mod tests;

/// A weft language server.
pub struct WeftLS {
    /// LSP client the server communicates with.
    client: Client,

    ///////////////////////////////////////////////////////////////////////////////
    ////// The following fields are always correctly set after `initialize`. //////
    ///////////////////////////////////////////////////////////////////////////////
    /// The database of documents known to the server session.
    registry: RwLock<Option<DocumentRegistry>>,
    /// Options the server session was initialized with.
    options: RwLock<InitializationOptions>,
}

impl WeftLS {
    /// Creates a new language server given a server client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            registry: RwLock::new(None),
            options: RwLock::new(InitializationOptions::default()),
        }
    }

    /// Returns capabilities of the language server.
    pub fn capabilities() -> ServerCapabilities {
        let text_document_sync = Some(TextDocumentSyncCapability::Options(
            TextDocumentSyncOptions {
                open_close: Some(true),
                change: Some(TextDocumentSyncKind::Full),
                ..TextDocumentSyncOptions::default()
            },
        ));
        let folding_range_provider = Some(FoldingRangeProviderCapability::Simple(true));
        let selection_range_provider = Some(SelectionRangeProviderCapability::Simple(true));

        ServerCapabilities {
            text_document_sync,
            folding_range_provider,
            selection_range_provider,
            ..ServerCapabilities::default()
        }
    }

    /// Records a document content change.
    async fn change(&self, uri: Url, text: String, version: Option<i64>) {
        self.registry_mut()
            .apply_change(Change::Modified(uri.clone(), text));

        if !self.options.read().publish_diagnostics {
            return;
        }
        let diagnostics = self
            .registry()
            .document(&uri)
            .map(|document| document.all_diagnostics(&uri));
        if let Some(diagnostics) = diagnostics {
            self.client
                .publish_diagnostics(uri, diagnostics, version)
                .await;
        }
    }

    /// Records the closing of a document.
    fn close(&self, uri: &Url) {
        self.registry_mut().apply_change(Change::Removed(uri.clone()));
    }

    /// Retrieves a reference to the document registry.
    fn registry(&self) -> MappedRwLockReadGuard<'_, DocumentRegistry> {
        RwLockReadGuard::map(self.registry.read(), |r| r.as_ref().unwrap())
    }

    /// Retrieves a mutable reference to the document registry.
    fn registry_mut(&self) -> MappedRwLockWriteGuard<'_, DocumentRegistry> {
        RwLockWriteGuard::map(self.registry.write(), |r| r.as_mut().unwrap())
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for WeftLS {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let (options, diags) = InitializationOptions::from_json(params.initialization_options);
        for diag in diags {
            self.client
                .log_message(MessageType::Error, diag.to_string())
                .await;
        }

        *self.registry.write() = Some(DocumentRegistry::new());
        *self.options.write() = options;

        Ok(InitializeResult {
            capabilities: WeftLS::capabilities(),
            ..InitializeResult::default()
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        self.client
            .log_message(MessageType::Info, "Weft language server initialized.")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let TextDocumentItem {
            uri, text, version, ..
        } = params.text_document;
        self.change(uri, text, Some(version)).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let VersionedTextDocumentIdentifier { uri, version, .. } = params.text_document;
        // NOTE: We specify that we expect full-content syncs in the server capabilities,
        // so here we assume the only change passed is a change of the entire document's content.
        let TextDocumentContentChangeEvent { text, .. } =
            params.content_changes.into_iter().next().unwrap();
        self.change(uri, text, version).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let TextDocumentIdentifier { uri } = params.text_document;
        self.close(&uri);
    }

    async fn folding_range(&self, params: FoldingRangeParams) -> Result<Option<Vec<FoldingRange>>> {
        let FoldingRangeParams {
            text_document: TextDocumentIdentifier { uri },
            ..
        } = params;

        let folding_ranges = self
            .registry()
            .document(&uri)
            .map(|document| document.folding_ranges());

        Ok(folding_ranges)
    }

    async fn selection_range(
        &self,
        params: SelectionRangeParams,
    ) -> Result<Option<Vec<SelectionRange>>> {
        let SelectionRangeParams {
            text_document: TextDocumentIdentifier { uri },
            positions,
            ..
        } = params;

        // To uphold the correspondence selection_range(positions[i]) = response[i], answer with
        // selection ranges only if every requested position resolves to one.
        let selection_ranges = self.registry().document(&uri).and_then(|document| {
            positions
                .iter()
                .map(|position| document.selection_range(*position))
                .collect::<Option<Vec<_>>>()
        });

        Ok(selection_ranges)
    }
}

#[tokio::main]
async fn main() {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, messages) = LspService::new(WeftLS::new);
    Server::new(stdin, stdout)
        .interleave(messages)
        .serve(service)
        .await;
}
