//! Module `shims` converts weft diagnostics to LSP types.

use crate::source_map::SourceMap;

use libweft::diagnostics as w;
use libweft::Span;
use tower_lsp::lsp_types::*;

pub(crate) fn convert_diagnostics(
    diagnostics: &[w::Diagnostic],
    provider: &str,
    uri: &Url,
    source_map: &SourceMap,
) -> Vec<Diagnostic> {
    diagnostics
        .iter()
        .map(|diagnostic| Diagnostic {
            range: to_range(&diagnostic.span, source_map),
            severity: Some(to_severity(&diagnostic.kind)),
            code: Some(NumberOrString::String(diagnostic.code.to_string())),
            source: Some(provider.to_string()),
            message: flatten_diagnostic_msg(diagnostic),
            related_information: Some(flatten_related(diagnostic, uri, source_map)),
            tags: None,
        })
        .collect()
}

fn flatten_diagnostic_msg(diagnostic: &w::Diagnostic) -> String {
    match &diagnostic.msg {
        Some(msg) => format!("{} \\ {}", diagnostic.title, msg),
        None => diagnostic.title.to_string(),
    }
}

fn flatten_related(
    diagnostic: &w::Diagnostic,
    uri: &Url,
    source_map: &SourceMap,
) -> Vec<DiagnosticRelatedInformation> {
    diagnostic
        .associated_diagnostics
        .iter()
        .chain(diagnostic.unspanned_associated_diagnostics.iter())
        .map(|ad| DiagnosticRelatedInformation {
            location: Location::new(uri.clone(), to_range(&ad.span, source_map)),
            message: ad.msg.to_string(),
        })
        .collect()
}

fn to_severity(diagnostic_kind: &w::DiagnosticKind) -> DiagnosticSeverity {
    match diagnostic_kind {
        w::DiagnosticKind::Error => DiagnosticSeverity::Error,
        w::DiagnosticKind::Warning => DiagnosticSeverity::Warning,
        w::DiagnosticKind::Note => DiagnosticSeverity::Information,
        w::DiagnosticKind::Help => DiagnosticSeverity::Hint,
    }
}

pub(crate) fn to_range(span: &Span, source_map: &SourceMap) -> Range {
    Range::new(
        source_map.to_position(span.lo),
        source_map.to_position(span.hi),
    )
}
