//! Diagnostics for weft source code.

use crate::common::Span;

/// The kind of a weft diagnostic.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DiagnosticKind {
    /// An error diagnostic. Generally, this diagnostic should be emitted for unrecoverable
    /// errors. In other cases, a warning or a note may be more applicable.
    Error,
    /// A warning diagnostic describes something that is legal but likely unintended.
    Warning,
    /// A note diagnostic is a generic annotation with no specific connotation like `error`. It
    /// can be particularly useful as an associated diagnostic, for example in expanding on a
    /// primary error.
    Note,
    /// A help diagnostic should instruct the user how their code can be changed to work
    /// correctly with weft.
    Help,
}

/// A secondary diagnostic associated with a primary `Diagnostic`.
#[derive(Clone, Debug, PartialEq)]
pub struct AssociatedDiagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub msg: String,
}

/// A diagnostic for weft source code.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub code: &'static str,
    pub span: Span,
    pub title: String,
    pub msg: Option<String>,
    pub associated_diagnostics: Vec<AssociatedDiagnostic>,
    pub unspanned_associated_diagnostics: Vec<AssociatedDiagnostic>,
}

impl Diagnostic {
    /// Creates an error diagnostic at a span.
    pub(crate) fn span_err<S, M, N>(span: S, title: M, code: &'static str, err: N) -> Diagnostic
    where
        S: Into<Span>,
        M: Into<String>,
        N: Into<Option<String>>,
    {
        Diagnostic {
            kind: DiagnosticKind::Error,
            code,
            span: span.into(),
            title: title.into(),
            msg: err.into(),
            associated_diagnostics: Vec::with_capacity(2),
            unspanned_associated_diagnostics: Vec::with_capacity(2),
        }
    }

    /// Adds a note to the diagnostic.
    pub(crate) fn with_note<M>(mut self, note: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.unspanned_associated_diagnostics
            .push(AssociatedDiagnostic {
                kind: DiagnosticKind::Note,
                span: self.span,
                msg: note.into(),
            });
        self
    }

    /// Adds a help message to the diagnostic.
    pub(crate) fn with_help<M>(mut self, help: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.unspanned_associated_diagnostics
            .push(AssociatedDiagnostic {
                kind: DiagnosticKind::Help,
                span: self.span,
                msg: help.into(),
            });
        self
    }

    /// Adds a help message to the diagnostic at a particular span.
    pub(crate) fn with_spanned_help<S, M>(mut self, span: S, help: M) -> Diagnostic
    where
        S: Into<Span>,
        M: Into<String>,
    {
        self.associated_diagnostics.push(AssociatedDiagnostic {
            kind: DiagnosticKind::Help,
            span: span.into(),
            msg: help.into(),
        });
        self
    }
}

/// Describes a diagnostic record: one kind of diagnostic a libweft module can emit, with a stable
/// code and a human-readable explanation.
pub trait DiagnosticRecord {
    const CODE: &'static str;
    const EXPLANATION: &'static str;
}

/// A registry of all diagnostics one libweft module can emit.
pub trait DiagnosticRegistry {
    fn codes_with_explanations() -> Vec<(&'static str, &'static str)>;
}

#[cfg(test)]
mod tests {
    use super::DiagnosticRegistry;
    use crate::parser::ParseErrors;
    use crate::scanner::ScanErrors;

    fn all_codes() -> Vec<(&'static str, &'static str)> {
        let mut codes = ScanErrors::codes_with_explanations();
        codes.extend(ParseErrors::codes_with_explanations());
        codes
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = all_codes().into_iter().map(|(code, _)| code).collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
        assert_eq!(total, 9);
    }

    #[test]
    fn every_code_is_explained() {
        for (code, explanation) in all_codes() {
            assert!(!explanation.trim().is_empty(), "{} lacks an explanation", code);
        }
    }
}
