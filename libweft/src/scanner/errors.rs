//! Diagnostic errors produced by the scanner.

use crate::diagnostics::{DiagnosticRecord, DiagnosticRegistry};

macro_rules! define_errors {
    ($($(#[doc = $doc:expr])+ $code:ident: $error:ident $gen_macro:tt)*) => {$(
        $(#[doc = $doc])+
        pub(crate) struct $error;

        impl DiagnosticRecord for $error {
            const CODE: &'static str = stringify!($code);
            const EXPLANATION: &'static str = concat!($($doc, "\n"),+);
        })*

        pub struct ScanErrors;

        impl DiagnosticRegistry for ScanErrors {
            fn codes_with_explanations() -> Vec<(&'static str, &'static str)> {
                let mut vec = Vec::new();
                $(vec.push(($error::CODE, $error::EXPLANATION));)*
                vec
            }
        }

        $(
            macro_rules! $error $gen_macro
        )*
    };
}

define_errors! {
    ///This error fires on characters that cannot begin any weft token.
    ///
    ///For example, in the document
    ///
    ///```text
    ///Item { width: @4 }
    ///              ^- offending character
    ///```
    ///
    ///`@` cannot start a number, string, identifier, keyword, or symbol, and so is not part of
    ///the weft language.
    S0001: InvalidCharacter {
        ($span:expr, $ch:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                format!("Invalid character `{}`", $ch),
                InvalidCharacter::CODE,
                "not a weft token".to_string(),
            )
        }}
    }

    ///This error fires on string literals that are still open when their line (or the document)
    ///ends.
    ///
    ///```text
    ///Item { title: "hello }
    ///              ^- string opened here is never closed
    ///```
    ///
    ///Strings must be closed with `"` before the end of the line they start on.
    S0002: UnterminatedString {
        ($span:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                "Unterminated string",
                UnterminatedString::CODE,
                "string opened here is never closed".to_string(),
            )
            .with_help("close the string with `\"`")
        }}
    }

    ///This error fires on block comments that are still open when the document ends.
    ///
    ///```text
    ///Item { /* sizes
    ///       ^- comment opened here is never closed
    ///```
    ///
    ///Block comments must be closed with `*/`.
    S0003: UnterminatedComment {
        ($span:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                "Unterminated block comment",
                UnterminatedComment::CODE,
                "comment opened here is never closed".to_string(),
            )
            .with_help("close the comment with `*/`")
        }}
    }
}
