//! Diagnostic errors produced by the parser.

use crate::diagnostics::{DiagnosticRecord, DiagnosticRegistry};

macro_rules! define_errors {
    ($($(#[doc = $doc:expr])+ $code:ident: $error:ident $gen_macro:tt)*) => {$(
        $(#[doc = $doc])+
        pub(crate) struct $error;

        impl DiagnosticRecord for $error {
            const CODE: &'static str = stringify!($code);
            const EXPLANATION: &'static str = concat!($($doc, "\n"),+);
        })*

        /// Diagnostic errors produced by the parser.
        pub struct ParseErrors;

        impl DiagnosticRegistry for ParseErrors {
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
    ///This error fires on tokens that cannot start an object member.
    ///
    ///An object body holds three kinds of members: child object definitions, property bindings,
    ///and function declarations. For example, in the document
    ///
    ///```text
    ///Item { 40 }
    ///       ^^- offending token
    ///```
    ///
    ///`40` starts none of these, and the parser skips ahead to the next plausible member.
    P0001: ExpectedMember {
        ($span:expr, $found:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                format!("Expected an object member, found {}", $found),
                ExpectedMember::CODE,
                "expected a child object, a binding, or a function".to_string(),
            )
        }}
    }

    ///This error fires on token sequences that are expected to parse as an expression, but do
    ///not.
    ///
    ///The following are examples of weft documents that emit this error:
    ///
    ///```text
    ///Item { width: 1 + }
    ///                  ^- offending token
    ///```
    ///
    ///```text
    ///Item { width: }
    ///              ^- offending token
    ///```
    ///
    ///In all cases such documents are malformed and should be refactored to include complete
    ///expressions.
    P0002: ExpectedExpr {
        ($span:expr, $found:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                format!("Expected an expression, found {}", $found),
                ExpectedExpr::CODE,
                "expected an expression".to_string(),
            )
        }}
    }

    ///This error fires on `{` delimiters whose closing `}` is missing.
    ///
    ///```text
    ///Item { width: 40
    ///     ^- this brace is never closed
    ///```
    ///
    ///The parser recovers by closing the construct at the point it had to give up, recording a
    ///zero-width closing delimiter there, so later constructs (and structural ranges) are still
    ///produced.
    P0003: UnclosedDelimiter {
        ($span:expr, $open:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                "Expected `}`",
                UnclosedDelimiter::CODE,
                "the enclosing block is never closed".to_string(),
            )
            .with_spanned_help($open, "opened here")
        }}
    }

    ///This error fires when one particular token is required and another is found. For example,
    ///a function declaration requires a parameter list:
    ///
    ///```text
    ///Item { function refresh { } }
    ///                        ^- expected `(`
    ///```
    P0004: ExpectedToken {
        ($span:expr, $expected:expr, $found:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                format!("Expected {}, found {}", $expected, $found),
                ExpectedToken::CODE,
                format!("expected {}", $expected),
            )
        }}
    }

    ///A weft document holds exactly one root object definition. This error fires on tokens
    ///after the root object's closing brace:
    ///
    ///```text
    ///Item { }
    ///Row { }
    ///^^^- offending tokens
    ///```
    ///
    ///Everything after the first root object is skipped.
    P0005: ExtraRootObject {
        ($span:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                "Unexpected tokens after the root object",
                ExtraRootObject::CODE,
                "a document holds a single root object".to_string(),
            )
            .with_note("everything after the root object is ignored")
        }}
    }

    ///This error fires when a document's content does not begin with an object definition.
    ///
    ///```text
    ///import display
    ///40
    ///^^- offending token
    ///```
    ///
    ///A weft document is a list of imports followed by one root object definition. The parser
    ///skips ahead to the first plausible object definition.
    P0006: ExpectedObject {
        ($span:expr, $found:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                format!("Expected an object definition, found {}", $found),
                ExpectedObject::CODE,
                "a document is a list of imports followed by one root object".to_string(),
            )
        }}
    }
}
