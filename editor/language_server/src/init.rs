//! Module `init` describes initialization options of the weft LS.

use serde::Deserialize;
use serde_json::Value;

/// Options a client configures a server session with.
#[derive(Debug, PartialEq)]
pub struct InitializationOptions {
    /// Whether parse diagnostics are published when a document changes. On by default.
    pub publish_diagnostics: bool,
}

impl Default for InitializationOptions {
    fn default() -> Self {
        Self {
            publish_diagnostics: true,
        }
    }
}

/// A problem with client-provided initialization options. Options degrade to their defaults;
/// initialization itself never fails.
#[derive(Debug, PartialEq)]
pub enum InitializationDiagnostic {
    CouldntParse(String),
}

#[derive(Deserialize)]
struct SerializedInitializationOptions {
    publish_diagnostics: Option<bool>,
}

impl InitializationOptions {
    pub fn from_json(json: Option<Value>) -> (Self, Vec<InitializationDiagnostic>) {
        let json = match json {
            Some(json) => json,
            None => return (Default::default(), vec![]),
        };

        let opts: SerializedInitializationOptions = match serde_json::from_value(json) {
            Ok(opts) => opts,
            Err(e) => {
                return (
                    Default::default(),
                    vec![InitializationDiagnostic::CouldntParse(e.to_string())],
                );
            }
        };

        let SerializedInitializationOptions {
            publish_diagnostics,
        } = opts;
        (
            Self {
                publish_diagnostics: publish_diagnostics.unwrap_or(true),
            },
            vec![],
        )
    }
}

impl std::fmt::Display for InitializationDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CouldntParse(why) => {
                format!("Failed to parse language server options:\n{}", why)
            }
        }
        .fmt(f)
    }
}
