//! Structured result and failure emission.
//!
//! Success always carries `changed: bool`; failure always carries
//! `failed: true` and the preserved error message. JSON goes to stdout
//! (the result channel), pretty failures go to stderr.

use serde_json::{Value, json};

use scalehook_core::Outcome;

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object on stdout.
    Json,
}

impl OutputFormat {
    /// Parse the `--format` flag; anything but `json` is pretty.
    pub(crate) fn from_flag(flag: &str) -> Self {
        match flag {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Report a completed reconciliation.
pub(crate) fn emit_outcome(format: OutputFormat, outcome: &Outcome) {
    match format {
        OutputFormat::Json => println!("{}", success_value(outcome)),
        OutputFormat::Pretty => {
            println!("result: {outcome}");
            println!("changed: {}", outcome.changed());
        },
    }
}

/// Report a fatal error.
pub(crate) fn emit_failure(format: OutputFormat, message: &str) {
    match format {
        OutputFormat::Json => println!("{}", failure_value(message)),
        OutputFormat::Pretty => eprintln!("error: {message}"),
    }
}

fn success_value(outcome: &Outcome) -> Value {
    let mut value = serde_json::to_value(outcome).unwrap_or_else(|_| json!({}));
    if let Some(map) = value.as_object_mut() {
        map.insert("changed".to_owned(), json!(outcome.changed()));
    }
    value
}

fn failure_value(message: &str) -> Value {
    json!({
        "failed": true,
        "msg": message,
    })
}
