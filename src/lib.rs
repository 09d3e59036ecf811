//! devconv - developer data-format utilities
//!
//! Stateless text conversion and formatting: CSV to JSON with scalar type
//! inference, JSON to CSV with a union-of-keys header, JSON and XML
//! beautification, and line-numbered collapsible view models for the
//! formatted output. Every conversion is a pure string-to-string function;
//! presentation state lives in the viewer layer only.

// Allow dead code for library exports that may not be used by the binary yet
#![allow(dead_code)]

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod viewer;

// Re-export commonly used types
pub use conversion::{ConversionConfig, Outcome, OutputFormat};
pub use error::{ConvertError, ConvertResult};

/// Convert CSV text to pretty-printed JSON, returning the result-or-error
/// pair. Empty input succeeds with `[]`.
pub fn convert_csv_to_json(text: &str) -> Outcome {
    Outcome::from_result(conversion::csv_to_json(text, &ConversionConfig::default()))
}

/// Convert a JSON array of objects to CSV text, returning the
/// result-or-error pair. An empty array succeeds with an empty string.
pub fn convert_json_to_csv(text: &str) -> Outcome {
    Outcome::from_result(conversion::json_to_csv(text))
}

/// Re-indent JSON text, returning the result-or-error pair.
pub fn beautify_json(text: &str) -> Outcome {
    Outcome::from_result(formatter::json::beautify_json(
        text,
        &ConversionConfig::default(),
    ))
}

/// Validate and re-indent XML text, returning the result-or-error pair.
pub fn beautify_xml(text: &str) -> Outcome {
    Outcome::from_result(formatter::xml::beautify_xml(text))
}
