//! CSV/JSON conversion module
//!
//! Both converters are pure string-to-string functions; all state is local
//! to a single call.

pub mod config;
pub mod csv_to_json;
pub mod json_to_csv;

pub use config::ConversionConfig;
pub use csv_to_json::csv_to_json;
pub use json_to_csv::json_to_csv;

use crate::error::ConvertResult;

/// Result-or-error pair returned by the public entry points.
///
/// Exactly one side is populated; the empty-input success cases (`[]`,
/// empty string) populate `output`.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub output: Option<String>,
    pub error: Option<String>,
}

impl Outcome {
    pub fn success(output: String) -> Self {
        Self {
            output: Some(output),
            error: None,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            output: None,
            error: Some(message),
        }
    }

    /// Collapse a conversion result into the pair shape, surfacing the
    /// user-facing message on failure.
    pub fn from_result(result: ConvertResult<String>) -> Self {
        match result {
            Ok(output) => Self::success(output),
            Err(err) => Self::failure(err.user_message()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Output formats the CLI can package as downloadable files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Xml,
}

impl OutputFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Json => "application/json",
            OutputFormat::Csv => "text/csv",
            OutputFormat::Xml => "application/xml",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Xml => "xml",
        }
    }

    /// Default filename offered when packaging output as a download.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "data.json",
            OutputFormat::Csv => "data.csv",
            OutputFormat::Xml => "data.xml",
        }
    }
}
