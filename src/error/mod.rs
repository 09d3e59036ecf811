//! Error types for the conversion and formatting operations

use std::path::PathBuf;

/// Errors surfaced by the converters and formatters.
///
/// Every error is terminal for a single conversion call: there is no retry
/// and no partial output. Structural mismatches get their own variants so
/// callers see a specific message instead of the generic parser text.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("JSON parse error: {message}")]
    JsonParse {
        message: String,
        location: Option<(usize, usize)>,
    },

    #[error("JSON must be an array of objects")]
    NotAnArray,

    #[error("All items in the JSON array must be objects")]
    NonObjectItem,

    #[error("XML parse error: {message}")]
    XmlParse { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConvertError {
    /// Build a JSON parse error from the underlying serde_json error,
    /// keeping its line/column location.
    pub fn json_parse(err: &serde_json::Error) -> Self {
        Self::JsonParse {
            message: err.to_string(),
            location: Some((err.line(), err.column())),
        }
    }

    pub fn xml_parse(message: impl Into<String>) -> Self {
        Self::XmlParse {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::JsonParse {
                message,
                location: Some((line, col)),
            } => {
                format!(
                    "JSON parse error at line {}, column {}: {}",
                    line, col, message
                )
            }
            Self::Io {
                message,
                path: Some(path),
            } => {
                format!("IO error for {}: {}", path.display(), message)
            }
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        // Serialization errors carry no position; line() is 0 there
        let location = if err.line() > 0 {
            Some((err.line(), err.column()))
        } else {
            None
        };
        Self::JsonParse {
            message: err.to_string(),
            location,
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: None,
        }
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_parse_user_message_includes_location() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let error = ConvertError::json_parse(&serde_err);
        let message = error.user_message();
        assert!(message.starts_with("JSON parse error at line 1"));
    }

    #[test]
    fn test_structural_errors_have_specific_messages() {
        assert_eq!(
            ConvertError::NotAnArray.to_string(),
            "JSON must be an array of objects"
        );
        assert_eq!(
            ConvertError::NonObjectItem.to_string(),
            "All items in the JSON array must be objects"
        );
    }

    #[test]
    fn test_io_error_user_message_with_path() {
        let error = ConvertError::io("file missing", Some(PathBuf::from("a.csv")));
        assert!(error.user_message().contains("a.csv"));
    }
}
