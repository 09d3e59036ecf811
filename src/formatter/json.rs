//! JSON pretty printing

use crate::conversion::ConversionConfig;
use crate::error::{ConvertError, ConvertResult};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Parse JSON text and re-serialize it with the configured indentation.
pub fn beautify_json(text: &str, config: &ConversionConfig) -> ConvertResult<String> {
    let value: Value = serde_json::from_str(text).map_err(|e| ConvertError::json_parse(&e))?;
    to_pretty_string(&value, config.indent_size)
}

/// Serialize a JSON value with `indent_size` spaces per level.
pub fn to_pretty_string(value: &Value, indent_size: u8) -> ConvertResult<String> {
    let indent = " ".repeat(indent_size as usize);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| ConvertError::io(e.to_string(), None))
}
