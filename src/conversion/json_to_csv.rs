//! JSON to CSV conversion

use crate::error::{ConvertError, ConvertResult};
use serde_json::{Map, Value};

/// Convert a JSON array of objects into CSV text.
///
/// The column set is the union of all top-level keys across the elements,
/// in first-seen order. Every present field is emitted quoted (numbers and
/// booleans included; that is the intended output shape); missing and null
/// fields become empty, unquoted fields. Nested objects and arrays are
/// flattened to their JSON text representation rather than expanded into
/// columns. Rows are newline-terminated.
pub fn json_to_csv(json: &str) -> ConvertResult<String> {
    let data: Value = serde_json::from_str(json).map_err(|e| ConvertError::json_parse(&e))?;

    let items = match data {
        Value::Array(items) => items,
        _ => return Err(ConvertError::NotAnArray),
    };

    // An empty array is a success with empty output, not a header-only row
    if items.is_empty() {
        return Ok(String::new());
    }

    let mut objects: Vec<&Map<String, Value>> = Vec::with_capacity(items.len());
    for item in &items {
        match item {
            Value::Object(map) => objects.push(map),
            _ => return Err(ConvertError::NonObjectItem),
        }
    }

    let headers = collect_headers(&objects);

    let mut csv = String::new();
    // Header names are wrapped verbatim; embedded quotes are doubled in
    // data fields only
    let header_row: Vec<String> = headers.iter().map(|h| format!("\"{}\"", h)).collect();
    csv.push_str(&header_row.join(","));
    csv.push('\n');

    for object in &objects {
        let row: Vec<String> = headers
            .iter()
            .map(|header| render_field(object.get(header.as_str())))
            .collect::<ConvertResult<_>>()?;
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    Ok(csv)
}

/// Union of all keys across the objects, in first-encountered order.
fn collect_headers(objects: &[&Map<String, Value>]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for object in objects {
        for key in object.keys() {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
    }
    headers
}

fn render_field(value: Option<&Value>) -> ConvertResult<String> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(nested @ (Value::Object(_) | Value::Array(_))) => {
            Ok(quote_field(&serde_json::to_string(nested)?))
        }
        Some(Value::String(s)) => Ok(quote_field(s)),
        // Numbers and booleans render as their JSON text
        Some(scalar) => Ok(quote_field(&scalar.to_string())),
    }
}

/// Double embedded quotes, then wrap the whole field in quotes.
fn quote_field(raw: &str) -> String {
    format!("\"{}\"", raw.replace('"', "\"\""))
}
