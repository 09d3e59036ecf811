//! CSV to JSON conversion

use crate::conversion::ConversionConfig;
use crate::error::ConvertResult;
use crate::formatter::json::to_pretty_string;
use crate::parser::csv_line::split_csv_line;
use crate::parser::infer::Scalar;
use serde_json::{Map, Value};

/// Convert CSV text into pretty-printed JSON.
///
/// The first non-blank line is the header row; every following non-blank
/// line becomes one record, zipped positionally against the headers. Rows
/// shorter than the header get empty strings for the missing trailing
/// columns; extra values beyond the header are dropped. With no non-blank
/// lines at all the result is the empty array `[]` (success, not an
/// error).
///
/// Header/value misalignment and unbalanced quotes are tolerated
/// best-effort cases, never errors.
pub fn csv_to_json(csv: &str, config: &ConversionConfig) -> ConvertResult<String> {
    let lines: Vec<&str> = csv
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect();

    let mut records: Vec<Value> = Vec::new();

    if let Some((header_line, data_lines)) = lines.split_first() {
        let headers = split_csv_line(header_line);

        for line in data_lines {
            let values = split_csv_line(line.trim());
            let mut record = Map::with_capacity(headers.len());

            for (index, header) in headers.iter().enumerate() {
                let value = match values.get(index) {
                    Some(raw) if config.infer_types => Scalar::infer(raw).into_value(),
                    Some(raw) => Value::String(raw.clone()),
                    // Short row: missing trailing columns become empty strings
                    None => Value::String(String::new()),
                };
                record.insert(header.clone(), value);
            }

            records.push(Value::Object(record));
        }
    }

    to_pretty_string(&Value::Array(records), config.indent_size)
}
