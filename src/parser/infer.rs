//! Scalar type inference for CSV field values

use serde_json::Value;

/// A CSV field value after type inference.
///
/// Inference is an ordered set of typed parse attempts rather than ad-hoc
/// branching, so the priority between the forms is explicit.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    Text(String),
}

impl Scalar {
    /// Infer the type of a raw CSV field string.
    ///
    /// Priority order:
    /// 1. the exact empty string stays an empty string (not null)
    /// 2. a full numeric literal becomes a number; integers stay integral,
    ///    and non-finite floats fall through since JSON cannot carry them
    /// 3. case-insensitive `true` / `false` become booleans
    /// 4. case-insensitive `null` becomes null
    /// 5. anything else keeps the literal string
    pub fn infer(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Text(String::new());
        }

        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            if let Ok(n) = trimmed.parse::<i64>() {
                return Self::Int(n);
            }
            if let Ok(f) = trimmed.parse::<f64>() {
                if f.is_finite() {
                    return Self::Float(f);
                }
            }
        }

        match raw.to_ascii_lowercase().as_str() {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            "null" => Self::Null,
            _ => Self::Text(raw.to_string()),
        }
    }

    /// Convert the inferred scalar into a JSON value.
    pub fn into_value(self) -> Value {
        match self {
            Self::Int(n) => Value::from(n),
            Self::Float(f) => {
                // from_f64 only fails for non-finite values, which infer()
                // never produces
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
            Self::Bool(b) => Value::Bool(b),
            Self::Null => Value::Null,
            Self::Text(s) => Value::String(s),
        }
    }
}
