//! Integration tests for the CSV/JSON conversion pair

use devconv::parser::csv_line::split_csv_line;
use devconv::{convert_csv_to_json, convert_json_to_csv};
use pretty_assertions::assert_eq;
use serde_json::Value;

#[test]
fn test_csv_to_json_infers_scalar_types() {
    let outcome = convert_csv_to_json("id,active\n1,true\n2,false");
    assert!(outcome.is_success());

    let parsed: Value = serde_json::from_str(outcome.output.as_deref().unwrap()).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            {"id": 1, "active": true},
            {"id": 2, "active": false}
        ])
    );
}

#[test]
fn test_csv_to_json_empty_input_is_empty_array() {
    let outcome = convert_csv_to_json("");
    assert_eq!(outcome.output.as_deref(), Some("[]"));
    assert_eq!(outcome.error, None);
}

#[test]
fn test_json_to_csv_empty_array_is_empty_string() {
    let outcome = convert_json_to_csv("[]");
    assert_eq!(outcome.output.as_deref(), Some(""));
    assert_eq!(outcome.error, None);
}

#[test]
fn test_json_to_csv_union_headers() {
    let outcome = convert_json_to_csv(r#"[{"a":1},{"b":2}]"#);
    assert_eq!(
        outcome.output.as_deref(),
        Some("\"a\",\"b\"\n\"1\",\n,\"2\"\n")
    );
}

#[test]
fn test_json_to_csv_rejects_non_array() {
    let outcome = convert_json_to_csv(r#"{"a":1}"#);
    assert_eq!(outcome.output, None);
    assert_eq!(
        outcome.error.as_deref(),
        Some("JSON must be an array of objects")
    );
}

#[test]
fn test_json_to_csv_rejects_non_object_items() {
    let outcome = convert_json_to_csv(r#"[1,2]"#);
    assert_eq!(
        outcome.error.as_deref(),
        Some("All items in the JSON array must be objects")
    );
}

#[test]
fn test_json_to_csv_malformed_input_reports_location() {
    let outcome = convert_json_to_csv("[{\"a\": }]");
    assert_eq!(outcome.output, None);
    let message = outcome.error.unwrap();
    assert!(message.starts_with("JSON parse error at line 1"), "{message}");
}

#[test]
fn test_csv_line_parser_quoting_rules() {
    assert_eq!(split_csv_line(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    assert_eq!(split_csv_line(r#"a,"b""c",d"#), vec!["a", "b\"c", "d"]);
}

#[test]
fn test_weak_round_trip() {
    let original = r#"[
        {"id": 1, "name": "Alice", "score": 9.5, "admin": true, "note": null},
        {"id": 2, "name": "Bob, Jr.", "tags": ["a", "b"]}
    ]"#;

    let csv = convert_json_to_csv(original).output.unwrap();
    let json = convert_csv_to_json(&csv).output.unwrap();
    let records: Vec<Value> = serde_json::from_str(&json).unwrap();

    // Same number of records, same key sets; value types may shift
    assert_eq!(records.len(), 2);
    let expected_keys = ["id", "name", "score", "admin", "note", "tags"];
    for record in &records {
        let obj = record.as_object().unwrap();
        let keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, expected_keys);
    }

    // Spot-check that quoting survived the trip
    assert_eq!(records[1]["name"], serde_json::json!("Bob, Jr."));
    assert_eq!(records[0]["id"], serde_json::json!(1));
}

#[test]
fn test_round_trip_preserves_record_count_with_sparse_keys() {
    let original = r#"[{"a":1},{"b":2},{"a":3,"c":4}]"#;
    let csv = convert_json_to_csv(original).output.unwrap();
    let json = convert_csv_to_json(&csv).output.unwrap();
    let records: Vec<Value> = serde_json::from_str(&json).unwrap();

    assert_eq!(records.len(), 3);
    for record in &records {
        let keys: Vec<&str> = record
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(keys, ["a", "b", "c"]);
    }
}

#[test]
fn test_nested_values_round_trip_as_json_text() {
    let csv = convert_json_to_csv(r#"[{"cfg":{"x":1}}]"#).output.unwrap();
    assert_eq!(csv, "\"cfg\"\n\"{\"\"x\"\":1}\"\n");

    let json = convert_csv_to_json(&csv).output.unwrap();
    let records: Vec<Value> = serde_json::from_str(&json).unwrap();
    // The nested object comes back as its JSON text, not a structure
    assert_eq!(records[0]["cfg"], serde_json::json!("{\"x\":1}"));
}
