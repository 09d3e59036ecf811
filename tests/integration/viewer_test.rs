//! Integration tests for the collapsible line view models

use devconv::formatter::xml::beautify_xml;
use devconv::viewer::json_lines::{self, LineKind};
use devconv::viewer::xml_lines::{self, XmlLineKind};
use devconv::viewer::CollapseState;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_json_lines_match_pretty_layout() {
    let value = json!({
        "users": [
            {"id": 1, "name": "Alice"},
            {"id": 2, "name": "Bob"}
        ],
        "total": 2
    });

    let lines = json_lines::document_lines(&value);
    let contents: Vec<&str> = lines.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(
        contents,
        vec![
            "{",
            "\"users\": [",
            "{",
            "\"id\": 1,",
            "\"name\": \"Alice\"",
            "},",
            "{",
            "\"id\": 2,",
            "\"name\": \"Bob\"",
            "}",
            "],",
            "\"total\": 2",
            "}",
        ]
    );

    // Numbers are consecutive document order, allocated once
    for (index, line) in lines.iter().enumerate() {
        assert_eq!(line.number, index + 1);
    }
}

#[test]
fn test_collapsing_one_user_keeps_the_other_expanded() {
    let value = json!({
        "users": [
            {"id": 1},
            {"id": 2}
        ]
    });
    let lines = json_lines::document_lines(&value);

    let mut state = CollapseState::new();
    state.collapse("$.users[0]");

    let visible = json_lines::visible_lines(&lines, &state);
    let contents: Vec<&str> = visible.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(
        contents,
        vec!["{", "\"users\": [", "{", "},", "{", "\"id\": 2", "}", "]", "}"]
    );

    // Toggling back restores every row with its original number
    state.toggle("$.users[0]");
    assert_eq!(json_lines::visible_lines(&lines, &state).len(), lines.len());
}

#[test]
fn test_xml_lines_from_formatted_output() {
    let formatted = beautify_xml("<library><book><title>Dune</title></book></library>").unwrap();
    let lines = xml_lines::classify_lines(&formatted);

    let kinds: Vec<XmlLineKind> = lines.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            XmlLineKind::Opening,
            XmlLineKind::Opening,
            XmlLineKind::Content,
            XmlLineKind::Closing,
            XmlLineKind::Closing,
        ]
    );

    let mut state = CollapseState::new();
    state.collapse(&lines[1].path);
    let visible = xml_lines::visible_lines(&lines, &state);
    let shown: Vec<&str> = visible.iter().map(|l| l.content.trim()).collect();
    assert_eq!(shown, vec!["<library>", "<book>", "</book>", "</library>"]);
}

#[test]
fn test_collapse_state_is_per_node_and_defaults_expanded() {
    let value = json!([[1], [2]]);
    let lines = json_lines::document_lines(&value);

    let state = CollapseState::new();
    assert_eq!(json_lines::visible_lines(&lines, &state).len(), lines.len());

    let mut state = CollapseState::new();
    state.collapse("$[1]");
    let visible = json_lines::visible_lines(&lines, &state);
    let contents: Vec<&str> = visible.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(contents, vec!["[", "[", "1", "],", "[", "]", "]"]);
}

#[test]
fn test_leaf_kinds_and_open_close_pairing() {
    let value = json!({"empty": {}, "list": [true]});
    let lines = json_lines::document_lines(&value);

    assert_eq!(lines[1].kind, LineKind::Leaf); // "empty": {}
    assert_eq!(lines[2].kind, LineKind::Open); // "list": [
    assert_eq!(lines[4].kind, LineKind::Close);
    assert_eq!(lines[2].path, lines[4].path);
}
