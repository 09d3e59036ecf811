//! Line numbering for the JSON tree view
//!
//! Each scalar leaf and each empty container takes exactly one display
//! line; each non-empty container takes an open line and a close line
//! around its children. Numbers come from a running counter threaded
//! through the recursion in document order and are allocated once, as if
//! fully expanded: collapsing hides rows, it never renumbers them.

use crate::viewer::CollapseState;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `{` or `[` of a non-empty container; collapsible
    Open,
    /// Matching `}` or `]`
    Close,
    /// Scalar leaf or empty container
    Leaf,
}

/// One display line of the tree view.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLine {
    pub number: usize,
    pub depth: usize,
    pub content: String,
    pub kind: LineKind,
    /// Node path, e.g. `$.users[0].name`; open and close lines of the
    /// same container share a path
    pub path: String,
}

/// Build the display lines for a parsed JSON value.
pub fn document_lines(value: &Value) -> Vec<TreeLine> {
    let mut lines = Vec::new();
    let mut counter = 1;
    walk(value, 0, "$", None, false, &mut counter, &mut lines);
    lines
}

/// Filter lines by collapse state. Rows strictly between a collapsed open
/// line and its matching close line are hidden; both bracket lines stay
/// visible.
pub fn visible_lines<'a>(lines: &'a [TreeLine], state: &CollapseState) -> Vec<&'a TreeLine> {
    let mut visible = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let line = &lines[index];
        visible.push(line);

        if line.kind == LineKind::Open && !state.is_expanded(&line.path) {
            index += 1;
            while index < lines.len() {
                let hidden = &lines[index];
                if hidden.kind == LineKind::Close && hidden.path == line.path {
                    visible.push(hidden);
                    break;
                }
                index += 1;
            }
        }
        index += 1;
    }

    visible
}

fn walk(
    value: &Value,
    depth: usize,
    path: &str,
    label: Option<&str>,
    trailing_comma: bool,
    counter: &mut usize,
    lines: &mut Vec<TreeLine>,
) {
    let prefix = match label {
        // Keys render JSON-escaped, exactly as the serializer would
        Some(key) => format!("{}: ", escape_key(key)),
        None => String::new(),
    };
    let comma = if trailing_comma { "," } else { "" };

    match value {
        Value::Object(map) if !map.is_empty() => {
            push_line(lines, counter, depth, format!("{}{{", prefix), LineKind::Open, path);
            let last = map.len() - 1;
            for (i, (key, child)) in map.iter().enumerate() {
                let child_path = child_key_path(path, key);
                walk(child, depth + 1, &child_path, Some(key), i < last, counter, lines);
            }
            push_line(lines, counter, depth, format!("}}{}", comma), LineKind::Close, path);
        }
        Value::Array(items) if !items.is_empty() => {
            push_line(lines, counter, depth, format!("{}[", prefix), LineKind::Open, path);
            let last = items.len() - 1;
            for (i, child) in items.iter().enumerate() {
                let child_path = format!("{}[{}]", path, i);
                walk(child, depth + 1, &child_path, None, i < last, counter, lines);
            }
            push_line(lines, counter, depth, format!("]{}", comma), LineKind::Close, path);
        }
        Value::Object(_) => {
            push_line(lines, counter, depth, format!("{}{{}}{}", prefix, comma), LineKind::Leaf, path);
        }
        Value::Array(_) => {
            push_line(lines, counter, depth, format!("{}[]{}", prefix, comma), LineKind::Leaf, path);
        }
        scalar => {
            push_line(
                lines,
                counter,
                depth,
                format!("{}{}{}", prefix, scalar, comma),
                LineKind::Leaf,
                path,
            );
        }
    }
}

fn push_line(
    lines: &mut Vec<TreeLine>,
    counter: &mut usize,
    depth: usize,
    content: String,
    kind: LineKind,
    path: &str,
) {
    lines.push(TreeLine {
        number: *counter,
        depth,
        content,
        kind,
        path: path.to_string(),
    });
    *counter += 1;
}

/// Path segment for an object key. Plain keys use dot form; keys that
/// contain path metacharacters use the bracket-quoted form so that
/// `{"a": {"b": 1}}` and `{"a.b": 1}` never share a path.
fn child_key_path(path: &str, key: &str) -> String {
    if key.contains(['.', '[', ']']) {
        format!("{}[{}]", path, escape_key(key))
    } else {
        format!("{}.{}", path, key)
    }
}

fn escape_key(key: &str) -> String {
    // to_string on a JSON string value cannot fail
    serde_json::to_string(&Value::String(key.to_string()))
        .unwrap_or_else(|_| format!("\"{}\"", key))
}
