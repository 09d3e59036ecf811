//! Line classification for the XML view
//!
//! Each formatted line is classified independently by regex inspection;
//! there is no parse tree and no bracket matching beyond the indentation
//! depth already baked into the formatted text.

use crate::formatter::xml::INDENT_UNIT;
use crate::viewer::CollapseState;
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlLineKind {
    /// An opening tag whose content continues on later lines; collapsible
    Opening,
    /// A closing tag
    Closing,
    /// Anything else: complete elements, self-closing tags, text
    Content,
}

/// One display line of the XML view.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlLine {
    pub number: usize,
    pub depth: usize,
    pub content: String,
    pub kind: XmlLineKind,
    /// Per-line toggle key; collapse state is keyed by line, not by a
    /// parsed element identity
    pub path: String,
}

/// Classify the lines of a formatted XML string.
pub fn classify_lines(formatted: &str) -> Vec<XmlLine> {
    formatted
        .lines()
        .enumerate()
        .map(|(index, line)| {
            let number = index + 1;
            XmlLine {
                number,
                depth: leading_depth(line),
                content: line.to_string(),
                kind: classify(line),
                path: format!("line-{}", number),
            }
        })
        .collect()
}

/// Filter lines by collapse state. A collapsed opening line hides the
/// following lines while they sit deeper than it; the line that returns
/// to its depth (its closing tag, in well-indented output) stays visible.
pub fn visible_lines<'a>(lines: &'a [XmlLine], state: &CollapseState) -> Vec<&'a XmlLine> {
    let mut visible = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let line = &lines[index];
        visible.push(line);

        if line.kind == XmlLineKind::Opening && !state.is_expanded(&line.path) {
            index += 1;
            while index < lines.len() && lines[index].depth > line.depth {
                index += 1;
            }
            continue;
        }
        index += 1;
    }

    visible
}

fn leading_depth(line: &str) -> usize {
    let spaces = line.len() - line.trim_start_matches(' ').len();
    spaces / INDENT_UNIT.len()
}

fn classify(line: &str) -> XmlLineKind {
    static OPENING: OnceLock<Regex> = OnceLock::new();
    static SELF_CLOSING: OnceLock<Regex> = OnceLock::new();

    if line.trim_start().starts_with("</") {
        return XmlLineKind::Closing;
    }

    let opening = OPENING
        .get_or_init(|| Regex::new(r"<[^/][^>]*>[^<]*$").expect("opening pattern"))
        .is_match(line);
    let self_closing = SELF_CLOSING
        .get_or_init(|| Regex::new(r"<.*/>").expect("self-closing pattern"))
        .is_match(line);

    if opening && !self_closing {
        XmlLineKind::Opening
    } else {
        XmlLineKind::Content
    }
}
