//! Integration tests for the XML beautification pipeline

use devconv::formatter::xml::{beautify_xml, pretty_print, reserialize};
use pretty_assertions::assert_eq;

#[test]
fn test_beautify_validates_then_indents() {
    let out =
        beautify_xml("<library><book id=\"1\"><title>Dune</title></book></library>").unwrap();
    assert_eq!(
        out,
        "<library>\n  <book id=\"1\">\n    <title>Dune</title>\n  </book>\n</library>\n"
    );
}

#[test]
fn test_beautify_rejects_malformed_xml() {
    let err = beautify_xml("<a><b></a>").unwrap_err();
    assert!(err.user_message().starts_with("XML parse error"));
}

#[test]
fn test_beautify_collapses_existing_whitespace() {
    let input = "<library>\n\n\t<book>\n\t\t<title>Dune</title>\n\t</book>\n</library>";
    let out = beautify_xml(input).unwrap();
    assert_eq!(
        out,
        "<library>\n  <book>\n    <title>Dune</title>\n  </book>\n</library>\n"
    );
}

#[test]
fn test_formatter_is_a_fixed_point() {
    let inputs = [
        "<root><item>x</item></root>",
        "<?xml version=\"1.0\"?><config><entry key=\"a\">1</entry><flag/></config>",
        "<outer><mid><leaf>v</leaf></mid></outer>",
    ];
    for input in inputs {
        let once = pretty_print(input);
        let twice = pretty_print(&once);
        assert_eq!(once, twice, "not a fixed point for {input}");
    }
}

#[test]
fn test_reserialize_is_the_well_formedness_gate() {
    assert!(reserialize("<a>1</a>").is_ok());
    assert!(reserialize("<a>1").is_err());
    assert!(reserialize("<a></b>").is_err());
}

#[test]
fn test_rootless_input_is_rejected_not_bracketed() {
    // Without a gate these would come back as "<>" style junk
    for input in ["", "   ", "just text, no tags", "<?xml version=\"1.0\"?>"] {
        let err = beautify_xml(input).unwrap_err();
        assert!(
            err.user_message().starts_with("XML parse error"),
            "{input:?} was not rejected"
        );
    }
}

#[test]
fn test_unclosed_element_never_produces_output() {
    assert!(beautify_xml("<a>1").is_err());
    assert!(beautify_xml("<root><open>text").is_err());
}

#[test]
fn test_heuristic_limitations_are_preserved() {
    // Mixed text/element content stays glued to the opening tag line
    let out = pretty_print("<note>dear <b>you</b></note>");
    assert_eq!(out, "<note>dear <b>you</b>\n</note>\n");

    // Single-character tag names never open an indent level
    let out = pretty_print("<r><x>1</x></r>");
    assert_eq!(out, "<r>\n<x>1</x>\n</r>\n");
}

#[test]
fn test_entities_survive_the_cleanup_pass() {
    let out = beautify_xml("<m><t>salt &amp; pepper</t><c>3 &lt; 5</c></m>").unwrap();
    assert_eq!(
        out,
        "<m>\n<t>salt &amp; pepper</t>\n<c>3 &lt; 5</c>\n</m>\n"
    );
}
