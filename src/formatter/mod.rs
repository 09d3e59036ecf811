//! Output formatting module

pub mod json;
pub mod xml;

pub use json::{beautify_json, to_pretty_string};
pub use xml::{beautify_xml, pretty_print};
