//! Single-pass CSV line tokenizer
//!
//! Splits one line of CSV text into its field values, respecting
//! double-quote quoting and the doubled-quote escape. Quoting state never
//! spans lines; quoted fields containing literal newlines are not
//! supported.

/// Split one CSV line into its ordered field values.
///
/// Rules, applied left to right with an `in_quotes` flag:
/// - `"` outside quotes opens quoted mode; the quote itself is dropped
/// - `""` inside quotes emits a single literal `"`
/// - `"` inside quotes (not doubled) closes quoted mode
/// - `,` outside quotes terminates the current field
/// - anything else is appended to the current field
///
/// The final buffer is always pushed, even when empty, so `a,` yields two
/// fields. Unbalanced quotes are not rejected: scanning simply runs to end
/// of line with quoted mode still open.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if !in_quotes => in_quotes = true,
            '"' => {
                if chars.peek() == Some(&'"') {
                    // Escaped quote inside a quoted field
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}
