//! C string-literal escaping.
//!
//! A single left-to-right pass with ordered branches: backslash first, then
//! quote, then newline. Because every character is visited exactly once, a
//! backslash inserted by one branch is never re-escaped by another.

/// Escape a minified document into a single-line C string literal body.
pub fn escape(document: &str) -> String {
    let mut out = String::with_capacity(document.len() + document.len() / 8);
    for c in document.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Decode an escaped literal back to document text.
///
/// Inverse of [`escape`]; used to verify that escaping never double-encodes.
pub fn unescape(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            // Not produced by escape(); keep both characters
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
