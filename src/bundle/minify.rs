//! Document minification.
//!
//! A single pass over the bundled markup that strips comments, collapses
//! whitespace, and hands embedded `<style>`/`<script>` bodies to the CSS/JS
//! minifiers. Tag internals are copied verbatim - attribute values and the
//! identifiers the page script resolves at runtime are never rewritten.

use crate::asset::minify::{minify_css, minify_js};
use crate::debug;

/// Elements whose content is raw text per the HTML spec.
///
/// `style` and `script` bodies are minified in place; `pre` and `textarea`
/// keep their whitespace untouched.
fn raw_text_element(tag: &str) -> bool {
    matches!(tag, "script" | "style" | "pre" | "textarea")
}

/// Minify a bundled HTML document.
///
/// - `<!-- -->` comments are dropped.
/// - Whitespace runs between two tags are dropped entirely.
/// - Whitespace runs inside text collapse to a single space.
/// - Raw text element bodies pass through the walker verbatim; `<style>` and
///   `<script>` bodies are then minified as CSS/JS, falling back to the
///   verbatim text when they do not parse.
pub fn minify_document(source: &str) -> String {
    let bytes = source.as_bytes();
    let mut out = String::with_capacity(source.len());
    let mut pending_ws = false;
    let mut i = 0;

    while i < bytes.len() {
        if source[i..].starts_with("<!--") {
            // Comment: skip entirely, unterminated comments swallow the rest
            i = match source[i + 4..].find("-->") {
                Some(end) => i + 4 + end + 3,
                None => bytes.len(),
            };
            continue;
        }

        if bytes[i] == b'<' {
            // Whitespace directly between two tags is insignificant
            if pending_ws {
                if !(out.is_empty() || out.ends_with('>')) {
                    out.push(' ');
                }
                pending_ws = false;
            }

            let tag_end = match source[i..].find('>') {
                Some(end) => i + end + 1,
                None => bytes.len(),
            };
            out.push_str(&source[i..tag_end]);

            if let Some(name) = opening_tag_name(&source[i..tag_end]) {
                if raw_text_element(&name) {
                    i = emit_raw_text(source, tag_end, &name, &mut out);
                    continue;
                }
            }
            i = tag_end;
            continue;
        }

        if bytes[i].is_ascii_whitespace() {
            pending_ws = true;
            i += 1;
            continue;
        }

        // Text run up to the next tag or whitespace
        let start = i;
        while i < bytes.len() && bytes[i] != b'<' && !bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if pending_ws {
            if !out.is_empty() {
                out.push(' ');
            }
            pending_ws = false;
        }
        out.push_str(&source[start..i]);
    }

    out
}

/// Extract the lowercase tag name from an opening tag, `None` for closing
/// tags, comments, and doctype declarations.
fn opening_tag_name(tag: &str) -> Option<String> {
    let rest = tag.strip_prefix('<')?;
    let first = rest.chars().next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    let name: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    // Self-closing tags have no raw text body
    if tag.ends_with("/>") {
        return None;
    }
    Some(name)
}

/// Copy a raw text element body (minifying style/script content) plus its
/// closing tag, returning the index just past the closing `>`.
fn emit_raw_text(source: &str, body_start: usize, name: &str, out: &mut String) -> usize {
    let close = format!("</{name}");
    let (body, mut i) = match source[body_start..].find(&close) {
        Some(pos) => (&source[body_start..body_start + pos], body_start + pos),
        None => (&source[body_start..], source.len()),
    };

    match name {
        "style" => out.push_str(&minify_embedded(body, minify_css, "style")),
        "script" => out.push_str(&minify_embedded(body, minify_js, "script")),
        _ => out.push_str(body),
    }

    // Copy the closing tag through its '>'
    if i < source.len() {
        let end = match source[i..].find('>') {
            Some(pos) => i + pos + 1,
            None => source.len(),
        };
        out.push_str(&source[i..end]);
        i = end;
    }
    i
}

/// Run an embedded body through a minifier, falling back to the verbatim
/// text when it does not parse.
fn minify_embedded(body: &str, minify: fn(&str) -> Option<String>, kind: &str) -> String {
    if body.trim().is_empty() {
        return String::new();
    }
    match minify(body) {
        Some(minified) => minified,
        None => {
            debug!("minify"; "embedded {kind} did not parse, keeping verbatim");
            body.to_string()
        }
    }
}
