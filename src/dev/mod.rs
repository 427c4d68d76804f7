//! Development preview generation.
//!
//! Produces a standalone `dev.html` with a warning banner and a mocked
//! backend so the page can be exercised in a browser without a device.
//! This is a cosmetic preview tool: anchors that are missing from the
//! markup are skipped with a debug note instead of failing the run, and
//! nothing here feeds the production bundling pipeline.

use crate::bundle::inline::SCRIPT_TAG;
use crate::debug;

/// Mock-backend overlay injected in place of the production script tag.
const MOCK_JS: &str = include_str!("mock.js");

/// Banner stylesheet injected before `</head>`.
const BANNER_CSS: &str = "    <style>\n        .dev-banner {\n            background-color: #ff9800;\n            color: white;\n            padding: 10px;\n            text-align: center;\n            font-weight: bold;\n        }\n    </style>\n</head>";

/// Banner element injected after `<body>`.
const BANNER_DIV: &str =
    "<body>\n    <div class=\"dev-banner\">⚠️ DEVELOPMENT MODE - Backend is mocked</div>";

/// Transform the source markup into the dev preview page.
pub fn render_dev_page(markup: &str) -> String {
    let mut html = replace_anchor(markup, "</head>", BANNER_CSS);
    html = replace_anchor(&html, "<body>", BANNER_DIV);
    html = replace_anchor(&html, SCRIPT_TAG, &format!("<script>\n{MOCK_JS}</script>"));
    // The preview sits next to the source directory, so the stylesheet is
    // fetched from the source tree instead of being inlined
    html = replace_anchor(&html, "href=\"styles.css\"", "href=\"src/styles.css\"");
    mark_title(&html)
}

/// Replace the first occurrence of `anchor`, or leave the markup unchanged
/// with a debug note when it is absent.
fn replace_anchor(markup: &str, anchor: &str, replacement: &str) -> String {
    if !markup.contains(anchor) {
        debug!("dev"; "anchor `{anchor}` not found, skipping injection");
        return markup.to_string();
    }
    markup.replacen(anchor, replacement, 1)
}

/// Append a `(DEV)` marker to the page title.
fn mark_title(markup: &str) -> String {
    let Some(start) = markup.find("<title>") else {
        return markup.to_string();
    };
    let Some(end) = markup[start..].find("</title>") else {
        return markup.to_string();
    };
    let mut out = String::with_capacity(markup.len() + 6);
    out.push_str(&markup[..start + end]);
    out.push_str(" (DEV)");
    out.push_str(&markup[start + end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKUP: &str = concat!(
        "<html>\n<head>\n<title>Flash Firmware</title>\n",
        "<link rel=\"stylesheet\" href=\"styles.css\">\n</head>\n",
        "<body>\n<script src=\"app.js\"></script>\n</body>\n</html>\n",
    );

    #[test]
    fn test_banner_injected() {
        let out = render_dev_page(MARKUP);
        assert!(out.contains(".dev-banner"));
        assert!(out.contains("DEVELOPMENT MODE"));
    }

    #[test]
    fn test_script_tag_replaced_with_mock() {
        let out = render_dev_page(MARKUP);
        assert!(!out.contains(SCRIPT_TAG));
        assert!(out.contains("mock backend by overriding form submission"));
    }

    #[test]
    fn test_stylesheet_served_from_source_tree() {
        let out = render_dev_page(MARKUP);
        assert!(out.contains("href=\"src/styles.css\""));
        assert!(!out.contains("href=\"styles.css\""));
    }

    #[test]
    fn test_title_marked() {
        let out = render_dev_page(MARKUP);
        assert!(out.contains("<title>Flash Firmware (DEV)</title>"));
    }

    #[test]
    fn test_missing_anchors_are_skipped() {
        let out = render_dev_page("<p>bare fragment</p>");
        assert_eq!(out, "<p>bare fragment</p>");
    }
}
