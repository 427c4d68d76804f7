//! Placeholder substitution: external asset references become inline blocks.
//!
//! The markup must reference its stylesheet and script through these exact
//! literals. Skipping a missing anchor is never an option - the firmware
//! serves only the bundled page, so an un-inlined reference would 404.

use super::BundleError;

/// Stylesheet link the markup must contain exactly once.
pub const STYLESHEET_LINK: &str = r#"<link rel="stylesheet" href="styles.css">"#;
/// Script tag the markup must contain exactly once.
pub const SCRIPT_TAG: &str = r#"<script src="app.js"></script>"#;

/// Replace both asset placeholders with inline `<style>`/`<script>` blocks
/// carrying the raw asset content.
pub fn inline_assets(markup: &str, stylesheet: &str, script: &str) -> Result<String, BundleError> {
    let bundled = replace_unique(markup, STYLESHEET_LINK, &format!("<style>{stylesheet}</style>"))?;
    replace_unique(&bundled, SCRIPT_TAG, &format!("<script>{script}</script>"))
}

/// Replace exactly one occurrence of `placeholder`.
///
/// Zero matches is a hard stop; more than one is ambiguous and also fails
/// rather than guessing which occurrence was meant.
fn replace_unique(
    markup: &str,
    placeholder: &'static str,
    replacement: &str,
) -> Result<String, BundleError> {
    match markup.matches(placeholder).count() {
        0 => Err(BundleError::PlaceholderNotFound(placeholder)),
        1 => Ok(markup.replacen(placeholder, replacement, 1)),
        n => Err(BundleError::AmbiguousPlaceholder(placeholder, n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKUP: &str = concat!(
        "<head></head><body>",
        r#"<link rel="stylesheet" href="styles.css">"#,
        r#"<script src="app.js"></script>"#,
        "</body>",
    );

    #[test]
    fn test_inline_substitutes_both_placeholders() {
        let out = inline_assets(MARKUP, "body{color:red}", "alert(1)").unwrap();
        assert!(out.contains("<style>body{color:red}</style>"));
        assert!(out.contains("<script>alert(1)</script>"));
        assert!(!out.contains(r#"href="styles.css""#));
        assert!(!out.contains(r#"src="app.js""#));
    }

    #[test]
    fn test_missing_script_tag_fails() {
        let markup = r#"<head><link rel="stylesheet" href="styles.css"></head>"#;
        let err = inline_assets(markup, "", "").unwrap_err();
        assert!(matches!(err, BundleError::PlaceholderNotFound(SCRIPT_TAG)));
    }

    #[test]
    fn test_missing_stylesheet_link_fails() {
        let markup = r#"<body><script src="app.js"></script></body>"#;
        let err = inline_assets(markup, "", "").unwrap_err();
        assert!(matches!(err, BundleError::PlaceholderNotFound(STYLESHEET_LINK)));
    }

    #[test]
    fn test_duplicate_placeholder_is_ambiguous() {
        let markup = format!("{STYLESHEET_LINK}{STYLESHEET_LINK}{SCRIPT_TAG}");
        let err = inline_assets(&markup, "", "").unwrap_err();
        assert!(matches!(
            err,
            BundleError::AmbiguousPlaceholder(STYLESHEET_LINK, 2)
        ));
    }

    #[test]
    fn test_asset_content_is_verbatim() {
        // Inlining performs no transformation; minification happens later.
        let out = inline_assets(MARKUP, "body {\n  color: red;\n}", "// note\nalert(1)").unwrap();
        assert!(out.contains("<style>body {\n  color: red;\n}</style>"));
        assert!(out.contains("<script>// note\nalert(1)</script>"));
    }
}
