//! Asset minification for the embedded script and stylesheet.
//!
//! Uses oxc for JavaScript and lightningcss for CSS.
//!
//! The page script locates elements through literal `getElementById`
//! strings, so identifier mangling stays disabled: compression may rewrite
//! expressions but never renames anything the DOM lookups depend on.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

/// Minify JavaScript source code without renaming identifiers.
///
/// Returns `None` when the source does not parse; callers fall back to the
/// verbatim text rather than shipping a broken script.
pub fn minify_js(source: &str) -> Option<String> {
    let allocator = Allocator::default();
    let source_type = SourceType::cjs();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        return None;
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: None,
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Some(code)
}

/// Minify CSS source code.
pub fn minify_css(source: &str) -> Option<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default()).ok()?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .ok()?;
    Some(result.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_css_collapses_declaration() {
        assert_eq!(minify_css("body { color: red; }").unwrap(), "body{color:red}");
    }

    #[test]
    fn test_minify_css_invalid_returns_none() {
        assert!(minify_css("body { color: ").is_none());
    }

    #[test]
    fn test_minify_js_strips_comments_and_whitespace() {
        let out = minify_js("// greet\nalert( 1 );\n").unwrap();
        assert!(!out.contains("greet"));
        assert!(!out.contains(' '));
        assert!(out.contains("alert(1)"));
    }

    #[test]
    fn test_minify_js_keeps_dom_lookup_identifiers() {
        let src = "const uploadBtn = document.getElementById('uploadBtn');\nuploadBtn.disabled = true;\n";
        let out = minify_js(src).unwrap();
        assert!(out.contains("getElementById"));
        assert!(out.contains("\"uploadBtn\"") || out.contains("'uploadBtn'") || out.contains("`uploadBtn`"));
    }

    #[test]
    fn test_minify_js_invalid_returns_none() {
        assert!(minify_js("function {").is_none());
    }
}
