//! Length-bounded chunking of the escaped literal.
//!
//! A chunk closes once it has reached the threshold AND the character just
//! appended is a space or `>`. Neither character can be the second half of a
//! two-character escape token, so a boundary can never split one.

/// Default minimum chunk length before splitting at a safe boundary.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Partition an escaped literal into chunks.
///
/// Lossless: concatenating the result in order reproduces `literal` exactly.
/// The trailing remainder is emitted as the final chunk regardless of length.
pub fn chunk(literal: &str, threshold: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    for c in literal.chars() {
        current.push(c);
        if current.len() >= threshold && (c == ' ' || c == '>') {
            chunks.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::escape::escape;

    #[test]
    fn test_concatenation_reproduces_input() {
        let literal = escape("<div class=\"a b c\">text text text</div>\n".repeat(20).as_str());
        let chunks = chunk(&literal, DEFAULT_CHUNK_SIZE);
        assert!(chunks.len() > 1);
        assert_eq!(chunks.concat(), literal);
    }

    #[test]
    fn test_short_input_is_single_chunk() {
        let chunks = chunk("<p>short</p>", DEFAULT_CHUNK_SIZE);
        assert_eq!(chunks, vec!["<p>short</p>".to_string()]);
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert!(chunk("", DEFAULT_CHUNK_SIZE).is_empty());
    }

    #[test]
    fn test_non_final_chunks_meet_threshold_and_end_safely() {
        let literal = "x ".repeat(500);
        let chunks = chunk(&literal, 100);
        for c in &chunks[..chunks.len() - 1] {
            assert!(c.len() >= 100);
            let last = c.chars().last().unwrap();
            assert!(last == ' ' || last == '>');
        }
    }

    #[test]
    fn test_no_safe_boundary_yields_one_long_chunk() {
        let literal = "a".repeat(500);
        let chunks = chunk(&literal, 100);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 500);
    }

    #[test]
    fn test_boundary_never_splits_escape_token() {
        // Dense escape tokens around the threshold: every boundary must
        // leave each token's two characters in the same chunk.
        let doc = "a\"b\nc\\ ".repeat(100);
        let literal = escape(&doc);
        let chunks = chunk(&literal, 100);
        assert_eq!(chunks.concat(), literal);
        for c in &chunks {
            // A chunk ending mid-token would end with the token's leading
            // backslash; count trailing backslashes to rule that out.
            let trailing = c.chars().rev().take_while(|&ch| ch == '\\').count();
            assert_eq!(trailing % 2, 0, "chunk ends inside an escape token");
        }
    }

    #[test]
    fn test_splits_after_gt_boundary() {
        let literal = format!("{}>{}", "a".repeat(120), "b".repeat(10));
        let chunks = chunk(&literal, 100);
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].ends_with('>'));
        assert_eq!(chunks[1], "b".repeat(10));
    }
}
