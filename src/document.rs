//! Document snapshot splicing
//!
//! The core never holds a reference to a live document. The host passes the
//! full text in, and committing an edited table means rebuilding the text
//! with the table's line range replaced by a freshly rendered block.

/// Replace lines `[start, end)` of `text` with `replacement` and return the
/// new document text.
///
/// `replacement` is inserted as-is (it may span multiple lines). Newline
/// separators are added only where a non-empty before/after side exists, so
/// splicing at the very start or end of the document adds no stray blank
/// lines. Out-of-range indices are clamped. The result carries no trailing
/// newline, matching the line-splitting convention of the parser.
pub fn splice_lines(text: &str, start: usize, end: usize, replacement: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = start.min(lines.len());
    let end = end.clamp(start, lines.len());

    let before = lines[..start].join("\n");
    let after = lines[end..].join("\n");

    let mut out = String::with_capacity(before.len() + replacement.len() + after.len() + 2);
    if !before.is_empty() {
        out.push_str(&before);
        out.push('\n');
    }
    out.push_str(replacement);
    if !after.is_empty() {
        out.push('\n');
        out.push_str(&after);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice_middle() {
        let text = "one\ntwo\nthree\nfour";
        assert_eq!(splice_lines(text, 1, 3, "TWO\nTHREE"), "one\nTWO\nTHREE\nfour");
    }

    #[test]
    fn test_splice_at_document_start() {
        assert_eq!(splice_lines("a\nb", 0, 1, "A"), "A\nb");
    }

    #[test]
    fn test_splice_at_document_end() {
        assert_eq!(splice_lines("a\nb", 1, 2, "B"), "a\nB");
    }

    #[test]
    fn test_splice_entire_document() {
        assert_eq!(splice_lines("a\nb", 0, 2, "X"), "X");
    }

    #[test]
    fn test_splice_can_change_line_count() {
        assert_eq!(splice_lines("a\nb\nc", 1, 2, "x\ny\nz"), "a\nx\ny\nz\nc");
    }

    #[test]
    fn test_splice_clamps_out_of_range() {
        assert_eq!(splice_lines("a\nb", 1, 99, "X"), "a\nX");
        assert_eq!(splice_lines("a", 5, 9, "X"), "a\nX");
    }
}
