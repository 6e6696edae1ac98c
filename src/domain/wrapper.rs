//! Whole-file alternate-language blocks.

/// Return the payload of `content` if the whole text is one `open … close`
/// block.
///
/// One trailing line ending after `close` is tolerated, and one line ending
/// directly inside each marker is dropped. Both `\n` and `\r\n` are accepted.
pub fn unwrap_block<'a>(content: &'a str, open: &str, close: &str) -> Option<&'a str> {
    if open.is_empty() || close.is_empty() {
        return None;
    }
    let body = strip_line_ending_end(content);
    if body.len() < open.len() + close.len() {
        return None;
    }
    let inner = body.strip_prefix(open)?.strip_suffix(close)?;
    Some(strip_line_ending_end(strip_line_ending_start(inner)))
}

fn strip_line_ending_start(s: &str) -> &str {
    s.strip_prefix("\r\n").or_else(|| s.strip_prefix('\n')).unwrap_or(s)
}

fn strip_line_ending_end(s: &str) -> &str {
    s.strip_suffix("\r\n").or_else(|| s.strip_suffix('\n')).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: &str = "<javascript>";
    const CLOSE: &str = "</javascript>";

    #[test]
    fn unwraps_lf_block() {
        let payload = "var x = 1;\nWriteToOperationLog(x);";
        let content = format!("{OPEN}\n{payload}\n{CLOSE}");
        assert_eq!(unwrap_block(&content, OPEN, CLOSE), Some(payload));
    }

    #[test]
    fn unwraps_crlf_block_with_trailing_newline() {
        let content = "<javascript>\r\nvar x = 1;\r\nvar y = 2;\r\n</javascript>\r\n";
        assert_eq!(unwrap_block(content, OPEN, CLOSE), Some("var x = 1;\r\nvar y = 2;"));
    }

    #[test]
    fn unwraps_single_line_block() {
        assert_eq!(unwrap_block("<javascript>x();</javascript>", OPEN, CLOSE), Some("x();"));
    }

    #[test]
    fn marker_as_substring_is_ignored() {
        let content = "<trans>\n// see <javascript> blocks\nx = 1;\n</trans>";
        assert_eq!(unwrap_block(content, OPEN, CLOSE), None);
        let content = "<javascript>\nx();\n</javascript>\n// trailing text";
        assert_eq!(unwrap_block(content, OPEN, CLOSE), None);
        let content = "  <javascript>\nx();\n</javascript>";
        assert_eq!(unwrap_block(content, OPEN, CLOSE), None);
    }

    #[test]
    fn overlapping_markers_are_not_a_block() {
        assert_eq!(unwrap_block("<javascript>", "<javascript>", "javascript>"), None);
    }
}
