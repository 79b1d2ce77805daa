//! Line-oriented queries over the original source, used to match the surrounding layout.

/// Byte offset of the start of the line containing `offset`.
pub(crate) fn line_start(source: &str, offset: usize) -> usize {
    source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

/// Byte offset of the `\n` ending the line containing `offset`, or the end of the source.
pub(crate) fn line_end(source: &str, offset: usize) -> usize {
    source[offset..].find('\n').map(|i| offset + i).unwrap_or(source.len())
}

/// Byte offset just past the last character of the line containing `offset`, before any `\r\n` or `\n`.
pub(crate) fn line_text_end(source: &str, offset: usize) -> usize {
    let end = line_end(source, offset);
    if end < source.len() && source[..end].ends_with('\r') { end - 1 } else { end }
}

/// The line terminator the source uses: `\r\n` if any line ends with one, otherwise `\n`.
pub(crate) fn newline(source: &str) -> &'static str {
    if source.contains("\r\n") { "\r\n" } else { "\n" }
}

/// Leading whitespace of the line containing `offset`.
pub(crate) fn line_indent(source: &str, offset: usize) -> &str {
    let start = line_start(source, offset);
    let rest = &source[start..];
    let len = rest.len() - rest.trim_start_matches([' ', '\t']).len();
    &rest[..len]
}

/// `true` when no newline separates `from` and `to`.
pub(crate) fn same_line(source: &str, from: usize, to: usize) -> bool {
    !source[from.min(to)..from.max(to)].contains('\n')
}

/// `true` when `text` is blank or holds only a line comment.
pub(crate) fn is_blank_or_comment(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || text.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "a\n\t\tb, c\n  d\n";

    #[test]
    fn test_line_bounds() {
        let b = SOURCE.find('b').unwrap();
        assert_eq!(line_start(SOURCE, b), 2);
        assert_eq!(line_end(SOURCE, b), 8);
        assert_eq!(line_start(SOURCE, 0), 0);
        assert_eq!(line_end(SOURCE, SOURCE.len()), SOURCE.len());
    }

    #[test]
    fn test_crlf_lines() {
        let source = "a,\r\n\tb\r\n";
        assert_eq!(line_text_end(source, 0), 2);
        assert_eq!(line_end(source, 0), 3);
        assert_eq!(line_text_end(source, 5), 6);
        assert_eq!(line_text_end(SOURCE, 0), 1);
        assert_eq!(newline(source), "\r\n");
        assert_eq!(newline(SOURCE), "\n");
    }

    #[test]
    fn test_line_indent() {
        assert_eq!(line_indent(SOURCE, SOURCE.find('c').unwrap()), "\t\t");
        assert_eq!(line_indent(SOURCE, SOURCE.find('d').unwrap()), "  ");
        assert_eq!(line_indent(SOURCE, 0), "");
    }

    #[test]
    fn test_same_line() {
        let b = SOURCE.find('b').unwrap();
        let c = SOURCE.find('c').unwrap();
        let d = SOURCE.find('d').unwrap();
        assert!(same_line(SOURCE, b, c));
        assert!(same_line(SOURCE, c, b));
        assert!(!same_line(SOURCE, c, d));
    }

    #[test]
    fn test_blank_or_comment() {
        assert!(is_blank_or_comment("  \t"));
        assert!(is_blank_or_comment(" // owner"));
        assert!(!is_blank_or_comment(" \"x\","));
    }
}
