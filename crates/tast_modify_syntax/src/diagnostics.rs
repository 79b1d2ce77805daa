//! Diagnostics for the syntax frontend.
//!
//! The lexer and parser collect [`SyntaxError`] values instead of stopping at the first problem, so a malformed file
//! reports everything that is wrong with it in one pass.

use crate::ast::Span;

/// A lexing or parsing error with location information
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct SyntaxError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl SyntaxError {
    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self::with_kind(message, span, ErrorKind::Lexical)
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::with_kind(message, span, ErrorKind::Syntax)
    }

    fn with_kind(message: impl Into<String>, span: Span, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Render as `line:col: kind: message` against the source the error came from.
    pub fn render(&self, source: &str) -> String {
        let (line, col, _) = line_info(source, self.span.start);
        let mut out = format!("{line}:{col}: {self}");
        for note in &self.notes {
            out.push_str(&format!("\n  = note: {note}"));
        }
        for hint in &self.hints {
            out.push_str(&format!("\n  = hint: {hint}"));
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
        }
    }
}

/// Get line number, column number (both 1-based), and line text for a byte offset.
pub fn line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = &source[line_start..line_end];
    let col_num = offset - line_start + 1;

    (line_num, col_num, line_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_info_first_line() {
        let (line, col, text) = line_info("package foo\n", 8);
        assert_eq!((line, col, text), (1, 9, "package foo"));
    }

    #[test]
    fn test_line_info_later_line() {
        let source = "package foo\n\nfunc init() {\n}\n";
        let offset = source.find("init").unwrap();
        let (line, col, text) = line_info(source, offset);
        assert_eq!(line, 3);
        assert_eq!(col, 6);
        assert_eq!(text, "func init() {");
    }

    #[test]
    fn test_line_info_clamps_offset() {
        let (line, _, text) = line_info("a\nb", 100);
        assert_eq!(line, 2);
        assert_eq!(text, "b");
    }

    #[test]
    fn test_render_includes_notes_and_hints() {
        let err = SyntaxError::syntax("unexpected '}'", Span::new(2, 3))
            .with_note("literal opened here")
            .with_hint("remove the extra brace");
        let rendered = err.render("a\n}");
        assert_eq!(
            rendered,
            "2:1: syntax error: unexpected '}'\n  = note: literal opened here\n  = hint: remove the extra brace"
        );
    }
}
