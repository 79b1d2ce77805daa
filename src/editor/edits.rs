//! Byte-range replacements over the original source.

use tast_modify_syntax::ast::Span;

/// Replace `span` of the source with `replacement`. An empty span is an insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub span: Span,
    pub replacement: String,
}

impl TextEdit {
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            span: Span::new(at, at),
            replacement: text.into(),
        }
    }

    pub fn delete(span: Span) -> Self {
        Self {
            span,
            replacement: String::new(),
        }
    }

    pub fn replace(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            replacement: text.into(),
        }
    }

    /// Apply this edit, copying every byte outside the span unchanged.
    pub fn apply(&self, source: &str) -> String {
        let mut out = String::with_capacity(source.len() + self.replacement.len());
        out.push_str(&source[..self.span.start]);
        out.push_str(&self.replacement);
        out.push_str(&source[self.span.end..]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert() {
        assert_eq!(TextEdit::insert(3, "X").apply("abcdef"), "abcXdef");
    }

    #[test]
    fn test_delete() {
        assert_eq!(TextEdit::delete(Span::new(1, 3)).apply("abcdef"), "adef");
    }

    #[test]
    fn test_replace() {
        assert_eq!(TextEdit::replace(Span::new(2, 4), "--").apply("ab{ }ef"), "ab--ef");
    }
}
