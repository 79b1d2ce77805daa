//! Errors surfaced by the metadata editor.
//!
//! Every failure is returned to the caller and none is recovered silently. A failed edit never returns partially
//! modified text.

use miette::Diagnostic;
use tast_modify_syntax::ast::Span;
use tast_modify_syntax::diagnostics::SyntaxError;

/// Error returned by editor operations, actions, and the modifier pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error, Diagnostic)]
pub enum EditError {
    /// The source could not be tokenized or parsed.
    #[error("malformed source ({} error(s)): {}", .errors.len(), first_message(.errors))]
    #[diagnostic(
        code(tast_modify::parse_error),
        help("the file must lex as Go and every struct literal must be well formed")
    )]
    Parse { errors: Vec<SyntaxError> },

    /// No struct literal matching the target sets the field.
    #[error("field `{field}` not found{}", scope_suffix(.scope))]
    #[diagnostic(code(tast_modify::field_not_found))]
    FieldNotFound { field: String, scope: Option<String> },

    /// The field exists but its value is not a `[]T{...}` literal.
    #[error("field `{field}` is a {found}, not a sequence literal")]
    #[diagnostic(
        code(tast_modify::not_a_sequence),
        help("only fields written as `[]T{{...}}` literals can be edited element-wise")
    )]
    NotASequence {
        field: String,
        found: &'static str,
        span: Span,
    },

    /// More than one struct literal matches the target.
    #[error("field `{field}` is set in {} struct literals (lines {})", .lines.len(), join_lines(.lines))]
    #[diagnostic(
        code(tast_modify::ambiguous_target),
        help("narrow the target with an enclosing function name or a literal type")
    )]
    AmbiguousTarget { field: String, lines: Vec<usize> },
}

impl From<Vec<SyntaxError>> for EditError {
    fn from(errors: Vec<SyntaxError>) -> Self {
        EditError::Parse { errors }
    }
}

fn first_message(errors: &[SyntaxError]) -> String {
    errors.first().map(ToString::to_string).unwrap_or_default()
}

fn scope_suffix(scope: &Option<String>) -> String {
    scope.as_ref().map(|s| format!(" in {s}")).unwrap_or_default()
}

fn join_lines(lines: &[usize]) -> String {
    lines.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_not_found_message() {
        let err = EditError::FieldNotFound {
            field: "NonExistent".into(),
            scope: None,
        };
        assert_eq!(err.to_string(), "field `NonExistent` not found");
    }

    #[test]
    fn test_field_not_found_scoped_message() {
        let err = EditError::FieldNotFound {
            field: "Contacts".into(),
            scope: Some("function `init`".into()),
        };
        assert_eq!(err.to_string(), "field `Contacts` not found in function `init`");
    }

    #[test]
    fn test_ambiguous_message_lists_lines() {
        let err = EditError::AmbiguousTarget {
            field: "ExtraAttr".into(),
            lines: vec![12, 15],
        };
        assert_eq!(err.to_string(), "field `ExtraAttr` is set in 2 struct literals (lines 12, 15)");
    }

    #[test]
    fn test_parse_message_uses_first_error() {
        let err = EditError::from(vec![
            SyntaxError::lexical("Unterminated string", Span::new(0, 3)),
            SyntaxError::syntax("Expected value, found '}'", Span::new(5, 6)),
        ]);
        assert_eq!(
            err.to_string(),
            "malformed source (2 error(s)): lexical error: Unterminated string"
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = EditError::NotASequence {
            field: "Desc".into(),
            found: "string literal",
            span: Span::default(),
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("tast_modify::not_a_sequence"));
        assert!(err.help().is_some());
    }
}
