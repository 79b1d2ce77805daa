//! Metadata field editor.
//!
//! The editor parses the source into a span-carrying syntax tree, finds the one struct literal that sets the target
//! field, and computes a single [`TextEdit`] against the original text. Everything outside the edited range is copied
//! byte for byte, so comments, alignment, and unrelated fields survive untouched.
//!
//! ## Layout rules
//!
//! New elements follow the layout the sequence already has:
//! - single-line `[]string{"a", "b"}` gains `, "v"` (or ` "v",` after a trailing comma)
//! - multi-line sequences gain a new line indented like the last element
//! - `[]string{}` becomes `[]string{"v"}`

mod edits;
mod layout;

pub use edits::TextEdit;

use tast_modify_syntax::ast::{SequenceLiteral, SourceFile, Span, StructLiteral};
use tast_modify_syntax::diagnostics::line_info;
use tast_modify_syntax::lexer::quote;
use tast_modify_syntax::parse_source;

use crate::config::{DuplicatePolicy, EditConfig, QuoteStyle};
use crate::error::EditError;
use layout::{is_blank_or_comment, line_end, line_indent, line_start, line_text_end, newline, same_line};

/// Which field to edit, and optionally which struct literal it must belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTarget {
    pub field: String,
    /// Only literals inside this top-level function qualify.
    pub enclosing_func: Option<String>,
    /// Only literals of this type spelling (e.g. `testing.Test`) qualify.
    pub literal_type: Option<String>,
}

impl FieldTarget {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            enclosing_func: None,
            literal_type: None,
        }
    }

    /// Restrict the target to literals inside the function `name`.
    pub fn in_function(mut self, name: impl Into<String>) -> Self {
        self.enclosing_func = Some(name.into());
        self
    }

    /// Restrict the target to literals of type `type_name`.
    pub fn of_type(mut self, type_name: impl Into<String>) -> Self {
        self.literal_type = Some(type_name.into());
        self
    }

    fn matches(&self, literal: &StructLiteral) -> bool {
        literal.has_field(&self.field)
            && self
                .enclosing_func
                .as_ref()
                .is_none_or(|f| literal.enclosing_func.as_ref() == Some(f))
            && self
                .literal_type
                .as_ref()
                .is_none_or(|t| literal.type_name.as_ref() == Some(t))
    }

    fn scope(&self) -> Option<String> {
        match (&self.enclosing_func, &self.literal_type) {
            (None, None) => None,
            (Some(f), None) => Some(format!("function `{f}`")),
            (None, Some(t)) => Some(format!("`{t}` literals")),
            (Some(f), Some(t)) => Some(format!("`{t}` literals in function `{f}`")),
        }
    }
}

impl From<&str> for FieldTarget {
    fn from(field: &str) -> Self {
        FieldTarget::new(field)
    }
}

/// Span-preserving editor for sequence-valued fields of struct literals.
#[derive(Debug, Clone, Default)]
pub struct FieldEditor {
    config: EditConfig,
}

/// Where a new element goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    First,
    Last,
}

impl FieldEditor {
    pub fn new(config: EditConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    /// Append `value` as the last element of the target sequence.
    ///
    /// ## Errors
    /// [`EditError::Parse`], [`EditError::FieldNotFound`], [`EditError::NotASequence`], or
    /// [`EditError::AmbiguousTarget`]. On error the caller's source is left as it was.
    #[tracing::instrument(skip_all, fields(field = %target.field, value = %value))]
    pub fn append(&self, source: &str, target: &FieldTarget, value: &str) -> Result<String, EditError> {
        self.insert(source, target, value, Position::Last)
    }

    /// Insert `value` as the first element of the target sequence.
    ///
    /// ## Errors
    /// Same as [`FieldEditor::append`].
    #[tracing::instrument(skip_all, fields(field = %target.field, value = %value))]
    pub fn prepend(&self, source: &str, target: &FieldTarget, value: &str) -> Result<String, EditError> {
        self.insert(source, target, value, Position::First)
    }

    /// Remove the first element equal to `value`. Returns the source unchanged when the value is absent.
    ///
    /// ## Errors
    /// Same as [`FieldEditor::append`].
    #[tracing::instrument(skip_all, fields(field = %target.field, value = %value))]
    pub fn remove(&self, source: &str, target: &FieldTarget, value: &str) -> Result<String, EditError> {
        let file = parse_source(source)?;
        let seq = locate(source, &file, target)?;
        let Some(index) = seq.position_of(value) else {
            tracing::debug!("value not present; nothing to remove");
            return Ok(source.to_string());
        };
        let edit = removal_edit(source, seq, index);
        tracing::debug!(?edit, "removing element");
        Ok(edit.apply(source))
    }

    /// Decoded string elements of the target sequence, in order.
    ///
    /// ## Errors
    /// Same as [`FieldEditor::append`].
    pub fn values(&self, source: &str, target: &FieldTarget) -> Result<Vec<String>, EditError> {
        let file = parse_source(source)?;
        let seq = locate(source, &file, target)?;
        Ok(seq.string_values().into_iter().map(str::to_string).collect())
    }

    fn insert(&self, source: &str, target: &FieldTarget, value: &str, at: Position) -> Result<String, EditError> {
        let file = parse_source(source)?;
        let seq = locate(source, &file, target)?;

        if let Some(existing) = seq.position_of(value) {
            match self.config.duplicates {
                DuplicatePolicy::Skip => {
                    tracing::debug!("value already present; skipping");
                    return Ok(source.to_string());
                }
                DuplicatePolicy::Move => {
                    let in_place = match at {
                        Position::First => existing == 0,
                        Position::Last => existing + 1 == seq.len(),
                    };
                    if in_place {
                        tracing::debug!("value already in place");
                        return Ok(source.to_string());
                    }
                    let without = removal_edit(source, seq, existing).apply(source);
                    tracing::debug!(from = existing, "moving existing element");
                    return self.insert(&without, target, value, at);
                }
                DuplicatePolicy::Allow => {}
            }
        }

        let rendered = self.render(value);
        let edit = match at {
            Position::Last => self.append_edit(source, seq, &rendered),
            Position::First => self.prepend_edit(source, seq, &rendered),
        };
        tracing::debug!(?edit, "inserting element");
        Ok(edit.apply(source))
    }

    /// Go literal for a new string element.
    fn render(&self, value: &str) -> String {
        match self.config.quote_style {
            QuoteStyle::Backquote if !value.contains(['`', '\r']) => format!("`{value}`"),
            _ => quote(value),
        }
    }

    fn empty_sequence_edit(&self, source: &str, seq: &SequenceLiteral, rendered: &str) -> TextEdit {
        let inner = Span::new(seq.open_brace.end, seq.close_brace.start);
        if same_line(source, inner.start, inner.end) {
            // Comments between the braces stay; only bare whitespace is replaced.
            if source[inner.start..inner.end].trim().is_empty() {
                TextEdit::replace(inner, rendered)
            } else {
                TextEdit::insert(inner.start, rendered)
            }
        } else {
            let indent = line_indent(source, seq.close_brace.start);
            TextEdit::insert(
                inner.start,
                format!("{}{indent}{}{rendered},", newline(source), self.config.indent_unit),
            )
        }
    }

    fn append_edit(&self, source: &str, seq: &SequenceLiteral, rendered: &str) -> TextEdit {
        let Some(last) = seq.elements.last() else {
            return self.empty_sequence_edit(source, seq, rendered);
        };
        let anchor = seq.trailing_comma.map_or(last.span.end, |comma| comma.end);

        if same_line(source, anchor, seq.close_brace.start) {
            return match seq.trailing_comma {
                Some(comma) => TextEdit::insert(comma.end, format!(" {rendered},")),
                None => TextEdit::insert(last.span.end, format!(", {rendered}")),
            };
        }

        // Multi-line: a new line after the last element's line, past any trailing comment.
        let indent = if same_line(source, seq.open_brace.end, last.span.start) {
            format!("{}{}", line_indent(source, seq.close_brace.start), self.config.indent_unit)
        } else {
            line_indent(source, last.span.start).to_string()
        };
        let nl = newline(source);
        match seq.trailing_comma {
            Some(_) => TextEdit::insert(line_text_end(source, anchor), format!("{nl}{indent}{rendered},")),
            None => TextEdit::insert(last.span.end, format!(",{nl}{indent}{rendered}")),
        }
    }

    fn prepend_edit(&self, source: &str, seq: &SequenceLiteral, rendered: &str) -> TextEdit {
        let Some(first) = seq.elements.first() else {
            return self.empty_sequence_edit(source, seq, rendered);
        };
        if same_line(source, seq.open_brace.end, first.span.start) {
            TextEdit::insert(first.span.start, format!("{rendered}, "))
        } else {
            let indent = line_indent(source, first.span.start);
            TextEdit::insert(
                line_start(source, first.span.start),
                format!("{indent}{rendered},{}", newline(source)),
            )
        }
    }
}

/// The edit deleting element `index` together with its separator.
fn removal_edit(source: &str, seq: &SequenceLiteral, index: usize) -> TextEdit {
    let elem = seq.elements[index].span;
    let next = seq.elements.get(index + 1).map(|e| e.span);
    let prev = index.checked_sub(1).map(|i| seq.elements[i].span);

    // An element alone on its own line takes the whole line with it.
    let start_of_line = line_start(source, elem.start);
    let end_of_line = line_end(source, elem.end);
    let alone_before = source[start_of_line..elem.start].trim().is_empty()
        && !same_line(source, seq.open_brace.end, elem.start);
    let after = source[elem.end..end_of_line].trim_start();
    let after = after.strip_prefix(',').unwrap_or(after);
    let alone_after = is_blank_or_comment(after) && !same_line(source, elem.end, seq.close_brace.start);
    if alone_before && alone_after {
        let end = (end_of_line + 1).min(source.len());
        return TextEdit::delete(Span::new(start_of_line, end));
    }

    match (prev, next) {
        (_, Some(next)) => TextEdit::delete(Span::new(elem.start, next.start)),
        (Some(prev), None) => TextEdit::delete(Span::new(prev.end, elem.end)),
        (None, None) => {
            let inner = Span::new(seq.open_brace.end, seq.close_brace.start);
            let end = seq.trailing_comma.map_or(elem.end, |comma| comma.end);
            let rest = format!("{}{}", &source[inner.start..elem.start], &source[end..inner.end]);
            if rest.trim().is_empty() {
                TextEdit::delete(inner)
            } else {
                TextEdit::delete(Span::new(elem.start, end))
            }
        }
    }
}

/// Find the single sequence literal the target names.
fn locate<'f>(source: &str, file: &'f SourceFile, target: &FieldTarget) -> Result<&'f SequenceLiteral, EditError> {
    let candidates: Vec<&StructLiteral> = file.literals.iter().filter(|lit| target.matches(lit)).collect();

    let literal = match candidates.as_slice() {
        [] => {
            return Err(EditError::FieldNotFound {
                field: target.field.clone(),
                scope: target.scope(),
            });
        }
        [only] => *only,
        many => {
            let lines = many.iter().map(|lit| line_info(source, lit.span.start).0).collect();
            return Err(EditError::AmbiguousTarget {
                field: target.field.clone(),
                lines,
            });
        }
    };

    // `matches` guarantees the field is present.
    let Some(field) = literal.field(&target.field) else {
        return Err(EditError::FieldNotFound {
            field: target.field.clone(),
            scope: target.scope(),
        });
    };
    field.value.node.as_sequence().ok_or_else(|| EditError::NotASequence {
        field: target.field.clone(),
        found: field.value.node.describe(),
        span: field.value.span,
    })
}

/// Append `value` to the sequence literal assigned to `field`, using the default configuration.
///
/// ## Errors
/// See [`FieldEditor::append`].
pub fn append_to_field(source: &str, field: &str, value: &str) -> Result<String, EditError> {
    FieldEditor::default().append(source, &FieldTarget::new(field), value)
}
