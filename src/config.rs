//! Editing configuration
//!
//! Defaults follow gofmt: tab indentation and interpreted string literals.

/// Configuration for [`crate::FieldEditor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditConfig {
    /// One level of indentation, used when an element is added to an empty multi-line sequence
    pub indent_unit: String,
    /// How new string elements are written
    pub quote_style: QuoteStyle,
    /// What append/prepend do when the value is already in the sequence
    pub duplicates: DuplicatePolicy,
}

/// Quote style for inserted string literals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `"..."` with Go escapes
    Interpreted,
    /// `` `...` `` when the value allows it, otherwise interpreted
    Backquote,
}

/// Handling of values already present in the target sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Move the existing element to the insertion point, keeping elements unique
    Move,
    /// Leave the sequence untouched
    Skip,
    /// Insert anyway
    Allow,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self {
            indent_unit: "\t".to_string(),
            quote_style: QuoteStyle::Interpreted,
            duplicates: DuplicatePolicy::Move,
        }
    }
}

impl EditConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation unit
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Set the quote style
    pub fn with_quote_style(mut self, style: QuoteStyle) -> Self {
        self.quote_style = style;
        self
    }

    /// Set the duplicate policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }
}
