//! Actions: named edits applied to a [`TestFile`].
//!
//! Each action reports whether it modified the file. An action whose field the registration does not set is a no-op
//! and reports `false`.

use crate::editor::{FieldEditor, FieldTarget};
use crate::error::EditError;
use crate::registration::REGISTRATION_TYPE;
use crate::test_file::TestFile;

const CONTACTS: &str = "Contacts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Remove each value if present, then add all values at the end in the given order.
    Append,
    /// Remove each value if present, then add all values at the start in the given order.
    Prepend,
    /// Remove each value that is present.
    Remove,
}

/// One edit of a string-sequence field of the registration literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub field: String,
    pub values: Vec<String>,
}

impl Action {
    pub fn new(kind: ActionKind, field: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            values,
        }
    }

    pub fn append_values(field: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(ActionKind::Append, field, values)
    }

    pub fn prepend_values(field: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(ActionKind::Prepend, field, values)
    }

    pub fn remove_values(field: impl Into<String>, values: Vec<String>) -> Self {
        Self::new(ActionKind::Remove, field, values)
    }

    pub fn append_contacts(emails: Vec<String>) -> Self {
        Self::append_values(CONTACTS, emails)
    }

    pub fn prepend_contacts(emails: Vec<String>) -> Self {
        Self::prepend_values(CONTACTS, emails)
    }

    pub fn remove_contacts(emails: Vec<String>) -> Self {
        Self::remove_values(CONTACTS, emails)
    }

    /// Apply the action to `file`, returning whether it was modified.
    ///
    /// ## Errors
    /// Propagates [`EditError`] from the editor; `file` is left unchanged on error.
    #[tracing::instrument(skip_all, fields(kind = ?self.kind, field = %self.field))]
    pub fn apply(&self, file: &mut TestFile, editor: &FieldEditor) -> Result<bool, EditError> {
        if !file.has_field(&self.field) {
            tracing::debug!("field not set; skipping");
            return Ok(false);
        }
        let target = FieldTarget::new(self.field.as_str()).of_type(REGISTRATION_TYPE);

        let mut contents = file.contents().to_string();
        let mut removed = false;
        for value in &self.values {
            let next = editor.remove(&contents, &target, value)?;
            removed |= next != contents;
            contents = next;
        }

        let modified = match self.kind {
            ActionKind::Remove => removed,
            ActionKind::Append => {
                for value in &self.values {
                    contents = editor.append(&contents, &target, value)?;
                }
                true
            }
            ActionKind::Prepend => {
                for value in self.values.iter().rev() {
                    contents = editor.prepend(&contents, &target, value)?;
                }
                true
            }
        };

        file.set_contents(contents)?;
        tracing::debug!(modified, "action applied");
        Ok(modified)
    }
}

/// Split comma- or newline-separated user input into trimmed values, dropping empty entries.
pub fn split_list_input(input: &str) -> Vec<String> {
    input
        .split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
