//! Apply a batch of actions to one test file's source.

use crate::actions::Action;
use crate::config::EditConfig;
use crate::editor::FieldEditor;
use crate::error::EditError;
use crate::filters::Filter;
use crate::test_file::TestFile;

/// Result of running a [`Modifier`] over a file that has a registration and passed every filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modification {
    /// `tast.<package>.<Func>`, or the empty string when the registration has no `Func`.
    pub test_name: String,
    /// Whether any action changed the file.
    pub modified: bool,
    /// The file contents after all actions.
    pub contents: String,
}

/// Actions plus the filters that gate them.
#[derive(Debug, Clone, Default)]
pub struct Modifier {
    actions: Vec<Action>,
    filters: Vec<Filter>,
    editor: FieldEditor,
}

impl Modifier {
    pub fn new(actions: Vec<Action>, filters: Vec<Filter>) -> Self {
        Self {
            actions,
            filters,
            editor: FieldEditor::default(),
        }
    }

    pub fn with_config(mut self, config: EditConfig) -> Self {
        self.editor = FieldEditor::new(config);
        self
    }

    /// Run every action, in order, on `source`.
    ///
    /// Returns `Ok(None)` when the source has no registration literal or fails a filter.
    ///
    /// ## Errors
    /// The first [`EditError`] raised by parsing or by an action. Nothing is returned for a partially edited file.
    #[tracing::instrument(skip_all, fields(actions = self.actions.len(), filters = self.filters.len()))]
    pub fn run(&self, source: &str) -> Result<Option<Modification>, EditError> {
        let mut file = TestFile::parse(source)?;
        if file.registration().is_none() {
            tracing::debug!("no registration literal");
            return Ok(None);
        }
        if !self.filters.iter().all(|f| f.matches(&file)) {
            tracing::debug!("filtered out");
            return Ok(None);
        }

        let mut modified = false;
        for action in &self.actions {
            modified |= action.apply(&mut file, &self.editor)?;
        }

        let test_name = file.test_name().unwrap_or_default();
        tracing::debug!(test = %test_name, modified, "file processed");
        Ok(Some(Modification {
            test_name,
            modified,
            contents: file.into_contents(),
        }))
    }
}
