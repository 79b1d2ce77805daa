//! Filters deciding which test files an action batch touches.

use crate::test_file::TestFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Pass files whose registered test is one of these names. Names may be fully qualified (`tast.pkg.Func`) or
    /// bare (`pkg.Func`).
    TestNames(Vec<String>),
}

impl Filter {
    pub fn test_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::TestNames(names.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, file: &TestFile) -> bool {
        match self {
            Filter::TestNames(names) => {
                let Some(full) = file.test_name() else {
                    return false;
                };
                let bare = full.strip_prefix("tast.").unwrap_or(&full);
                let hit = names.iter().any(|n| n == &full || n == bare);
                tracing::trace!(test = %full, hit, "test name filter");
                hit
            }
        }
    }
}
