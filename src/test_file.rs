//! A Go test file held as text together with its parsed syntax tree.

use tast_modify_syntax::ast::SourceFile;
use tast_modify_syntax::parse_source;

use crate::error::EditError;
use crate::registration::{REGISTRATION_TYPE, TestRegistration};

/// Source text and the tree parsed from it. The two are kept in sync: every content change re-parses.
#[derive(Debug, Clone)]
pub struct TestFile {
    contents: String,
    syntax: SourceFile,
}

impl TestFile {
    /// Parse `contents` as a Go test file.
    ///
    /// ## Errors
    /// [`EditError::Parse`] when the source does not lex or a struct literal is malformed.
    pub fn parse(contents: impl Into<String>) -> Result<Self, EditError> {
        let contents = contents.into();
        let syntax = parse_source(&contents)?;
        Ok(Self { contents, syntax })
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn into_contents(self) -> String {
        self.contents
    }

    pub fn syntax(&self) -> &SourceFile {
        &self.syntax
    }

    pub fn registration(&self) -> Option<TestRegistration> {
        TestRegistration::find(&self.syntax)
    }

    /// `tast.<package>.<Func>` for the registered test, when the file has a package clause and a registration `Func`.
    pub fn test_name(&self) -> Option<String> {
        let package = self.syntax.package.as_deref()?;
        self.registration()?.test_name(package)
    }

    /// Whether the registration literal sets `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.syntax
            .literals_of_type(REGISTRATION_TYPE)
            .next()
            .is_some_and(|lit| lit.has_field(field))
    }

    /// Replace the contents, re-parsing them first. On error the file keeps its previous contents.
    pub(crate) fn set_contents(&mut self, contents: String) -> Result<(), EditError> {
        if contents != self.contents {
            self.syntax = parse_source(&contents)?;
            self.contents = contents;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_fields() {
        let file = TestFile::parse("package power\n\nfunc init() {\n\ttesting.AddTest(&testing.Test{\n\t\tFunc:     Idle,\n\t\tContacts: []string{},\n\t})\n}\n").unwrap();
        assert_eq!(file.test_name().as_deref(), Some("tast.power.Idle"));
        assert!(file.has_field("Contacts"));
        assert!(!file.has_field("Attr"));
    }

    #[test]
    fn test_no_registration() {
        let file = TestFile::parse("package util\n\nfunc helper() {}\n").unwrap();
        assert!(file.registration().is_none());
        assert_eq!(file.test_name(), None);
        assert!(!file.has_field("Contacts"));
    }

    #[test]
    fn test_set_contents_keeps_old_on_error() {
        let mut file = TestFile::parse("package p\n").unwrap();
        assert!(file.set_contents("package p\nvar s = \"open\n".to_string()).is_err());
        assert_eq!(file.contents(), "package p\n");
        file.set_contents("package q\n".to_string()).unwrap();
        assert_eq!(file.syntax().package.as_deref(), Some("q"));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(TestFile::parse("package p\nfunc f() {"), Err(EditError::Parse { .. })));
    }
}
