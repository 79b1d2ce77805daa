//! Typed view of a `testing.Test` registration literal.

use tast_modify_syntax::ast::{SourceFile, Span, StructLiteral, Value};

/// Type spelling of the registration literal passed to `testing.AddTest`.
pub const REGISTRATION_TYPE: &str = "testing.Test";

/// The metadata fields of one registered test, read from its struct literal.
///
/// Fields the literal does not set are `None` (or empty for sequences). Fields not modelled here are still reachable
/// through the literal's field index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestRegistration {
    /// Name of the test function, e.g. `Fixture`.
    pub func: Option<String>,
    /// Selector spelling, e.g. `testing.LacrosVariantUnneeded`.
    pub lacros_status: Option<String>,
    pub desc: Option<String>,
    pub contacts: Vec<String>,
    pub bug_component: Option<String>,
    pub attr: Vec<String>,
    /// Span of the whole literal.
    pub span: Span,
}

impl TestRegistration {
    pub fn from_literal(literal: &StructLiteral) -> Self {
        let value = |name: &str| literal.field(name).map(|f| &f.value.node);
        let string = |name: &str| value(name).and_then(Value::as_str).map(str::to_string);
        let path = |name: &str| match value(name) {
            Some(Value::Path(segments)) => Some(segments.join(".")),
            _ => None,
        };
        let strings = |name: &str| {
            value(name)
                .and_then(Value::as_sequence)
                .map(|seq| seq.string_values().into_iter().map(str::to_string).collect())
                .unwrap_or_default()
        };

        Self {
            func: path("Func"),
            lacros_status: path("LacrosStatus"),
            desc: string("Desc"),
            contacts: strings("Contacts"),
            bug_component: string("BugComponent"),
            attr: strings("Attr"),
            span: literal.span,
        }
    }

    /// The first `testing.Test` literal in `file`.
    pub fn find(file: &SourceFile) -> Option<Self> {
        file.literals_of_type(REGISTRATION_TYPE).next().map(Self::from_literal)
    }

    /// Fully qualified test id, `tast.<package>.<Func>`.
    pub fn test_name(&self, package: &str) -> Option<String> {
        self.func.as_ref().map(|func| format!("tast.{package}.{func}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tast_modify_syntax::parse_source;

    const SOURCE: &str = r#"package example

func init() {
	testing.AddTest(&testing.Test{
		Func:         Fixture,
		LacrosStatus: testing.LacrosVariantUnneeded,
		Desc:         "Fake test",
		Contacts:     []string{"first@google.com", "second@google.com"},
		BugComponent: "b:1034625",
		Attr:         []string{"group:mainline", "informational"},
		Timeout:      time.Minute,
	})
}
"#;

    #[test]
    fn test_from_literal() {
        let file = parse_source(SOURCE).unwrap();
        let reg = TestRegistration::find(&file).unwrap();
        assert_eq!(reg.func.as_deref(), Some("Fixture"));
        assert_eq!(reg.lacros_status.as_deref(), Some("testing.LacrosVariantUnneeded"));
        assert_eq!(reg.desc.as_deref(), Some("Fake test"));
        assert_eq!(reg.contacts, vec!["first@google.com", "second@google.com"]);
        assert_eq!(reg.bug_component.as_deref(), Some("b:1034625"));
        assert_eq!(reg.attr, vec!["group:mainline", "informational"]);
        assert_eq!(reg.test_name("example").as_deref(), Some("tast.example.Fixture"));
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let file = parse_source("package p\nvar t = testing.Test{Desc: \"only\"}\n").unwrap();
        let reg = TestRegistration::find(&file).unwrap();
        assert_eq!(reg.desc.as_deref(), Some("only"));
        assert!(reg.contacts.is_empty());
        assert_eq!(reg.func, None);
        assert_eq!(reg.test_name("p"), None);
    }

    #[test]
    fn test_other_literals_ignored() {
        let file = parse_source("package p\nvar f = testing.Fixture{Name: \"fx\"}\n").unwrap();
        assert_eq!(TestRegistration::find(&file), None);
    }
}
