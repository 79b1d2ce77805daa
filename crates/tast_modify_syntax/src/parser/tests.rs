#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on recognizing registration literals inside realistic test files and on
/// skipping the Go syntax around them without false positives.
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<SourceFile, Vec<SyntaxError>> {
        let tokens = lexer::lex(source)?;
        parse(&tokens)
    }

    const REGISTRATION: &str = r#"// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

package example

import (
	"context"

	"go.chromium.org/tast/core/testing"
)

func init() {
	testing.AddTest(&testing.Test{
		Func:         Fixture,
		LacrosStatus: testing.LacrosVariantUnneeded,
		Desc:         "Fake test",
		Contacts:     []string{"first@google.com", "second@google.com", "third@google.com"},
		BugComponent: "b:1034625",
		Attr:         []string{"group:mainline", "informational"},
	})
}

func Fixture(ctx context.Context, s *testing.State) {
	if s == nil {
		return
	}
}
"#;

    #[test]
    fn test_parse_registration() {
        let file = parse_str(REGISTRATION).unwrap();
        assert_eq!(file.package.as_deref(), Some("example"));
        assert_eq!(file.literals.len(), 1);

        let lit = &file.literals[0];
        assert_eq!(lit.type_name.as_deref(), Some("testing.Test"));
        assert_eq!(lit.enclosing_func.as_deref(), Some("init"));
        assert_eq!(
            lit.field_names().collect::<Vec<_>>(),
            vec!["Func", "LacrosStatus", "Desc", "Contacts", "BugComponent", "Attr"]
        );
    }

    #[test]
    fn test_field_values() {
        let file = parse_str(REGISTRATION).unwrap();
        let lit = &file.literals[0];

        assert_eq!(lit.field("Func").unwrap().value.node, Value::Path(vec!["Fixture".into()]));
        assert_eq!(
            lit.field("LacrosStatus").unwrap().value.node,
            Value::Path(vec!["testing".into(), "LacrosVariantUnneeded".into()])
        );
        assert_eq!(lit.field("Desc").unwrap().value.node.as_str(), Some("Fake test"));

        let contacts = lit.field("Contacts").unwrap().value.node.as_sequence().unwrap();
        assert_eq!(contacts.elem_type, "string");
        assert_eq!(
            contacts.string_values(),
            vec!["first@google.com", "second@google.com", "third@google.com"]
        );
        assert!(contacts.trailing_comma.is_none());
    }

    #[test]
    fn test_spans_point_into_source() {
        let file = parse_str(REGISTRATION).unwrap();
        let lit = &file.literals[0];
        let contacts = lit.field("Contacts").unwrap();
        let text = &REGISTRATION[contacts.value.span.start..contacts.value.span.end];
        assert_eq!(
            text,
            r#"[]string{"first@google.com", "second@google.com", "third@google.com"}"#
        );
        let key = &REGISTRATION[contacts.key.span.start..contacts.key.span.end];
        assert_eq!(key, "Contacts");
        assert_eq!(&REGISTRATION[lit.open_brace.start..lit.open_brace.end], "{");
    }

    #[test]
    fn test_functions_recorded() {
        let file = parse_str(REGISTRATION).unwrap();
        let names: Vec<_> = file.functions.iter().map(|f| f.name.node.as_str()).collect();
        assert_eq!(names, vec!["init", "Fixture"]);
        let lit = &file.literals[0];
        let init_body = file.functions[0].body.unwrap();
        assert!(init_body.start < lit.span.start && lit.span.end < init_body.end);
        assert!(file.functions[1].body.unwrap().start > lit.span.end);
    }

    #[test]
    fn test_multiline_sequence_with_trailing_comma() {
        let source = "package p\nvar t = testing.Test{\n\tAttr: []string{\n\t\t\"a\",\n\t\t\"b\",\n\t},\n}\n";
        let file = parse_str(source).unwrap();
        let attr = file.literals[0].field("Attr").unwrap().value.node.as_sequence().unwrap();
        assert_eq!(attr.len(), 2);
        assert!(attr.trailing_comma.is_some());
        assert_eq!(file.literals[0].enclosing_func, None);
    }

    #[test]
    fn test_params_nested_literals() {
        let source = r#"package p

func init() {
	testing.AddTest(&testing.Test{
		Func:     Params,
		Contacts: []string{"a@google.com"},
		Params: []testing.Param{{
			Name:      "fast",
			ExtraAttr: []string{"group:fast"},
		}, {
			Name:      "slow",
			ExtraAttr: []string{"group:slow"},
		}},
	})
}
"#;
        let file = parse_str(source).unwrap();
        assert_eq!(file.literals.len(), 3);
        assert_eq!(file.literals[0].type_name.as_deref(), Some("testing.Test"));
        assert_eq!(file.literals[1].type_name, None);
        assert_eq!(file.literals[1].field("Name").unwrap().value.node.as_str(), Some("fast"));
        assert_eq!(file.literals[2].enclosing_func.as_deref(), Some("init"));

        let params = file.literals[0].field("Params").unwrap().value.node.as_sequence().unwrap();
        assert_eq!(params.elem_type, "testing.Param");
        assert_eq!(params.elements[0].node, Value::Struct { literal_index: 1 });
        assert_eq!(params.elements[1].node, Value::Struct { literal_index: 2 });
    }

    #[test]
    fn test_method_declaration_receiver() {
        let source = "package p\nfunc (f *fixtureImpl) SetUp(ctx context.Context) interface{} {\n\treturn nil\n}\n";
        let file = parse_str(source).unwrap();
        assert_eq!(file.functions.len(), 1);
        assert_eq!(file.functions[0].name.node, "SetUp");
        assert_eq!(file.functions[0].receiver.as_deref(), Some("*fixtureImpl"));
        assert!(file.functions[0].body.is_some());
    }

    #[test]
    fn test_blocks_are_not_literals() {
        let source = r#"package p

func run(items []string) {
	for _, item := range items {
		use(item)
	}
outer:
	for {
		break outer
	}
	if ok {
	loop:
		for {}
	}
}
"#;
        let file = parse_str(source).unwrap();
        assert!(file.literals.is_empty(), "{:?}", file.literals);
        assert_eq!(file.functions[0].name.node, "run");
    }

    #[test]
    fn test_func_literal_values_are_skipped() {
        let source = r#"package p

var hook func(string) error

func init() {
	testing.AddTest(&testing.Test{
		Func:    Hooked,
		Timeout: 2 * time.Minute,
		Fixture: fixture.Name(func() string { return "x" }),
		Desc:    "a" + "b",
	})
}
"#;
        let file = parse_str(source).unwrap();
        assert_eq!(file.functions.len(), 1);
        let lit = &file.literals[0];
        assert_eq!(lit.field("Timeout").unwrap().value.node, Value::Other);
        assert_eq!(lit.field("Fixture").unwrap().value.node, Value::Other);
        assert_eq!(lit.field("Desc").unwrap().value.node, Value::Other);
    }

    #[test]
    fn test_duplicate_field_is_error() {
        let source = "package p\nvar t = testing.Test{Desc: \"a\", Desc: \"b\"}\n";
        let errors = parse_str(source).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Duplicate field 'Desc'"));
    }

    #[test]
    fn test_malformed_literals_report_and_recover() {
        let source = "package p\nvar a = testing.Test{Desc: \"a\", Attr}\nvar b = testing.Test{Desc: }\n";
        let errors = parse_str(source).unwrap_err();
        assert_eq!(errors.len(), 2, "{errors:?}");
        assert!(errors[0].message.contains("Expected ':' after field name, found '}'"));
        assert!(errors[1].message.contains("Expected value, found '}'"));
    }

    #[test]
    fn test_map_literals_with_expression_keys_are_skipped() {
        let source = r#"package p

const k = "x"

var m = map[string]int{k: 1, "y": 2}
var n = map[string]testing.Param{a: {Name: "a"}, pkg.B: {Name: "b"}}

func init() {
	testing.AddTest(&testing.Test{
		Func:     Maps,
		Contacts: []string{"a@google.com"},
		Vars:     map[string]string{key: "v", other(): "w"},
	})
}
"#;
        let file = parse_str(source).unwrap();
        assert_eq!(file.literals.len(), 1, "{:?}", file.literals);
        let lit = &file.literals[0];
        assert_eq!(lit.type_name.as_deref(), Some("testing.Test"));
        assert_eq!(lit.field("Vars").unwrap().value.node, Value::Other);
        assert_eq!(lit.field("Contacts").unwrap().value.node.as_sequence().unwrap().len(), 1);
    }

    #[test]
    fn test_map_literal_with_identifier_keys_is_recorded() {
        let file = parse_str("package p
var m = map[string]int{a: 1, b: 2}
").unwrap();
        assert_eq!(file.literals.len(), 1);
        assert_eq!(file.literals[0].field_names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_token_stream() {
        let file = Parser::new(&[]).parse().unwrap();
        assert_eq!(file, SourceFile::default());
    }
}
