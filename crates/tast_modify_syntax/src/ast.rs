//! Syntax tree for the parts of a Go test file the metadata editor cares about.
//!
//! This is deliberately not a full Go AST. It records the package clause, function declarations, and every keyed
//! composite literal (`testing.Test{...}`, `testing.Param{...}`, elided `{...}` elements) together with byte spans into
//! the original source. Everything else in the file is skipped by the parser and reproduced untouched by the editor.

use std::collections::HashMap;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

/// A parsed Go source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceFile {
    /// Name from the `package` clause, if present.
    pub package: Option<Ident>,
    /// Top-level function declarations, in source order.
    pub functions: Vec<FuncDecl>,
    /// Every keyed composite literal in the file, outer literals before the literals nested inside them.
    pub literals: Vec<StructLiteral>,
}

impl SourceFile {
    /// Literals whose type spelling equals `type_name` (e.g. `"testing.Test"`).
    pub fn literals_of_type<'a>(&'a self, type_name: &'a str) -> impl Iterator<Item = &'a StructLiteral> + 'a {
        self.literals
            .iter()
            .filter(move |lit| lit.type_name.as_deref() == Some(type_name))
    }
}

/// `func [(recv)] name(...) ... { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: Spanned<Ident>,
    /// Receiver type spelling for methods, e.g. `*fixtureImpl`.
    pub receiver: Option<String>,
    /// Span of the body including braces; `None` for declarations without a body.
    pub body: Option<Span>,
    pub span: Span,
}

/// A composite literal whose elements are `Key: Value` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct StructLiteral {
    /// Type spelling before the brace, e.g. `testing.Test`. `None` for elided element literals.
    pub type_name: Option<String>,
    /// Name of the top-level function the literal appears in.
    pub enclosing_func: Option<Ident>,
    pub fields: Vec<KeyedField>,
    /// Field name -> position in `fields` (first occurrence wins).
    pub index: HashMap<Ident, usize>,
    pub open_brace: Span,
    pub close_brace: Span,
    pub span: Span,
}

impl StructLiteral {
    pub fn field(&self, name: &str) -> Option<&KeyedField> {
        self.index.get(name).map(|&i| &self.fields[i])
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Field names in source order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.node.as_str())
    }
}

/// One `Key: Value` element of a struct literal.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedField {
    pub key: Spanned<Ident>,
    pub value: Spanned<Value>,
}

/// Value on the right-hand side of a keyed field or inside a sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `[]T{...}`
    Sequence(SequenceLiteral),
    /// `"..."` or `` `...` ``
    String(StringLit),
    /// Identifier or selector chain: `Fixture`, `testing.LacrosVariantUnneeded`.
    Path(Vec<Ident>),
    /// Keyed composite literal; the literal itself is recorded in [`SourceFile::literals`] at `literal_index`.
    Struct { literal_index: usize },
    /// Anything else (calls, arithmetic, maps, positional literals). Kept only as its span.
    Other,
}

impl Value {
    pub fn as_sequence(&self) -> Option<&SequenceLiteral> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(&s.value),
            _ => None,
        }
    }

    /// Short human-readable name of the value's shape, used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Value::Sequence(_) => "sequence literal",
            Value::String(_) => "string literal",
            Value::Path(_) => "identifier",
            Value::Struct { .. } => "struct literal",
            Value::Other => "expression",
        }
    }
}

/// `[]string{"a", "b"}`
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceLiteral {
    /// Element type spelling, e.g. `string` or `testing.Param`.
    pub elem_type: String,
    pub elements: Vec<Spanned<Value>>,
    pub open_brace: Span,
    pub close_brace: Span,
    /// Span of the comma after the last element, when there is one.
    pub trailing_comma: Option<Span>,
}

impl SequenceLiteral {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Decoded string values of all string elements, in order.
    pub fn string_values(&self) -> Vec<&str> {
        self.elements.iter().filter_map(|e| e.node.as_str()).collect()
    }

    /// Position of the first string element equal to `value`.
    pub fn position_of(&self, value: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.node.as_str() == Some(value))
    }
}

/// A string literal with its decoded value.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLit {
    pub value: String,
    pub raw: bool,
}
