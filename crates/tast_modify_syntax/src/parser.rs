//! Parser for Go test files
//!
//! Builds a [`SourceFile`] from a token stream. The parser is not a Go grammar: it walks the token stream once,
//! tracking bracket nesting, and only builds nodes for the package clause, function declarations, and keyed
//! composite literals. Everything between them is skipped.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use tast_modify_syntax::{lexer, parser};
//!
//! let source = "package ui\n\nfunc init() {\n\ttesting.AddTest(&testing.Test{Func: Fixture})\n}\n";
//! let tokens = lexer::lex(source).unwrap();
//! let file = parser::parse(&tokens).unwrap();
//! assert_eq!(file.package.as_deref(), Some("ui"));
//! assert_eq!(file.literals[0].type_name.as_deref(), Some("testing.Test"));
//! ```

use std::collections::HashMap;

use crate::ast::*;
use crate::diagnostics::SyntaxError;
use crate::lexer::tokens::KEYWORDS;
use crate::lexer::{KeywordId, PunctuationId, Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/literal.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
