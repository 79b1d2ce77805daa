//! Go syntax frontend for the Tast metadata editor: lexer, parser, syntax tree, diagnostics.
//!
//! This crate is dependency-light and knows nothing about editing. It turns Go source into a [`ast::SourceFile`]
//! whose nodes carry byte spans into the original text, which is what lets the editor splice changes in without
//! disturbing anything else.
//!
//! ## Notes
//! - This crate is “syntax-only” and deliberately partial: it recognizes package clauses, function declarations, and
//!   keyed composite literals, and walks past all other syntax with bracket matching.
//!
//! ## Examples
//! ```rust,no_run
//! use tast_modify_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("package p\nvar t = testing.Test{Desc: \"x\"}\n").unwrap();
//! let file = parser::parse(&tokens).unwrap();
//! assert_eq!(file.literals.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

use ast::SourceFile;
use diagnostics::SyntaxError;

/// Lex and parse `source` in one step.
///
/// ## Errors
/// Returns the lexer's errors if tokenization fails, otherwise the parser's errors.
pub fn parse_source(source: &str) -> Result<SourceFile, Vec<SyntaxError>> {
    let tokens = lexer::lex(source)?;
    parser::parse(&tokens)
}
