#![forbid(unsafe_code)]
//! Tast test-metadata editor
//!
//! Rewrites the metadata of Go test registrations (`testing.AddTest(&testing.Test{...})`) in place. Edits are computed
//! from byte spans in a parsed syntax tree and spliced into the original text, so every byte outside the edited
//! sequence literal is preserved.
//!
//! ## Layers
//!
//! - [`tast_modify_syntax`]: Go lexer and partial parser producing the span-carrying tree.
//! - [`editor`]: the field editor (`append`, `prepend`, `remove` on a sequence-valued field).
//! - [`actions`], [`filters`], [`modifier`]: batch edits over test files, gated by test name.
//!
//! ## Panic Policy
//!
//! - **Library code**: Use `Result` or `Option` with `?`. Malformed input is reported as [`EditError::Parse`], never a
//!   panic.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! let source = "package p\nvar t = testing.Test{Contacts: []string{\"a@google.com\"}}\n";
//! let out = tast_modify::append_to_field(source, "Contacts", "b@google.com").unwrap();
//! assert!(out.contains(r#"[]string{"a@google.com", "b@google.com"}"#));
//! ```

pub mod actions;
pub mod config;
pub mod editor;
pub mod error;
pub mod filters;
pub mod modifier;
pub mod registration;
pub mod test_file;

pub use tast_modify_syntax::{ast, diagnostics};

pub use actions::{Action, ActionKind, split_list_input};
pub use config::{DuplicatePolicy, EditConfig, QuoteStyle};
pub use editor::{FieldEditor, FieldTarget, TextEdit, append_to_field};
pub use error::EditError;
pub use filters::Filter;
pub use modifier::{Modification, Modifier};
pub use registration::TestRegistration;
pub use test_file::TestFile;
