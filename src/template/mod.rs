//! Canned-response templates.
//!
//! This module provides:
//! - Template patterns with `{variable}` placeholders and client records
//! - Substitution of placeholders with client fields
//! - Caret-aware insertion of variables and snippets into a draft
//! - An ordered in-memory template collection with CRUD and search
//!
//! # Example
//!
//! ```ignore
//! let mut book = TemplateBook::with_defaults();
//! let id = book.add("Hello, {clientName}!");
//!
//! let client = ClientRecord::named("Ivan");
//! let rendered = render(book.get(id).unwrap(), &client);
//! assert_eq!(rendered, "Hello, Ivan!");
//! ```

mod cursor;
mod store;
mod substitution;
mod types;

pub use cursor::{insert_at_cursor, Caret, Insertion};
pub use store::{default_templates, filter_patterns, TemplateBook};
pub use substitution::{extract_placeholders, render};
pub use types::{ClientRecord, TemplateError, TemplatePattern, TemplateResult, TemplateVariable};
