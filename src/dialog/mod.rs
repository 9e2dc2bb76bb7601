//! Dialogs between clients and operators.
//!
//! The console reads dialogs through the `DialogSource` trait; the built-in
//! `FixtureDialogs` serves a fixed set of conversations from memory.

mod fixtures;
mod source;
mod types;

pub use source::{create_dialog_source, DialogSource, FixtureDialogs};
pub use types::{Dialog, Message, Sender};
