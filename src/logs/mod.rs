//! Activity log.
//!
//! This module provides:
//! - Typed, timestamped, immutable log entries
//! - A capacity-bounded store (most recent first) with type and text filters
//! - Export of entries to a pretty-printed JSON snapshot and parsing it back
//!
//! The store is an owned value; construct it once and share it as
//! `Arc<LogStore>` with everything that records actions.

mod export;
mod store;
mod types;

pub use export::{export, export_file_name, parse_snapshot};
pub use store::{LogStore, DEFAULT_CAPACITY};
pub use types::{
    into_details, Details, LogEntry, LogEntryId, LogError, LogResult, LogType, LogTypeFilter,
};
