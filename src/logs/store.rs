//! Capacity-bounded in-memory log store.

use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::LogStoreConfig;
use crate::metrics::{LOG_ENTRIES_EVICTED_TOTAL, LOG_ENTRIES_TOTAL, LOG_STORE_SIZE};

use super::types::{Details, LogEntry, LogType, LogTypeFilter};

/// Default number of entries kept before the oldest are evicted
pub const DEFAULT_CAPACITY: usize = 1000;

/// Append-only event log, most recent entry first.
///
/// A `VecDeque` acts as the ring buffer: new entries go to the front and
/// once the store is over capacity the oldest are dropped from the back.
/// The buffer sits behind one lock so append, clear and query never
/// interleave. The `console_log_store_size` gauge is process-wide and
/// assumes one store per process; with several it tracks the last writer.
pub struct LogStore {
    entries: RwLock<VecDeque<LogEntry>>,
    capacity: usize,
    echo: bool,
}

impl Default for LogStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl LogStore {
    /// Create a store from configuration
    pub fn new(config: &LogStoreConfig) -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
            capacity: config.capacity.max(1),
            echo: config.echo,
        }
    }

    /// Create a store holding at most `capacity` entries, without echo
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
            capacity: capacity.max(1),
            echo: false,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, VecDeque<LogEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, VecDeque<LogEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an entry at the head and return it.
    pub fn append(
        &self,
        kind: LogType,
        message: impl Into<String>,
        details: Option<Details>,
    ) -> LogEntry {
        let entry = LogEntry::new(kind, message.into(), details);

        if self.echo {
            echo(&entry);
        }

        let mut entries = self.write();
        entries.push_front(entry.clone());

        let mut evicted = 0;
        while entries.len() > self.capacity {
            entries.pop_back();
            evicted += 1;
        }

        LOG_ENTRIES_TOTAL.with_label_values(&[kind.as_str()]).inc();
        LOG_STORE_SIZE.set(entries.len() as i64);
        if evicted > 0 {
            LOG_ENTRIES_EVICTED_TOTAL.inc_by(evicted);
            tracing::trace!(
                evicted = evicted,
                capacity = self.capacity,
                "Evicted oldest log entries from full store"
            );
        }

        entry
    }

    pub fn info(&self, message: impl Into<String>, details: Option<Details>) -> LogEntry {
        self.append(LogType::Info, message, details)
    }

    pub fn error(&self, message: impl Into<String>, details: Option<Details>) -> LogEntry {
        self.append(LogType::Error, message, details)
    }

    pub fn warning(&self, message: impl Into<String>, details: Option<Details>) -> LogEntry {
        self.append(LogType::Warning, message, details)
    }

    pub fn action(&self, message: impl Into<String>, details: Option<Details>) -> LogEntry {
        self.append(LogType::Action, message, details)
    }

    /// Entries matching both the type filter and the search text, in store
    /// order.
    ///
    /// The search is case-insensitive over the message and the serialized
    /// details; an empty search matches everything.
    pub fn query(&self, filter: LogTypeFilter, search: &str) -> Vec<LogEntry> {
        let needle = search.to_lowercase();
        self.read()
            .iter()
            .filter(|e| filter.matches(e.kind()) && e.contains_lowercase(&needle))
            .cloned()
            .collect()
    }

    /// All entries, most recent first
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.read().iter().cloned().collect()
    }

    /// Remove every entry, returning how many were dropped
    pub fn clear(&self) -> usize {
        let mut entries = self.write();
        let removed = entries.len();
        entries.clear();
        LOG_STORE_SIZE.set(0);

        tracing::debug!(removed = removed, "Log store cleared");
        removed
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

fn echo(entry: &LogEntry) {
    let details = entry
        .details()
        .and_then(|d| serde_json::to_string(d).ok())
        .unwrap_or_default();

    match entry.kind() {
        LogType::Error => {
            tracing::error!(log_type = %entry.kind(), details = %details, "{}", entry.message())
        }
        LogType::Warning => {
            tracing::warn!(log_type = %entry.kind(), details = %details, "{}", entry.message())
        }
        LogType::Info | LogType::Action => {
            tracing::info!(log_type = %entry.kind(), details = %details, "{}", entry.message())
        }
    }
}
