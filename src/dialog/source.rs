//! Dialog data source.

use std::sync::Arc;

use dashmap::DashMap;

use super::fixtures::fixture_dialogs;
use super::types::Dialog;

/// Supplies dialogs to the console.
///
/// Given a dialog id, an implementation returns the client record and the
/// ordered message history.
pub trait DialogSource: Send + Sync {
    /// All dialogs, ordered by id
    fn dialogs(&self) -> Vec<Dialog>;

    /// A single dialog, if it exists
    fn dialog(&self, id: u64) -> Option<Dialog>;
}

/// Dialogs held in memory, keyed by id
pub struct FixtureDialogs {
    dialogs: DashMap<u64, Dialog>,
}

impl Default for FixtureDialogs {
    fn default() -> Self {
        Self::new(fixture_dialogs())
    }
}

impl FixtureDialogs {
    /// Create a source serving the given dialogs
    pub fn new(dialogs: Vec<Dialog>) -> Self {
        let map = DashMap::with_capacity(dialogs.len());
        for dialog in dialogs {
            map.insert(dialog.id, dialog);
        }
        Self { dialogs: map }
    }

    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }
}

impl DialogSource for FixtureDialogs {
    fn dialogs(&self) -> Vec<Dialog> {
        let mut dialogs: Vec<Dialog> = self
            .dialogs
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        dialogs.sort_by_key(|d| d.id);
        dialogs
    }

    fn dialog(&self, id: u64) -> Option<Dialog> {
        self.dialogs.get(&id).map(|d| d.clone())
    }
}

/// Create an Arc-wrapped source over the built-in dialogs
pub fn create_dialog_source() -> Arc<dyn DialogSource> {
    Arc::new(FixtureDialogs::default())
}
