//! Log entry types and error definitions

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Log-specific error type
#[derive(Debug, Error)]
pub enum LogError {
    #[error("Malformed log snapshot: {0}")]
    MalformedSnapshot(#[source] serde_json::Error),

    #[error("Failed to serialize log entries: {0}")]
    Export(#[source] serde_json::Error),

    #[error("Unknown log type: {0}")]
    UnknownType(String),
}

/// Result type for log operations
pub type LogResult<T> = Result<T, LogError>;

/// Structured payload attached to a log entry, in insertion order
pub type Details = serde_json::Map<String, serde_json::Value>;

/// Convert a JSON value into entry details.
///
/// Objects are used as-is, `null` means no details, and any other value is
/// stored under the `value` key.
pub fn into_details(value: serde_json::Value) -> Option<Details> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::Object(map) => Some(map),
        other => {
            let mut map = Details::new();
            map.insert("value".to_string(), other);
            Some(map)
        }
    }
}

/// Log entry types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogType {
    Info,
    Error,
    Warning,
    Action,
}

impl LogType {
    pub const ALL: [LogType; 4] = [LogType::Info, LogType::Error, LogType::Warning, LogType::Action];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogType::Info => "info",
            LogType::Error => "error",
            LogType::Warning => "warning",
            LogType::Action => "action",
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogType {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LogError::UnknownType(s.to_string()))
    }
}

/// Type filter for log queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogTypeFilter {
    #[default]
    All,
    Only(LogType),
}

impl LogTypeFilter {
    pub fn matches(&self, kind: LogType) -> bool {
        match self {
            LogTypeFilter::All => true,
            LogTypeFilter::Only(expected) => *expected == kind,
        }
    }
}

impl fmt::Display for LogTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogTypeFilter::All => f.write_str("all"),
            LogTypeFilter::Only(kind) => f.write_str(kind.as_str()),
        }
    }
}

impl FromStr for LogTypeFilter {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(LogTypeFilter::All)
        } else {
            s.parse().map(LogTypeFilter::Only)
        }
    }
}

/// Unique log entry identifier: creation time in microseconds plus a random
/// tiebreaker, so entries appended within the same microsecond stay distinct
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogEntryId(String);

impl LogEntryId {
    fn generate(at: DateTime<Utc>) -> Self {
        Self(format!("{}-{:08x}", at.timestamp_micros(), rand::random::<u32>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LogEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single immutable record of a system or operator action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    id: LogEntryId,
    timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    kind: LogType,
    message: String,
    #[serde(default)]
    details: Option<Details>,
}

impl LogEntry {
    pub(crate) fn new(kind: LogType, message: String, details: Option<Details>) -> Self {
        let timestamp = Utc::now();
        Self {
            id: LogEntryId::generate(timestamp),
            timestamp,
            kind,
            message,
            details,
        }
    }

    pub fn id(&self) -> &LogEntryId {
        &self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn kind(&self) -> LogType {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }

    /// Case-insensitive match against the message or the serialized details.
    ///
    /// `needle` must already be lowercase. Absent details are searched as
    /// `null`, the same form they take in an export.
    pub(crate) fn contains_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() || self.message.to_lowercase().contains(needle) {
            return true;
        }

        serde_json::to_string(&self.details).is_ok_and(|s| s.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_log_type_parse() {
        assert_eq!("warning".parse::<LogType>().unwrap(), LogType::Warning);
        assert_eq!("ACTION".parse::<LogType>().unwrap(), LogType::Action);
        assert!(matches!("debug".parse::<LogType>(), Err(LogError::UnknownType(_))));
    }

    #[test]
    fn test_type_filter_parse() {
        assert_eq!("all".parse::<LogTypeFilter>().unwrap(), LogTypeFilter::All);
        assert_eq!(
            "error".parse::<LogTypeFilter>().unwrap(),
            LogTypeFilter::Only(LogType::Error)
        );
        assert!(LogTypeFilter::All.matches(LogType::Info));
        assert!(!LogTypeFilter::Only(LogType::Error).matches(LogType::Info));
    }

    #[test]
    fn test_entry_serialization_shape() {
        let entry = LogEntry::new(
            LogType::Action,
            "Page changed".to_string(),
            into_details(json!({"page": "logs"})),
        );

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "action");
        assert_eq!(value["message"], "Page changed");
        assert_eq!(value["details"]["page"], "logs");
        assert!(value["id"].is_string());
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_entry_without_details_serializes_null() {
        let entry = LogEntry::new(LogType::Info, "Console started".to_string(), None);
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value["details"].is_null());
    }

    #[test]
    fn test_ids_distinct() {
        let a = LogEntry::new(LogType::Info, "a".to_string(), None);
        let b = LogEntry::new(LogType::Info, "b".to_string(), None);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_into_details() {
        assert!(into_details(json!(null)).is_none());
        assert_eq!(into_details(json!({"a": 1})).unwrap()["a"], 1);
        assert_eq!(into_details(json!("text")).unwrap()["value"], "text");
    }

    #[test]
    fn test_contains_lowercase_details() {
        let entry = LogEntry::new(
            LogType::Action,
            "Dialog selected".to_string(),
            into_details(json!({"dialogId": 2})),
        );
        assert!(entry.contains_lowercase("dialogid"));
        assert!(entry.contains_lowercase("selected"));
        assert!(!entry.contains_lowercase("maria"));

        assert!(!entry.contains_lowercase("null"));

        let bare = LogEntry::new(LogType::Info, "Console started".to_string(), None);
        assert!(bare.contains_lowercase("null"));
        assert!(bare.contains_lowercase("ul"));
        assert!(!bare.contains_lowercase("dialogid"));
    }
}
