//! Log snapshot export and parsing

use chrono::{DateTime, SecondsFormat, Utc};

use super::types::{LogEntry, LogError, LogResult};

/// Serialize entries as a pretty-printed JSON array.
///
/// The output depends only on the entries, so the same slice always
/// produces the same text.
pub fn export(entries: &[LogEntry]) -> LogResult<String> {
    serde_json::to_string_pretty(entries).map_err(LogError::Export)
}

/// File name for an export taken at `now`, e.g.
/// `logs-2024-03-15T09:30:00.000Z.json`
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("logs-{}.json", now.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Parse an exported snapshot back into entries.
///
/// Anything that is not a JSON array of complete entries is rejected as a
/// whole; no partial result is returned.
pub fn parse_snapshot(text: &str) -> LogResult<Vec<LogEntry>> {
    serde_json::from_str(text).map_err(LogError::MalformedSnapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logs::{into_details, LogStore, LogTypeFilter};
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_export_roundtrip() {
        let store = LogStore::default();
        store.info("Console started", None);
        store.action(
            "Message sent",
            into_details(json!({"text": "Hello, Ivan!", "dialogId": 1})),
        );

        let entries = store.query(LogTypeFilter::All, "");
        let text = export(&entries).unwrap();
        let parsed = parse_snapshot(&text).unwrap();

        assert_eq!(parsed, entries);
    }

    #[test]
    fn test_export_is_pretty_and_deterministic() {
        let store = LogStore::default();
        store.warning("Slow response", into_details(json!({"ms": 1200})));
        let entries = store.snapshot();

        let first = export(&entries).unwrap();
        assert_eq!(first, export(&entries).unwrap());
        assert!(first.starts_with("[\n  {"));
        assert!(first.contains("\"type\": \"warning\""));
    }

    #[test]
    fn test_export_keeps_detail_order() {
        let store = LogStore::default();
        store.action("ordered", into_details(json!({"zeta": 1, "alpha": 2})));

        let text = export(&store.snapshot()).unwrap();
        let zeta = text.find("zeta").unwrap();
        let alpha = text.find("alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_export_empty() {
        assert_eq!(export(&[]).unwrap(), "[]");
        assert!(parse_snapshot("[]").unwrap().is_empty());
    }

    #[test]
    fn test_export_file_name() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        assert_eq!(export_file_name(now), "logs-2024-03-15T09:30:00.000Z.json");
    }

    #[test]
    fn test_parse_malformed() {
        for input in [
            "not json",
            "{\"id\": \"1\"}",
            "[{\"id\": \"1\", \"message\": \"missing fields\"}]",
            "[{\"id\": \"1\", \"timestamp\": \"2024-03-15T09:30:00Z\", \"type\": \"debug\", \"message\": \"m\"}]",
        ] {
            assert!(
                matches!(parse_snapshot(input), Err(LogError::MalformedSnapshot(_))),
                "accepted: {}",
                input
            );
        }
    }

    #[test]
    fn test_parse_accepts_missing_details() {
        let parsed = parse_snapshot(
            r#"[{"id": "1710495000000000-0000abcd", "timestamp": "2024-03-15T09:30:00Z", "type": "info", "message": "hand written"}]"#,
        )
        .unwrap();
        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].details().is_none());
    }
}
