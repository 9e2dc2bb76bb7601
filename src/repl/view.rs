//! Plain-text rendering of console state

use std::fmt::Write;

use crate::console::Composer;
use crate::dialog::Dialog;
use crate::logs::LogEntry;
use crate::template::TemplatePattern;

pub fn dialogs(dialogs: &[Dialog], active: Option<u64>) -> String {
    let mut out = String::new();
    for dialog in dialogs {
        let marker = if Some(dialog.id) == active { '*' } else { ' ' };
        let preview = dialog
            .last_message()
            .map(|m| m.text.as_str())
            .unwrap_or_default();
        let _ = writeln!(out, "{} {:>3}  {}  | {}", marker, dialog.id, dialog.name, preview);
    }
    out
}

pub fn history(dialog: &Dialog) -> String {
    let mut out = String::new();
    let client = &dialog.client;
    let _ = writeln!(
        out,
        "{} <{}> {} | {} | since {}",
        dialog.name,
        client.email.as_deref().unwrap_or("-"),
        client.phone.as_deref().unwrap_or("-"),
        client.status.as_deref().unwrap_or("-"),
        client.registration_date.as_deref().unwrap_or("-"),
    );
    for message in &dialog.messages {
        let _ = writeln!(
            out,
            "[{}] {:>8}: {}",
            message.time,
            message.sender.as_str(),
            message.text
        );
    }
    out
}

pub fn templates(templates: &[TemplatePattern]) -> String {
    if templates.is_empty() {
        return "no templates\n".to_string();
    }

    let mut out = String::new();
    for template in templates {
        let _ = writeln!(out, "#{:<3} {}", template.id, template.text);
    }
    out
}

pub fn draft(composer: &Composer) -> String {
    match composer.caret() {
        Some(caret) if caret.is_collapsed() => {
            format!("draft: {} (caret {})\n", composer.text(), caret.start)
        }
        Some(caret) => format!(
            "draft: {} (selection {}..{})\n",
            composer.text(),
            caret.start,
            caret.end
        ),
        None => format!("draft: {} (unfocused)\n", composer.text()),
    }
}

pub fn logs(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return "no log entries\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        let details = entry
            .details()
            .and_then(|d| serde_json::to_string(d).ok())
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{} {:<7} {} {}",
            entry.timestamp().format("%Y-%m-%d %H:%M:%S"),
            entry.kind().as_str().to_uppercase(),
            entry.message(),
            details
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::{DialogSource, FixtureDialogs};
    use crate::template::Caret;

    #[test]
    fn test_dialogs_marks_active() {
        let source = FixtureDialogs::default();
        let out = dialogs(&source.dialogs(), Some(2));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with('*'));
        assert!(lines[1].contains("Maria Sidorova"));
        assert!(lines[0].starts_with(' '));
    }

    #[test]
    fn test_history_lists_messages() {
        let source = FixtureDialogs::default();
        let out = history(&source.dialog(3).unwrap());

        assert!(out.starts_with("Alexey Ivanov <alexey@example.com>"));
        assert!(out.contains("[11:22] operator: The update is planned for next week"));
    }

    #[test]
    fn test_draft_states() {
        let mut composer = Composer::new();
        composer.set_text("abc");
        assert_eq!(draft(&composer), "draft: abc (caret 3)\n");

        composer.set_caret(Caret::new(0, 2));
        assert_eq!(draft(&composer), "draft: abc (selection 0..2)\n");

        composer.blur();
        assert_eq!(draft(&composer), "draft: abc (unfocused)\n");
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(templates(&[]), "no templates\n");
        assert_eq!(logs(&[]), "no log entries\n");
    }
}
