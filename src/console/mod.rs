//! Operator session state.
//!
//! `Console` holds what the operator currently sees and edits: the open
//! page, the active dialog, the message composer, the template editor and
//! the log view filter. Every operator action is recorded in the shared
//! `LogStore` handed in at construction.

mod composer;

pub use composer::Composer;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::config::ConsoleConfig;
use crate::dialog::{Dialog, DialogSource};
use crate::error::{ConsoleError, Result};
use crate::logs::{self, into_details, LogEntry, LogStore, LogTypeFilter};
use crate::template::{
    filter_patterns, render, TemplateBook, TemplateError, TemplatePattern, TemplateVariable,
};

/// Console views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Chats,
    Templates,
    Logs,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Chats => "chats",
            Page::Templates => "templates",
            Page::Logs => "logs",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = ConsoleError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chats" => Ok(Page::Chats),
            "templates" => Ok(Page::Templates),
            "logs" => Ok(Page::Logs),
            other => Err(ConsoleError::InvalidCommand(format!("unknown page '{}'", other))),
        }
    }
}

/// Filter applied to the log view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub kind: LogTypeFilter,
    pub search: String,
}

/// Template editor on the templates page: a draft plus the id being edited,
/// if any
#[derive(Debug, Clone, Default)]
pub struct TemplateEditor {
    pub composer: Composer,
    editing: Option<u64>,
}

impl TemplateEditor {
    /// Id of the template being edited; `None` when the draft is a new
    /// template
    pub fn editing(&self) -> Option<u64> {
        self.editing
    }
}

/// An exported log snapshot ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogExport {
    pub file_name: String,
    pub body: String,
    pub entries: usize,
}

pub struct Console {
    logs: Arc<LogStore>,
    dialogs: Arc<dyn DialogSource>,
    templates: TemplateBook,
    page: Page,
    active_dialog: Option<Dialog>,
    composer: Composer,
    editor: TemplateEditor,
    log_filter: LogFilter,
    ai_enabled: bool,
    operator_name: String,
}

impl Console {
    pub fn new(
        logs: Arc<LogStore>,
        dialogs: Arc<dyn DialogSource>,
        templates: TemplateBook,
        config: &ConsoleConfig,
    ) -> Self {
        let active_dialog = config.initial_dialog.and_then(|id| {
            let dialog = dialogs.dialog(id);
            if dialog.is_none() {
                tracing::warn!(dialog_id = id, "Initial dialog not found");
            }
            dialog
        });

        logs.info("Console started", None);

        Self {
            logs,
            dialogs,
            templates,
            page: Page::default(),
            active_dialog,
            composer: Composer::new(),
            editor: TemplateEditor::default(),
            log_filter: LogFilter::default(),
            ai_enabled: false,
            operator_name: config.operator_name.clone(),
        }
    }

    pub fn log_store(&self) -> &Arc<LogStore> {
        &self.logs
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn select_page(&mut self, page: Page) {
        self.page = page;
        self.logs
            .action("Page changed", into_details(json!({ "page": page.as_str() })));
    }

    pub fn dialogs(&self) -> Vec<Dialog> {
        self.dialogs.dialogs()
    }

    pub fn active_dialog(&self) -> Option<&Dialog> {
        self.active_dialog.as_ref()
    }

    pub fn select_dialog(&mut self, id: u64) -> Result<&Dialog> {
        let dialog = self
            .dialogs
            .dialog(id)
            .ok_or(ConsoleError::UnknownDialog(id))?;

        self.logs
            .action("Dialog selected", into_details(json!({ "dialogId": id })));
        let active: &Dialog = self.active_dialog.insert(dialog);
        Ok(active)
    }

    // ========================================================================
    // Chat: composer and quick replies
    // ========================================================================

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut Composer {
        &mut self.composer
    }

    /// Templates rendered for the active dialog's client, filtered by
    /// `query`. Without an active dialog the raw template text is used.
    pub fn quick_replies(&self, query: &str) -> Vec<TemplatePattern> {
        let rendered = match &self.active_dialog {
            Some(dialog) => self.templates.render_all(&dialog.client),
            None => self.templates.list().to_vec(),
        };
        filter_patterns(&rendered, query)
    }

    /// Insert a `{variable}` token into the message draft
    pub fn insert_variable(&mut self, variable: TemplateVariable) -> usize {
        self.composer.insert_variable(variable)
    }

    /// Insert a template, rendered for the active client, into the message
    /// draft
    pub fn insert_template(&mut self, id: u64) -> Result<usize> {
        let template = self
            .templates
            .get(id)
            .ok_or(TemplateError::NotFound(id))?;

        let text = match &self.active_dialog {
            Some(dialog) => render(template, &dialog.client),
            None => template.text.clone(),
        };
        Ok(self.composer.insert(&text))
    }

    /// Send the message draft.
    ///
    /// A blank draft is left untouched and nothing is sent. There is no
    /// transport: sending records the action and clears the draft.
    pub fn send_message(&mut self) -> Option<String> {
        if self.composer.is_blank() {
            return None;
        }

        let text = self.composer.take();
        let dialog_id = self.active_dialog.as_ref().map(|d| d.id);
        self.logs.action(
            "Message sent",
            into_details(json!({ "text": text, "dialogId": dialog_id })),
        );
        Some(text)
    }

    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    pub fn toggle_ai(&mut self) -> bool {
        self.ai_enabled = !self.ai_enabled;
        self.logs.action(
            "AI assistant toggled",
            into_details(json!({ "enabled": self.ai_enabled })),
        );
        self.ai_enabled
    }

    pub fn logout(&mut self) {
        self.logs.action(
            "Operator logged out",
            into_details(json!({ "operator": self.operator_name })),
        );
    }

    // ========================================================================
    // Templates page
    // ========================================================================

    /// Raw templates filtered by `query`
    pub fn templates(&self, query: &str) -> Vec<TemplatePattern> {
        filter_patterns(self.templates.list(), query)
    }

    pub fn template_book(&self) -> &TemplateBook {
        &self.templates
    }

    pub fn editor(&self) -> &TemplateEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Composer {
        &mut self.editor.composer
    }

    /// Load a template into the editor
    pub fn begin_edit(&mut self, id: u64) -> Result<()> {
        let template = self
            .templates
            .get(id)
            .ok_or(TemplateError::NotFound(id))?;

        self.editor.composer.set_text(template.text.clone());
        self.editor.editing = Some(id);
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editor = TemplateEditor::default();
    }

    /// Save the editor draft: a new template, or the one being edited.
    ///
    /// Returns the id saved, or `None` when the draft is blank.
    pub fn submit_template(&mut self) -> Option<u64> {
        if self.editor.composer.is_blank() {
            return None;
        }

        let text = self.editor.composer.take();
        let id = match self.editor.editing.take() {
            Some(id) => {
                if self.templates.edit(id, text) {
                    self.logs
                        .action("Template updated", into_details(json!({ "templateId": id })));
                }
                id
            }
            None => {
                let id = self.templates.add(text);
                self.logs
                    .action("Template added", into_details(json!({ "templateId": id })));
                id
            }
        };
        Some(id)
    }

    /// Delete a template; unknown ids are ignored
    pub fn delete_template(&mut self, id: u64) -> bool {
        if !self.templates.delete(id) {
            return false;
        }

        if self.editor.editing == Some(id) {
            self.cancel_edit();
        }
        self.logs
            .action("Template deleted", into_details(json!({ "templateId": id })));
        true
    }

    // ========================================================================
    // Logs page
    // ========================================================================

    pub fn log_filter(&self) -> &LogFilter {
        &self.log_filter
    }

    pub fn set_log_filter(&mut self, kind: LogTypeFilter, search: impl Into<String>) {
        self.log_filter = LogFilter {
            kind,
            search: search.into(),
        };
    }

    /// Entries matching the current log filter
    pub fn visible_logs(&self) -> Vec<LogEntry> {
        self.logs.query(self.log_filter.kind, &self.log_filter.search)
    }

    /// Export the entries matching the current log filter
    pub fn export_visible_logs(&self, now: DateTime<Utc>) -> Result<LogExport> {
        let entries = self.visible_logs();
        let body = logs::export(&entries)?;

        Ok(LogExport {
            file_name: logs::export_file_name(now),
            body,
            entries: entries.len(),
        })
    }

    pub fn clear_logs(&self) -> usize {
        self.logs.clear()
    }

    /// Record the end of the session
    pub fn shutdown(&self) {
        self.logs.info("Console closed", None);
    }
}
