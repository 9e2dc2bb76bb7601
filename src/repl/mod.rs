//! Line-oriented terminal driver for the console.
//!
//! Reads one command per line and writes the result back. A failing
//! command prints its error and the loop carries on; the loop ends on EOF
//! or `quit`.

mod command;
mod view;

pub use command::{Command, HELP};

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::console::Console;
use crate::error::Result;
use crate::logs;
use crate::metrics::encode_metrics;

/// Run commands from `reader` against `console` until EOF or `quit`
pub async fn run<R, W>(
    console: &mut Console,
    mut reader: R,
    writer: &mut W,
    export_dir: &Path,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        // Invalid UTF-8 is replaced rather than ending the session
        let raw = String::from_utf8_lossy(&buf);
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let output = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => execute(console, command, export_dir).await,
            Err(e) => Err(e),
        };

        match output {
            Ok(text) => writer.write_all(text.as_bytes()).await?,
            Err(e) => {
                tracing::debug!(code = e.code(), error = %e, command = %line, "Command failed");
                writer
                    .write_all(format!("error [{}]: {}\n", e.code(), e).as_bytes())
                    .await?
            }
        }
        writer.flush().await?;
    }

    Ok(())
}

/// Execute a single command and return its output
pub async fn execute(console: &mut Console, command: Command, export_dir: &Path) -> Result<String> {
    let output = match command {
        Command::Help => format!("{}\n", HELP),
        Command::Page(page) => {
            console.select_page(page);
            format!("page: {}\n", page)
        }
        Command::Dialogs => {
            let active = console.active_dialog().map(|d| d.id);
            view::dialogs(&console.dialogs(), active)
        }
        Command::Open(id) => view::history(console.select_dialog(id)?),
        Command::History => match console.active_dialog() {
            Some(dialog) => view::history(dialog),
            None => "no dialog open\n".to_string(),
        },
        Command::Replies(query) => view::templates(&console.quick_replies(&query)),
        Command::Draft(text) => {
            console.composer_mut().set_text(text);
            view::draft(console.composer())
        }
        Command::Caret(caret) => {
            console.composer_mut().set_caret(caret);
            view::draft(console.composer())
        }
        Command::Blur => {
            console.composer_mut().blur();
            view::draft(console.composer())
        }
        Command::Var(variable) => {
            console.insert_variable(variable);
            view::draft(console.composer())
        }
        Command::Use(id) => {
            console.insert_template(id)?;
            view::draft(console.composer())
        }
        Command::Send => match console.send_message() {
            Some(text) => format!("sent: {}\n", text),
            None => "nothing to send\n".to_string(),
        },
        Command::Ai => {
            let state = if console.toggle_ai() { "on" } else { "off" };
            format!("ai assistant: {}\n", state)
        }
        Command::Templates(query) => view::templates(&console.templates(&query)),
        Command::TemplateAdd(text) => {
            console.cancel_edit();
            console.editor_mut().set_text(text);
            match console.submit_template() {
                Some(id) => format!("template #{} added\n", id),
                None => "nothing to add\n".to_string(),
            }
        }
        Command::TemplateEdit(id, text) => {
            console.begin_edit(id)?;
            console.editor_mut().set_text(text);
            match console.submit_template() {
                Some(id) => format!("template #{} saved\n", id),
                None => "nothing to save\n".to_string(),
            }
        }
        Command::TemplateRemove(id) => {
            if console.delete_template(id) {
                format!("template #{} deleted\n", id)
            } else {
                format!("template #{} not found\n", id)
            }
        }
        Command::Logs(kind, search) => {
            console.set_log_filter(kind, search);
            view::logs(&console.visible_logs())
        }
        Command::Export => {
            let export = console.export_visible_logs(Utc::now())?;
            let path: PathBuf = export_dir.join(&export.file_name);
            tokio::fs::write(&path, export.body.as_bytes()).await?;

            tracing::info!(path = %path.display(), entries = export.entries, "Logs exported");
            format!("exported {} entries to {}\n", export.entries, path.display())
        }
        Command::Inspect(path) => {
            let text = tokio::fs::read_to_string(&path).await?;
            let entries = logs::parse_snapshot(&text)?;
            format!("{} entries in {}\n{}", entries.len(), path, view::logs(&entries))
        }
        Command::ClearLogs => format!("cleared {} entries\n", console.clear_logs()),
        Command::Metrics => encode_metrics().unwrap_or_else(|e| format!("metrics unavailable: {}\n", e)),
        Command::Logout => {
            console.logout();
            "logged out\n".to_string()
        }
        Command::Quit => String::new(),
    };

    Ok(output)
}
