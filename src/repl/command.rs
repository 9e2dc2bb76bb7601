//! Console command parsing

use std::str::FromStr;

use crate::console::Page;
use crate::error::ConsoleError;
use crate::logs::LogTypeFilter;
use crate::template::{Caret, TemplateVariable};

pub const HELP: &str = "\
commands:
  page <chats|templates|logs>   switch view
  dialogs                       list dialogs
  open <id>                     open a dialog
  history                       messages of the open dialog
  replies [query]               quick replies for the open dialog
  draft <text>                  replace the message draft
  caret <start> [end]           move the draft caret or select a range
  blur                          unfocus the draft
  var <name>                    insert a {variable} into the draft
  use <id>                      insert a quick reply into the draft
  send                          send the draft
  ai                            toggle the AI assistant
  templates [query]             list templates
  tpl add <text>                add a template
  tpl edit <id> <text>          replace a template's text
  tpl rm <id>                   delete a template
  logs [all|type] [search]      filter the activity log
  export                        write the filtered log to a file
  inspect <path>                read back an exported log file
  clear-logs                    empty the activity log
  metrics                       print metrics
  logout                        log out
  quit                          exit";

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Page(Page),
    Dialogs,
    Open(u64),
    History,
    Replies(String),
    Draft(String),
    Caret(Caret),
    Blur,
    Var(TemplateVariable),
    Use(u64),
    Send,
    Ai,
    Templates(String),
    TemplateAdd(String),
    TemplateEdit(u64, String),
    TemplateRemove(u64),
    Logs(LogTypeFilter, String),
    Export,
    Inspect(String),
    ClearLogs,
    Metrics,
    Logout,
    Quit,
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim_start()),
        None => (s, ""),
    }
}

fn parse_id(s: &str) -> Result<u64, ConsoleError> {
    s.parse()
        .map_err(|_| ConsoleError::InvalidCommand(format!("expected a numeric id, got '{}'", s)))
}

fn required<'a>(value: &'a str, usage: &str) -> Result<&'a str, ConsoleError> {
    if value.is_empty() {
        Err(ConsoleError::InvalidCommand(format!("usage: {}", usage)))
    } else {
        Ok(value)
    }
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (name, rest) = split_word(line.trim());

        let command = match name {
            "help" | "?" => Command::Help,
            "page" => Command::Page(required(rest, "page <chats|templates|logs>")?.parse()?),
            "dialogs" => Command::Dialogs,
            "open" => Command::Open(parse_id(required(rest, "open <id>")?)?),
            "history" => Command::History,
            "replies" => Command::Replies(rest.to_string()),
            "draft" => Command::Draft(rest.to_string()),
            "caret" => {
                let (start, end) = split_word(required(rest, "caret <start> [end]")?);
                let start = parse_caret(start)?;
                let end = if end.is_empty() { start } else { parse_caret(end)? };
                Command::Caret(Caret::new(start, end))
            }
            "blur" => Command::Blur,
            "var" => Command::Var(required(rest, "var <name>")?.parse()?),
            "use" => Command::Use(parse_id(required(rest, "use <id>")?)?),
            "send" => Command::Send,
            "ai" => Command::Ai,
            "templates" => Command::Templates(rest.to_string()),
            "tpl" => parse_template_command(rest)?,
            "logs" => {
                let (first, remainder) = split_word(rest);
                match first.parse::<LogTypeFilter>() {
                    Ok(filter) => Command::Logs(filter, remainder.to_string()),
                    Err(_) => Command::Logs(LogTypeFilter::All, rest.to_string()),
                }
            }
            "export" => Command::Export,
            "inspect" => Command::Inspect(required(rest, "inspect <path>")?.to_string()),
            "clear-logs" => Command::ClearLogs,
            "metrics" => Command::Metrics,
            "logout" => Command::Logout,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(ConsoleError::InvalidCommand(format!(
                    "unknown command '{}', try 'help'",
                    other
                )))
            }
        };

        Ok(command)
    }
}

fn parse_caret(s: &str) -> Result<usize, ConsoleError> {
    s.parse()
        .map_err(|_| ConsoleError::InvalidCommand(format!("expected a caret offset, got '{}'", s)))
}

fn parse_template_command(rest: &str) -> Result<Command, ConsoleError> {
    let (action, args) = split_word(rest);
    match action {
        "add" => Ok(Command::TemplateAdd(
            required(args, "tpl add <text>")?.to_string(),
        )),
        "edit" => {
            let (id, text) = split_word(required(args, "tpl edit <id> <text>")?);
            let text = required(text, "tpl edit <id> <text>")?;
            Ok(Command::TemplateEdit(parse_id(id)?, text.to_string()))
        }
        "rm" => Ok(Command::TemplateRemove(parse_id(required(args, "tpl rm <id>")?)?)),
        _ => Err(ConsoleError::InvalidCommand(
            "usage: tpl <add|edit|rm> ...".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logs::LogType;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("dialogs".parse::<Command>().unwrap(), Command::Dialogs);
        assert_eq!("  send  ".parse::<Command>().unwrap(), Command::Send);
        assert_eq!("open 2".parse::<Command>().unwrap(), Command::Open(2));
        assert_eq!("page LOGS".parse::<Command>().unwrap(), Command::Page(Page::Logs));
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_text_arguments() {
        assert_eq!(
            "draft Hello,   there ".parse::<Command>().unwrap(),
            Command::Draft("Hello,   there".to_string())
        );
        assert_eq!(
            "replies".parse::<Command>().unwrap(),
            Command::Replies(String::new())
        );
        assert_eq!(
            "var clientPhone".parse::<Command>().unwrap(),
            Command::Var(TemplateVariable::ClientPhone)
        );
    }

    #[test]
    fn test_parse_caret() {
        assert_eq!(
            "caret 4".parse::<Command>().unwrap(),
            Command::Caret(Caret::collapsed(4))
        );
        assert_eq!(
            "caret 1 5".parse::<Command>().unwrap(),
            Command::Caret(Caret::new(1, 5))
        );
        assert!("caret x".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_template_commands() {
        assert_eq!(
            "tpl add Hi {clientName}".parse::<Command>().unwrap(),
            Command::TemplateAdd("Hi {clientName}".to_string())
        );
        assert_eq!(
            "tpl edit 3 New text".parse::<Command>().unwrap(),
            Command::TemplateEdit(3, "New text".to_string())
        );
        assert_eq!("tpl rm 4".parse::<Command>().unwrap(), Command::TemplateRemove(4));
        assert!("tpl edit 3".parse::<Command>().is_err());
        assert!("tpl copy 3".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_logs() {
        assert_eq!(
            "logs".parse::<Command>().unwrap(),
            Command::Logs(LogTypeFilter::All, String::new())
        );
        assert_eq!(
            "logs error payment failed".parse::<Command>().unwrap(),
            Command::Logs(LogTypeFilter::Only(LogType::Error), "payment failed".to_string())
        );
        assert_eq!(
            "logs dialog".parse::<Command>().unwrap(),
            Command::Logs(LogTypeFilter::All, "dialog".to_string())
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "launch".parse::<Command>(),
            Err(ConsoleError::InvalidCommand(_))
        ));
        assert!(matches!(
            "open".parse::<Command>(),
            Err(ConsoleError::InvalidCommand(_))
        ));
        assert!(matches!(
            "var clientAge".parse::<Command>(),
            Err(ConsoleError::Template(_))
        ));
    }
}
