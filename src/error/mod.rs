use thiserror::Error;

use crate::logs::LogError;
use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Log(#[from] LogError),

    #[error("Dialog not found: {0}")]
    UnknownDialog(u64),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    /// Short machine-readable code, used when reporting errors to the
    /// operator
    pub fn code(&self) -> &'static str {
        match self {
            ConsoleError::Config(_) => "CONFIG_ERROR",
            ConsoleError::Template(TemplateError::NotFound(_)) => "TEMPLATE_NOT_FOUND",
            ConsoleError::Template(TemplateError::UnknownVariable(_)) => "UNKNOWN_VARIABLE",
            ConsoleError::Log(LogError::MalformedSnapshot(_)) => "MALFORMED_SNAPSHOT",
            ConsoleError::Log(_) => "LOG_ERROR",
            ConsoleError::UnknownDialog(_) => "DIALOG_NOT_FOUND",
            ConsoleError::InvalidCommand(_) => "INVALID_COMMAND",
            ConsoleError::Io(_) => "IO_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ConsoleError::from(TemplateError::NotFound(4)).code(),
            "TEMPLATE_NOT_FOUND"
        );
        assert_eq!(ConsoleError::UnknownDialog(9).code(), "DIALOG_NOT_FOUND");

        let malformed = crate::logs::parse_snapshot("{").unwrap_err();
        assert_eq!(ConsoleError::from(malformed).code(), "MALFORMED_SNAPSHOT");
    }

    #[test]
    fn test_transparent_messages() {
        let err = ConsoleError::from(TemplateError::UnknownVariable("x".to_string()));
        assert_eq!(err.to_string(), "Unknown template variable: x");
    }
}
