use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logs: LogStoreConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogStoreConfig {
    /// Maximum entries kept before the oldest are evicted
    #[serde(default = "default_log_capacity")]
    pub capacity: usize,
    /// Mirror every appended entry to the tracing output
    #[serde(default)]
    pub echo: bool,
}

fn default_log_capacity() -> usize {
    1000
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory log exports are written to
    #[serde(default = "default_export_directory")]
    pub directory: String,
}

fn default_export_directory() -> String {
    ".".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Operator name recorded on logout
    #[serde(default = "default_operator_name")]
    pub operator_name: String,
    /// Dialog opened at startup
    #[serde(default = "default_initial_dialog")]
    pub initial_dialog: Option<u64>,
}

fn default_operator_name() -> String {
    "Operator".to_string()
}

fn default_initial_dialog() -> Option<u64> {
    Some(1)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TelemetryConfig {
    /// Output format for tracing events
    #[serde(default)]
    pub format: LogFormat,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("logs.capacity", 1000)?
            .set_default("logs.echo", run_mode == "development")?
            .set_default("export.directory", ".")?
            .set_default("console.operator_name", "Operator")?
            .set_default("telemetry.format", "pretty")?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // CONSOLE__LOGS__CAPACITY, CONSOLE__EXPORT__DIRECTORY, ...
            .add_source(
                Environment::with_prefix("CONSOLE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.logs.capacity == 0 {
            return Err(ConfigError::Message(
                "logs.capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LogStoreConfig {
    fn default() -> Self {
        Self {
            capacity: default_log_capacity(),
            echo: false,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            operator_name: default_operator_name(),
            initial_dialog: default_initial_dialog(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.logs.capacity, 1000);
        assert!(!settings.logs.echo);
        assert_eq!(settings.export.directory, ".");
        assert_eq!(settings.console.operator_name, "Operator");
        assert_eq!(settings.console.initial_dialog, Some(1));
        assert_eq!(settings.telemetry.format, LogFormat::Pretty);
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let mut settings = Settings::default();
        settings.logs.capacity = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_sections() {
        let settings: Settings = Config::builder()
            .set_default("logs.capacity", 50)
            .unwrap()
            .set_default("telemetry.format", "json")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.logs.capacity, 50);
        assert_eq!(settings.telemetry.format, LogFormat::Json);
        assert_eq!(settings.console.operator_name, "Operator");
    }
}
