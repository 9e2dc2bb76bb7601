mod settings;

pub use settings::{
    ConsoleConfig, ExportConfig, LogFormat, LogStoreConfig, Settings, TelemetryConfig,
};
