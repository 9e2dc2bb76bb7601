// Shared infrastructure
pub mod config;
pub mod error;
pub mod metrics;
pub mod telemetry;

// Domain
pub mod dialog;
pub mod logs;
pub mod template;

// Application
pub mod console;
pub mod repl;
