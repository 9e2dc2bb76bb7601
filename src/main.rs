use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{self, BufReader};
use tokio::signal;

use operator_console::config::Settings;
use operator_console::console::Console;
use operator_console::dialog::create_dialog_source;
use operator_console::logs::LogStore;
use operator_console::repl;
use operator_console::telemetry::init_tracing;
use operator_console::template::TemplateBook;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings = Settings::new()?;

    // Initialize tracing
    init_tracing(&settings.telemetry);
    tracing::info!(
        log_capacity = settings.logs.capacity,
        export_dir = %settings.export.directory,
        "Configuration loaded"
    );

    // One log store for the whole process, shared with the console
    let log_store = Arc::new(LogStore::new(&settings.logs));
    let mut console = Console::new(
        log_store.clone(),
        create_dialog_source(),
        TemplateBook::with_defaults(),
        &settings.console,
    );
    tracing::info!("Console initialized");

    let export_dir = PathBuf::from(&settings.export.directory);
    let stdin = BufReader::new(io::stdin());
    let mut stdout = io::stdout();

    tokio::select! {
        result = repl::run(&mut console, stdin, &mut stdout, &export_dir) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Console loop failed");
            }
        }
        _ = shutdown_signal() => {}
    }

    console.shutdown();
    tracing::info!(entries = log_store.len(), "Console shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, shutting down");
        }
    }
}
