use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Initializes the logging system with both console and file output.
///
/// The returned guard flushes the file writer on drop; keep it alive in `main`.
pub fn init_logging(config: &LoggingConfig) -> WorkerGuard {
    ensure_log_directory(&config.directory);

    // Create a non-blocking file appender for daily log rotation
    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_name);
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    // JSON for the file, human-readable for the console
    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);
    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    // Respect RUST_LOG if set; otherwise info for our crate and the HTTP trace layer
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pasta_paradise=info,tower_http=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}

/// Creates the log directory, reporting on stderr when that fails since no
/// subscriber is installed yet.
fn ensure_log_directory(directory: &Path) -> bool {
    match fs::create_dir_all(directory) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Failed to create log directory {}: {}", directory.display(), e);
            false
        }
    }
}
