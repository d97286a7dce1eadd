use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global subscriber: JSON lines to a daily-rolling file and
/// human-readable output on stderr, filtered by `RUST_LOG` or the configured
/// default. Keep the returned guard alive until exit so the file is flushed.
pub fn init_logging(config: &LoggingConfig) -> WorkerGuard {
    if let Err(e) = fs::create_dir_all(&config.directory) {
        eprintln!(
            "could not create log directory {}: {}",
            config.directory.display(),
            e
        );
    }

    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_name);
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);
    // stdout carries command output
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
