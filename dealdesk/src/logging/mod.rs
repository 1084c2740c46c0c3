//! # Logging
//!
//! `tracing` subscriber setup for the CLI:
//! - `EnvFilter` from `RUST_LOG` (default `dealdesk=info,warn`)
//! - human-readable output on stderr
//! - optional daily-rotated file in `FOREXKING_LOG_DIR`, written without
//!   blocking through `tracing-appender`

pub mod config;

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use config::LogConfig;

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit so buffered file output is flushed.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_new(&config.filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_dir) = &config.log_dir else {
        let _ = registry.try_init();
        return None;
    };

    if let Err(e) = fs::create_dir_all(log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        let _ = registry.try_init();
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, config::LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    let _ = registry.with(file_layer).try_init();

    tracing::info!(
        log_file = %log_dir.join(config::LOG_FILE_NAME).display(),
        filter = %config.filter,
        "File logging initialized"
    );

    Some(guard)
}
