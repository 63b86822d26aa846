//! Tracing setup shared by both binaries

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Set up tracing with two layers:
/// - Console: stderr, controlled by RUST_LOG (default: warn)
/// - File: always debug-level JSON to ~/.relnotes/logs/
///
/// Stdout stays free for output that CI steps parse.
pub fn init_tracing(app_name: &str) -> Option<WorkerGuard> {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(log_dir) = log_directory() {
        let file_appender =
            tracing_appender::rolling::daily(&log_dir, format!("{}.log", app_name));
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_filter(console_filter),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_filter(EnvFilter::new("debug")),
            )
            .init();

        return Some(guard);
    }

    // Fallback: console only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(console_filter),
        )
        .init();

    None
}

/// Returns the log directory path, creating it if needed.
fn log_directory() -> Option<PathBuf> {
    let log_dir = dirs::home_dir()?.join(".relnotes").join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;
    Some(log_dir)
}
