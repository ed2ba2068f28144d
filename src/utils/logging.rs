//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the college directory client. The terminal belongs to the UI, so all
//! output goes to a rolling log file.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{DirectoryError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes buffered records when dropped and must be kept
/// alive for the lifetime of the program.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.directory)?;

    let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .try_init()
        .map_err(|e| DirectoryError::Config(format!("Failed to install log subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log admin actions
pub fn log_admin_action(action: &str, college_id: Option<i64>, details: Option<&str>) {
    warn!(
        action = action,
        college_id = college_id,
        details = details,
        "Admin action performed"
    );
}

/// Log visitor actions
pub fn log_user_action(action: &str, college_id: Option<i64>) {
    info!(
        action = action,
        college_id = college_id,
        "User action performed"
    );
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &DirectoryError, context: Option<&str>) {
    error!(
        api = api,
        error = %error,
        severity = %error.severity(),
        recoverable = error.is_recoverable(),
        context = context,
        "API error occurred"
    );
}

/// Log completed API calls
pub fn log_api_call(method: &str, path: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            method = method,
            path = path,
            duration_ms = duration_ms,
            "API call completed"
        );
    } else {
        warn!(
            method = method,
            path = path,
            duration_ms = duration_ms,
            "API call failed"
        );
    }
}
