//! Logging system initialization
//!
//! Sets up the tracing subscriber from the loaded configuration: env-filter
//! level, text or JSON formatting, and optional file output with daily
//! rotation behind a non-blocking writer.

use crate::config::StaticConfig;
use tracing_appender::rolling;

const DEFAULT_LOG_FILENAME: &str = "scraptrade.log";

/// 根据配置选择日志输出目标
fn build_writer(config: &StaticConfig) -> Box<dyn std::io::Write + Send + Sync> {
    let log_file = match config.logging.file.as_deref() {
        Some(path) if !path.is_empty() => path,
        _ => return Box::new(std::io::stdout()),
    };

    if config.logging.enable_rotation {
        let path = std::path::Path::new(log_file);
        let dir = path.parent().unwrap_or(std::path::Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(DEFAULT_LOG_FILENAME);

        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.logging.max_backups as usize)
            .build(dir)
            .expect("Failed to create rolling log appender");
        Box::new(appender)
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .expect("Failed to open log file");
        Box::new(file)
    }
}

/// Initialize the logging system based on configuration
///
/// **Note**: Call exactly once during application startup, after the
/// configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// # Panics
/// * If creating the log appender fails
/// * If setting the global subscriber fails (e.g., already initialized)
pub fn init_logging(config: &StaticConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let log_to_console = config.logging.file.as_ref().is_none_or(|f| f.is_empty());

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(build_writer(config));
    let filter = tracing_subscriber::EnvFilter::new(config.logging.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_to_console);

    if config.logging.format == "json" {
        subscriber_builder.json().init();
    } else {
        subscriber_builder.init();
    }

    guard
}
