use std::fs;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::platform;

/// Initialize the structured logging system.
///
/// Sets up:
/// - File output: `{data_dir}/gemini-desktop/logs/gemini.log`, rotated
///   daily, keeping the latest 5 files.
/// - Console output (stderr): compact, human-readable.
/// - Environment filter: defaults to `info`, configurable via `RUST_LOG`.
///
/// If the log directory cannot be used, only the console layer is
/// installed.
///
/// # Panics
///
/// Panics if a global subscriber is already set. Use `try_init()` for a
/// fallible version.
pub fn init() {
    if let Err(e) = try_init() {
        panic!("{}", e);
    }
}

/// Install the subscriber, returning an error instead of panicking if one
/// is already set.
pub fn try_init() -> Result<(), String> {
    let log_dir = platform::get_log_dir();
    let _ = fs::create_dir_all(&log_dir);

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("gemini")
        .filename_suffix("log")
        .max_log_files(5)
        .build(&log_dir);

    // File layer: plain text with source locations
    let file_layer = file_appender.ok().map(|appender| {
        fmt::layer()
            .with_writer(appender)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
    });

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .compact();

    // Window and webview internals are chatty at info level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tao=warn,wry=warn,mio=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| format!("Logger already initialized: {}", e))?;

    tracing::info!(log_dir = %log_dir.display(), "Logger initialized");
    Ok(())
}
