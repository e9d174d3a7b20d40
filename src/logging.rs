//! # Tracing Module
//!
//! Environment-aware logging using the tracing ecosystem. Logs always go to
//! stdout so a container runtime can collect them. When `LOG_DIR` is set they
//! are also written as JSON lines to a daily-rolling `lottoscope.log.<date>`
//! file in that directory.
//!
//! Level resolution order:
//! 1. `LOG_LEVEL`
//! 2. `RUST_LOG`
//! 3. Environment default (`LOTTOSCOPE_ENV`): `production` → info, anything else → debug
//!
//! Set `LOG_FORMAT=json` for structured JSON lines instead of the human format.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::config::loader::ENVIRONMENT_VAR;

pub const LOG_DIR_VAR: &str = "LOG_DIR";
pub const LOG_FILE_PREFIX: &str = "lottoscope.log";

static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Flushes buffered file output; must outlive every log call
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize console logging, plus file logging when `LOG_DIR` is set
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    TRACING_INITIALIZED.get_or_init(|| {
        let environment = get_environment();
        let log_level = get_log_level(&environment);
        let json_output = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        // ANSI colours only when a human is watching
        let use_ansi = IsTerminal::is_terminal(&std::io::stdout());

        let console_layer = if json_output {
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true)
                .with_filter(EnvFilter::new(&log_level))
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(use_ansi)
                .with_filter(EnvFilter::new(&log_level))
                .boxed()
        };

        let mut layers: Vec<BoxedLayer> = vec![console_layer];

        let log_dir = std::env::var(LOG_DIR_VAR).ok().map(PathBuf::from);
        let mut file_error = None;
        if let Some(dir) = &log_dir {
            match file_writer(dir) {
                Ok((writer, guard)) => {
                    let _ = FILE_GUARD.set(guard);
                    layers.push(
                        fmt::layer()
                            .json()
                            .with_writer(writer)
                            .with_target(true)
                            .with_thread_ids(true)
                            .with_ansi(false)
                            .with_filter(EnvFilter::new(&log_level))
                            .boxed(),
                    );
                }
                Err(e) => file_error = Some(e),
            }
        }

        let subscriber = tracing_subscriber::registry().with(layers);

        if subscriber.try_init().is_err() {
            tracing::debug!(
                "Global tracing subscriber already initialized - continuing with existing subscriber"
            );
        } else {
            tracing::info!(
                environment = %environment,
                log_level = %log_level,
                ansi_colors = use_ansi,
                json_output,
                log_dir = ?log_dir,
                "Logging initialized"
            );
            if let Some(e) = file_error {
                tracing::warn!(error = %e, "File logging disabled; could not open log directory");
            }
        }
    });
}

/// Non-blocking writer over a daily-rolling file in `log_dir`, creating the
/// directory if needed
fn file_writer(log_dir: &Path) -> std::io::Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}

fn get_environment() -> String {
    std::env::var(ENVIRONMENT_VAR)
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Get log level based on environment variables or environment defaults
fn get_log_level(environment: &str) -> String {
    if let Ok(level) = std::env::var("LOG_LEVEL") {
        return level.to_lowercase();
    }

    if let Ok(level) = std::env::var("RUST_LOG") {
        return level.to_lowercase();
    }

    default_level_for(environment).to_string()
}

fn default_level_for(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_defaults() {
        assert_eq!(default_level_for("production"), "info");
        assert_eq!(default_level_for("development"), "debug");
        assert_eq!(default_level_for("test"), "debug");
        assert_eq!(default_level_for("staging"), "debug");
    }

    #[test]
    fn test_file_writer_creates_directory_and_writes_lines() {
        use std::io::Write;

        let root = tempfile::tempdir().unwrap();
        let log_dir = root.path().join("logs").join("nested");

        let (mut writer, guard) = file_writer(&log_dir).unwrap();
        writer.write_all(b"{\"message\":\"hello\"}\n").unwrap();
        drop(writer);
        drop(guard);

        let files: Vec<_> = std::fs::read_dir(&log_dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(files.len(), 1);

        let name = files[0].file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with(LOG_FILE_PREFIX), "unexpected log file {name}");
        let contents = std::fs::read_to_string(&files[0]).unwrap();
        assert!(contents.contains("hello"));
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        assert!(TRACING_INITIALIZED.get().is_some());
    }
}
