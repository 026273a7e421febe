//! Logging initialization for the django-forge CLI.
//!
//! Subprocess output is streamed through `tracing` at info level, so
//! the subscriber configured here decides where pip/django output ends
//! up. Behavior is driven by environment variables:
//!
//! - `LOG_LEVEL`  - filter directive when `RUST_LOG` is unset (default `info`)
//! - `LOG_OUTPUT` - `console`, `file`, or `both` (default `console`)
//! - `LOG_FORMAT` - `human` or `json` (default `human`)
//! - `LOG_FILE_PATH` - rolling daily log file (default `/tmp/forge.log`)

use std::{env, path::Path};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{prelude::*, registry, EnvFilter, Layer};

/// Initializes the global tracing subscriber based on environment variables.
///
/// The returned guard must stay alive for the duration of the process
/// when file logging is enabled; dropping it flushes the writer.
pub fn init_subscriber() -> Option<WorkerGuard> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_output = env::var("LOG_OUTPUT").unwrap_or_else(|_| "console".to_string());
    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "human".to_string());
    let log_file_path =
        env::var("LOG_FILE_PATH").unwrap_or_else(|_| "/tmp/forge.log".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let use_console = log_output == "console" || log_output == "both";
    let use_file = log_output == "file" || log_output == "both";
    let is_json = log_format == "json";

    let mut guard: Option<WorkerGuard> = None;

    let log_path = Path::new(&log_file_path);
    let log_dir = log_path.parent().unwrap_or_else(|| Path::new("/tmp"));
    let log_filename = log_path.file_name().unwrap_or("forge.log".as_ref());

    let file_layer = if use_file {
        let file_appender = tracing_appender::rolling::daily(log_dir, log_filename);
        let (non_blocking, file_guard) = tracing_appender::non_blocking(file_appender);
        guard = Some(file_guard);
        Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
    } else {
        None
    };

    let console_layer = if use_console {
        Some(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
    } else {
        None
    };

    // Boxing erases the layers' format type so the console and file
    // layers unify across the json/human branches.
    let subscriber = registry().with(env_filter);
    if is_json {
        subscriber
            .with(console_layer.map(|layer| layer.json().boxed()))
            .with(file_layer.map(|layer| layer.json().boxed()))
            .init();
    } else {
        subscriber
            .with(console_layer.map(|layer| layer.boxed()))
            .with(file_layer.map(|layer| layer.boxed()))
            .init();
    }

    guard
}
