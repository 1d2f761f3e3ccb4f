//! Diagnostic logging setup.
//!
//! Stdout carries tables and stderr carries notifications, so logging stays
//! off unless asked for: `FARMDASH_LOG=<path>` writes to a file, `--verbose`
//! writes to stderr. The level comes from `RUST_LOG` (default `info`, or
//! `debug` with `--verbose`).

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "FARMDASH_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stderr,
    /// Base path; the actual file gets a `.{timestamp}.{pid}` suffix.
    File(PathBuf),
}

/// A log file wins over `--verbose`.
pub fn log_target(log_env: Option<String>, verbose: bool) -> LogTarget {
    match log_env.filter(|p| !p.trim().is_empty()) {
        Some(path) => LogTarget::File(PathBuf::from(path)),
        None if verbose => LogTarget::Stderr,
        None => LogTarget::Off,
    }
}

/// `{base}.{timestamp}.{pid}`, so concurrent runs never share a file.
fn unique_log_path(base: &std::path::Path) -> PathBuf {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{}.{}", timestamp, std::process::id()));
    PathBuf::from(name)
}

pub fn init_tracing(verbose: bool) {
    let target = log_target(std::env::var(LOG_ENV).ok(), verbose);
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        LogTarget::File(base) => {
            let path = unique_log_path(&base);
            let file = match std::fs::File::create(&path) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("Warning: failed to create log file {}: {}", path.display(), e);
                    return;
                }
            };
            let layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }
}
