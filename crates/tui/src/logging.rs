//! Logging setup
//!
//! While the live view owns the terminal, log lines would corrupt the
//! screen, so they go to a file or nowhere. Headless runs log to stderr.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset or empty
const DEFAULT_DIRECTIVES: [&str; 2] = ["buffon_core=info", "buffon_tui=info"];

/// Where log output should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Disabled,
}

impl<'a> LogTarget<'a> {
    /// Pick a target for the run mode
    pub fn select(log_file: Option<&'a Path>, headless: bool) -> Self {
        match (log_file, headless) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Disabled,
        }
    }
}

/// Build a filter from a `RUST_LOG` value, falling back to the defaults
fn filter_from(rust_log: Option<&str>) -> Result<EnvFilter, String> {
    let directives = match rust_log.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_DIRECTIVES.join(","),
    };
    EnvFilter::try_new(&directives)
        .map_err(|e| format!("Invalid log directives '{}': {}", directives, e))
}

fn env_filter() -> Result<EnvFilter, String> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(rust_log.as_deref())
}

/// Install the global subscriber
pub fn init(target: LogTarget<'_>) -> Result<(), String> {
    match target {
        LogTarget::Disabled => Ok(()),
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter()?)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| format!("Failed to initialise logging: {}", e)),
        LogTarget::File(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Failed to open log file '{}': {}", path.display(), e))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter()?)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| format!("Failed to initialise logging: {}", e))
        }
    }
}
