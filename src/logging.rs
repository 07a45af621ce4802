use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the preview log file.
pub const PREVIEW_LOG_ENV: &str = "BUILDCHEM_LOG";

/// Server filter when `RUST_LOG` is unset. Request spans come from
/// `tower_http` at debug level.
const SERVER_DEFAULT_FILTER: &str = "info,tower_http=debug";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Formatted stdout logging for the HTTP server.
pub fn init_server_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(SERVER_DEFAULT_FILTER))
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();
}

/// `{base}.{unix seconds}.{pid}`, so concurrent previews never share a file.
pub fn unique_log_path(base: &str, now: DateTime<Utc>, pid: u32) -> PathBuf {
    PathBuf::from(format!("{base}.{}.{pid}", now.timestamp()))
}

/// File logging for the terminal preview.
///
/// Disabled unless `BUILDCHEM_LOG` names a file, so nothing is ever
/// written over the drawn screen. Returns the file actually opened.
pub fn init_preview_tracing() -> Option<PathBuf> {
    let base = std::env::var(PREVIEW_LOG_ENV)
        .ok()
        .filter(|p| !p.is_empty())?;
    let path = unique_log_path(&base, Utc::now(), std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: Failed to create log file {}: {err}",
                path.display()
            );
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(env_filter("info"))
        .with(file_layer)
        .init();
    Some(path)
}
