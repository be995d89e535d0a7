use std::fs::File;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file.
pub const LOG_ENV_VAR: &str = "PAGESTORE_LOG";

/// Where log output ends up.
#[derive(Debug)]
enum LogTarget {
    Stderr,
    File(File),
}

/// Initialize tracing.
///
/// Logs go to stderr unless `PAGESTORE_LOG` names a file. Log files are
/// created with unique names so concurrent runs don't clobber each other:
/// `{path}.{timestamp}.{pid}`. If the file can't be created, logs go to
/// stderr instead.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, raised to
/// `debug` for this crate when the dispatch logger is on.
pub fn init_tracing(debug: bool) {
    let default_directive = if debug { "info,pagestore=debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    match log_target(std::env::var(LOG_ENV_VAR).ok()) {
        LogTarget::File(file) => {
            let file_layer = fmt::layer()
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .with_timer(fmt::time::UtcTime::rfc_3339());

            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .try_init();
        }
        LogTarget::Stderr => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true);

            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init();
        }
    }
}

fn log_target(log_path: Option<String>) -> LogTarget {
    let Some(log_path) = log_path else {
        return LogTarget::Stderr;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    match File::create(&unique_path) {
        Ok(file) => LogTarget::File(file),
        Err(e) => {
            eprintln!(
                "Warning: Failed to create log file {}: {}; logging to stderr",
                unique_path, e
            );
            LogTarget::Stderr
        }
    }
}
