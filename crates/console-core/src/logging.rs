//! File logging for the console bindings

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "CONSOLE_LOG";

const LOG_FILE_NAME: &str = "console.log";
const DEFAULT_FILTER: &str = "scheduler_console=info,warn";

/// Install the global subscriber writing to a daily log file.
///
/// Files land in the platform data directory under `scheduler-console/logs`.
///
/// ```bash
/// CONSOLE_LOG=console_bindings=trace console-preview group-summary groups.json
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(RollingFileAppender::new(
                    Rotation::DAILY,
                    &log_dir,
                    LOG_FILE_NAME,
                ))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::debug!("Logging to {}", log_dir.display());
    Ok(())
}

fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scheduler-console")
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_namespaced() {
        assert!(log_directory().ends_with("scheduler-console/logs"));
    }
}
