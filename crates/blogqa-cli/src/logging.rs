//! Tracing setup for the binary.

use std::path::Path;

use anyhow::{Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BLOGQA_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber.
///
/// With `log_dir` the logs go to `blogqa.log.YYYY-MM-DD` files so they do
/// not interleave with the REPL; the returned guard must be kept alive for
/// the lifetime of the program.
pub fn init(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "blogqa.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
            Ok(None)
        }
    }
}
