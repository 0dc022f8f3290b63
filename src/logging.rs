use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Setup diagnostic logging on stderr.
///
/// Diagnostics go through a non-blocking writer so slow terminals never stall
/// the walk. Nothing is written to disk: log files would land inside the tree
/// being scanned.
///
/// # Arguments
/// * `debug_mode` - If true, use debug level; otherwise use info level
///
/// # Returns
/// A guard that must be held for the duration of the program to keep logging active
pub fn setup_logging(debug_mode: bool) -> Result<WorkerGuard> {
    let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());

    // Level is fixed here, never taken from the environment
    let env_filter = if debug_mode {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!("Logging initialized: debug={}", debug_mode);

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_only_once() {
        // Only this test installs a global subscriber
        let first = setup_logging(false);
        assert!(first.is_ok());

        let second = setup_logging(true);
        assert!(second.is_err());
    }
}
