// Logging setup
//
// Human-readable output goes to stderr so that command output on stdout
// stays machine-readable. File logging is optional and writes JSON lines
// through a non-blocking rolling appender.
//
// Precedence: RUST_LOG env var > config file > default "info"

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogRotation, LoggingConfig};

/// Filter used when RUST_LOG is unset
pub fn default_filter(config: &LoggingConfig) -> String {
    format!("strapkit={},axum=info", config.level)
}

/// Install the global subscriber
///
/// The returned guard must be kept alive for the duration of the program so
/// buffered file logs are flushed on exit. `None` means no file output.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config)));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    if !config.file_enabled {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init();
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&config.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            config.file_dir, e
        );
        // Fall back to stderr only
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init();
        return None;
    }

    let file_appender = match config.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&config.file_dir, &config.file_prefix)
        }
        LogRotation::Daily => tracing_appender::rolling::daily(&config.file_dir, &config.file_prefix),
        LogRotation::Never => tracing_appender::rolling::never(&config.file_dir, &config.file_prefix),
    };

    // Writes happen on a background thread
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init();

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_uses_configured_level() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(default_filter(&config), "strapkit=debug,axum=info");
    }

    #[test]
    fn test_file_logging_returns_guard() {
        let dir = std::env::temp_dir().join(format!("strapkit-logs-{}", std::process::id()));
        let config = LoggingConfig {
            file_enabled: true,
            file_dir: dir.clone(),
            file_rotation: LogRotation::Never,
            ..Default::default()
        };
        let guard = init(&config);
        assert!(guard.is_some());
        assert!(dir.exists());
        drop(guard);
        std::fs::remove_dir_all(&dir).ok();
    }
}
