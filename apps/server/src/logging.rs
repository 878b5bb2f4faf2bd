//! Logging initialization for the storefront server
//!
//! Supports configuration-based logging with file rotation, JSON formatting
//! and `RUST_LOG` overrides.

use std::fs;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Keeps the non-blocking file writer flushing.
/// Must be kept alive for the duration of the program.
pub struct LoggingGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Initialize logging from `LoggingConfig`
///
/// - JSON or human-readable formats
/// - File logging with rotation (daily, hourly, minutely, never)
/// - Environment variable overrides via `RUST_LOG`
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let env_filter = build_env_filter(config);
    let subscriber = tracing_subscriber::registry().with(env_filter);

    let file_guard = if config.json {
        init_json_logging_with_subscriber(subscriber, config)?
    } else {
        init_human_logging_with_subscriber(subscriber, config)?
    };

    tracing::info!(
        service_name = %config.service_name,
        environment = %config.deployment_environment,
        json = config.json,
        file_enabled = config.file_enabled,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// `RUST_LOG` if set, otherwise `config.level` for this crate
fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Both the binary and the library crate log under `storefront*`
        EnvFilter::new(format!(
            "storefront={},storefront_server={},tower_http=debug",
            config.level, config.level
        ))
    })
}

/// Install JSON console logging, plus a JSON file layer when enabled
fn init_json_logging_with_subscriber<S>(
    subscriber: S,
    config: &LoggingConfig,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>>
where
    S: SubscriberExt + for<'a> tracing_subscriber::registry::LookupSpan<'a> + Send + Sync,
{
    let console_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false) // Current span is enough per line
        .with_writer(std::io::stdout);

    if config.file_enabled {
        let (file_appender, file_guard) = create_file_appender(config)?;
        let file_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(file_appender);

        subscriber.with(console_layer).with(file_layer).init();
        Ok(Some(file_guard))
    } else {
        subscriber.with(console_layer).init();
        Ok(None)
    }
}

/// Install human-readable console logging, plus a plain file layer when enabled
fn init_human_logging_with_subscriber<S>(
    subscriber: S,
    config: &LoggingConfig,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>>
where
    S: SubscriberExt + for<'a> tracing_subscriber::registry::LookupSpan<'a> + Send + Sync,
{
    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stdout);

    if config.file_enabled {
        let (file_appender, file_guard) = create_file_appender(config)?;
        let file_layer = fmt::layer()
            .with_target(true)
            .with_ansi(false) // No ANSI colors in files
            .with_writer(file_appender);

        subscriber.with(console_layer).with(file_layer).init();
        Ok(Some(file_guard))
    } else {
        subscriber.with(console_layer).init();
        Ok(None)
    }
}

/// Rotation for a `logging.file_rotation` value; unknown values rotate daily
fn rotation(name: &str) -> Rotation {
    match name {
        "hourly" => Rotation::HOURLY,
        "minutely" => Rotation::MINUTELY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

/// Create a non-blocking rotating file appender under `file_directory`
fn create_file_appender(
    config: &LoggingConfig,
) -> anyhow::Result<(
    tracing_appender::non_blocking::NonBlocking,
    tracing_appender::non_blocking::WorkerGuard,
)> {
    fs::create_dir_all(&config.file_directory)?;

    let rotation = rotation(&config.file_rotation);
    // Rotated files get a date suffix; a single file needs its own extension
    let file_name = if rotation == Rotation::NEVER {
        format!("{}.log", config.file_prefix)
    } else {
        config.file_prefix.clone()
    };
    let file_appender = RollingFileAppender::new(rotation, &config.file_directory, file_name);

    Ok(tracing_appender::non_blocking(file_appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_names() {
        assert_eq!(rotation("hourly"), Rotation::HOURLY);
        assert_eq!(rotation("minutely"), Rotation::MINUTELY);
        assert_eq!(rotation("never"), Rotation::NEVER);
        assert_eq!(rotation("daily"), Rotation::DAILY);
        assert_eq!(rotation("weekly"), Rotation::DAILY);
    }

    #[test]
    fn file_appender_creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("nested").join("logs");
        let config = LoggingConfig {
            file_enabled: true,
            file_directory: log_dir.to_string_lossy().into_owned(),
            file_rotation: "never".to_string(),
            ..LoggingConfig::default()
        };

        let (_writer, _guard) = create_file_appender(&config).unwrap();
        assert!(log_dir.is_dir());
        assert!(log_dir.join("storefront.log").exists());
    }
}
