use std::env;
use std::path::PathBuf;

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for application logging.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Load logging configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "INFO".to_string()),
            log_file: env::var("APP_LOG_FILE").ok().map(PathBuf::from),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("File system error: {0}")]
    FileSystemError(#[from] std::io::Error),
}

/// Initialize the tracing subscriber with console output and an
/// optional daily-rolling file layer. Reads configuration from
/// environment variables.
pub fn init_logging() -> Result<(), LoggingError> {
    let config = LoggingConfig::from_env();

    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))?;

    let console_layer = fmt::layer().with_target(true).with_filter(env_filter);

    let subscriber = tracing_subscriber::registry().with(console_layer);

    if let Some(log_file) = &config.log_file {
        let directory = log_file
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."));
        std::fs::create_dir_all(directory)?;
        let file_name = log_file
            .file_name()
            .ok_or_else(|| LoggingError::InitializationError("Invalid log file path".to_string()))?;

        let file_filter = EnvFilter::try_new(&config.log_level)
            .map_err(|e| LoggingError::InvalidLogLevel(format!("{}: {}", config.log_level, e)))?;
        let file_appender = tracing_appender::rolling::daily(directory, file_name);
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_target(true)
            .with_ansi(false)
            .with_filter(file_filter);

        subscriber
            .with(file_layer)
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
    } else {
        subscriber
            .try_init()
            .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
    }

    Ok(())
}
