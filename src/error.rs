//! Error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`UiManager`](crate::ui::UiManager).
#[derive(Debug, Error)]
pub enum UiError {
    #[error("no components registered; register at least one before run()")]
    NoComponents,

    #[error("input source closed before the exit key was pressed")]
    InputClosed,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Errors from loading a [`UiConfig`](crate::config::UiConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors from installing the log subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("a global subscriber is already installed")]
    AlreadyInstalled,
}
