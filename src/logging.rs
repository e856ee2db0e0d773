//! Log subscriber setup.
//!
//! The terminal is owned by the UI while it runs, so logs go to a file.
//! `RUST_LOG` takes precedence over the default directive.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::LoggingError;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "teigui=info";

/// Install a global fmt subscriber appending to `path`.
pub fn init_logging(path: impl AsRef<Path>, default_filter: &str) -> Result<(), LoggingError> {
    let path = path.as_ref();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)?;

    tracing::debug!(path = %path.display(), "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_path_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let err = init_logging(dir.path(), DEFAULT_FILTER).unwrap_err();
        match err {
            LoggingError::Open { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("expected Open, got {other:?}"),
        }
    }

    #[test]
    fn test_open_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir").join("ui.log");
        let err = init_logging(&missing, DEFAULT_FILTER).unwrap_err();
        assert!(matches!(err, LoggingError::Open { .. }));
        assert!(err.to_string().contains("ui.log"));
    }
}
