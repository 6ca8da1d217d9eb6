//! Error types for the theme preference subsystem.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to callers of the theme consumption interface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The scope was read or mutated before a manager was installed.
    #[error("preference accessed outside provider scope")]
    OutsideScope,

    /// A textual theme value was neither "light" nor "dark".
    #[error("invalid theme value '{0}', expected \"light\" or \"dark\"")]
    InvalidArgument(String),
}

/// Failures of a persisted preference store.
///
/// The manager never surfaces these; it logs them and continues without
/// persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("preference store at {path} is not a JSON object: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("preference store is unavailable")]
    Unavailable,
}

/// Failures while loading the application configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
