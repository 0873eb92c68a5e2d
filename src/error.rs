//! Error types.
//!
//! One top-level [`Error`] wraps the per-concern enums so callers can match on
//! the kind of failure while `?` keeps working across module boundaries.
//!
//! "No changes" and "cancelled" are not errors; see
//! [`EncryptOutcome`](crate::core::domain::EncryptOutcome).

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Configuration and environment resolution failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment '{name}' is not defined (known: {})", known.join(", "))]
    UnknownEnvironment { name: String, known: Vec<String> },

    #[error("all env paths must be under '{env_dir}/', invalid: {}", invalid.join(", "))]
    InvalidPaths {
        env_dir: String,
        invalid: Vec<String>,
    },

    #[error("already initialized: {0} exists")]
    AlreadyInitialized(PathBuf),

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse {path}: {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Precondition and postcondition checks on env files.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("required file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("{} contains unencrypted values: {}", path.display(), keys.join(", "))]
    PlaintextValues { path: PathBuf, keys: Vec<String> },
}

/// Failures of the external encryption tool.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("{0} not found in PATH (install it from https://dotenvx.com)")]
    NotFound(String),

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{operation} failed ({status}): {stderr}")]
    Failed {
        operation: &'static str,
        status: String,
        stderr: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
