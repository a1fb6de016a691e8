//! Error types for configuration resolution.

use thiserror::Error;

use crate::drivers::Driver;

/// Main error type for configuration resolution.
#[derive(Error, Debug)]
pub enum ConfError {
    /// Configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed as YAML.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A required field is absent for the requested environment.
    #[error("no '{field}' entry for environment '{env}'")]
    FieldMissing { env: String, field: &'static str },

    /// After registry lookup and overrides, the driver still lacks an
    /// import path or a dialect.
    #[error("invalid driver configuration: {0:?}")]
    InvalidDriver(Driver),
}

impl ConfError {
    /// Create a FieldMissing error.
    pub fn field_missing(env: impl Into<String>, field: &'static str) -> Self {
        ConfError::FieldMissing {
            env: env.into(),
            field,
        }
    }
}

/// Result type alias for configuration resolution.
pub type Result<T> = std::result::Result<T, ConfError>;
