//! Error types for relnotes

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using RelnotesError
pub type Result<T> = std::result::Result<T, RelnotesError>;

/// Main error type for relnotes operations
#[derive(Debug, Error)]
pub enum RelnotesError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Version-related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Version-related errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// Invalid version format
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Changelog directory not found
    #[error("Changelog dir not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// File name pattern could not be built
    #[error("Invalid changelog file pattern: {0}")]
    InvalidPattern(String),
}

