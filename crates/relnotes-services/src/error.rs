//! Service error types

use thiserror::Error;

/// Errors from remote integrations
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Non-success response from a remote API
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Response arrived but could not be interpreted
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Missing or invalid settings for an integration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Release feed could not be parsed
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Release feed parsing errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// The page has no table
    #[error("Table not found in release feed")]
    TableNotFound,

    /// The table has no header row
    #[error("Table header not found in release feed")]
    HeaderNotFound,

    /// A CSS selector failed to compile
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Result type for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;
