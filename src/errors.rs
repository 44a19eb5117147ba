/*!
 * Error types for the colingo application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors raised by a translation provider for any transport, quota,
/// or service failure. Absorbed by the retry layer; a provider error
/// never aborts a batch.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when sending the request itself fails
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing the provider response fails
    #[error("failed to parse provider response: {0}")]
    ParseError(String),

    /// Error returned by the service itself
    #[error("provider responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the service
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("rate limit exceeded: {0}")]
    RateLimitExceeded(String),
}

/// Configuration and precondition violations. These are the only errors
/// that may leave the translation core, and they are raised before any
/// translation work begins.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// No columns were selected for translation
    #[error("no columns selected for translation")]
    EmptyColumnSelection,

    /// Segment length must be positive
    #[error("maximum segment length must be positive")]
    InvalidSegmentLength,

    /// Retry count must be positive
    #[error("retry attempt count must be positive")]
    InvalidRetryCount,

    /// Request delay must be a finite, non-negative number of seconds
    #[error("request delay must be finite and non-negative: {0}")]
    InvalidDelay(f64),

    /// Target language code was not recognized
    #[error("invalid target language code: {0}")]
    InvalidLanguage(String),
}

/// Errors that can occur while reading or writing tabular data
#[derive(Error, Debug)]
pub enum TableError {
    /// Error from a file operation
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from CSV parsing or serialization
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A selected column does not exist in the table
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// An appended column does not match the table's row count
    #[error("column length mismatch: expected {expected} rows, got {got}")]
    LengthMismatch {
        /// Number of rows in the table
        expected: usize,
        /// Number of values supplied
        got: usize,
    },

    /// An appended column name collides with an existing header
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from configuration validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from table processing
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
