//! Error types for the Appacitive SDK core.

/// Core error type for SDK configuration and identifiers.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Invalid schema name.
    #[error("invalid schema name: '{0}' (must be non-empty ASCII alphanumeric or '_')")]
    InvalidSchemaName(String),

    /// Unknown deployment environment.
    #[error("unknown environment: '{0}' (expected 'sandbox' or 'live')")]
    UnknownEnvironment(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience result type for SDK core operations.
pub type SdkResult<T> = Result<T, SdkError>;
