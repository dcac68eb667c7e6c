//! Errors raised while assembling a request.

use appacitive_core::SdkError;
use appacitive_query::QueryError;

/// Errors produced while building a find request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Invalid SDK configuration or identifier.
    #[error(transparent)]
    Sdk(#[from] SdkError),

    /// Invalid query construction.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Paging parameters outside the accepted range.
    #[error("invalid paging: {0}")]
    InvalidPaging(String),

    /// The assembled request could not be represented as an HTTP request.
    #[error("invalid HTTP request: {0}")]
    Http(#[from] http::Error),
}

/// Convenience result type for request building.
pub type RequestResult<T> = Result<T, RequestError>;
