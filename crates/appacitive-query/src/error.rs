//! Error type for query construction.

/// Errors produced while building a query tree.
///
/// All of them are raised when a node is constructed; rendering a valid tree
/// never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A constructor argument violates a node invariant.
    #[error("invalid argument '{argument}': {message}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// Explanation.
        message: String,
    },
    /// The operation is not provided by the query DSL.
    #[error("unsupported operation: {operation}")]
    UnsupportedOperation {
        /// The operation that was attempted.
        operation: &'static str,
    },
}

impl QueryError {
    pub(crate) fn invalid(argument: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an [`QueryError::InvalidArgument`].
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` if this is an [`QueryError::UnsupportedOperation`].
    #[must_use]
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }
}

/// Convenience result type for query construction.
pub type QueryResult<T> = Result<T, QueryError>;
