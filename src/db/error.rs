//! Error types for repository operations.

use crate::model::StudentId;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The store could not be reached or the connection handshake failed.
    /// Fatal at startup; the process must not begin serving.
    #[error("connection error: {0}")]
    Connection(String),

    /// The identifier string does not parse into the store's native
    /// identifier type. Surfaces to callers as invalid input.
    #[error("invalid student id '{0}'")]
    InvalidId(String),

    /// The store rejected or failed an operation. Carries the raw error
    /// text so it can be reported verbatim.
    #[error("{0}")]
    Backend(String),

    /// Configuration or initialization error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl RepositoryError {
    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create an invalid-identifier error for the given id.
    pub fn invalid_id(id: &StudentId) -> Self {
        Self::InvalidId(id.as_str().to_owned())
    }

    /// Create a store-operation error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

#[cfg(feature = "mongo-repo")]
impl From<mongodb::error::Error> for RepositoryError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
                RepositoryError::Connection(err.to_string())
            }
            _ => RepositoryError::Backend(err.to_string()),
        }
    }
}
