use thiserror::Error;

/// Failures of the data access layer
#[derive(Debug, Error)]
pub enum ClientError {
    /// A native call was attempted outside of the desktop shell
    #[error("native bridge is not available in this environment")]
    BridgeUnavailable,

    /// The native host reported a failure for a named operation
    #[error("operation '{operation}' failed: {message}")]
    OperationError { operation: String, message: String },

    #[error("no active summoner could be resolved")]
    NoActiveSummoner,

    /// Persisting to the local store failed; nothing was written
    #[error("failed to write local storage: {0}")]
    StorageWriteFailure(String),

    /// The host answered with a document of the wrong shape
    #[error("unexpected result for '{operation}': {message}")]
    Decode { operation: String, message: String },
}

impl ClientError {
    pub fn operation(operation: &str, message: impl Into<String>) -> Self {
        ClientError::OperationError {
            operation: operation.to_string(),
            message: message.into(),
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
