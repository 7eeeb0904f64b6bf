use thiserror::Error;

use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Authorization(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Short machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::NotFound(_) => "NotFound",
            CoreError::Conflict(_) => "Conflict",
            CoreError::Authorization(_) => "Authorization",
            CoreError::Validation(_) => "Validation",
            CoreError::Storage(_) => "Storage",
            CoreError::Io(_) => "Io",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, CoreError::Conflict(_))
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, CoreError::Authorization(_))
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation { .. } => CoreError::Conflict(err.to_string()),
            StoreError::MissingRecord(message) => CoreError::NotFound(message),
            StoreError::Backend(message) => CoreError::Storage(message),
        }
    }
}
