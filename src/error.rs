#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl AppError {
    /// Whether the in-memory state is still consistent after this error.
    /// Persistence failures happen after the mutation was applied.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, AppError::Storage(_) | AppError::Serialization(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
