use thiserror::Error;

use crate::repository::RepositoryError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures returned by service functions, one variant per HTTP outcome.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,
    #[error("conflict")]
    Conflict,
    /// The payload failed form validation.
    #[error("{0}")]
    Form(String),
    /// The payload was well formed but violates a business rule.
    #[error("{0}")]
    Validation(String),
    /// The operation is refused while dependent records exist.
    #[error("{0}")]
    NotAllowed(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict => ServiceError::Conflict,
            RepositoryError::InUse(message) => ServiceError::NotAllowed(message),
            RepositoryError::Validation(message) => ServiceError::Validation(message),
            other @ (RepositoryError::InvalidData(_)
            | RepositoryError::Database(_)
            | RepositoryError::Pool(_)) => ServiceError::Internal(other.to_string()),
        }
    }
}
