use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::content_type::UnknownContentType;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("record conflicts with an existing one")]
    Conflict,
    /// Dependent records prevent the requested deletion.
    #[error("{0}")]
    InUse(String),
    /// A business rule checked inside a transaction failed.
    #[error("{0}")]
    Validation(String),
    #[error("stored value is invalid: {0}")]
    InvalidData(String),
    #[error("database error: {0}")]
    Database(DieselError),
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
}

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                RepositoryError::Conflict
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                RepositoryError::InUse(info.message().to_string())
            }
            other => RepositoryError::Database(other),
        }
    }
}

impl From<UnknownContentType> for RepositoryError {
    fn from(value: UnknownContentType) -> Self {
        RepositoryError::InvalidData(value.to_string())
    }
}
