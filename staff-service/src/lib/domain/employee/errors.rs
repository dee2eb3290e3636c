use thiserror::Error;

use super::models::EmployeeId;
use crate::domain::errors::ErrorKind;
use crate::domain::errors::RepositoryError;
use crate::domain::position::errors::PositionIdError;
use crate::domain::position::models::PositionId;

/// Error for EmployeeId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmployeeIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for PersonName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersonNameError {
    #[error("Name cannot be blank")]
    Blank,

    #[error("Name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Name contains invalid characters (only letters, spaces, hyphens, and apostrophes allowed)")]
    InvalidCharacters,
}

/// Top-level error for all employee operations
#[derive(Debug, Clone, Error)]
pub enum EmployeeError {
    #[error("Invalid employee ID: {0}")]
    InvalidEmployeeId(#[from] EmployeeIdError),

    #[error("Invalid position ID: {0}")]
    InvalidPositionId(#[from] PositionIdError),

    #[error("Invalid name: {0}")]
    InvalidName(#[from] PersonNameError),

    #[error("Employee not found: {0}")]
    NotFound(EmployeeId),

    #[error("Position not found: {0}")]
    PositionNotFound(PositionId),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl EmployeeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EmployeeError::InvalidEmployeeId(_)
            | EmployeeError::InvalidPositionId(_)
            | EmployeeError::InvalidName(_) => ErrorKind::Validation,
            EmployeeError::NotFound(_) | EmployeeError::PositionNotFound(_) => ErrorKind::NotFound,
            EmployeeError::StorageUnavailable(_) => ErrorKind::StorageUnavailable,
            EmployeeError::Unknown(_) => ErrorKind::Internal,
        }
    }
}

impl From<RepositoryError> for EmployeeError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::StorageUnavailable(msg) => EmployeeError::StorageUnavailable(msg),
            other => EmployeeError::Unknown(other.to_string()),
        }
    }
}
