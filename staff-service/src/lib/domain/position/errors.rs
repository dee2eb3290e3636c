use thiserror::Error;

use super::models::PositionId;
use crate::domain::errors::ErrorKind;
use crate::domain::errors::RepositoryError;

/// Error for PositionId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PositionIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for PositionName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PositionNameError {
    #[error("Position name cannot be empty")]
    Empty,

    #[error("Position name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for PositionDescription validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PositionDescriptionError {
    #[error("Position description too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all position operations
#[derive(Debug, Clone, Error)]
pub enum PositionError {
    #[error("Invalid position ID: {0}")]
    InvalidPositionId(#[from] PositionIdError),

    #[error("Invalid position name: {0}")]
    InvalidName(#[from] PositionNameError),

    #[error("Invalid position description: {0}")]
    InvalidDescription(#[from] PositionDescriptionError),

    #[error("Position not found: {0}")]
    NotFound(PositionId),

    #[error("Position name already exists: {0}")]
    NameAlreadyExists(String),

    #[error("Position {0} is still assigned to employees")]
    InUse(PositionId),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl PositionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PositionError::InvalidPositionId(_)
            | PositionError::InvalidName(_)
            | PositionError::InvalidDescription(_) => ErrorKind::Validation,
            PositionError::NotFound(_) => ErrorKind::NotFound,
            PositionError::NameAlreadyExists(_) | PositionError::InUse(_) => ErrorKind::Conflict,
            PositionError::StorageUnavailable(_) => ErrorKind::StorageUnavailable,
            PositionError::Unknown(_) => ErrorKind::Internal,
        }
    }
}

impl From<RepositoryError> for PositionError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::StorageUnavailable(msg) => PositionError::StorageUnavailable(msg),
            other => PositionError::Unknown(other.to_string()),
        }
    }
}
