use thiserror::Error;

/// Failure reported by a repository adapter.
///
/// Absence is never an error at this boundary: lookups return `None` and
/// deletes return `false`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Duplicate value for unique field: {0}")]
    Duplicate(String),

    #[error("Referenced record does not exist: {0}")]
    MissingReference(String),

    #[error("Record is still referenced by: {0}")]
    StillReferenced(String),

    #[error("Stored record failed validation: {0}")]
    InvalidRecord(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

/// Transport-independent classification of every domain error.
///
/// The inbound layer maps kinds to status codes; the domain only guarantees
/// that a kind is always determinable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input, detected before touching storage
    Validation,
    /// Uniqueness or referential conflict
    Conflict,
    /// Identifier or reference absent
    NotFound,
    /// Login failure, deliberately unspecific
    InvalidCredentials,
    /// Identity exists but is deactivated
    Inactive,
    /// Bearer token missing or rejected, with its reason code
    TokenRejected(&'static str),
    /// Repository layer failure
    StorageUnavailable,
    /// Hashing, signing, or other unexpected failures
    Internal,
}
