use auth::TokenRejection;
use thiserror::Error;

use crate::domain::errors::ErrorKind;
use crate::domain::errors::RepositoryError;
use crate::domain::identity::errors::EmailError;
use crate::domain::identity::errors::IdentityIdError;
use crate::domain::identity::errors::PasswordPolicyError;
use crate::domain::identity::errors::UsernameError;
use crate::domain::identity::models::IdentityId;

/// Top-level error for registration, login, refresh, and access checks
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid identity ID: {0}")]
    InvalidIdentityId(#[from] IdentityIdError),

    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordPolicyError),

    // Domain-level errors
    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Identity not found: {0}")]
    IdentityNotFound(IdentityId),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Identity is inactive")]
    Inactive,

    #[error("Missing bearer token")]
    MissingToken,

    #[error("{0}")]
    Token(#[from] TokenRejection),

    // Infrastructure errors
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidIdentityId(_)
            | AuthError::InvalidUsername(_)
            | AuthError::InvalidEmail(_)
            | AuthError::InvalidPassword(_) => ErrorKind::Validation,
            AuthError::UsernameAlreadyExists(_) | AuthError::EmailAlreadyExists(_) => {
                ErrorKind::Conflict
            }
            AuthError::IdentityNotFound(_) => ErrorKind::NotFound,
            AuthError::InvalidCredentials => ErrorKind::InvalidCredentials,
            AuthError::Inactive => ErrorKind::Inactive,
            AuthError::MissingToken => ErrorKind::TokenRejected("missing"),
            AuthError::Token(rejection) => ErrorKind::TokenRejected(rejection.reason()),
            AuthError::StorageUnavailable(_) => ErrorKind::StorageUnavailable,
            AuthError::Hashing(_) | AuthError::TokenIssuance(_) | AuthError::Unknown(_) => {
                ErrorKind::Internal
            }
        }
    }
}

impl From<RepositoryError> for AuthError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::StorageUnavailable(msg) => AuthError::StorageUnavailable(msg),
            other => AuthError::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::TokenClass;

    use super::*;

    #[test]
    fn test_token_rejections_keep_their_reason() {
        assert_eq!(
            AuthError::MissingToken.kind(),
            ErrorKind::TokenRejected("missing")
        );
        assert_eq!(
            AuthError::from(TokenRejection::Expired).kind(),
            ErrorKind::TokenRejected("expired")
        );
        assert_eq!(
            AuthError::from(TokenRejection::WrongClass {
                expected: TokenClass::Access,
                actual: TokenClass::Refresh,
            })
            .kind(),
            ErrorKind::TokenRejected("wrong_class")
        );
    }

    #[test]
    fn test_repository_errors_translate() {
        assert_eq!(
            AuthError::from(RepositoryError::StorageUnavailable("down".into())).kind(),
            ErrorKind::StorageUnavailable
        );
        assert_eq!(
            AuthError::from(RepositoryError::MissingReference("x".into())).kind(),
            ErrorKind::Internal
        );
    }
}
