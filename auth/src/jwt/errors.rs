use jsonwebtoken::errors::Error as JsonWebTokenError;
use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

use super::claims::TokenClass;

/// Error type for token issuance.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token expiry is out of range")]
    ExpiryOutOfRange,
}

/// Reason a presented token was not accepted.
///
/// Variants are distinguishable so callers can tell an expired token
/// (refresh and retry) from a forged or malformed one (hard failure).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenRejection {
    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    BadSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Expected {expected} token, got {actual} token")]
    WrongClass {
        expected: TokenClass,
        actual: TokenClass,
    },
}

impl TokenRejection {
    /// Stable machine-readable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            TokenRejection::Malformed(_) => "malformed",
            TokenRejection::BadSignature => "bad_signature",
            TokenRejection::Expired => "expired",
            TokenRejection::WrongClass { .. } => "wrong_class",
        }
    }
}

impl From<JsonWebTokenError> for TokenRejection {
    fn from(err: JsonWebTokenError) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                TokenRejection::BadSignature
            }
            ErrorKind::ExpiredSignature => TokenRejection::Expired,
            _ => TokenRejection::Malformed(err.to_string()),
        }
    }
}
