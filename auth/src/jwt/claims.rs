use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Token class tag.
///
/// An access token authorizes resource operations; a refresh token can only
/// be exchanged for new tokens. The two are never interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    Access,
    Refresh,
}

impl TokenClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenClass::Access => "access",
            TokenClass::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims carried by every issued token.
///
/// Self-describing: subject, class tag, issue time and expiry (Unix seconds).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (identity identifier)
    pub sub: String,

    /// Token class tag
    #[serde(rename = "type")]
    pub class: TokenClass,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject valid for `ttl` from `issued_at`.
    ///
    /// # Arguments
    /// * `subject` - Identity identifier the token asserts
    /// * `class` - Access or refresh
    /// * `issued_at` - Issue instant
    /// * `ttl` - Lifetime of the token
    ///
    /// # Errors
    /// * `ExpiryOutOfRange` - `issued_at + ttl` is not a representable instant
    pub fn new(
        subject: impl ToString,
        class: TokenClass,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let expiration = issued_at
            .checked_add_signed(ttl)
            .ok_or(JwtError::ExpiryOutOfRange)?;

        Ok(Self {
            sub: subject.to_string(),
            class,
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        })
    }

    /// Check if the token is expired.
    ///
    /// A token is valid strictly before its expiry instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }

    /// Expiry as a timestamp, if representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
