use chrono::DateTime;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenClass;
use crate::jwt::TokenCodec;
use crate::jwt::TokenPolicy;
use crate::jwt::TokenRejection;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining credential hashing and token handling.
///
/// Holds the process-wide signing secret (through its codec) and the token
/// lifetime policy. Both are fixed at construction.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    policy: TokenPolicy,
}

/// Access and refresh tokens minted together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Short-lived access token
    pub access_token: String,
    /// Long-lived refresh token
    pub refresh_token: String,
    /// Token type marker for the `Authorization` scheme
    pub token_type: &'static str,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

impl TokenPair {
    pub const TOKEN_TYPE: &'static str = "bearer";
}

impl Authenticator {
    /// Create a new authenticator with the default token policy.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self::with_policy(jwt_secret, TokenPolicy::default())
    }

    /// Create a new authenticator with an explicit token policy.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `policy` - Access and refresh token lifetimes
    pub fn with_policy(jwt_secret: &[u8], policy: TokenPolicy) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(jwt_secret),
            policy,
        }
    }

    pub fn policy(&self) -> &TokenPolicy {
        &self.policy
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    ///
    /// Malformed stored hashes never match.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Issue a single token of `class` for `subject` under the policy lifetime.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, subject: &str, class: TokenClass) -> Result<String, JwtError> {
        self.token_codec
            .issue(subject, class, self.policy.ttl_for(class))
    }

    /// Issue an access and a refresh token for `subject`.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token_pair(&self, subject: &str) -> Result<TokenPair, JwtError> {
        self.issue_token_pair_at(subject, Utc::now())
    }

    /// Issue an access and a refresh token for `subject` as of `issued_at`.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token_pair_at(
        &self,
        subject: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<TokenPair, JwtError> {
        let access_token = self.token_codec.issue_at(
            subject,
            TokenClass::Access,
            self.policy.access_ttl,
            issued_at,
        )?;
        let refresh_token = self.token_codec.issue_at(
            subject,
            TokenClass::Refresh,
            self.policy.refresh_ttl,
            issued_at,
        )?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: TokenPair::TOKEN_TYPE,
            expires_in: self.policy.access_ttl.num_seconds(),
        })
    }

    /// Validate a token and require it to be of class `expected`.
    ///
    /// # Errors
    /// * `TokenRejection` - Malformed, forged, expired, or wrong class
    pub fn validate_token(
        &self,
        token: &str,
        expected: TokenClass,
    ) -> Result<Claims, TokenRejection> {
        self.token_codec.verify(token, expected)
    }
}
