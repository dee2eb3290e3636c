use async_trait::async_trait;
use auth::TokenPair;

use super::errors::AuthError;
use super::models::AuthenticatedSubject;
use super::models::LoginCommand;
use super::models::RegisterCommand;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::IdentityProfile;

/// Port for registration, login, and token renewal.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new identity.
    ///
    /// # Arguments
    /// * `command` - Validated username, email, and password
    ///
    /// # Returns
    /// Public projection of the created identity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Hashing` - Password hashing failed
    /// * `StorageUnavailable` - Storage operation failed
    async fn register(&self, command: RegisterCommand) -> Result<IdentityProfile, AuthError>;

    /// Verify credentials and issue an access and a refresh token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password (indistinguishable)
    /// * `Inactive` - Credentials are right but the identity is deactivated
    /// * `TokenIssuance` - Token signing failed
    /// * `StorageUnavailable` - Storage operation failed
    async fn login(&self, command: LoginCommand) -> Result<TokenPair, AuthError>;

    /// Exchange a refresh token for new tokens.
    ///
    /// # Errors
    /// * `Token` - Refresh token malformed, forged, expired, or of the wrong class
    /// * `InvalidCredentials` - Subject no longer exists
    /// * `Inactive` - Subject is deactivated
    /// * `StorageUnavailable` - Storage operation failed
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;

    /// Return the caller's own identity.
    ///
    /// # Errors
    /// * `IdentityNotFound` - Subject no longer exists
    /// * `StorageUnavailable` - Storage operation failed
    async fn current_identity(
        &self,
        subject: &AuthenticatedSubject,
    ) -> Result<IdentityProfile, AuthError>;

    /// Activate or deactivate an identity.
    ///
    /// Deactivation blocks login and refresh; already issued access tokens
    /// stay valid until they expire.
    ///
    /// # Errors
    /// * `IdentityNotFound` - Identity does not exist
    /// * `StorageUnavailable` - Storage operation failed
    async fn set_active(
        &self,
        subject: &AuthenticatedSubject,
        id: &IdentityId,
        is_active: bool,
    ) -> Result<IdentityProfile, AuthError>;
}
