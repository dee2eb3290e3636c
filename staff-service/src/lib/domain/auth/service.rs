use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenClass;
use auth::TokenPair;
use chrono::Utc;

use super::errors::AuthError;
use super::models::AuthenticatedSubject;
use super::models::LoginCommand;
use super::models::RegisterCommand;
use super::ports::AuthServicePort;
use crate::domain::errors::RepositoryError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::IdentityProfile;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::IdentityRepository;

/// Domain service implementation for registration, login, and renewal.
///
/// Concrete implementation of AuthServicePort with dependency injection.
pub struct AuthService<IR>
where
    IR: IdentityRepository,
{
    repository: Arc<IR>,
    authenticator: Arc<Authenticator>,
}

impl<IR> AuthService<IR>
where
    IR: IdentityRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Identity persistence implementation
    /// * `authenticator` - Hasher and token codec holding the signing secret
    pub fn new(repository: Arc<IR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn find_identity_for_login(
        &self,
        username: &str,
    ) -> Result<Option<Identity>, AuthError> {
        let Ok(username) = Username::new(username.to_string()) else {
            return Ok(None);
        };
        Ok(self.repository.find_by_username(&username).await?)
    }

    fn issue_tokens(&self, identity: &Identity) -> Result<TokenPair, AuthError> {
        self.authenticator
            .issue_token_pair(&identity.id.to_string())
            .map_err(|e| AuthError::TokenIssuance(e.to_string()))
    }
}

#[async_trait]
impl<IR> AuthServicePort for AuthService<IR>
where
    IR: IdentityRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<IdentityProfile, AuthError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = self
            .authenticator
            .hash_password(command.password.expose())
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        let identity = Identity {
            id: IdentityId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            is_active: true,
            created_at: Utc::now(),
        };

        let username = identity.username.to_string();
        let email = identity.email.to_string();

        // Unique constraints in storage close the gap between lookup and insert.
        let created = self
            .repository
            .create(identity)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicate(field) if field == "email" => {
                    AuthError::EmailAlreadyExists(email)
                }
                RepositoryError::Duplicate(_) => AuthError::UsernameAlreadyExists(username),
                other => AuthError::from(other),
            })?;

        tracing::info!(
            identity_id = %created.id,
            username = %created.username,
            "Identity registered"
        );

        Ok(created.profile())
    }

    async fn login(&self, command: LoginCommand) -> Result<TokenPair, AuthError> {
        let Some(identity) = self.find_identity_for_login(&command.username).await? else {
            // Spend the same hashing cost as a real verification.
            let _ = self.authenticator.hash_password(&command.password);
            tracing::warn!("Login rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .authenticator
            .verify_password(&command.password, &identity.password_hash)
        {
            tracing::warn!("Login rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        if !identity.is_active {
            tracing::warn!(identity_id = %identity.id, "Login rejected: identity inactive");
            return Err(AuthError::Inactive);
        }

        let tokens = self.issue_tokens(&identity)?;
        tracing::info!(identity_id = %identity.id, "Login succeeded");

        Ok(tokens)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self
            .authenticator
            .validate_token(refresh_token, TokenClass::Refresh)
            .map_err(|rejection| {
                tracing::warn!(reason = rejection.reason(), "Refresh token rejected");
                AuthError::Token(rejection)
            })?;

        let identity_id = IdentityId::from_string(&claims.sub).map_err(|_| {
            AuthError::Token(auth::TokenRejection::Malformed(
                "subject is not an identity id".to_string(),
            ))
        })?;

        let identity = self
            .repository
            .find_by_id(&identity_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !identity.is_active {
            tracing::warn!(identity_id = %identity.id, "Refresh rejected: identity inactive");
            return Err(AuthError::Inactive);
        }

        let tokens = self.issue_tokens(&identity)?;
        tracing::debug!(identity_id = %identity.id, "Tokens refreshed");

        Ok(tokens)
    }

    async fn current_identity(
        &self,
        subject: &AuthenticatedSubject,
    ) -> Result<IdentityProfile, AuthError> {
        let identity_id = subject.identity_id();

        self.repository
            .find_by_id(&identity_id)
            .await?
            .map(|identity| identity.profile())
            .ok_or(AuthError::IdentityNotFound(identity_id))
    }

    async fn set_active(
        &self,
        subject: &AuthenticatedSubject,
        id: &IdentityId,
        is_active: bool,
    ) -> Result<IdentityProfile, AuthError> {
        let identity = self
            .repository
            .set_active(id, is_active)
            .await?
            .ok_or(AuthError::IdentityNotFound(*id))?;

        tracing::info!(
            actor = %subject,
            identity_id = %identity.id,
            is_active,
            "Identity active flag changed"
        );

        Ok(identity.profile())
    }
}
