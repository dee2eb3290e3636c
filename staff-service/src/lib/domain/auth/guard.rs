use std::sync::Arc;

use auth::Authenticator;
use auth::TokenClass;
use auth::TokenRejection;

use super::errors::AuthError;
use super::models::AuthenticatedSubject;
use crate::domain::identity::models::IdentityId;

/// Gate in front of every protected use case.
///
/// Stateless: a request is admitted on the strength of its access token
/// alone, without touching storage.
#[derive(Clone)]
pub struct AccessGuard {
    authenticator: Arc<Authenticator>,
}

impl AccessGuard {
    pub fn new(authenticator: Arc<Authenticator>) -> Self {
        Self { authenticator }
    }

    /// Turn a presented bearer token into an authenticated subject.
    ///
    /// # Arguments
    /// * `token` - Bearer token from the request, if any
    ///
    /// # Errors
    /// * `MissingToken` - No token was presented
    /// * `Token` - Token malformed, forged, expired, or not an access token
    pub fn authenticate(&self, token: Option<&str>) -> Result<AuthenticatedSubject, AuthError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = self
            .authenticator
            .validate_token(token, TokenClass::Access)?;

        let identity_id = IdentityId::from_string(&claims.sub).map_err(|_| {
            TokenRejection::Malformed("subject is not an identity id".to_string())
        })?;

        Ok(AuthenticatedSubject::new(identity_id))
    }
}
