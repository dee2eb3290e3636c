use std::fmt;

use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::Password;
use crate::domain::identity::models::Username;

/// Command to register a new identity with domain types
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `email` - Validated email address
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(username: Username, email: EmailAddress, password: Password) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

/// Login attempt as received.
///
/// Fields stay raw: a username that would fail validation is treated like
/// an unknown one, so the response never reveals which field was wrong.
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCommand")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

/// Identity proven by a verified access token.
///
/// Only the access guard constructs this, so holding one is proof that the
/// bearer token was checked. Resource use cases take it as their first
/// argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedSubject {
    identity_id: IdentityId,
}

impl AuthenticatedSubject {
    pub(crate) fn new(identity_id: IdentityId) -> Self {
        Self { identity_id }
    }

    pub fn identity_id(&self) -> IdentityId {
        self.identity_id
    }
}

impl fmt::Display for AuthenticatedSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.identity_id.fmt(f)
    }
}
