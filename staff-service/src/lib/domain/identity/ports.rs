use async_trait::async_trait;

use super::models::Identity;
use super::models::IdentityId;
use super::models::Username;
use crate::domain::errors::RepositoryError;

/// Persistence operations for the identity aggregate.
#[async_trait]
pub trait IdentityRepository: Send + Sync + 'static {
    /// Persist a fully built identity in a single write.
    ///
    /// # Arguments
    /// * `identity` - Identity entity to create
    ///
    /// # Returns
    /// Created identity entity
    ///
    /// # Errors
    /// * `Duplicate` - Username or email already taken (field name in payload)
    /// * `StorageUnavailable` - Storage operation failed
    async fn create(&self, identity: Identity) -> Result<Identity, RepositoryError>;

    /// Retrieve identity by identifier.
    ///
    /// # Returns
    /// Optional identity entity (None if not found)
    ///
    /// # Errors
    /// * `StorageUnavailable` - Storage operation failed
    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, RepositoryError>;

    /// Retrieve identity by username.
    ///
    /// # Returns
    /// Optional identity entity (None if not found)
    ///
    /// # Errors
    /// * `StorageUnavailable` - Storage operation failed
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Identity>, RepositoryError>;

    /// Retrieve identity by email address.
    ///
    /// # Returns
    /// Optional identity entity (None if not found)
    ///
    /// # Errors
    /// * `StorageUnavailable` - Storage operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, RepositoryError>;

    /// Set the active flag.
    ///
    /// # Returns
    /// Updated identity (None if not found)
    ///
    /// # Errors
    /// * `StorageUnavailable` - Storage operation failed
    async fn set_active(
        &self,
        id: &IdentityId,
        is_active: bool,
    ) -> Result<Option<Identity>, RepositoryError>;
}
