use async_trait::async_trait;

use super::errors::PositionError;
use super::models::CreatePositionCommand;
use super::models::Position;
use super::models::PositionId;
use super::models::PositionName;
use super::models::UpdatePositionCommand;
use crate::domain::auth::models::AuthenticatedSubject;
use crate::domain::errors::RepositoryError;
use crate::domain::page::Page;

/// Port for position domain operations.
#[async_trait]
pub trait PositionServicePort: Send + Sync + 'static {
    /// Create a new position.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Another position has this name
    /// * `StorageUnavailable` - Storage operation failed
    async fn create_position(
        &self,
        subject: &AuthenticatedSubject,
        command: CreatePositionCommand,
    ) -> Result<Position, PositionError>;

    /// Retrieve a position by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Position does not exist
    /// * `StorageUnavailable` - Storage operation failed
    async fn get_position(
        &self,
        subject: &AuthenticatedSubject,
        id: &PositionId,
    ) -> Result<Position, PositionError>;

    /// List positions ordered by creation time.
    ///
    /// # Errors
    /// * `StorageUnavailable` - Storage operation failed
    async fn list_positions(
        &self,
        subject: &AuthenticatedSubject,
        page: Page,
    ) -> Result<Vec<Position>, PositionError>;

    /// Replace a position's name and description.
    ///
    /// # Errors
    /// * `NotFound` - Position does not exist
    /// * `NameAlreadyExists` - Another position has the new name
    /// * `StorageUnavailable` - Storage operation failed
    async fn update_position(
        &self,
        subject: &AuthenticatedSubject,
        command: UpdatePositionCommand,
    ) -> Result<Position, PositionError>;

    /// Delete a position nobody is assigned to.
    ///
    /// # Errors
    /// * `NotFound` - Position does not exist
    /// * `InUse` - Employees still reference the position
    /// * `StorageUnavailable` - Storage operation failed
    async fn delete_position(
        &self,
        subject: &AuthenticatedSubject,
        id: &PositionId,
    ) -> Result<(), PositionError>;
}

/// Persistence operations for the position aggregate.
#[async_trait]
pub trait PositionRepository: Send + Sync + 'static {
    /// Persist a new position.
    ///
    /// # Errors
    /// * `Duplicate` - Name already taken
    /// * `StorageUnavailable` - Storage operation failed
    async fn create(&self, position: Position) -> Result<Position, RepositoryError>;

    async fn find_by_id(&self, id: &PositionId) -> Result<Option<Position>, RepositoryError>;

    async fn find_by_name(&self, name: &PositionName)
        -> Result<Option<Position>, RepositoryError>;

    /// Positions ordered by creation time, windowed by `page`.
    async fn list(&self, page: Page) -> Result<Vec<Position>, RepositoryError>;

    /// Overwrite name, description, and updated-at.
    ///
    /// # Returns
    /// Updated position (None if not found)
    ///
    /// # Errors
    /// * `Duplicate` - Name already taken by another position
    /// * `StorageUnavailable` - Storage operation failed
    async fn update(&self, position: Position) -> Result<Option<Position>, RepositoryError>;

    /// # Returns
    /// `true` if a row was removed
    ///
    /// # Errors
    /// * `StillReferenced` - Employees reference the position
    /// * `StorageUnavailable` - Storage operation failed
    async fn delete(&self, id: &PositionId) -> Result<bool, RepositoryError>;

    /// Whether any employee references the position.
    async fn has_employees(&self, id: &PositionId) -> Result<bool, RepositoryError>;
}
