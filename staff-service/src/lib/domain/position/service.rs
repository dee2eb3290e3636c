use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::PositionError;
use super::models::CreatePositionCommand;
use super::models::Position;
use super::models::PositionId;
use super::models::UpdatePositionCommand;
use super::ports::PositionRepository;
use super::ports::PositionServicePort;
use crate::domain::auth::models::AuthenticatedSubject;
use crate::domain::errors::RepositoryError;
use crate::domain::page::Page;

/// Domain service implementation for position operations.
pub struct PositionService<PR>
where
    PR: PositionRepository,
{
    repository: Arc<PR>,
}

impl<PR> PositionService<PR>
where
    PR: PositionRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }

    async fn existing(&self, id: &PositionId) -> Result<Position, PositionError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(PositionError::NotFound(*id))
    }
}

#[async_trait]
impl<PR> PositionServicePort for PositionService<PR>
where
    PR: PositionRepository,
{
    async fn create_position(
        &self,
        subject: &AuthenticatedSubject,
        command: CreatePositionCommand,
    ) -> Result<Position, PositionError> {
        if self
            .repository
            .find_by_name(&command.name)
            .await?
            .is_some()
        {
            return Err(PositionError::NameAlreadyExists(command.name.to_string()));
        }

        let now = Utc::now();
        let position = Position {
            id: PositionId::new(),
            name: command.name,
            description: command.description,
            created_at: now,
            updated_at: now,
        };

        let name = position.name.to_string();
        let created = self
            .repository
            .create(position)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicate(_) => PositionError::NameAlreadyExists(name),
                other => other.into(),
            })?;

        tracing::info!(actor = %subject, position_id = %created.id, "Position created");

        Ok(created)
    }

    async fn get_position(
        &self,
        _subject: &AuthenticatedSubject,
        id: &PositionId,
    ) -> Result<Position, PositionError> {
        self.existing(id).await
    }

    async fn list_positions(
        &self,
        _subject: &AuthenticatedSubject,
        page: Page,
    ) -> Result<Vec<Position>, PositionError> {
        Ok(self.repository.list(page).await?)
    }

    async fn update_position(
        &self,
        subject: &AuthenticatedSubject,
        command: UpdatePositionCommand,
    ) -> Result<Position, PositionError> {
        let mut position = self.existing(&command.id).await?;

        if let Some(other) = self.repository.find_by_name(&command.name).await? {
            if other.id != position.id {
                return Err(PositionError::NameAlreadyExists(command.name.to_string()));
            }
        }

        position.name = command.name;
        position.description = command.description;
        position.updated_at = Utc::now();

        let name = position.name.to_string();
        let updated = self
            .repository
            .update(position)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicate(_) => PositionError::NameAlreadyExists(name),
                other => other.into(),
            })?
            .ok_or(PositionError::NotFound(command.id))?;

        tracing::info!(actor = %subject, position_id = %updated.id, "Position updated");

        Ok(updated)
    }

    async fn delete_position(
        &self,
        subject: &AuthenticatedSubject,
        id: &PositionId,
    ) -> Result<(), PositionError> {
        self.existing(id).await?;

        if self.repository.has_employees(id).await? {
            return Err(PositionError::InUse(*id));
        }

        let deleted = self.repository.delete(id).await.map_err(|e| match e {
            RepositoryError::StillReferenced(_) => PositionError::InUse(*id),
            other => other.into(),
        })?;

        if !deleted {
            return Err(PositionError::NotFound(*id));
        }

        tracing::info!(actor = %subject, position_id = %id, "Position deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::errors::ErrorKind;
    use crate::domain::identity::models::IdentityId;
    use crate::domain::position::models::PositionDescription;
    use crate::domain::position::models::PositionName;

    mock! {
        pub TestPositionRepository {}

        #[async_trait]
        impl PositionRepository for TestPositionRepository {
            async fn create(&self, position: Position) -> Result<Position, RepositoryError>;
            async fn find_by_id(&self, id: &PositionId) -> Result<Option<Position>, RepositoryError>;
            async fn find_by_name(&self, name: &PositionName) -> Result<Option<Position>, RepositoryError>;
            async fn list(&self, page: Page) -> Result<Vec<Position>, RepositoryError>;
            async fn update(&self, position: Position) -> Result<Option<Position>, RepositoryError>;
            async fn delete(&self, id: &PositionId) -> Result<bool, RepositoryError>;
            async fn has_employees(&self, id: &PositionId) -> Result<bool, RepositoryError>;
        }
    }

    fn subject() -> AuthenticatedSubject {
        AuthenticatedSubject::new(IdentityId::new())
    }

    fn position(name: &str) -> Position {
        let now = Utc::now();
        Position {
            id: PositionId::new(),
            name: PositionName::new(name.to_string()).unwrap(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn name(value: &str) -> PositionName {
        PositionName::new(value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_create_position_success() {
        let mut repository = MockTestPositionRepository::new();

        repository
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|p| p.name.as_str() == "Engineer" && p.created_at == p.updated_at)
            .times(1)
            .returning(|p| Ok(p));

        let service = PositionService::new(Arc::new(repository));

        let created = service
            .create_position(
                &subject(),
                CreatePositionCommand::new(
                    name("Engineer"),
                    Some(PositionDescription::new("Builds things".to_string()).unwrap()),
                ),
            )
            .await
            .expect("Create failed");

        assert_eq!(created.name.as_str(), "Engineer");
        assert_eq!(
            created.description.as_ref().map(|d| d.as_str()),
            Some("Builds things")
        );
    }

    #[tokio::test]
    async fn test_create_position_duplicate_name() {
        let mut repository = MockTestPositionRepository::new();
        let existing = position("Engineer");

        repository
            .expect_find_by_name()
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_create().times(0);

        let service = PositionService::new(Arc::new(repository));

        let result = service
            .create_position(&subject(), CreatePositionCommand::new(name("Engineer"), None))
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, PositionError::NameAlreadyExists(_)));
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_get_position_not_found() {
        let mut repository = MockTestPositionRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let service = PositionService::new(Arc::new(repository));

        let result = service.get_position(&subject(), &PositionId::new()).await;
        assert!(matches!(result, Err(PositionError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_positions_passes_page() {
        let mut repository = MockTestPositionRepository::new();
        repository
            .expect_list()
            .withf(|page| *page == Page::new(10, 5))
            .times(1)
            .returning(|_| Ok(vec![position("A"), position("B")]));

        let service = PositionService::new(Arc::new(repository));

        let positions = service
            .list_positions(&subject(), Page::new(10, 5))
            .await
            .unwrap();
        assert_eq!(positions.len(), 2);
    }

    #[tokio::test]
    async fn test_update_position_keeps_own_name() {
        let mut repository = MockTestPositionRepository::new();
        let existing = position("Engineer");
        let id = existing.id;
        let created_at = existing.created_at;
        let same = existing.clone();

        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_find_by_name()
            .returning(move |_| Ok(Some(same.clone())));
        repository
            .expect_update()
            .withf(move |p| p.id == id && p.updated_at >= created_at)
            .times(1)
            .returning(|p| Ok(Some(p)));

        let service = PositionService::new(Arc::new(repository));

        let updated = service
            .update_position(
                &subject(),
                UpdatePositionCommand::new(
                    id,
                    name("Engineer"),
                    Some(PositionDescription::new("New".to_string()).unwrap()),
                ),
            )
            .await
            .unwrap();

        assert_eq!(updated.created_at, created_at);
        assert_eq!(updated.description.unwrap().as_str(), "New");
    }

    #[tokio::test]
    async fn test_update_position_name_taken_by_other() {
        let mut repository = MockTestPositionRepository::new();
        let existing = position("Engineer");
        let id = existing.id;
        let other = position("Manager");

        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_find_by_name()
            .returning(move |_| Ok(Some(other.clone())));
        repository.expect_update().times(0);

        let service = PositionService::new(Arc::new(repository));

        let result = service
            .update_position(
                &subject(),
                UpdatePositionCommand::new(id, name("Manager"), None),
            )
            .await;
        assert!(matches!(result, Err(PositionError::NameAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_delete_position_in_use() {
        let mut repository = MockTestPositionRepository::new();
        let existing = position("Engineer");
        let id = existing.id;

        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_has_employees().returning(|_| Ok(true));
        repository.expect_delete().times(0);

        let service = PositionService::new(Arc::new(repository));

        let err = service.delete_position(&subject(), &id).await.unwrap_err();
        assert!(matches!(err, PositionError::InUse(found) if found == id));
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_delete_position_success() {
        let mut repository = MockTestPositionRepository::new();
        let existing = position("Engineer");
        let id = existing.id;

        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_has_employees().returning(|_| Ok(false));
        repository
            .expect_delete()
            .withf(move |candidate| *candidate == id)
            .times(1)
            .returning(|_| Ok(true));

        let service = PositionService::new(Arc::new(repository));

        assert!(service.delete_position(&subject(), &id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_position_reference_race() {
        let mut repository = MockTestPositionRepository::new();
        let existing = position("Engineer");
        let id = existing.id;

        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_has_employees().returning(|_| Ok(false));
        repository
            .expect_delete()
            .returning(|_| Err(RepositoryError::StillReferenced("employees".to_string())));

        let service = PositionService::new(Arc::new(repository));

        let result = service.delete_position(&subject(), &id).await;
        assert!(matches!(result, Err(PositionError::InUse(_))));
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported() {
        let mut repository = MockTestPositionRepository::new();
        repository
            .expect_list()
            .returning(|_| Err(RepositoryError::StorageUnavailable("pool closed".to_string())));

        let service = PositionService::new(Arc::new(repository));

        let err = service
            .list_positions(&subject(), Page::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StorageUnavailable);
    }
}
