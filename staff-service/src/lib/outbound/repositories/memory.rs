use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::IdentityRepository;
use crate::domain::page::Page;
use crate::domain::position::models::Position;
use crate::domain::position::models::PositionId;
use crate::domain::position::models::PositionName;
use crate::domain::position::ports::PositionRepository;

#[derive(Default)]
struct Tables {
    identities: HashMap<IdentityId, Identity>,
    positions: HashMap<PositionId, Position>,
    employees: HashMap<EmployeeId, Employee>,
}

impl Tables {
    fn position_referenced(&self, id: &PositionId) -> bool {
        self.employees.values().any(|e| e.position_id == *id)
    }
}

/// Process-local storage behind a single lock.
///
/// Every write takes the one write lock, so reference and uniqueness checks
/// see the same state as the write that follows them. Contents are lost when
/// the process exits.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identities(&self) -> InMemoryIdentityRepository {
        InMemoryIdentityRepository {
            store: self.clone(),
        }
    }

    pub fn positions(&self) -> InMemoryPositionRepository {
        InMemoryPositionRepository {
            store: self.clone(),
        }
    }

    pub fn employees(&self) -> InMemoryEmployeeRepository {
        InMemoryEmployeeRepository {
            store: self.clone(),
        }
    }
}

/// Sort by creation time with the id as tiebreak, then apply the page.
fn ordered<'a, T: Clone + 'a, K: Ord>(
    items: impl Iterator<Item = &'a T>,
    key: impl Fn(&T) -> K,
    page: Page,
) -> Vec<T> {
    let mut items: Vec<&T> = items.collect();
    items.sort_by_key(|item| key(item));
    page.slice(items.into_iter().cloned())
}

#[derive(Clone)]
pub struct InMemoryIdentityRepository {
    store: InMemoryStore,
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn create(&self, identity: Identity) -> Result<Identity, RepositoryError> {
        let mut tables = self.store.tables.write().await;

        for existing in tables.identities.values() {
            if existing.username == identity.username {
                return Err(RepositoryError::Duplicate("username".to_string()));
            }
            if existing.email == identity.email {
                return Err(RepositoryError::Duplicate("email".to_string()));
            }
        }

        tables.identities.insert(identity.id, identity.clone());
        Ok(identity)
    }

    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, RepositoryError> {
        Ok(self.store.tables.read().await.identities.get(id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Identity>, RepositoryError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .identities
            .values()
            .find(|i| i.username == *username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, RepositoryError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .identities
            .values()
            .find(|i| i.email.as_str() == email)
            .cloned())
    }

    async fn set_active(
        &self,
        id: &IdentityId,
        is_active: bool,
    ) -> Result<Option<Identity>, RepositoryError> {
        let mut tables = self.store.tables.write().await;
        Ok(tables.identities.get_mut(id).map(|identity| {
            identity.is_active = is_active;
            identity.clone()
        }))
    }
}

#[derive(Clone)]
pub struct InMemoryPositionRepository {
    store: InMemoryStore,
}

#[async_trait]
impl PositionRepository for InMemoryPositionRepository {
    async fn create(&self, position: Position) -> Result<Position, RepositoryError> {
        let mut tables = self.store.tables.write().await;

        if tables.positions.values().any(|p| p.name == position.name) {
            return Err(RepositoryError::Duplicate("name".to_string()));
        }

        tables.positions.insert(position.id, position.clone());
        Ok(position)
    }

    async fn find_by_id(&self, id: &PositionId) -> Result<Option<Position>, RepositoryError> {
        Ok(self.store.tables.read().await.positions.get(id).cloned())
    }

    async fn find_by_name(
        &self,
        name: &PositionName,
    ) -> Result<Option<Position>, RepositoryError> {
        let tables = self.store.tables.read().await;
        Ok(tables.positions.values().find(|p| p.name == *name).cloned())
    }

    async fn list(&self, page: Page) -> Result<Vec<Position>, RepositoryError> {
        let tables = self.store.tables.read().await;
        Ok(ordered(
            tables.positions.values(),
            |p| (p.created_at, p.id.0),
            page,
        ))
    }

    async fn update(&self, position: Position) -> Result<Option<Position>, RepositoryError> {
        let mut tables = self.store.tables.write().await;

        if tables
            .positions
            .values()
            .any(|p| p.id != position.id && p.name == position.name)
        {
            return Err(RepositoryError::Duplicate("name".to_string()));
        }

        match tables.positions.get_mut(&position.id) {
            Some(stored) => {
                stored.name = position.name;
                stored.description = position.description;
                stored.updated_at = position.updated_at;
                Ok(Some(stored.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &PositionId) -> Result<bool, RepositoryError> {
        let mut tables = self.store.tables.write().await;

        if tables.position_referenced(id) {
            return Err(RepositoryError::StillReferenced("employees".to_string()));
        }

        Ok(tables.positions.remove(id).is_some())
    }

    async fn has_employees(&self, id: &PositionId) -> Result<bool, RepositoryError> {
        Ok(self.store.tables.read().await.position_referenced(id))
    }
}

#[derive(Clone)]
pub struct InMemoryEmployeeRepository {
    store: InMemoryStore,
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        let mut tables = self.store.tables.write().await;

        if !tables.positions.contains_key(&employee.position_id) {
            return Err(RepositoryError::MissingReference("position_id".to_string()));
        }

        tables.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        Ok(self.store.tables.read().await.employees.get(id).cloned())
    }

    async fn list(&self, page: Page) -> Result<Vec<Employee>, RepositoryError> {
        let tables = self.store.tables.read().await;
        Ok(ordered(
            tables.employees.values(),
            |e| (e.created_at, e.id.0),
            page,
        ))
    }

    async fn list_by_position(
        &self,
        position_id: &PositionId,
        page: Page,
    ) -> Result<Vec<Employee>, RepositoryError> {
        let tables = self.store.tables.read().await;
        Ok(ordered(
            tables
                .employees
                .values()
                .filter(|e| e.position_id == *position_id),
            |e| (e.created_at, e.id.0),
            page,
        ))
    }

    async fn update(&self, employee: Employee) -> Result<Option<Employee>, RepositoryError> {
        let mut tables = self.store.tables.write().await;

        if !tables.employees.contains_key(&employee.id) {
            return Ok(None);
        }
        if !tables.positions.contains_key(&employee.position_id) {
            return Err(RepositoryError::MissingReference("position_id".to_string()));
        }

        tables.employees.insert(employee.id, employee.clone());
        Ok(Some(employee))
    }

    async fn delete(&self, id: &EmployeeId) -> Result<bool, RepositoryError> {
        Ok(self.store.tables.write().await.employees.remove(id).is_some())
    }
}
