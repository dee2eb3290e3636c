use async_trait::async_trait;

use super::errors::EmployeeError;
use super::models::CreateEmployeeCommand;
use super::models::Employee;
use super::models::EmployeeId;
use super::models::UpdateEmployeeCommand;
use crate::domain::auth::models::AuthenticatedSubject;
use crate::domain::errors::RepositoryError;
use crate::domain::page::Page;
use crate::domain::position::models::PositionId;

/// Port for employee domain operations.
#[async_trait]
pub trait EmployeeServicePort: Send + Sync + 'static {
    /// Create a new employee assigned to an existing position.
    ///
    /// # Errors
    /// * `PositionNotFound` - Position reference does not resolve
    /// * `StorageUnavailable` - Storage operation failed
    async fn create_employee(
        &self,
        subject: &AuthenticatedSubject,
        command: CreateEmployeeCommand,
    ) -> Result<Employee, EmployeeError>;

    /// Retrieve an employee by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `StorageUnavailable` - Storage operation failed
    async fn get_employee(
        &self,
        subject: &AuthenticatedSubject,
        id: &EmployeeId,
    ) -> Result<Employee, EmployeeError>;

    /// List employees ordered by creation time.
    ///
    /// # Errors
    /// * `StorageUnavailable` - Storage operation failed
    async fn list_employees(
        &self,
        subject: &AuthenticatedSubject,
        page: Page,
    ) -> Result<Vec<Employee>, EmployeeError>;

    /// List employees assigned to a position.
    ///
    /// # Errors
    /// * `PositionNotFound` - Position does not exist
    /// * `StorageUnavailable` - Storage operation failed
    async fn list_employees_by_position(
        &self,
        subject: &AuthenticatedSubject,
        position_id: &PositionId,
        page: Page,
    ) -> Result<Vec<Employee>, EmployeeError>;

    /// Replace an employee's names and position.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `PositionNotFound` - New position reference does not resolve
    /// * `StorageUnavailable` - Storage operation failed
    async fn update_employee(
        &self,
        subject: &AuthenticatedSubject,
        command: UpdateEmployeeCommand,
    ) -> Result<Employee, EmployeeError>;

    /// Delete an employee. Positions are left untouched.
    ///
    /// # Errors
    /// * `NotFound` - Employee does not exist
    /// * `StorageUnavailable` - Storage operation failed
    async fn delete_employee(
        &self,
        subject: &AuthenticatedSubject,
        id: &EmployeeId,
    ) -> Result<(), EmployeeError>;
}

/// Persistence operations for the employee aggregate.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Persist a new employee.
    ///
    /// # Errors
    /// * `MissingReference` - Position does not exist at write time
    /// * `StorageUnavailable` - Storage operation failed
    async fn create(&self, employee: Employee) -> Result<Employee, RepositoryError>;

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError>;

    /// Employees ordered by creation time, windowed by `page`.
    async fn list(&self, page: Page) -> Result<Vec<Employee>, RepositoryError>;

    async fn list_by_position(
        &self,
        position_id: &PositionId,
        page: Page,
    ) -> Result<Vec<Employee>, RepositoryError>;

    /// Overwrite names, position, and updated-at.
    ///
    /// # Returns
    /// Updated employee (None if not found)
    ///
    /// # Errors
    /// * `MissingReference` - Position does not exist at write time
    /// * `StorageUnavailable` - Storage operation failed
    async fn update(&self, employee: Employee) -> Result<Option<Employee>, RepositoryError>;

    /// # Returns
    /// `true` if a row was removed
    async fn delete(&self, id: &EmployeeId) -> Result<bool, RepositoryError>;
}
