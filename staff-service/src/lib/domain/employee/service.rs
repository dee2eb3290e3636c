use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::EmployeeError;
use super::models::CreateEmployeeCommand;
use super::models::Employee;
use super::models::EmployeeId;
use super::models::UpdateEmployeeCommand;
use super::ports::EmployeeRepository;
use super::ports::EmployeeServicePort;
use crate::domain::auth::models::AuthenticatedSubject;
use crate::domain::errors::RepositoryError;
use crate::domain::page::Page;
use crate::domain::position::models::PositionId;
use crate::domain::position::ports::PositionRepository;

/// Domain service implementation for employee operations.
///
/// Reads positions to resolve references; never writes them.
pub struct EmployeeService<ER, PR>
where
    ER: EmployeeRepository,
    PR: PositionRepository,
{
    employees: Arc<ER>,
    positions: Arc<PR>,
}

impl<ER, PR> EmployeeService<ER, PR>
where
    ER: EmployeeRepository,
    PR: PositionRepository,
{
    /// Create a new employee service with injected dependencies.
    ///
    /// # Arguments
    /// * `employees` - Employee persistence implementation
    /// * `positions` - Position lookups for reference checks
    pub fn new(employees: Arc<ER>, positions: Arc<PR>) -> Self {
        Self {
            employees,
            positions,
        }
    }

    async fn ensure_position(&self, id: &PositionId) -> Result<(), EmployeeError> {
        match self.positions.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(EmployeeError::PositionNotFound(*id)),
        }
    }
}

/// Storage-level reference failures mean the position vanished after the check.
fn reference_error(position_id: PositionId) -> impl FnOnce(RepositoryError) -> EmployeeError {
    move |e| match e {
        RepositoryError::MissingReference(_) => EmployeeError::PositionNotFound(position_id),
        other => other.into(),
    }
}

#[async_trait]
impl<ER, PR> EmployeeServicePort for EmployeeService<ER, PR>
where
    ER: EmployeeRepository,
    PR: PositionRepository,
{
    async fn create_employee(
        &self,
        subject: &AuthenticatedSubject,
        command: CreateEmployeeCommand,
    ) -> Result<Employee, EmployeeError> {
        self.ensure_position(&command.position_id).await?;

        let now = Utc::now();
        let employee = Employee {
            id: EmployeeId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            position_id: command.position_id,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .employees
            .create(employee)
            .await
            .map_err(reference_error(command.position_id))?;

        tracing::info!(
            actor = %subject,
            employee_id = %created.id,
            position_id = %created.position_id,
            "Employee created"
        );

        Ok(created)
    }

    async fn get_employee(
        &self,
        _subject: &AuthenticatedSubject,
        id: &EmployeeId,
    ) -> Result<Employee, EmployeeError> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or(EmployeeError::NotFound(*id))
    }

    async fn list_employees(
        &self,
        _subject: &AuthenticatedSubject,
        page: Page,
    ) -> Result<Vec<Employee>, EmployeeError> {
        Ok(self.employees.list(page).await?)
    }

    async fn list_employees_by_position(
        &self,
        _subject: &AuthenticatedSubject,
        position_id: &PositionId,
        page: Page,
    ) -> Result<Vec<Employee>, EmployeeError> {
        self.ensure_position(position_id).await?;
        Ok(self.employees.list_by_position(position_id, page).await?)
    }

    async fn update_employee(
        &self,
        subject: &AuthenticatedSubject,
        command: UpdateEmployeeCommand,
    ) -> Result<Employee, EmployeeError> {
        let mut employee = self
            .employees
            .find_by_id(&command.id)
            .await?
            .ok_or(EmployeeError::NotFound(command.id))?;

        self.ensure_position(&command.position_id).await?;

        employee.first_name = command.first_name;
        employee.last_name = command.last_name;
        employee.position_id = command.position_id;
        employee.updated_at = Utc::now();

        let updated = self
            .employees
            .update(employee)
            .await
            .map_err(reference_error(command.position_id))?
            .ok_or(EmployeeError::NotFound(command.id))?;

        tracing::info!(actor = %subject, employee_id = %updated.id, "Employee updated");

        Ok(updated)
    }

    async fn delete_employee(
        &self,
        subject: &AuthenticatedSubject,
        id: &EmployeeId,
    ) -> Result<(), EmployeeError> {
        if !self.employees.delete(id).await? {
            return Err(EmployeeError::NotFound(*id));
        }

        tracing::info!(actor = %subject, employee_id = %id, "Employee deleted");

        Ok(())
    }
}
