use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use super::database_error;
use super::invalid_record;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::PersonName;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::page::Page;
use crate::domain::position::models::PositionId;

const TABLE: &str = "employees";

pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_employee(row: PgRow) -> Result<Employee, RepositoryError> {
        Ok(Employee {
            id: EmployeeId(row.try_get("id").map_err(invalid_record)?),
            first_name: PersonName::new(row.try_get("first_name").map_err(invalid_record)?)
                .map_err(invalid_record)?,
            last_name: PersonName::new(row.try_get("last_name").map_err(invalid_record)?)
                .map_err(invalid_record)?,
            position_id: PositionId(row.try_get("position_id").map_err(invalid_record)?),
            created_at: row.try_get("created_at").map_err(invalid_record)?,
            updated_at: row.try_get("updated_at").map_err(invalid_record)?,
        })
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn create(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        // employees_position_id_fkey rejects a position deleted after the service check.
        let row = sqlx::query(
            r#"
            INSERT INTO employees (id, first_name, last_name, position_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, first_name, last_name, position_id, created_at, updated_at
            "#,
        )
        .bind(employee.id.0)
        .bind(employee.first_name.as_str())
        .bind(employee.last_name.as_str())
        .bind(employee.position_id.0)
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error(TABLE))?;

        Self::row_to_employee(row)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        sqlx::query(
            r#"
            SELECT id, first_name, last_name, position_id, created_at, updated_at
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error(TABLE))?
        .map(Self::row_to_employee)
        .transpose()
    }

    async fn list(&self, page: Page) -> Result<Vec<Employee>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, position_id, created_at, updated_at
            FROM employees
            ORDER BY created_at, id
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(i64::from(page.skip))
        .bind(i64::from(page.limit))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error(TABLE))?;

        rows.into_iter().map(Self::row_to_employee).collect()
    }

    async fn list_by_position(
        &self,
        position_id: &PositionId,
        page: Page,
    ) -> Result<Vec<Employee>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, position_id, created_at, updated_at
            FROM employees
            WHERE position_id = $1
            ORDER BY created_at, id
            OFFSET $2
            LIMIT $3
            "#,
        )
        .bind(position_id.0)
        .bind(i64::from(page.skip))
        .bind(i64::from(page.limit))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error(TABLE))?;

        rows.into_iter().map(Self::row_to_employee).collect()
    }

    async fn update(&self, employee: Employee) -> Result<Option<Employee>, RepositoryError> {
        sqlx::query(
            r#"
            UPDATE employees
            SET first_name = $2, last_name = $3, position_id = $4, updated_at = $5
            WHERE id = $1
            RETURNING id, first_name, last_name, position_id, created_at, updated_at
            "#,
        )
        .bind(employee.id.0)
        .bind(employee.first_name.as_str())
        .bind(employee.last_name.as_str())
        .bind(employee.position_id.0)
        .bind(employee.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error(TABLE))?
        .map(Self::row_to_employee)
        .transpose()
    }

    async fn delete(&self, id: &EmployeeId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error(TABLE))?;

        Ok(result.rows_affected() > 0)
    }
}
