use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use super::database_error;
use super::invalid_record;
use crate::domain::errors::RepositoryError;
use crate::domain::page::Page;
use crate::domain::position::models::Position;
use crate::domain::position::models::PositionDescription;
use crate::domain::position::models::PositionId;
use crate::domain::position::models::PositionName;
use crate::domain::position::ports::PositionRepository;

const TABLE: &str = "positions";

pub struct PostgresPositionRepository {
    pool: PgPool,
}

impl PostgresPositionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_position(row: PgRow) -> Result<Position, RepositoryError> {
        let description: Option<String> = row.try_get("description").map_err(invalid_record)?;

        Ok(Position {
            id: PositionId(row.try_get("id").map_err(invalid_record)?),
            name: PositionName::new(row.try_get("name").map_err(invalid_record)?)
                .map_err(invalid_record)?,
            description: description
                .map(PositionDescription::new)
                .transpose()
                .map_err(invalid_record)?,
            created_at: row.try_get("created_at").map_err(invalid_record)?,
            updated_at: row.try_get("updated_at").map_err(invalid_record)?,
        })
    }
}

#[async_trait]
impl PositionRepository for PostgresPositionRepository {
    async fn create(&self, position: Position) -> Result<Position, RepositoryError> {
        let row = sqlx::query(
            r#"
            INSERT INTO positions (id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(position.id.0)
        .bind(position.name.as_str())
        .bind(position.description.as_ref().map(|d| d.as_str()))
        .bind(position.created_at)
        .bind(position.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error(TABLE))?;

        Self::row_to_position(row)
    }

    async fn find_by_id(&self, id: &PositionId) -> Result<Option<Position>, RepositoryError> {
        sqlx::query(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM positions
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error(TABLE))?
        .map(Self::row_to_position)
        .transpose()
    }

    async fn find_by_name(
        &self,
        name: &PositionName,
    ) -> Result<Option<Position>, RepositoryError> {
        sqlx::query(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM positions
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error(TABLE))?
        .map(Self::row_to_position)
        .transpose()
    }

    async fn list(&self, page: Page) -> Result<Vec<Position>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM positions
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

        rows.into_iter().map(Self::row_to_position).collect()
    }

    async fn update(&self, position: Position) -> Result<Option<Position>, RepositoryError> {
        sqlx::query(
            r#"
            UPDATE positions
            SET name = $2, description = $3, updated_at = $4
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(position.id.0)
        .bind(position.name.as_str())
        .bind(position.description.as_ref().map(|d| d.as_str()))
        .bind(position.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error(TABLE))?
        .map(Self::row_to_position)
        .transpose()
    }

    async fn delete(&self, id: &PositionId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM positions
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| match database_error(TABLE)(e) {
            // The only foreign key pointing at positions is employees.position_id.
            RepositoryError::MissingReference(_) => {
                RepositoryError::StillReferenced("employees".to_string())
            }
            other => other,
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn has_employees(&self, id: &PositionId) -> Result<bool, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT EXISTS (SELECT 1 FROM employees WHERE position_id = $1) AS assigned
            "#,
        )
        .bind(id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error(TABLE))?;

        row.try_get("assigned").map_err(invalid_record)
    }
}
