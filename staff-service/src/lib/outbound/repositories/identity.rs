use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use super::database_error;
use super::invalid_record;
use crate::domain::errors::RepositoryError;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::IdentityRepository;

const TABLE: &str = "identities";

pub struct PostgresIdentityRepository {
    pool: PgPool,
}

impl PostgresIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_identity(row: PgRow) -> Result<Identity, RepositoryError> {
        Ok(Identity {
            id: IdentityId(row.try_get("id").map_err(invalid_record)?),
            username: Username::new(row.try_get("username").map_err(invalid_record)?)
                .map_err(invalid_record)?,
            email: EmailAddress::new(row.try_get("email").map_err(invalid_record)?)
                .map_err(invalid_record)?,
            password_hash: row.try_get("password_hash").map_err(invalid_record)?,
            is_active: row.try_get("is_active").map_err(invalid_record)?,
            created_at: row.try_get("created_at").map_err(invalid_record)?,
        })
    }
}

#[async_trait]
impl IdentityRepository for PostgresIdentityRepository {
    async fn create(&self, identity: Identity) -> Result<Identity, RepositoryError> {
        let row = sqlx::query(
            r#"
            INSERT INTO identities (id, username, email, password_hash, is_active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, email, password_hash, is_active, created_at
            "#,
        )
        .bind(identity.id.0)
        .bind(identity.username.as_str())
        .bind(identity.email.as_str())
        .bind(&identity.password_hash)
        .bind(identity.is_active)
        .bind(identity.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error(TABLE))?;

        tracing::debug!(identity_id = %identity.id, "Identity row inserted");

        Self::row_to_identity(row)
    }

    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, RepositoryError> {
        sqlx::query(
            r#"
            SELECT id, username, email, password_hash, is_active, created_at
            FROM identities
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error(TABLE))?
        .map(Self::row_to_identity)
        .transpose()
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Identity>, RepositoryError> {
        sqlx::query(
            r#"
            SELECT id, username, email, password_hash, is_active, created_at
            FROM identities
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error(TABLE))?
        .map(Self::row_to_identity)
        .transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, RepositoryError> {
        sqlx::query(
            r#"
            SELECT id, username, email, password_hash, is_active, created_at
            FROM identities
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error(TABLE))?
        .map(Self::row_to_identity)
        .transpose()
    }

    async fn set_active(
        &self,
        id: &IdentityId,
        is_active: bool,
    ) -> Result<Option<Identity>, RepositoryError> {
        sqlx::query(
            r#"
            UPDATE identities
            SET is_active = $2
            WHERE id = $1
            RETURNING id, username, email, password_hash, is_active, created_at
            "#,
        )
        .bind(id.0)
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error(TABLE))?
        .map(Self::row_to_identity)
        .transpose()
    }
}
