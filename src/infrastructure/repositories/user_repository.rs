//! User Repository Implementation
//!
//! PostgreSQL implementation of the UserRepository trait.
//! Maps between the database schema and the domain User entity.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    DomainError, Email, Identifier, RepositoryError, User, UserId, UserRepository,
};
use crate::infrastructure::metrics;

/// Database row representation matching the users table schema.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
}

impl UserRow {
    /// Rebuild the domain User through its validating factories.
    fn into_user(self) -> Result<User, RepositoryError> {
        let id = UserId::from(Identifier::from(self.id));
        let corrupt = move |err: DomainError| RepositoryError::CorruptRecord {
            id: id.to_string(),
            reason: err.to_string(),
        };

        let email = Email::from_string(&self.email).map_err(corrupt)?;
        User::create(id, &self.name, email).map_err(corrupt)
    }
}

fn storage_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %err, "User query failed");
    RepositoryError::Unavailable(err.to_string())
}

/// PostgreSQL user repository implementation.
///
/// `save` is a single `INSERT ... ON CONFLICT (id) DO UPDATE`, so it is atomic
/// per id and never produces duplicates.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        let started = Instant::now();

        sqlx::query(
            r#"
            INSERT INTO users (id, name, email)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                email = EXCLUDED.email,
                updated_at = NOW()
            "#,
        )
        .bind(*user.id().as_uuid())
        .bind(user.name())
        .bind(user.email().as_str())
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        metrics::record_db_query("upsert", "users", started.elapsed().as_secs_f64());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let started = Instant::now();

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        metrics::record_db_query("select", "users", started.elapsed().as_secs_f64());
        row.map(UserRow::into_user).transpose()
    }
}
