// Repository layer for database operations

use anyhow::Result;
use sqlx::PgPool;

use crate::storage::models::{CreateUser, UserRow};

/// Postgres error code for unique-constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    /// Apply pending migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub async fn create_user(&self, input: CreateUser) -> Result<UserRow> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, role, api_key, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, role, api_key, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}

/// Whether an error from a write is the users.email unique constraint firing.
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    match err.downcast_ref::<sqlx::Error>() {
        Some(sqlx::Error::Database(db_err)) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
        }
        _ => false,
    }
}
