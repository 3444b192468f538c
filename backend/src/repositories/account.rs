//! Account repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Account record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccountRecord {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Account repository for database operations
pub struct AccountRepository;

impl AccountRepository {
    /// Insert a new account
    ///
    /// Fails with a unique violation (see `db::is_unique_violation`) when
    /// the username is already taken.
    pub async fn create(pool: &PgPool, username: &str, password_hash: &str) -> Result<AccountRecord> {
        let account = sqlx::query_as::<_, AccountRecord>(
            r#"
            INSERT INTO accounts (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(pool)
        .await?;

        Ok(account)
    }

    /// Find account by exact (case-sensitive) username
    pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<AccountRecord>> {
        let account = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM accounts
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    /// Check if a username exists
    pub async fn username_exists(pool: &PgPool, username: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM accounts WHERE username = $1)
            "#,
        )
        .bind(username)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Number of accounts holding `username` (at most one while the UNIQUE
    /// constraint holds)
    pub async fn count_by_username(pool: &PgPool, username: &str) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM accounts WHERE username = $1"#,
        )
        .bind(username)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
