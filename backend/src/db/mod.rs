//! Database connection and pool management
//!
//! PostgreSQL is the only store. The pool is built once at startup and
//! handed to the router through `AppState`.

use crate::config::DatabaseConfig;
use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// SQLSTATE for unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// Pool tuning
pub struct PoolSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 10,
            idle_timeout_secs: 600,  // 10 minutes
            max_lifetime_secs: 1800, // 30 minutes
        }
    }
}

impl From<&DatabaseConfig> for PoolSettings {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            url: config.url.clone(),
            max_connections: config.max_connections,
            min_connections: config.max_connections.min(1),
            ..Default::default()
        }
    }
}

/// Create the PostgreSQL pool described by the database config
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    create_pool_with_settings(&PoolSettings::from(config)).await
}

/// Create a PostgreSQL pool with explicit settings
pub async fn create_pool_with_settings(settings: &PoolSettings) -> Result<PgPool> {
    let connect_options =
        PgConnectOptions::from_str(&settings.url)?.application_name("fitforge-backend");

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .min_connections(settings.min_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(settings.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(settings.max_lifetime_secs))
        .test_before_acquire(true)
        .connect_with(connect_options)
        .await?;

    info!(
        max = settings.max_connections,
        min = settings.min_connections,
        "Database pool created"
    );

    Ok(pool)
}

/// Run the embedded migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}

/// Tables the migrations create; readiness requires all of them
pub const SCHEMA_TABLES: [&str; 7] = [
    "accounts",
    "meals",
    "water_logs",
    "workouts",
    "progress_logs",
    "memberships",
    "reports",
];

/// Names from `SCHEMA_TABLES` that do not exist yet
pub async fn missing_tables(pool: &PgPool) -> Result<Vec<String>> {
    let expected: Vec<String> = SCHEMA_TABLES.iter().map(|t| t.to_string()).collect();
    let missing = sqlx::query_scalar::<_, String>(
        r#"
        SELECT name FROM unnest($1::text[]) AS name
        WHERE to_regclass(name) IS NULL
        "#,
    )
    .bind(expected)
    .fetch_all(pool)
    .await?;

    Ok(missing)
}

/// True when `err` wraps a PostgreSQL unique constraint violation
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .and_then(|e| e.code())
        .map(|code| code == UNIQUE_VIOLATION)
        .unwrap_or(false)
}
