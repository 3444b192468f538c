//! Citizen report repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Report record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReportRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub user_id: String,
    pub status: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a report; `created_at` is assigned by the store
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub title: String,
    pub description: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub user_id: String,
    pub status: String,
    pub image_url: String,
}

/// Report repository
pub struct ReportRepository;

impl ReportRepository {
    /// Insert a report and return its generated id
    pub async fn create(pool: &PgPool, input: CreateReport) -> Result<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO reports (title, description, category, latitude, longitude,
                                 user_id, status, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.category)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(&input.user_id)
        .bind(&input.status)
        .bind(&input.image_url)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Every report, in no particular order
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ReportRecord>> {
        let records = sqlx::query_as::<_, ReportRecord>(
            r#"
            SELECT id, title, description, category, latitude, longitude,
                   user_id, status, image_url, created_at
            FROM reports
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
