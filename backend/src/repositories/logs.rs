//! Fitness log repositories
//!
//! One repository per log kind. Every list query returns the user's rows
//! newest first.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

// ============================================================================
// Meals
// ============================================================================

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MealRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub calories: f64,
    pub amount: Option<f64>,
    pub meal_type: Option<String>,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateMeal {
    pub user_id: Uuid,
    pub name: String,
    pub calories: f64,
    pub amount: Option<f64>,
    pub meal_type: Option<String>,
    pub logged_at: DateTime<Utc>,
}

pub struct MealRepository;

impl MealRepository {
    pub async fn create(pool: &PgPool, input: CreateMeal) -> Result<MealRecord> {
        let record = sqlx::query_as::<_, MealRecord>(
            r#"
            INSERT INTO meals (user_id, name, calories, amount, meal_type, logged_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, name, calories, amount, meal_type, logged_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.name)
        .bind(input.calories)
        .bind(input.amount)
        .bind(&input.meal_type)
        .bind(input.logged_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<MealRecord>> {
        let records = sqlx::query_as::<_, MealRecord>(
            r#"
            SELECT id, user_id, name, calories, amount, meal_type, logged_at
            FROM meals
            WHERE user_id = $1
            ORDER BY logged_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

// ============================================================================
// Water
// ============================================================================

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WaterRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub count: i32,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateWater {
    pub user_id: Uuid,
    pub count: i32,
    pub logged_at: DateTime<Utc>,
}

pub struct WaterRepository;

impl WaterRepository {
    pub async fn create(pool: &PgPool, input: CreateWater) -> Result<WaterRecord> {
        let record = sqlx::query_as::<_, WaterRecord>(
            r#"
            INSERT INTO water_logs (user_id, count, logged_at)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, count, logged_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.count)
        .bind(input.logged_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Most recent entry logged at or after `since`
    pub async fn latest_since(
        pool: &PgPool,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Option<WaterRecord>> {
        let record = sqlx::query_as::<_, WaterRecord>(
            r#"
            SELECT id, user_id, count, logged_at
            FROM water_logs
            WHERE user_id = $1 AND logged_at >= $2
            ORDER BY logged_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<WaterRecord>> {
        let records = sqlx::query_as::<_, WaterRecord>(
            r#"
            SELECT id, user_id, count, logged_at
            FROM water_logs
            WHERE user_id = $1
            ORDER BY logged_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

// ============================================================================
// Workouts
// ============================================================================

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub sets: Option<String>,
    pub reps: Option<String>,
    pub difficulty: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub user_id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub sets: Option<String>,
    pub reps: Option<String>,
    pub difficulty: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct WorkoutRepository;

impl WorkoutRepository {
    pub async fn create(pool: &PgPool, input: CreateWorkout) -> Result<WorkoutRecord> {
        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workouts (user_id, name, category, sets, reps, difficulty, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, name, category, sets, reps, difficulty, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.name)
        .bind(&input.category)
        .bind(&input.sets)
        .bind(&input.reps)
        .bind(&input.difficulty)
        .bind(input.created_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<WorkoutRecord>> {
        let records = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, user_id, name, category, sets, reps, difficulty, created_at
            FROM workouts
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

// ============================================================================
// Progress
// ============================================================================

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProgressRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub weight_kg: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub muscle_mass_kg: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateProgress {
    pub user_id: Uuid,
    pub weight_kg: Option<f64>,
    pub body_fat_percent: Option<f64>,
    pub muscle_mass_kg: Option<f64>,
    pub created_at: DateTime<Utc>,
}

pub struct ProgressRepository;

impl ProgressRepository {
    pub async fn create(pool: &PgPool, input: CreateProgress) -> Result<ProgressRecord> {
        let record = sqlx::query_as::<_, ProgressRecord>(
            r#"
            INSERT INTO progress_logs (user_id, weight_kg, body_fat_percent, muscle_mass_kg, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, weight_kg, body_fat_percent, muscle_mass_kg, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.weight_kg)
        .bind(input.body_fat_percent)
        .bind(input.muscle_mass_kg)
        .bind(input.created_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<ProgressRecord>> {
        let records = sqlx::query_as::<_, ProgressRecord>(
            r#"
            SELECT id, user_id, weight_kg, body_fat_percent, muscle_mass_kg, created_at
            FROM progress_logs
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

// ============================================================================
// Memberships
// ============================================================================

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MembershipRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan: String,
    pub price: Decimal,
    pub expires: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateMembership {
    pub user_id: Uuid,
    pub plan: String,
    pub price: Decimal,
    pub expires: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

pub struct MembershipRepository;

impl MembershipRepository {
    pub async fn create(pool: &PgPool, input: CreateMembership) -> Result<MembershipRecord> {
        let record = sqlx::query_as::<_, MembershipRecord>(
            r#"
            INSERT INTO memberships (user_id, plan, price, expires, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, plan, price, expires, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(&input.plan)
        .bind(input.price)
        .bind(input.expires)
        .bind(input.created_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<MembershipRecord>> {
        let records = sqlx::query_as::<_, MembershipRecord>(
            r#"
            SELECT id, user_id, plan, price, expires, created_at
            FROM memberships
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
