//! Fitness log service
//!
//! Meals, water, workouts, progress and membership records. All five kinds
//! follow the same shape: validate the typed payload, default the timestamp
//! to now, persist, and list newest first per user.

use crate::error::ApiError;
use crate::repositories::{
    CreateMeal, CreateMembership, CreateProgress, CreateWater, CreateWorkout, MealRecord,
    MealRepository, MembershipRecord, MembershipRepository, ProgressRecord, ProgressRepository,
    WaterRecord, WaterRepository, WorkoutRecord, WorkoutRepository,
};
use chrono::{DateTime, Utc};
use fitforge_shared::types::{
    CreateMealRequest, CreateMembershipRequest, CreateProgressRequest, CreateWaterRequest,
    CreateWorkoutRequest, MealResponse, MembershipResponse, ProgressResponse, TodayWaterResponse,
    WaterResponse, WorkoutResponse,
};
use fitforge_shared::validation::describe_errors;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

/// Midnight UTC of the calendar day containing `now`
pub fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .unwrap_or(now)
}

/// Trim optional labels, dropping ones that end up empty
fn clean_label(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate<T: Validate>(input: &T) -> Result<(), ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::Validation(describe_errors(&e)))
}

impl From<MealRecord> for MealResponse {
    fn from(r: MealRecord) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            name: r.name,
            calories: r.calories,
            amount: r.amount,
            meal_type: r.meal_type,
            date: r.logged_at,
        }
    }
}

impl From<WaterRecord> for WaterResponse {
    fn from(r: WaterRecord) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            count: r.count,
            date: r.logged_at,
        }
    }
}

impl From<WorkoutRecord> for WorkoutResponse {
    fn from(r: WorkoutRecord) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            name: r.name,
            category: r.category,
            sets: r.sets,
            reps: r.reps,
            difficulty: r.difficulty,
            created_at: r.created_at,
        }
    }
}

impl From<ProgressRecord> for ProgressResponse {
    fn from(r: ProgressRecord) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            weight: r.weight_kg,
            body_fat: r.body_fat_percent,
            muscle_mass: r.muscle_mass_kg,
            created_at: r.created_at,
        }
    }
}

impl From<MembershipRecord> for MembershipResponse {
    fn from(r: MembershipRecord) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            plan: r.plan,
            price: r.price,
            expires: r.expires,
            created_at: r.created_at,
        }
    }
}

/// Fitness log service for business logic
pub struct LogService;

impl LogService {
    // ------------------------------------------------------------------------
    // Meals
    // ------------------------------------------------------------------------

    pub async fn log_meal(pool: &PgPool, req: CreateMealRequest) -> Result<MealResponse, ApiError> {
        validate(&req)?;

        let input = CreateMeal {
            user_id: req.user_id,
            name: req.name.trim().to_string(),
            calories: req.calories,
            amount: req.amount,
            meal_type: clean_label(req.meal_type),
            logged_at: req.date.unwrap_or_else(Utc::now),
        };

        let record = MealRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;
        debug!(meal_id = %record.id, user_id = %record.user_id, "Meal logged");

        Ok(record.into())
    }

    pub async fn list_meals(pool: &PgPool, user_id: Uuid) -> Result<Vec<MealResponse>, ApiError> {
        let records = MealRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    // ------------------------------------------------------------------------
    // Water
    // ------------------------------------------------------------------------

    pub async fn log_water(pool: &PgPool, req: CreateWaterRequest) -> Result<WaterResponse, ApiError> {
        validate(&req)?;

        let input = CreateWater {
            user_id: req.user_id,
            count: req.count,
            logged_at: req.date.unwrap_or_else(Utc::now),
        };

        let record = WaterRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;
        debug!(water_id = %record.id, user_id = %record.user_id, "Water logged");

        Ok(record.into())
    }

    /// Latest water record logged today, or a zero count
    pub async fn water_today(
        pool: &PgPool,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<TodayWaterResponse, ApiError> {
        let latest = WaterRepository::latest_since(pool, user_id, start_of_day(now))
            .await
            .map_err(ApiError::Internal)?;

        let today = latest
            .map(|r| TodayWaterResponse::Logged(r.into()))
            .unwrap_or_else(TodayWaterResponse::empty);
        debug!(user_id = %user_id, count = today.count(), "Water today");

        Ok(today)
    }

    pub async fn list_water(pool: &PgPool, user_id: Uuid) -> Result<Vec<WaterResponse>, ApiError> {
        let records = WaterRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    // ------------------------------------------------------------------------
    // Workouts
    // ------------------------------------------------------------------------

    pub async fn log_workout(
        pool: &PgPool,
        req: CreateWorkoutRequest,
    ) -> Result<WorkoutResponse, ApiError> {
        validate(&req)?;

        let input = CreateWorkout {
            user_id: req.user_id,
            name: req.name.trim().to_string(),
            category: clean_label(req.category),
            sets: clean_label(req.sets),
            reps: clean_label(req.reps),
            difficulty: clean_label(req.difficulty),
            created_at: req.created_at.unwrap_or_else(Utc::now),
        };

        let record = WorkoutRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;
        debug!(workout_id = %record.id, user_id = %record.user_id, "Workout logged");

        Ok(record.into())
    }

    pub async fn list_workouts(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<WorkoutResponse>, ApiError> {
        let records = WorkoutRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    // ------------------------------------------------------------------------
    // Progress
    // ------------------------------------------------------------------------

    pub async fn log_progress(
        pool: &PgPool,
        req: CreateProgressRequest,
    ) -> Result<ProgressResponse, ApiError> {
        validate(&req)?;

        let input = CreateProgress {
            user_id: req.user_id,
            weight_kg: req.weight,
            body_fat_percent: req.body_fat,
            muscle_mass_kg: req.muscle_mass,
            created_at: req.created_at.unwrap_or_else(Utc::now),
        };

        let record = ProgressRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;
        debug!(progress_id = %record.id, user_id = %record.user_id, "Progress logged");

        Ok(record.into())
    }

    pub async fn list_progress(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<ProgressResponse>, ApiError> {
        let records = ProgressRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    // ------------------------------------------------------------------------
    // Memberships
    // ------------------------------------------------------------------------

    pub async fn log_membership(
        pool: &PgPool,
        req: CreateMembershipRequest,
    ) -> Result<MembershipResponse, ApiError> {
        validate(&req)?;

        let input = CreateMembership {
            user_id: req.user_id,
            plan: req.plan.trim().to_string(),
            price: req.price.round_dp(2),
            expires: req.expires,
            created_at: req.created_at.unwrap_or_else(Utc::now),
        };

        let record = MembershipRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)?;
        debug!(membership_id = %record.id, user_id = %record.user_id, "Membership recorded");

        Ok(record.into())
    }

    pub async fn list_memberships(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<MembershipResponse>, ApiError> {
        let records = MembershipRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
