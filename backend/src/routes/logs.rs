//! Fitness log routes
//!
//! Each kind exposes `POST /api/<kind>` and `GET /api/<kind>/:userId`.
//! Water additionally has `GET /api/water/:userId/history`.

use crate::error::{ApiError, ApiResult, AppJson};
use crate::services::LogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use fitforge_shared::types::{
    CreateMealRequest, CreateMembershipRequest, CreateProgressRequest, CreateWaterRequest,
    CreateWorkoutRequest, MealResponse, MembershipResponse, ProgressResponse, TodayWaterResponse,
    WaterResponse, WorkoutResponse,
};
use uuid::Uuid;

/// Create log routes, mounted under `/api`
pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/meals", post(log_meal))
        .route("/meals/:user_id", get(list_meals))
        .route("/water", post(log_water))
        .route("/water/:user_id", get(water_today))
        .route("/water/:user_id/history", get(list_water))
        .route("/workouts", post(log_workout))
        .route("/workouts/:user_id", get(list_workouts))
        .route("/progress", post(log_progress))
        .route("/progress/:user_id", get(list_progress))
        .route("/membership", post(log_membership))
        .route("/membership/:user_id", get(list_memberships))
}

/// Parse the account identifier from the path
fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::Validation("Invalid user ID".to_string()))
}

/// POST /api/meals
async fn log_meal(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateMealRequest>,
) -> ApiResult<(StatusCode, Json<MealResponse>)> {
    let meal = LogService::log_meal(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(meal)))
}

/// GET /api/meals/:userId
async fn list_meals(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<MealResponse>>> {
    let user_id = parse_user_id(&user_id)?;
    Ok(Json(LogService::list_meals(state.db(), user_id).await?))
}

/// POST /api/water
async fn log_water(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateWaterRequest>,
) -> ApiResult<(StatusCode, Json<WaterResponse>)> {
    let water = LogService::log_water(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(water)))
}

/// GET /api/water/:userId - today's latest count, `{"count": 0}` if none
async fn water_today(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<TodayWaterResponse>> {
    let user_id = parse_user_id(&user_id)?;
    Ok(Json(
        LogService::water_today(state.db(), user_id, Utc::now()).await?,
    ))
}

/// GET /api/water/:userId/history
async fn list_water(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<WaterResponse>>> {
    let user_id = parse_user_id(&user_id)?;
    Ok(Json(LogService::list_water(state.db(), user_id).await?))
}

/// POST /api/workouts
async fn log_workout(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateWorkoutRequest>,
) -> ApiResult<(StatusCode, Json<WorkoutResponse>)> {
    let workout = LogService::log_workout(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

/// GET /api/workouts/:userId
async fn list_workouts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<WorkoutResponse>>> {
    let user_id = parse_user_id(&user_id)?;
    Ok(Json(LogService::list_workouts(state.db(), user_id).await?))
}

/// POST /api/progress
async fn log_progress(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateProgressRequest>,
) -> ApiResult<(StatusCode, Json<ProgressResponse>)> {
    let progress = LogService::log_progress(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(progress)))
}

/// GET /api/progress/:userId
async fn list_progress(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<ProgressResponse>>> {
    let user_id = parse_user_id(&user_id)?;
    Ok(Json(LogService::list_progress(state.db(), user_id).await?))
}

/// POST /api/membership
async fn log_membership(
    State(state): State<AppState>,
    AppJson(req): AppJson<CreateMembershipRequest>,
) -> ApiResult<(StatusCode, Json<MembershipResponse>)> {
    let membership = LogService::log_membership(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(membership)))
}

/// GET /api/membership/:userId
async fn list_memberships(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<MembershipResponse>>> {
    let user_id = parse_user_id(&user_id)?;
    Ok(Json(LogService::list_memberships(state.db(), user_id).await?))
}
