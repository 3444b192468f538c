//! Account routes
//!
//! `POST /api/signup` and `POST /api/login`.

use crate::error::{ApiResult, AppJson};
use crate::services::AccountService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use fitforge_shared::types::{AccountResponse, LoginRequest, SignupRequest};

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// POST /api/signup
async fn signup(
    State(state): State<AppState>,
    AppJson(req): AppJson<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AccountResponse>)> {
    let account = AccountService::signup(
        state.db(),
        state.passwords(),
        req.username.as_deref(),
        req.password.as_deref(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// POST /api/login
async fn login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> ApiResult<Json<AccountResponse>> {
    let account = AccountService::login(
        state.db(),
        state.passwords(),
        req.username.as_deref(),
        req.password.as_deref(),
    )
    .await?;
    Ok(Json(account))
}
