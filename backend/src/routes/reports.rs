//! Citizen report routes
//!
//! Report endpoints answer in their own envelope:
//! `{"success": true, ...}` or `{"success": false, "error": "..."}`.

use crate::error::ApiError;
use crate::services::ReportService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use fitforge_shared::types::{
    ReportErrorResponse, ReportListResponse, SubmitReportRequest, SubmitReportResponse,
};
use serde_json::json;

/// Create report routes, mounted at `/api/reports`
pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reports).post(submit_report))
        .route("/test", get(reports_probe))
}

/// An `ApiError` rendered in the report envelope
pub struct ReportFailure {
    error: ApiError,
    /// Message used instead of the generic one for 5xx failures
    server_message: &'static str,
}

impl ReportFailure {
    fn submit(error: ApiError) -> Self {
        Self {
            error,
            server_message: "Server error. Could not submit report.",
        }
    }

    fn list(error: ApiError) -> Self {
        Self {
            error,
            server_message: "Server error. Could not fetch reports.",
        }
    }
}

impl IntoResponse for ReportFailure {
    fn into_response(self) -> Response {
        self.error.log();
        let (status, _, message) = self.error.parts();
        let message = if status.is_server_error() {
            self.server_message.to_string()
        } else {
            message
        };

        let body = Json(ReportErrorResponse {
            success: false,
            error: message,
        });
        (status, body).into_response()
    }
}

/// POST /api/reports
async fn submit_report(
    State(state): State<AppState>,
    payload: Result<Json<SubmitReportRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitReportResponse>), ReportFailure> {
    let Json(req) = payload.map_err(|e| ReportFailure::submit(e.into()))?;

    let report_id = ReportService::submit(state.db(), req)
        .await
        .map_err(ReportFailure::submit)?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitReportResponse {
            success: true,
            message: "Report submitted successfully!".to_string(),
            report_id,
        }),
    ))
}

/// GET /api/reports
async fn list_reports(
    State(state): State<AppState>,
) -> Result<Json<ReportListResponse>, ReportFailure> {
    let reports = ReportService::list_all(state.db())
        .await
        .map_err(ReportFailure::list)?;

    Ok(Json(ReportListResponse {
        success: true,
        reports,
    }))
}

/// GET /api/reports/test
async fn reports_probe() -> Json<serde_json::Value> {
    Json(json!({ "message": "Reports API endpoint is working!" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_keeps_message() {
        let failure = ReportFailure::submit(ApiError::Validation("latitude is required".into()));
        let response = failure.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_failure_is_500() {
        let failure = ReportFailure::list(ApiError::Internal(anyhow::anyhow!("pool timed out")));
        let response = failure.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
