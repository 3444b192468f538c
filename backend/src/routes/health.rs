//! Health endpoints
//!
//! `/health` and `/health/live` answer from the process alone. `/health/ready`
//! also asks PostgreSQL whether it is reachable and whether every table the
//! migrations create is present, so a fresh database that has not been
//! migrated reports 503 instead of failing the first signup.

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

const SERVICE: &str = "fitforge-backend";

#[derive(Debug, Serialize)]
pub struct ProcessStatus {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

impl ProcessStatus {
    fn new(status: &'static str) -> Self {
        Self {
            service: SERVICE,
            status,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Outcome of the readiness probe
#[derive(Debug, Serialize)]
pub struct Readiness {
    pub status: &'static str,
    pub database: &'static str,
    /// Tables still missing; empty once migrations have run
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_tables: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Readiness {
    fn ready() -> Self {
        Self {
            status: "ready",
            database: "up",
            missing_tables: Vec::new(),
            detail: None,
        }
    }

    fn unreachable(detail: String) -> Self {
        Self {
            status: "not_ready",
            database: "down",
            missing_tables: Vec::new(),
            detail: Some(detail),
        }
    }

    fn unmigrated(missing_tables: Vec<String>) -> Self {
        Self {
            status: "not_ready",
            database: "up",
            missing_tables,
            detail: Some("schema not migrated".to_string()),
        }
    }

    fn status_code(&self) -> StatusCode {
        if self.status == "ready" {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// GET /health
pub async fn health_check() -> Json<ProcessStatus> {
    Json(ProcessStatus::new("ok"))
}

/// GET /health/live
pub async fn liveness_check() -> Json<ProcessStatus> {
    Json(ProcessStatus::new("alive"))
}

/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let readiness = match db::health_check(state.db()).await {
        Err(e) => Readiness::unreachable(e.to_string()),
        Ok(()) => match db::missing_tables(state.db()).await {
            Ok(missing) if missing.is_empty() => Readiness::ready(),
            Ok(missing) => Readiness::unmigrated(missing),
            Err(e) => Readiness::unreachable(e.to_string()),
        },
    };

    (readiness.status_code(), Json(readiness))
}
