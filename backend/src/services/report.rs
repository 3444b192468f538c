//! Report intake service
//!
//! Coordinates are validated before anything is written: a report with an
//! unparsable or out-of-range location is rejected, never stored as a
//! degenerate point.

use crate::error::ApiError;
use crate::repositories::{CreateReport, ReportRecord, ReportRepository};
use fitforge_shared::models::{
    or_default_label, CoordinateInput, GeoPoint, ANONYMOUS_SUBMITTER, DEFAULT_REPORT_CATEGORY,
    REPORT_STATUS_PENDING,
};
use fitforge_shared::types::{ReportResponse, SubmitReportRequest};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

impl From<ReportRecord> for ReportResponse {
    fn from(r: ReportRecord) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            category: r.category,
            location: GeoPoint {
                latitude: r.latitude,
                longitude: r.longitude,
            },
            user_id: r.user_id,
            status: r.status,
            created_at: r.created_at,
            image_url: r.image_url,
        }
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::Validation(format!("{} is required", field)))
}

fn coordinate(value: Option<&CoordinateInput>, field: &str) -> Result<f64, ApiError> {
    value
        .ok_or_else(|| ApiError::Validation(format!("{} is required", field)))?
        .to_degrees()
        .map_err(|e| ApiError::Validation(format!("Invalid {}: {}", field, e)))
}

/// Turn a submission into the row to insert, applying defaults
pub fn build_report(req: SubmitReportRequest) -> Result<CreateReport, ApiError> {
    let title = required_text(req.title, "title")?;
    let description = required_text(req.description, "description")?;
    let latitude = coordinate(req.latitude.as_ref(), "latitude")?;
    let longitude = coordinate(req.longitude.as_ref(), "longitude")?;
    let location = GeoPoint::new(latitude, longitude).map_err(ApiError::Validation)?;

    Ok(CreateReport {
        title,
        description,
        category: or_default_label(req.category, DEFAULT_REPORT_CATEGORY),
        latitude: location.latitude,
        longitude: location.longitude,
        user_id: or_default_label(req.user_id, ANONYMOUS_SUBMITTER),
        status: REPORT_STATUS_PENDING.to_string(),
        image_url: req.image_url.unwrap_or_default(),
    })
}

/// Report service for business logic
pub struct ReportService;

impl ReportService {
    /// Store a new report and return its id
    pub async fn submit(pool: &PgPool, req: SubmitReportRequest) -> Result<Uuid, ApiError> {
        let report = build_report(req)?;
        let category = report.category.clone();

        let id = ReportRepository::create(pool, report)
            .await
            .map_err(ApiError::Internal)?;

        info!(report_id = %id, category = %category, "Report saved");
        Ok(id)
    }

    /// Every stored report, unordered
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ReportResponse>, ApiError> {
        let reports: Vec<ReportResponse> = ReportRepository::list_all(pool)
            .await
            .map_err(ApiError::Internal)?
            .into_iter()
            .map(Into::into)
            .collect();

        info!(count = reports.len(), "Fetched reports");
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> SubmitReportRequest {
        SubmitReportRequest {
            title: Some("Broken streetlight".into()),
            description: Some("Dark corner on Elm St".into()),
            latitude: Some(CoordinateInput::Text("40.7".into())),
            longitude: Some(CoordinateInput::Text("-74.0".into())),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let report = build_report(submission()).unwrap();
        assert_eq!(report.category, "Other");
        assert_eq!(report.user_id, "anonymous");
        assert_eq!(report.status, "pending");
        assert_eq!(report.image_url, "");
        assert_eq!(report.latitude, 40.7);
        assert_eq!(report.longitude, -74.0);
    }

    #[test]
    fn test_explicit_values_kept() {
        let req = SubmitReportRequest {
            category: Some("Lighting".into()),
            user_id: Some("user-42".into()),
            ..submission()
        };
        let report = build_report(req).unwrap();
        assert_eq!(report.category, "Lighting");
        assert_eq!(report.user_id, "user-42");
    }

    #[test]
    fn test_unparsable_coordinates_rejected() {
        let req = SubmitReportRequest {
            latitude: Some(CoordinateInput::Text("forty".into())),
            ..submission()
        };
        let err = build_report(req).unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref m) if m.contains("latitude")));
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let req = SubmitReportRequest {
            longitude: Some(CoordinateInput::Number(200.0)),
            ..submission()
        };
        assert!(build_report(req).is_err());
    }

    #[test]
    fn test_missing_fields_rejected() {
        let req = SubmitReportRequest {
            title: Some("  ".into()),
            ..submission()
        };
        assert!(build_report(req).is_err());

        let req = SubmitReportRequest {
            longitude: None,
            ..submission()
        };
        assert!(build_report(req).is_err());
    }
}
