//! API request and response types
//!
//! Field names are camelCase on the wire (`userId`, `mealType`, ...).
//! Log entry requests reject unknown fields.

use crate::models::{CoordinateInput, GeoPoint};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

// ============================================================================
// Accounts
// ============================================================================

/// Signup request
///
/// Both fields are optional at the serde level so that a missing field is
/// reported as a validation error rather than a JSON rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Account identity returned by signup and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub username: String,
    pub id: Uuid,
}

// ============================================================================
// Meals
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMealRequest {
    pub user_id: Uuid,
    #[validate(
        length(max = 200),
        custom(function = "crate::validation::not_blank")
    )]
    pub name: String,
    #[validate(custom(function = "crate::validation::calories_in_range"))]
    pub calories: f64,
    #[validate(range(min = 0.0, max = 100000.0))]
    pub amount: Option<f64>,
    #[validate(length(max = 50))]
    pub meal_type: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub calories: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    pub date: DateTime<Utc>,
}

// ============================================================================
// Water
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateWaterRequest {
    pub user_id: Uuid,
    #[validate(custom(function = "crate::validation::water_count_in_range"))]
    pub count: i32,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub count: i32,
    pub date: DateTime<Utc>,
}

/// Placeholder returned when nothing was logged today
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyWaterResponse {
    pub count: i32,
}

/// Today's water count: the latest record, or `{"count": 0}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodayWaterResponse {
    Logged(WaterResponse),
    Empty(EmptyWaterResponse),
}

impl TodayWaterResponse {
    pub fn empty() -> Self {
        TodayWaterResponse::Empty(EmptyWaterResponse { count: 0 })
    }

    pub fn count(&self) -> i32 {
        match self {
            TodayWaterResponse::Logged(w) => w.count,
            TodayWaterResponse::Empty(e) => e.count,
        }
    }
}

// ============================================================================
// Workouts
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateWorkoutRequest {
    pub user_id: Uuid,
    #[validate(
        length(max = 200),
        custom(function = "crate::validation::not_blank")
    )]
    pub name: String,
    #[validate(length(max = 100))]
    pub category: Option<String>,
    #[validate(length(max = 50))]
    pub sets: Option<String>,
    #[validate(length(max = 50))]
    pub reps: Option<String>,
    #[validate(length(max = 50))]
    pub difficulty: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Progress
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[validate(schema(function = "validate_progress_has_measurement"))]
pub struct CreateProgressRequest {
    pub user_id: Uuid,
    #[validate(custom(function = "crate::validation::weight_in_range"))]
    pub weight: Option<f64>,
    #[validate(custom(function = "crate::validation::percentage_in_range"))]
    pub body_fat: Option<f64>,
    #[validate(custom(function = "crate::validation::muscle_mass_in_range"))]
    pub muscle_mass: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

fn validate_progress_has_measurement(
    req: &CreateProgressRequest,
) -> Result<(), validator::ValidationError> {
    if req.weight.is_none() && req.body_fat.is_none() && req.muscle_mass.is_none() {
        let mut err = validator::ValidationError::new("measurement");
        err.message = Some("at least one of weight, bodyFat or muscleMass is required".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Membership
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateMembershipRequest {
    pub user_id: Uuid,
    #[validate(
        length(max = 100),
        custom(function = "crate::validation::not_blank")
    )]
    pub plan: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "crate::validation::price_in_range"))]
    pub price: Decimal,
    pub expires: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Reports
// ============================================================================

/// Citizen report submission
///
/// Everything is optional here; required fields are checked by the report
/// service so that the failure is rendered in the report envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub latitude: Option<CoordinateInput>,
    #[serde(default)]
    pub longitude: Option<CoordinateInput>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReportResponse {
    pub success: bool,
    pub message: String,
    pub report_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: GeoPoint,
    pub user_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportListResponse {
    pub success: bool,
    pub reports: Vec<ReportResponse>,
}

/// Failure envelope used by every report endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportErrorResponse {
    pub success: bool,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> String {
        Uuid::new_v4().to_string()
    }

    #[test]
    fn test_meal_request_rejects_unknown_fields() {
        let body = json!({
            "userId": user(),
            "name": "Oatmeal",
            "calories": 350,
            "sugar": 12
        });
        assert!(serde_json::from_value::<CreateMealRequest>(body).is_err());
    }

    #[test]
    fn test_meal_request_requires_name_and_calories() {
        let body = json!({ "userId": user(), "calories": 350 });
        assert!(serde_json::from_value::<CreateMealRequest>(body).is_err());

        let body = json!({ "userId": user(), "name": "Oatmeal" });
        assert!(serde_json::from_value::<CreateMealRequest>(body).is_err());
    }

    #[test]
    fn test_meal_request_validation() {
        let body = json!({
            "userId": user(),
            "name": "Oatmeal",
            "calories": 350,
            "mealType": "breakfast"
        });
        let req: CreateMealRequest = serde_json::from_value(body).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.date.is_none());

        let blank = CreateMealRequest {
            name: "   ".to_string(),
            ..req.clone()
        };
        assert!(blank.validate().is_err());

        let negative = CreateMealRequest {
            calories: -5.0,
            ..req
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_progress_requires_a_measurement() {
        let body = json!({ "userId": user() });
        let req: CreateProgressRequest = serde_json::from_value(body).unwrap();
        assert!(req.validate().is_err());

        let body = json!({ "userId": user(), "bodyFat": 18.5 });
        let req: CreateProgressRequest = serde_json::from_value(body).unwrap();
        assert!(req.validate().is_ok());

        let body = json!({ "userId": user(), "bodyFat": 180.0 });
        let req: CreateProgressRequest = serde_json::from_value(body).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_membership_price_from_number() {
        let body = json!({
            "userId": user(),
            "plan": "Gold",
            "price": 49.99,
            "expires": "2026-12-31"
        });
        let req: CreateMembershipRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.price, Decimal::new(4999, 2));
        assert_eq!(req.expires, NaiveDate::from_ymd_opt(2026, 12, 31));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_membership_price_past_column_invalid() {
        let body = json!({ "userId": user(), "plan": "Lifetime", "price": 150000000.0 });
        let req: CreateMembershipRequest = serde_json::from_value(body).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_progress_ranges_checked_through_derive() {
        let body = json!({ "userId": user(), "weight": 10.0 });
        let req: CreateProgressRequest = serde_json::from_value(body).unwrap();
        assert!(req.validate().is_err());

        let body = json!({ "userId": user(), "weight": 80.0, "bodyFat": 20.0, "muscleMass": 35.0 });
        let req: CreateProgressRequest = serde_json::from_value(body).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_membership_negative_price_invalid() {
        let body = json!({ "userId": user(), "plan": "Gold", "price": -1 });
        let req: CreateMembershipRequest = serde_json::from_value(body).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_today_water_empty_shape() {
        let value = serde_json::to_value(TodayWaterResponse::empty()).unwrap();
        assert_eq!(value, json!({ "count": 0 }));
        assert_eq!(TodayWaterResponse::empty().count(), 0);
    }

    #[test]
    fn test_report_request_accepts_string_coordinates() {
        let body = json!({
            "title": "Pothole",
            "description": "Deep pothole on 5th",
            "latitude": "40.7",
            "longitude": -74.0
        });
        let req: SubmitReportRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.latitude, Some(CoordinateInput::Text("40.7".into())));
        assert_eq!(req.longitude, Some(CoordinateInput::Number(-74.0)));
        assert!(req.category.is_none());
        assert!(req.user_id.is_none());
    }

    #[test]
    fn test_report_response_wire_names() {
        let report = ReportResponse {
            id: Uuid::nil(),
            title: "t".into(),
            description: "d".into(),
            category: "Other".into(),
            location: GeoPoint {
                latitude: 1.0,
                longitude: 2.0,
            },
            user_id: "anonymous".into(),
            status: "pending".into(),
            created_at: Utc::now(),
            image_url: String::new(),
        };
        let value = serde_json::to_value(report).unwrap();
        assert!(value.get("userId").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("imageUrl").is_some());
        assert_eq!(value["location"]["latitude"], 1.0);
    }
}
