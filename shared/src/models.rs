//! Domain models shared by the backend and its clients

use crate::validation::{validate_latitude, validate_longitude};
use serde::{Deserialize, Serialize};

/// Category assigned to a report submitted without one
pub const DEFAULT_REPORT_CATEGORY: &str = "Other";

/// Submitter recorded for a report submitted without a user id
pub const ANONYMOUS_SUBMITTER: &str = "anonymous";

/// Status of every newly submitted report
pub const REPORT_STATUS_PENDING: &str = "pending";

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Build a point, rejecting non-finite or out-of-range coordinates
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, String> {
        validate_latitude(latitude)?;
        validate_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// A coordinate as submitted by a client: either a JSON number or a
/// numeric string such as `"40.7"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateInput {
    Number(f64),
    Text(String),
}

impl CoordinateInput {
    /// Parse to degrees. Strings are trimmed and must be a complete number.
    pub fn to_degrees(&self) -> Result<f64, String> {
        let value = match self {
            CoordinateInput::Number(n) => *n,
            CoordinateInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", s))?,
        };
        if !value.is_finite() {
            return Err("coordinate must be a finite number".to_string());
        }
        Ok(value)
    }
}

/// Resolve an optional free-text value, falling back when absent or blank
pub fn or_default_label(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
