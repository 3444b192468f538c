//! Input validation functions
//!
//! Plain validators return `Result<(), String>` so both the backend services
//! and the `validator` derive wrappers below can share them.

use rust_decimal::Decimal;
use std::borrow::Cow;

/// Longest accepted username, in characters
pub const MAX_USERNAME_CHARS: usize = 64;

/// Longest accepted password, in bytes
///
/// bcrypt only reads the first 72 bytes of its input, so anything longer
/// would let two different passwords match the same hash.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Largest price a membership row can hold (`NUMERIC(10, 2)`)
pub const MAX_PRICE: Decimal = Decimal::from_parts(999_999_999, 0, 0, false, 2);

/// Validate a signup username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.chars().count() > MAX_USERNAME_CHARS {
        return Err(format!(
            "Username must be at most {} characters",
            MAX_USERNAME_CHARS
        ));
    }
    Ok(())
}

/// Validate a signup password
///
/// Any non-empty password is accepted; only an upper bound is enforced.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password cannot be empty".to_string());
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate muscle mass value (in kg)
pub fn validate_muscle_mass(mass_kg: f64) -> Result<(), String> {
    if mass_kg.is_nan() || mass_kg.is_infinite() {
        return Err("Muscle mass must be a valid number".to_string());
    }
    if !(0.0..=300.0).contains(&mass_kg) {
        return Err("Muscle mass must be between 0 and 300 kg".to_string());
    }
    Ok(())
}

/// Validate calorie value
pub fn validate_calories(calories: f64) -> Result<(), String> {
    if calories.is_nan() || calories.is_infinite() {
        return Err("Calories must be a valid number".to_string());
    }
    if calories < 0.0 {
        return Err("Calories cannot be negative".to_string());
    }
    if calories > 50000.0 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate percentage value (0-100)
pub fn validate_percentage(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Percentage must be a valid number".to_string());
    }
    if !(0.0..=100.0).contains(&value) {
        return Err("Percentage must be between 0 and 100".to_string());
    }
    Ok(())
}

/// Validate a daily water count (glasses)
pub fn validate_water_count(count: i32) -> Result<(), String> {
    if count < 0 {
        return Err("Water count cannot be negative".to_string());
    }
    if count > 100 {
        return Err("Water count cannot exceed 100".to_string());
    }
    Ok(())
}

/// Validate a membership price
pub fn validate_price(price: &Decimal) -> Result<(), String> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err("Price cannot be negative".to_string());
    }
    if *price > MAX_PRICE {
        return Err(format!("Price cannot exceed {}", MAX_PRICE));
    }
    Ok(())
}

/// Validate latitude in degrees
pub fn validate_latitude(latitude: f64) -> Result<(), String> {
    if !latitude.is_finite() {
        return Err("Latitude must be a valid number".to_string());
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90".to_string());
    }
    Ok(())
}

/// Validate longitude in degrees
pub fn validate_longitude(longitude: f64) -> Result<(), String> {
    if !longitude.is_finite() {
        return Err("Longitude must be a valid number".to_string());
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180".to_string());
    }
    Ok(())
}

// ============================================================================
// `validator` derive adapters
// ============================================================================

fn to_validation_error(code: &'static str, message: String) -> validator::ValidationError {
    let mut error = validator::ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}

/// Reject strings that are empty after trimming
pub fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(to_validation_error("blank", "must not be blank".to_string()));
    }
    Ok(())
}

pub fn calories_in_range(value: f64) -> Result<(), validator::ValidationError> {
    validate_calories(value).map_err(|m| to_validation_error("calories", m))
}

pub fn weight_in_range(value: f64) -> Result<(), validator::ValidationError> {
    validate_weight(value).map_err(|m| to_validation_error("weight", m))
}

pub fn percentage_in_range(value: f64) -> Result<(), validator::ValidationError> {
    validate_percentage(value).map_err(|m| to_validation_error("percentage", m))
}

pub fn muscle_mass_in_range(value: f64) -> Result<(), validator::ValidationError> {
    validate_muscle_mass(value).map_err(|m| to_validation_error("muscle_mass", m))
}

pub fn water_count_in_range(value: i32) -> Result<(), validator::ValidationError> {
    validate_water_count(value).map_err(|m| to_validation_error("count", m))
}

pub fn price_in_range(value: &Decimal) -> Result<(), validator::ValidationError> {
    validate_price(value).map_err(|m| to_validation_error("price", m))
}

/// Render `validator` failures as one line per field, sorted by field name
pub fn describe_errors(errors: &validator::ValidationErrors) -> String {
    let mut lines: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let detail = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: {}", field, detail)
        })
        .collect();

    if lines.is_empty() {
        return errors.to_string();
    }

    lines.sort();
    lines.join("; ")
}
