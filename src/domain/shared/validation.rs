//! Form validation applied before anything is sent to the backend.
//!
//! The rules match the backend's request schemas so that a form which passes
//! here is not bounced for shape reasons; the backend still validates again.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s\-'.]+$").expect("valid name pattern"));
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});
static PASSWORD_SPECIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("valid special pattern"));

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_ALLERGIES_LEN: usize = 500;
pub const MIN_MESSAGE_LEN: usize = 10;
pub const MAX_MESSAGE_LEN: usize = 1000;
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Validates a person's name and returns it trimmed.
/// `field` is the label used in messages ("Name", "Full name").
pub fn validate_name(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.chars().count() < 2 {
        return Err(ValidationError(format!(
            "{} must be at least 2 characters long",
            field
        )));
    }
    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError(format!(
            "{} must be less than {} characters",
            field, MAX_NAME_LEN
        )));
    }
    if !NAME_PATTERN.is_match(value) {
        return Err(ValidationError(format!("{} contains invalid characters", field)));
    }
    Ok(trimmed.to_string())
}

/// Strips everything but digits; 10 to 13 digits are accepted.
pub fn normalize_phone(value: &str) -> Result<String, ValidationError> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if !(10..=13).contains(&digits.len()) {
        return Err(ValidationError(
            "Phone number must be between 10-13 digits".to_string(),
        ));
    }
    Ok(digits)
}

/// Empty allergy notes are treated as absent.
pub fn validate_allergies(value: Option<&str>) -> Result<Option<String>, ValidationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) if text.chars().count() > MAX_ALLERGIES_LEN => Err(ValidationError(format!(
            "Allergies field must be less than {} characters",
            MAX_ALLERGIES_LEN
        ))),
        Some(text) => Ok(Some(text.to_string())),
    }
}

pub fn validate_email(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if !EMAIL_PATTERN.is_match(trimmed) {
        return Err(ValidationError("Invalid email format".to_string()));
    }
    Ok(trimmed.to_string())
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        )));
    }

    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = PASSWORD_SPECIAL.is_match(value);

    if !(has_upper && has_lower && has_digit && has_special) {
        return Err(ValidationError(
            "Password must contain uppercase, lowercase, number, and special character"
                .to_string(),
        ));
    }
    Ok(())
}

pub fn validate_message(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.chars().count() < MIN_MESSAGE_LEN {
        return Err(ValidationError(format!(
            "Message must be at least {} characters long",
            MIN_MESSAGE_LEN
        )));
    }
    if value.chars().count() > MAX_MESSAGE_LEN {
        return Err(ValidationError(format!(
            "Message must be less than {} characters",
            MAX_MESSAGE_LEN
        )));
    }
    Ok(trimmed.to_string())
}

pub fn validate_rating(value: u8) -> Result<u8, ValidationError> {
    if !(1..=5).contains(&value) {
        return Err(ValidationError("Rating must be between 1 and 5".to_string()));
    }
    Ok(value)
}
