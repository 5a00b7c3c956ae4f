use crate::domain::shared::validation::{
    validate_email, validate_name, validate_password, ValidationError,
};
use crate::domain::user::User;
use serde::{Deserialize, Serialize};

/// Body of POST /auth/login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Only shape checks; credentials are the backend's call
    pub fn validated(self) -> Result<Self, ValidationError> {
        let email = validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(ValidationError("Password is required".to_string()));
        }
        Ok(Self { email, ..self })
    }
}

/// Body of POST /auth/register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validated(self) -> Result<Self, ValidationError> {
        let full_name = validate_name("Full name", &self.full_name)?;
        let email = validate_email(&self.email)?;
        validate_password(&self.password)?;
        Ok(Self {
            full_name,
            email,
            password: self.password,
        })
    }
}

/// Response of POST /auth/login
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}
