use super::jwt;
use crate::domain::user::User;
use crate::error::AppError;
use chrono::{DateTime, Utc};

/// Who is making requests. Passed explicitly to every operation that needs
/// an identity; there is no process-wide current user.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session restored from a stored token; the user is loaded lazily
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            user: None,
        }
    }

    pub fn authenticated(token: impl Into<String>, user: User) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }

    pub fn has_valid_token(&self) -> bool {
        self.require_token().is_ok()
    }

    pub fn require_token(&self) -> Result<&str, AppError> {
        self.require_token_at(Utc::now())
    }

    /// The bearer token, or `AuthRequired` when there is none or it has
    /// already expired at `now`.
    pub fn require_token_at(&self, now: DateTime<Utc>) -> Result<&str, AppError> {
        match self.token.as_deref() {
            None => Err(AppError::AuthRequired(
                "Please log in to continue".to_string(),
            )),
            Some(token) if jwt::is_expired(token, now) => Err(AppError::AuthRequired(
                "Your session has expired, please log in again".to_string(),
            )),
            Some(token) => Ok(token),
        }
    }

    pub fn invalidate(&mut self) {
        self.token = None;
        self.user = None;
    }
}
