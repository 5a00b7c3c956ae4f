use crate::domain::shared::ValidationError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("authentication required: {0}")]
    AuthRequired(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("network failure: {0}")]
    Unreachable(String),
    #[error("token storage error: {0}")]
    TokenStore(String),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ValidationError> for AuthServiceError {
    fn from(err: ValidationError) -> Self {
        AuthServiceError::Invalid(err.0)
    }
}

impl From<AppError> for AuthServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(msg) => AuthServiceError::Invalid(msg),
            AppError::AuthRequired(msg) => AuthServiceError::AuthRequired(msg),
            AppError::RemoteRejection { status, message } => {
                AuthServiceError::Rejected { status, message }
            }
            AppError::NetworkFailure(msg) => AuthServiceError::Unreachable(msg),
            AppError::TokenStore(msg) => AuthServiceError::TokenStore(msg),
            _ => AuthServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<AuthServiceError> for AppError {
    fn from(err: AuthServiceError) -> Self {
        match err {
            AuthServiceError::Invalid(msg) => AppError::Validation(msg),
            AuthServiceError::AuthRequired(msg) => AppError::AuthRequired(msg),
            AuthServiceError::Rejected { status, message } => {
                AppError::RemoteRejection { status, message }
            }
            AuthServiceError::Unreachable(msg) => AppError::NetworkFailure(msg),
            AuthServiceError::TokenStore(msg) => AppError::TokenStore(msg),
            AuthServiceError::Dependency(msg) => AppError::Internal(msg),
            AuthServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
