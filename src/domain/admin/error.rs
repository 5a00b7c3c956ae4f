use crate::domain::shared::ValidationError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AdminServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("authentication required: {0}")]
    AuthRequired(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("network failure: {0}")]
    Unreachable(String),
    #[error("dependency error: {0}")]
    Dependency(String),
}

impl From<ValidationError> for AdminServiceError {
    fn from(err: ValidationError) -> Self {
        AdminServiceError::Invalid(err.0)
    }
}

impl From<AppError> for AdminServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(msg) => AdminServiceError::Invalid(msg),
            AppError::AuthRequired(msg) => AdminServiceError::AuthRequired(msg),
            AppError::RemoteRejection { status, message } => {
                AdminServiceError::Rejected { status, message }
            }
            AppError::NetworkFailure(msg) => AdminServiceError::Unreachable(msg),
            _ => AdminServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<AdminServiceError> for AppError {
    fn from(err: AdminServiceError) -> Self {
        match err {
            AdminServiceError::Invalid(msg) => AppError::Validation(msg),
            AdminServiceError::AuthRequired(msg) => AppError::AuthRequired(msg),
            AdminServiceError::Rejected { status, message } => {
                AppError::RemoteRejection { status, message }
            }
            AdminServiceError::Unreachable(msg) => AppError::NetworkFailure(msg),
            AdminServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
