use crate::domain::shared::ValidationError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TestimonialServiceError {
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

impl From<ValidationError> for TestimonialServiceError {
    fn from(err: ValidationError) -> Self {
        TestimonialServiceError::Invalid(err.0)
    }
}

impl From<AppError> for TestimonialServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(msg) => TestimonialServiceError::Invalid(msg),
            AppError::AuthRequired(msg) => TestimonialServiceError::AuthRequired(msg),
            AppError::RemoteRejection { status, message } => {
                TestimonialServiceError::Rejected { status, message }
            }
            AppError::NetworkFailure(msg) => TestimonialServiceError::Unreachable(msg),
            _ => TestimonialServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<TestimonialServiceError> for AppError {
    fn from(err: TestimonialServiceError) -> Self {
        match err {
            TestimonialServiceError::Invalid(msg) => AppError::Validation(msg),
            TestimonialServiceError::AuthRequired(msg) => AppError::AuthRequired(msg),
            TestimonialServiceError::Rejected { status, message } => {
                AppError::RemoteRejection { status, message }
            }
            TestimonialServiceError::Unreachable(msg) => AppError::NetworkFailure(msg),
            TestimonialServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
