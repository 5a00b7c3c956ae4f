use crate::domain::pricing::PricingError;
use crate::domain::shared::ValidationError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SubscriptionServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("authentication required: {0}")]
    AuthRequired(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("network failure: {0}")]
    Unreachable(String),
    #[error(transparent)]
    Pricing(#[from] PricingError),
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ValidationError> for SubscriptionServiceError {
    fn from(err: ValidationError) -> Self {
        SubscriptionServiceError::Invalid(err.0)
    }
}

impl From<AppError> for SubscriptionServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Validation(msg) => SubscriptionServiceError::Invalid(msg),
            AppError::AuthRequired(msg) => SubscriptionServiceError::AuthRequired(msg),
            AppError::RemoteRejection { status, message } => {
                SubscriptionServiceError::Rejected { status, message }
            }
            AppError::NetworkFailure(msg) => SubscriptionServiceError::Unreachable(msg),
            AppError::Pricing(e) => SubscriptionServiceError::Pricing(e),
            _ => SubscriptionServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<SubscriptionServiceError> for AppError {
    fn from(err: SubscriptionServiceError) -> Self {
        match err {
            SubscriptionServiceError::Invalid(msg) => AppError::Validation(msg),
            SubscriptionServiceError::AuthRequired(msg) => AppError::AuthRequired(msg),
            SubscriptionServiceError::Rejected { status, message } => {
                AppError::RemoteRejection { status, message }
            }
            SubscriptionServiceError::Unreachable(msg) => AppError::NetworkFailure(msg),
            SubscriptionServiceError::Pricing(e) => AppError::Pricing(e),
            SubscriptionServiceError::Dependency(msg) => AppError::Internal(msg),
            SubscriptionServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
