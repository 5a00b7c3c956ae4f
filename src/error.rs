use crate::domain::pricing::PricingError;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Authentication required: {0}")]
    AuthRequired(String),

    /// Backend answered with a non-2xx status. The message is the backend's
    /// own text and is shown to the user as-is.
    #[error("{message}")]
    RemoteRejection { status: u16, message: String },

    #[error("Could not reach the SEA Catering service, please try again: {0}")]
    NetworkFailure(String),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Token storage error: {0}")]
    TokenStore(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the user can meaningfully retry the same action by hand
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NetworkFailure(_))
    }

    /// Process exit code used by the CLI
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Pricing(_) => 2,
            Self::AuthRequired(_) => 3,
            Self::RemoteRejection { .. } => 4,
            Self::NetworkFailure(_) => 5,
            Self::Config(_) | Self::TokenStore(_) | Self::Internal(_) => 1,
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
