pub mod dto;
pub mod error;
pub mod jwt;
pub mod service;
pub mod session;

pub use dto::{LoginRequest, RegisterRequest, TokenResponse};
pub use error::AuthServiceError;
pub use jwt::Claims;
pub use service::{AuthService, AuthServiceApi};
pub use session::Session;
