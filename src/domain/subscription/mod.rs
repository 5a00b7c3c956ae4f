pub mod dto;
pub mod error;
pub mod model;
pub mod service;
pub mod status;

pub use dto::{SubscriptionRequest, SubscriptionResponse};
pub use error::SubscriptionServiceError;
pub use model::{PauseWindow, Subscription};
pub use service::{SubscriptionService, SubscriptionServiceApi};
pub use status::{resolve_status, resolve_status_at, SubscriptionAction, SubscriptionStatus};
