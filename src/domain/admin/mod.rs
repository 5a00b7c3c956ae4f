pub mod dto;
pub mod error;
pub mod service;
pub mod summary;

pub use dto::{AdminDashboardResponse, DashboardMetrics, MetricsRange};
pub use error::AdminServiceError;
pub use service::{AdminService, AdminServiceApi};
pub use summary::{summarize_subscriptions, SubscriptionSummary};
