pub mod admin_repository;
pub mod auth_repository;
pub mod subscription_repository;
pub mod testimonial_repository;
pub mod token_repository;

pub use admin_repository::{AdminRepository, HttpAdminRepository};
pub use auth_repository::{AuthRepository, HttpAuthRepository};
pub use subscription_repository::{HttpSubscriptionRepository, SubscriptionRepository};
pub use testimonial_repository::{HttpTestimonialRepository, TestimonialRepository};
pub use token_repository::{FileTokenRepository, InMemoryTokenRepository, TokenRepository};
