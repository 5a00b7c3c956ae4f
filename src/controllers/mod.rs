pub mod admin;
pub mod auth;
pub mod pricing;
pub mod render;
pub mod subscription;
pub mod testimonial;

pub use admin::AdminController;
pub use auth::AuthController;
pub use pricing::PricingController;
pub use subscription::{SubscribeForm, SubscriptionController};
pub use testimonial::TestimonialController;
