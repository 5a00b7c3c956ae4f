pub mod admin;
pub mod auth;
pub mod plan;
pub mod pricing;
pub mod shared;
pub mod subscription;
pub mod testimonial;
pub mod user;
