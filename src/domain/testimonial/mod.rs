pub mod error;
pub mod model;
pub mod service;

pub use error::TestimonialServiceError;
pub use model::{
    Testimonial, TestimonialRequest, TestimonialResponse, TestimonialStats,
    TestimonialStatsResponse,
};
pub use service::{TestimonialService, TestimonialServiceApi};
