pub mod envelope;
pub mod error_dto;
pub mod timestamp;
pub mod validation;

pub use envelope::{ListResponse, MessageResponse, Page, Pagination};
pub use error_dto::ErrorResponse;
pub use validation::ValidationError;
