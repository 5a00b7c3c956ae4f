pub mod client;
pub mod request_id;

pub use client::ApiClient;
pub use request_id::{RequestId, X_REQUEST_ID};
