use crate::domain::shared::timestamp;
use crate::domain::shared::validation::{
    validate_message, validate_name, validate_rating, ValidationError,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub message: String,
    pub rating: u8,
    pub is_approved: bool,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

/// Body of POST /testimonials/. New testimonials wait for moderation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialRequest {
    pub name: String,
    pub message: String,
    pub rating: u8,
}

impl TestimonialRequest {
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            name: validate_name("Name", &self.name)?,
            message: validate_message(&self.message)?,
            rating: validate_rating(self.rating)?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TestimonialResponse {
    pub success: bool,
    pub message: String,
    pub testimonial: Option<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialStats {
    pub total: i64,
    pub approved: i64,
    pub pending: i64,
    /// Mean rating of approved testimonials, one decimal
    pub average_rating: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TestimonialStatsResponse {
    pub success: bool,
    pub stats: TestimonialStats,
}
