use super::error::TestimonialServiceError;
use super::{Testimonial, TestimonialRequest, TestimonialStats};
use crate::domain::auth::Session;
use crate::domain::shared::{Page, Pagination};
use crate::infrastructure::repositories::TestimonialRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub struct TestimonialService {
    testimonial_repo: Arc<dyn TestimonialRepository>,
}

impl TestimonialService {
    pub fn new(testimonial_repo: Arc<dyn TestimonialRepository>) -> Self {
        Self { testimonial_repo }
    }
}

#[async_trait]
pub trait TestimonialServiceApi: Send + Sync {
    /// Approved testimonials, newest first. Needs no session.
    async fn list_approved(
        &self,
        pagination: Pagination,
    ) -> Result<Page<Testimonial>, TestimonialServiceError>;

    async fn submit(
        &self,
        session: &Session,
        request: TestimonialRequest,
    ) -> Result<Testimonial, TestimonialServiceError>;

    async fn list_mine(&self, session: &Session)
        -> Result<Vec<Testimonial>, TestimonialServiceError>;

    async fn stats(&self) -> Result<TestimonialStats, TestimonialServiceError>;
}

#[async_trait]
impl TestimonialServiceApi for TestimonialService {
    async fn list_approved(
        &self,
        pagination: Pagination,
    ) -> Result<Page<Testimonial>, TestimonialServiceError> {
        Ok(self.testimonial_repo.list_approved(pagination).await?)
    }

    async fn submit(
        &self,
        session: &Session,
        request: TestimonialRequest,
    ) -> Result<Testimonial, TestimonialServiceError> {
        let request = request.validated()?;
        let token = session.require_token()?;

        let testimonial = self.testimonial_repo.create(token, &request).await?;
        tracing::info!(
            testimonial_id = testimonial.id,
            rating = testimonial.rating,
            "Testimonial submitted for moderation"
        );
        Ok(testimonial)
    }

    async fn list_mine(
        &self,
        session: &Session,
    ) -> Result<Vec<Testimonial>, TestimonialServiceError> {
        let token = session.require_token()?;
        Ok(self.testimonial_repo.list_mine(token).await?)
    }

    async fn stats(&self) -> Result<TestimonialStats, TestimonialServiceError> {
        Ok(self.testimonial_repo.stats().await?)
    }
}
