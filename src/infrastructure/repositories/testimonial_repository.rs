use crate::domain::shared::{ListResponse, MessageResponse, Page, Pagination};
use crate::domain::testimonial::{
    Testimonial, TestimonialRequest, TestimonialResponse, TestimonialStats,
    TestimonialStatsResponse,
};
use crate::error::{AppError, AppResult};
use crate::infrastructure::http::ApiClient;
use async_trait::async_trait;
use std::sync::Arc;

/// Testimonial endpoints, including moderation
#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    async fn list_approved(&self, pagination: Pagination) -> AppResult<Page<Testimonial>>;

    async fn create(&self, token: &str, request: &TestimonialRequest) -> AppResult<Testimonial>;

    async fn list_mine(&self, token: &str) -> AppResult<Vec<Testimonial>>;

    async fn stats(&self) -> AppResult<TestimonialStats>;

    // admin only
    async fn list_pending(&self, token: &str, pagination: Pagination)
        -> AppResult<Page<Testimonial>>;

    async fn approve(&self, token: &str, id: i64) -> AppResult<()>;

    /// The backend deletes rejected testimonials
    async fn reject(&self, token: &str, id: i64) -> AppResult<()>;
}

pub struct HttpTestimonialRepository {
    client: Arc<ApiClient>,
}

impl HttpTestimonialRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TestimonialRepository for HttpTestimonialRepository {
    async fn list_approved(&self, pagination: Pagination) -> AppResult<Page<Testimonial>> {
        let response: ListResponse<Testimonial> = self
            .client
            .send(
                self.client.get("/testimonials/").query(&[
                    ("approved_only", "true".to_string()),
                    ("skip", pagination.skip.to_string()),
                    ("limit", pagination.limit.to_string()),
                ]),
                None,
            )
            .await?;
        Ok(response.into())
    }

    async fn create(&self, token: &str, request: &TestimonialRequest) -> AppResult<Testimonial> {
        let response: TestimonialResponse = self
            .client
            .send(self.client.post("/testimonials/").json(request), Some(token))
            .await?;
        response.testimonial.ok_or_else(|| {
            AppError::Internal(format!(
                "Backend response carried no testimonial: {}",
                response.message
            ))
        })
    }

    async fn list_mine(&self, token: &str) -> AppResult<Vec<Testimonial>> {
        let response: ListResponse<Testimonial> = self
            .client
            .send(self.client.get("/testimonials/my"), Some(token))
            .await?;
        Ok(response.data)
    }

    async fn stats(&self) -> AppResult<TestimonialStats> {
        let response: TestimonialStatsResponse = self
            .client
            .send(self.client.get("/testimonials/stats/"), None)
            .await?;
        Ok(response.stats)
    }

    async fn list_pending(
        &self,
        token: &str,
        pagination: Pagination,
    ) -> AppResult<Page<Testimonial>> {
        let response: ListResponse<Testimonial> = self
            .client
            .send(
                self.client.get("/testimonials/admin/pending").query(&[
                    ("skip", pagination.skip),
                    ("limit", pagination.limit),
                ]),
                Some(token),
            )
            .await?;
        Ok(response.into())
    }

    async fn approve(&self, token: &str, id: i64) -> AppResult<()> {
        let _: MessageResponse = self
            .client
            .send(
                self.client.put(&format!("/testimonials/{}/approve", id)),
                Some(token),
            )
            .await?;
        Ok(())
    }

    async fn reject(&self, token: &str, id: i64) -> AppResult<()> {
        let _: MessageResponse = self
            .client
            .send(
                self.client.put(&format!("/testimonials/{}/reject", id)),
                Some(token),
            )
            .await?;
        Ok(())
    }
}
