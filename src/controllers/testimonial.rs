use std::sync::Arc;

use super::render;
use crate::domain::auth::Session;
use crate::domain::shared::Pagination;
use crate::domain::testimonial::TestimonialRequest;
use crate::{
    domain::testimonial::{TestimonialService, TestimonialServiceApi},
    error::AppResult,
};

pub struct TestimonialController {
    testimonial_service: Arc<TestimonialService>,
}

impl TestimonialController {
    pub fn new(testimonial_service: Arc<TestimonialService>) -> Self {
        Self {
            testimonial_service,
        }
    }

    /// `testimonials` - Approved testimonials with overall stats, or with
    /// `mine` the caller's own including pending ones
    pub async fn list(
        &self,
        session: &Session,
        mine: bool,
        pagination: Pagination,
    ) -> AppResult<String> {
        if mine {
            let testimonials = self.testimonial_service.list_mine(session).await?;
            return Ok(render::testimonial_list(&testimonials));
        }

        let page = self.testimonial_service.list_approved(pagination).await?;
        let stats = self.testimonial_service.stats().await?;
        Ok(format!(
            "{}\n\n{}",
            render::testimonial_list(&page.items),
            render::testimonial_stats(&stats)
        ))
    }

    /// `testimonial` - Submit a testimonial for moderation
    pub async fn submit(&self, session: &Session, request: TestimonialRequest) -> AppResult<String> {
        let testimonial = self.testimonial_service.submit(session, request).await?;
        Ok(format!(
            "Thank you! Your testimonial is pending approval.\n{}",
            render::testimonial(&testimonial)
        ))
    }
}
