use chrono::NaiveDate;
use std::sync::Arc;

use super::render;
use crate::domain::admin::MetricsRange;
use crate::domain::auth::Session;
use crate::domain::shared::Pagination;
use crate::{
    domain::admin::{AdminService, AdminServiceApi},
    error::{AppError, AppResult},
};

pub struct AdminController {
    admin_service: Arc<AdminService>,
}

impl AdminController {
    pub fn new(admin_service: Arc<AdminService>) -> Self {
        Self { admin_service }
    }

    /// `admin subscriptions` - Every subscription, paged
    pub async fn subscriptions(
        &self,
        session: &Session,
        pagination: Pagination,
        as_of: NaiveDate,
    ) -> AppResult<String> {
        let page = self
            .admin_service
            .list_subscriptions(session, pagination)
            .await?;
        Ok(render::subscription_page(&page, as_of))
    }

    /// `admin deactivate <id>`
    pub async fn deactivate(&self, session: &Session, subscription_id: i64) -> AppResult<String> {
        self.admin_service
            .deactivate_subscription(session, subscription_id)
            .await?;
        Ok(format!("Subscription #{} deactivated", subscription_id))
    }

    /// `admin metrics [--from] [--until]` - Backend dashboard figures
    pub async fn metrics(
        &self,
        session: &Session,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> AppResult<String> {
        let range =
            MetricsRange::new(start_date, end_date).map_err(|e| AppError::Validation(e.0))?;
        let metrics = self.admin_service.dashboard_metrics(session, range).await?;
        Ok(render::metrics(&metrics))
    }

    /// `admin summary` - Status counts and MRR computed from the full list
    pub async fn summary(&self, session: &Session, as_of: NaiveDate) -> AppResult<String> {
        let summary = self
            .admin_service
            .subscription_summary(session, as_of)
            .await?;
        Ok(render::summary(&summary))
    }

    /// `admin users`
    pub async fn users(&self, session: &Session, pagination: Pagination) -> AppResult<String> {
        let page = self.admin_service.list_users(session, pagination).await?;
        Ok(render::user_page(&page))
    }

    /// `admin activate-user <id>` / `admin deactivate-user <id>`
    pub async fn set_user_active(
        &self,
        session: &Session,
        user_id: i64,
        active: bool,
    ) -> AppResult<String> {
        self.admin_service
            .set_user_active(session, user_id, active)
            .await?;
        let state = if active { "activated" } else { "deactivated" };
        Ok(format!("User #{} {}", user_id, state))
    }

    /// `admin make-admin <id>`
    pub async fn make_admin(&self, session: &Session, user_id: i64) -> AppResult<String> {
        self.admin_service.make_admin(session, user_id).await?;
        Ok(format!("User #{} is now an admin", user_id))
    }

    /// `admin pending-testimonials`
    pub async fn pending_testimonials(
        &self,
        session: &Session,
        pagination: Pagination,
    ) -> AppResult<String> {
        let page = self
            .admin_service
            .pending_testimonials(session, pagination)
            .await?;
        Ok(render::testimonial_list(&page.items))
    }

    /// `admin approve <id>`
    pub async fn approve(&self, session: &Session, testimonial_id: i64) -> AppResult<String> {
        self.admin_service
            .approve_testimonial(session, testimonial_id)
            .await?;
        Ok(format!("Testimonial #{} approved", testimonial_id))
    }

    /// `admin reject <id>` - The backend deletes rejected testimonials
    pub async fn reject(&self, session: &Session, testimonial_id: i64) -> AppResult<String> {
        self.admin_service
            .reject_testimonial(session, testimonial_id)
            .await?;
        Ok(format!("Testimonial #{} rejected", testimonial_id))
    }
}
