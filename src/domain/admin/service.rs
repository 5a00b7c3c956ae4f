use super::error::AdminServiceError;
use super::summary::{summarize_subscriptions, SubscriptionSummary};
use super::{DashboardMetrics, MetricsRange};
use crate::domain::auth::Session;
use crate::domain::shared::{Page, Pagination};
use crate::domain::subscription::Subscription;
use crate::domain::testimonial::Testimonial;
use crate::domain::user::User;
use crate::infrastructure::repositories::{AdminRepository, TestimonialRepository};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

/// Back-office operations. Authorization is enforced by the backend; a
/// non-admin token gets the backend's 403 message back unchanged.
pub struct AdminService {
    admin_repo: Arc<dyn AdminRepository>,
    testimonial_repo: Arc<dyn TestimonialRepository>,
}

impl AdminService {
    pub fn new(
        admin_repo: Arc<dyn AdminRepository>,
        testimonial_repo: Arc<dyn TestimonialRepository>,
    ) -> Self {
        Self {
            admin_repo,
            testimonial_repo,
        }
    }
}

#[async_trait]
pub trait AdminServiceApi: Send + Sync {
    async fn list_subscriptions(
        &self,
        session: &Session,
        pagination: Pagination,
    ) -> Result<Page<Subscription>, AdminServiceError>;

    async fn deactivate_subscription(
        &self,
        session: &Session,
        subscription_id: i64,
    ) -> Result<(), AdminServiceError>;

    async fn dashboard_metrics(
        &self,
        session: &Session,
        range: MetricsRange,
    ) -> Result<DashboardMetrics, AdminServiceError>;

    /// Fetches every subscription page by page and summarizes it as of `as_of`
    async fn subscription_summary(
        &self,
        session: &Session,
        as_of: NaiveDate,
    ) -> Result<SubscriptionSummary, AdminServiceError>;

    async fn list_users(
        &self,
        session: &Session,
        pagination: Pagination,
    ) -> Result<Page<User>, AdminServiceError>;

    async fn set_user_active(
        &self,
        session: &Session,
        user_id: i64,
        active: bool,
    ) -> Result<(), AdminServiceError>;

    async fn make_admin(&self, session: &Session, user_id: i64) -> Result<(), AdminServiceError>;

    async fn pending_testimonials(
        &self,
        session: &Session,
        pagination: Pagination,
    ) -> Result<Page<Testimonial>, AdminServiceError>;

    async fn approve_testimonial(
        &self,
        session: &Session,
        testimonial_id: i64,
    ) -> Result<(), AdminServiceError>;

    async fn reject_testimonial(
        &self,
        session: &Session,
        testimonial_id: i64,
    ) -> Result<(), AdminServiceError>;
}

#[async_trait]
impl AdminServiceApi for AdminService {
    async fn list_subscriptions(
        &self,
        session: &Session,
        pagination: Pagination,
    ) -> Result<Page<Subscription>, AdminServiceError> {
        let token = session.require_token()?;
        Ok(self.admin_repo.list_subscriptions(token, pagination).await?)
    }

    async fn deactivate_subscription(
        &self,
        session: &Session,
        subscription_id: i64,
    ) -> Result<(), AdminServiceError> {
        let token = session.require_token()?;
        self.admin_repo
            .deactivate_subscription(token, subscription_id)
            .await?;
        tracing::info!(subscription_id, "Subscription deactivated by admin");
        Ok(())
    }

    async fn dashboard_metrics(
        &self,
        session: &Session,
        range: MetricsRange,
    ) -> Result<DashboardMetrics, AdminServiceError> {
        let token = session.require_token()?;
        Ok(self.admin_repo.dashboard_metrics(token, range).await?)
    }

    async fn subscription_summary(
        &self,
        session: &Session,
        as_of: NaiveDate,
    ) -> Result<SubscriptionSummary, AdminServiceError> {
        let token = session.require_token()?;

        let mut pagination = Pagination::default();
        let mut subscriptions = Vec::new();
        loop {
            let page = self.admin_repo.list_subscriptions(token, pagination).await?;
            let fetched = page.items.len();
            subscriptions.extend(page.items);

            if fetched == 0 || subscriptions.len() as i64 >= page.total {
                break;
            }
            pagination.skip += fetched as u32;
        }

        tracing::debug!(count = subscriptions.len(), %as_of, "Summarizing subscriptions");
        Ok(summarize_subscriptions(&subscriptions, as_of))
    }

    async fn list_users(
        &self,
        session: &Session,
        pagination: Pagination,
    ) -> Result<Page<User>, AdminServiceError> {
        let token = session.require_token()?;
        Ok(self.admin_repo.list_users(token, pagination).await?)
    }

    async fn set_user_active(
        &self,
        session: &Session,
        user_id: i64,
        active: bool,
    ) -> Result<(), AdminServiceError> {
        let token = session.require_token()?;
        self.admin_repo.set_user_active(token, user_id, active).await?;
        tracing::info!(user_id, active, "User activation changed");
        Ok(())
    }

    async fn make_admin(&self, session: &Session, user_id: i64) -> Result<(), AdminServiceError> {
        let token = session.require_token()?;
        self.admin_repo.make_admin(token, user_id).await?;
        tracing::info!(user_id, "User promoted to admin");
        Ok(())
    }

    async fn pending_testimonials(
        &self,
        session: &Session,
        pagination: Pagination,
    ) -> Result<Page<Testimonial>, AdminServiceError> {
        let token = session.require_token()?;
        Ok(self.testimonial_repo.list_pending(token, pagination).await?)
    }

    async fn approve_testimonial(
        &self,
        session: &Session,
        testimonial_id: i64,
    ) -> Result<(), AdminServiceError> {
        let token = session.require_token()?;
        self.testimonial_repo.approve(token, testimonial_id).await?;
        tracing::info!(testimonial_id, "Testimonial approved");
        Ok(())
    }

    async fn reject_testimonial(
        &self,
        session: &Session,
        testimonial_id: i64,
    ) -> Result<(), AdminServiceError> {
        let token = session.require_token()?;
        self.testimonial_repo.reject(token, testimonial_id).await?;
        tracing::info!(testimonial_id, "Testimonial rejected");
        Ok(())
    }
}
