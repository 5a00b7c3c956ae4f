use crate::domain::admin::{AdminDashboardResponse, DashboardMetrics, MetricsRange};
use crate::domain::shared::{ListResponse, MessageResponse, Page, Pagination};
use crate::domain::subscription::Subscription;
use crate::domain::user::User;
use crate::error::AppResult;
use crate::infrastructure::http::ApiClient;
use async_trait::async_trait;
use std::sync::Arc;

/// Admin-only endpoints for subscriptions, users and the dashboard
#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn list_subscriptions(
        &self,
        token: &str,
        pagination: Pagination,
    ) -> AppResult<Page<Subscription>>;

    async fn deactivate_subscription(&self, token: &str, id: i64) -> AppResult<()>;

    async fn dashboard_metrics(&self, token: &str, range: MetricsRange)
        -> AppResult<DashboardMetrics>;

    async fn list_users(&self, token: &str, pagination: Pagination) -> AppResult<Page<User>>;

    async fn set_user_active(&self, token: &str, id: i64, active: bool) -> AppResult<()>;

    async fn make_admin(&self, token: &str, id: i64) -> AppResult<()>;
}

pub struct HttpAdminRepository {
    client: Arc<ApiClient>,
}

impl HttpAdminRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    async fn put_ack(&self, token: &str, path: &str) -> AppResult<()> {
        let _: MessageResponse = self.client.send(self.client.put(path), Some(token)).await?;
        Ok(())
    }
}

#[async_trait]
impl AdminRepository for HttpAdminRepository {
    async fn list_subscriptions(
        &self,
        token: &str,
        pagination: Pagination,
    ) -> AppResult<Page<Subscription>> {
        let response: ListResponse<Subscription> = self
            .client
            .send(
                self.client.get("/subscriptions/admin/all").query(&[
                    ("skip", pagination.skip),
                    ("limit", pagination.limit),
                ]),
                Some(token),
            )
            .await?;
        Ok(response.into())
    }

    async fn deactivate_subscription(&self, token: &str, id: i64) -> AppResult<()> {
        self.put_ack(token, &format!("/subscriptions/admin/{}/deactivate", id))
            .await
    }

    async fn dashboard_metrics(
        &self,
        token: &str,
        range: MetricsRange,
    ) -> AppResult<DashboardMetrics> {
        let response: AdminDashboardResponse = self
            .client
            .send(
                self.client.get("/dashboard/admin/metrics").query(&range),
                Some(token),
            )
            .await?;
        Ok(response.metrics)
    }

    async fn list_users(&self, token: &str, pagination: Pagination) -> AppResult<Page<User>> {
        let response: ListResponse<User> = self
            .client
            .send(
                self.client.get("/auth/users").query(&[
                    ("skip", pagination.skip),
                    ("limit", pagination.limit),
                ]),
                Some(token),
            )
            .await?;
        Ok(response.into())
    }

    async fn set_user_active(&self, token: &str, id: i64, active: bool) -> AppResult<()> {
        let action = if active { "activate" } else { "deactivate" };
        self.put_ack(token, &format!("/auth/users/{}/{}", id, action))
            .await
    }

    async fn make_admin(&self, token: &str, id: i64) -> AppResult<()> {
        self.put_ack(token, &format!("/auth/users/{}/make-admin", id))
            .await
    }
}
