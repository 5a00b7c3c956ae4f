use crate::domain::plan::{DeliveryDay, MealType, Plan};
use crate::domain::pricing::CalculatePriceResponse;
use crate::domain::shared::{ListResponse, MessageResponse};
use crate::domain::subscription::{PauseWindow, Subscription, SubscriptionRequest, SubscriptionResponse};
use crate::error::{AppError, AppResult};
use crate::infrastructure::http::ApiClient;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Subscription endpoints of the backend.
///
/// The backend owns persistence and authorization; implementations only
/// move requests and responses.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn create(&self, token: &str, request: &SubscriptionRequest) -> AppResult<Subscription>;

    /// Subscriptions of the token's owner, newest first
    async fn list_own(&self, token: &str) -> AppResult<Vec<Subscription>>;

    async fn find_by_id(&self, token: &str, id: i64) -> AppResult<Subscription>;

    async fn pause(&self, token: &str, id: i64, window: &PauseWindow) -> AppResult<()>;

    async fn resume(&self, token: &str, id: i64) -> AppResult<()>;

    async fn deactivate(&self, token: &str, id: i64) -> AppResult<()>;

    /// Authoritative price calculation
    async fn calculate_price(
        &self,
        token: &str,
        plan: Plan,
        meal_types: &BTreeSet<MealType>,
        delivery_days: &BTreeSet<DeliveryDay>,
    ) -> AppResult<CalculatePriceResponse>;
}

pub struct HttpSubscriptionRepository {
    client: Arc<ApiClient>,
}

impl HttpSubscriptionRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    fn unwrap_subscription(response: SubscriptionResponse) -> AppResult<Subscription> {
        response.subscription.ok_or_else(|| {
            AppError::Internal(format!(
                "Backend response carried no subscription: {}",
                response.message
            ))
        })
    }
}

#[async_trait]
impl SubscriptionRepository for HttpSubscriptionRepository {
    async fn create(&self, token: &str, request: &SubscriptionRequest) -> AppResult<Subscription> {
        let response: SubscriptionResponse = self
            .client
            .send(self.client.post("/subscriptions/").json(request), Some(token))
            .await?;
        Self::unwrap_subscription(response)
    }

    async fn list_own(&self, token: &str) -> AppResult<Vec<Subscription>> {
        let response: ListResponse<Subscription> = self
            .client
            .send(self.client.get("/subscriptions/"), Some(token))
            .await?;
        Ok(response.data)
    }

    async fn find_by_id(&self, token: &str, id: i64) -> AppResult<Subscription> {
        let response: SubscriptionResponse = self
            .client
            .send(self.client.get(&format!("/subscriptions/{}", id)), Some(token))
            .await?;
        Self::unwrap_subscription(response)
    }

    async fn pause(&self, token: &str, id: i64, window: &PauseWindow) -> AppResult<()> {
        let _: MessageResponse = self
            .client
            .send(
                self.client
                    .put(&format!("/subscriptions/{}/pause", id))
                    .json(window),
                Some(token),
            )
            .await?;
        Ok(())
    }

    async fn resume(&self, token: &str, id: i64) -> AppResult<()> {
        let _: MessageResponse = self
            .client
            .send(
                self.client.put(&format!("/subscriptions/{}/resume", id)),
                Some(token),
            )
            .await?;
        Ok(())
    }

    async fn deactivate(&self, token: &str, id: i64) -> AppResult<()> {
        let _: MessageResponse = self
            .client
            .send(
                self.client.put(&format!("/subscriptions/{}/deactivate", id)),
                Some(token),
            )
            .await?;
        Ok(())
    }

    async fn calculate_price(
        &self,
        token: &str,
        plan: Plan,
        meal_types: &BTreeSet<MealType>,
        delivery_days: &BTreeSet<DeliveryDay>,
    ) -> AppResult<CalculatePriceResponse> {
        // the backend expects both lists as JSON-encoded arrays
        let meal_types = serde_json::to_string(meal_types)
            .map_err(|e| AppError::Internal(format!("Failed to encode meal types: {}", e)))?;
        let delivery_days = serde_json::to_string(delivery_days)
            .map_err(|e| AppError::Internal(format!("Failed to encode delivery days: {}", e)))?;

        self.client
            .send(
                self.client.get("/subscriptions/calculate-price/").query(&[
                    ("plan", plan.as_str()),
                    ("meal_types", meal_types.as_str()),
                    ("delivery_days", delivery_days.as_str()),
                ]),
                Some(token),
            )
            .await
    }
}
