use super::error::SubscriptionServiceError;
use super::{PauseWindow, Subscription, SubscriptionRequest};
use crate::domain::auth::Session;
use crate::domain::plan::{DeliveryDay, MealType, Plan};
use crate::domain::pricing::{PriceBreakdown, PriceQuote, QuoteSource};
use crate::infrastructure::repositories::SubscriptionRepository;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;

pub struct SubscriptionService {
    subscription_repo: Arc<dyn SubscriptionRepository>,
}

impl SubscriptionService {
    pub fn new(subscription_repo: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscription_repo }
    }
}

#[async_trait]
pub trait SubscriptionServiceApi: Send + Sync {
    /// Price for a selection.
    ///
    /// The selection is validated and priced locally first. With a live
    /// session the backend's calculation is preferred; if that call fails
    /// for any reason the local figure is returned instead.
    async fn quote_price(
        &self,
        session: &Session,
        plan: Plan,
        meal_types: &BTreeSet<MealType>,
        delivery_days: &BTreeSet<DeliveryDay>,
    ) -> Result<PriceQuote, SubscriptionServiceError>;

    async fn create_subscription(
        &self,
        session: &Session,
        request: SubscriptionRequest,
    ) -> Result<Subscription, SubscriptionServiceError>;

    async fn list_subscriptions(
        &self,
        session: &Session,
    ) -> Result<Vec<Subscription>, SubscriptionServiceError>;

    async fn get_subscription(
        &self,
        session: &Session,
        subscription_id: i64,
    ) -> Result<Subscription, SubscriptionServiceError>;

    async fn pause_subscription(
        &self,
        session: &Session,
        subscription_id: i64,
        window: PauseWindow,
    ) -> Result<(), SubscriptionServiceError>;

    async fn resume_subscription(
        &self,
        session: &Session,
        subscription_id: i64,
    ) -> Result<(), SubscriptionServiceError>;

    async fn deactivate_subscription(
        &self,
        session: &Session,
        subscription_id: i64,
    ) -> Result<(), SubscriptionServiceError>;
}

#[async_trait]
impl SubscriptionServiceApi for SubscriptionService {
    async fn quote_price(
        &self,
        session: &Session,
        plan: Plan,
        meal_types: &BTreeSet<MealType>,
        delivery_days: &BTreeSet<DeliveryDay>,
    ) -> Result<PriceQuote, SubscriptionServiceError> {
        let local = PriceBreakdown::local(plan, meal_types, delivery_days)?;

        let token = match session.require_token() {
            Ok(token) => token,
            Err(_) => {
                return Ok(PriceQuote {
                    breakdown: local,
                    source: QuoteSource::Local,
                })
            }
        };

        match self
            .subscription_repo
            .calculate_price(token, plan, meal_types, delivery_days)
            .await
        {
            Ok(response) => Ok(PriceQuote {
                breakdown: PriceBreakdown::from_response(plan, response),
                source: QuoteSource::Server,
            }),
            Err(e) => {
                tracing::warn!(
                    plan = %plan,
                    error = %e,
                    "Price calculation failed on the backend, using local formula"
                );
                Ok(PriceQuote {
                    breakdown: local,
                    source: QuoteSource::Local,
                })
            }
        }
    }

    async fn create_subscription(
        &self,
        session: &Session,
        request: SubscriptionRequest,
    ) -> Result<Subscription, SubscriptionServiceError> {
        let request = request.validated()?;
        let token = session.require_token()?;

        let subscription = self.subscription_repo.create(token, &request).await?;

        tracing::info!(
            subscription_id = subscription.id,
            plan = %subscription.plan,
            total_price = %subscription.total_price,
            "Subscription created"
        );

        Ok(subscription)
    }

    async fn list_subscriptions(
        &self,
        session: &Session,
    ) -> Result<Vec<Subscription>, SubscriptionServiceError> {
        let token = session.require_token()?;
        Ok(self.subscription_repo.list_own(token).await?)
    }

    async fn get_subscription(
        &self,
        session: &Session,
        subscription_id: i64,
    ) -> Result<Subscription, SubscriptionServiceError> {
        let token = session.require_token()?;
        Ok(self
            .subscription_repo
            .find_by_id(token, subscription_id)
            .await?)
    }

    async fn pause_subscription(
        &self,
        session: &Session,
        subscription_id: i64,
        window: PauseWindow,
    ) -> Result<(), SubscriptionServiceError> {
        let token = session.require_token()?;

        self.subscription_repo
            .pause(token, subscription_id, &window)
            .await?;

        tracing::info!(
            subscription_id,
            pause_start_date = %window.start(),
            pause_end_date = %window.end(),
            "Subscription paused"
        );
        Ok(())
    }

    async fn resume_subscription(
        &self,
        session: &Session,
        subscription_id: i64,
    ) -> Result<(), SubscriptionServiceError> {
        let token = session.require_token()?;
        self.subscription_repo.resume(token, subscription_id).await?;
        tracing::info!(subscription_id, "Subscription resumed");
        Ok(())
    }

    async fn deactivate_subscription(
        &self,
        session: &Session,
        subscription_id: i64,
    ) -> Result<(), SubscriptionServiceError> {
        let token = session.require_token()?;
        self.subscription_repo
            .deactivate(token, subscription_id)
            .await?;
        tracing::info!(subscription_id, "Subscription deactivated");
        Ok(())
    }
}
