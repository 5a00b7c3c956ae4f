use chrono::NaiveDate;
use std::sync::Arc;

use super::render;
use crate::domain::auth::Session;
use crate::domain::plan::Plan;
use crate::domain::pricing::{format_idr, parse_delivery_days, parse_meal_types};
use crate::domain::subscription::{
    resolve_status, PauseWindow, Subscription, SubscriptionAction, SubscriptionRequest,
};
use crate::{
    domain::subscription::{SubscriptionService, SubscriptionServiceApi},
    error::{AppError, AppResult},
};

/// Raw form input for a new subscription
#[derive(Debug, Clone)]
pub struct SubscribeForm {
    pub name: String,
    pub phone: String,
    pub plan: String,
    pub meal_types: Vec<String>,
    pub delivery_days: Vec<String>,
    pub allergies: Option<String>,
}

pub struct SubscriptionController {
    subscription_service: Arc<SubscriptionService>,
}

impl SubscriptionController {
    pub fn new(subscription_service: Arc<SubscriptionService>) -> Self {
        Self {
            subscription_service,
        }
    }

    /// `subscribe` - Create a subscription
    pub async fn subscribe(
        &self,
        session: &Session,
        form: SubscribeForm,
        as_of: NaiveDate,
    ) -> AppResult<String> {
        let plan: Plan = form.plan.parse()?;
        let request = SubscriptionRequest {
            name: form.name,
            phone: form.phone,
            plan,
            meal_types: parse_meal_types(&form.meal_types)?,
            delivery_days: parse_delivery_days(&form.delivery_days)?,
            allergies: form.allergies,
        };

        let subscription = self
            .subscription_service
            .create_subscription(session, request)
            .await?;
        Ok(format!(
            "Subscription created\n{}",
            render::subscription(&subscription, as_of)
        ))
    }

    /// `subscriptions` - List the caller's subscriptions
    pub async fn list(&self, session: &Session, as_of: NaiveDate) -> AppResult<String> {
        let subscriptions = self
            .subscription_service
            .list_subscriptions(session)
            .await?;
        Ok(render::subscription_list(&subscriptions, as_of))
    }

    /// `status <id>` - Show one subscription with its current status
    pub async fn status(
        &self,
        session: &Session,
        subscription_id: i64,
        as_of: NaiveDate,
    ) -> AppResult<String> {
        let subscription = self
            .subscription_service
            .get_subscription(session, subscription_id)
            .await?;
        Ok(render::subscription(&subscription, as_of))
    }

    /// `pause <id> --from <date> --until <date>` - Pause an active subscription
    pub async fn pause(
        &self,
        session: &Session,
        subscription_id: i64,
        start: NaiveDate,
        end: NaiveDate,
        as_of: NaiveDate,
    ) -> AppResult<String> {
        let window = PauseWindow::new(start, end).map_err(|e| AppError::Validation(e.0))?;
        self.ensure_allowed(session, subscription_id, SubscriptionAction::Pause, as_of)
            .await?;

        self.subscription_service
            .pause_subscription(session, subscription_id, window)
            .await?;
        self.status(session, subscription_id, as_of).await
    }

    /// `resume <id>` - End a pause early
    pub async fn resume(
        &self,
        session: &Session,
        subscription_id: i64,
        as_of: NaiveDate,
    ) -> AppResult<String> {
        self.ensure_allowed(session, subscription_id, SubscriptionAction::Resume, as_of)
            .await?;

        self.subscription_service
            .resume_subscription(session, subscription_id)
            .await?;
        self.status(session, subscription_id, as_of).await
    }

    /// `cancel <id>` - Cancel a subscription for good
    pub async fn cancel(
        &self,
        session: &Session,
        subscription_id: i64,
        as_of: NaiveDate,
    ) -> AppResult<String> {
        let subscription = self
            .ensure_allowed(session, subscription_id, SubscriptionAction::Cancel, as_of)
            .await?;

        self.subscription_service
            .deactivate_subscription(session, subscription_id)
            .await?;
        Ok(format!(
            "Subscription #{} cancelled ({} per month no longer billed)",
            subscription.id,
            format_idr(subscription.total_price)
        ))
    }

    /// Fetches the latest copy and checks that `action` is offered in its
    /// current status.
    async fn ensure_allowed(
        &self,
        session: &Session,
        subscription_id: i64,
        action: SubscriptionAction,
        as_of: NaiveDate,
    ) -> AppResult<Subscription> {
        let subscription = self
            .subscription_service
            .get_subscription(session, subscription_id)
            .await?;

        let status = resolve_status(&subscription, as_of);
        if !status.allows(action) {
            return Err(AppError::Validation(format!(
                "Cannot {} a subscription that is {}",
                format!("{:?}", action).to_lowercase(),
                status
            )));
        }
        Ok(subscription)
    }
}
