use std::sync::Arc;

use super::render;
use crate::domain::auth::Session;
use crate::domain::plan::Plan;
use crate::domain::pricing::{parse_delivery_days, parse_meal_types};
use crate::{
    domain::subscription::{SubscriptionService, SubscriptionServiceApi},
    error::AppResult,
};

pub struct PricingController {
    subscription_service: Arc<SubscriptionService>,
}

impl PricingController {
    pub fn new(subscription_service: Arc<SubscriptionService>) -> Self {
        Self {
            subscription_service,
        }
    }

    /// `plans` - List plans and the pricing formula
    pub fn plans(&self) -> AppResult<String> {
        Ok(render::plans())
    }

    /// `price` - Quote a selection, from the backend when logged in
    pub async fn price(
        &self,
        session: &Session,
        plan: &str,
        meal_types: &[String],
        delivery_days: &[String],
    ) -> AppResult<String> {
        let plan: Plan = plan.parse()?;
        let meal_types = parse_meal_types(meal_types)?;
        let delivery_days = parse_delivery_days(delivery_days)?;

        let quote = self
            .subscription_service
            .quote_price(session, plan, &meal_types, &delivery_days)
            .await?;
        Ok(render::quote(&quote))
    }
}
