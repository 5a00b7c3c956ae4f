use super::model::Subscription;
use crate::domain::plan::{DeliveryDay, MealType, Plan};
use crate::domain::pricing::{calculate_price, PricingError};
use crate::domain::shared::validation::{
    normalize_phone, validate_allergies, validate_name, ValidationError,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Request to create a new subscription (POST /subscriptions/)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    pub name: String,
    pub phone: String,
    pub plan: Plan,
    pub meal_types: BTreeSet<MealType>,
    pub delivery_days: BTreeSet<DeliveryDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
}

impl SubscriptionRequest {
    /// Checks every field and returns the request in the normalized form
    /// that is sent to the backend (trimmed name, digits-only phone).
    pub fn validated(self) -> Result<Self, ValidationError> {
        let name = validate_name("Name", &self.name)?;
        let phone = normalize_phone(&self.phone)?;
        if self.meal_types.is_empty() {
            return Err(ValidationError(
                "At least one meal type must be selected".to_string(),
            ));
        }
        if self.delivery_days.is_empty() {
            return Err(ValidationError(
                "At least one delivery day must be selected".to_string(),
            ));
        }
        let allergies = validate_allergies(self.allergies.as_deref())?;

        Ok(Self {
            name,
            phone,
            allergies,
            ..self
        })
    }

    /// Price the backend is expected to compute for this request
    pub fn expected_total(&self) -> Result<Decimal, PricingError> {
        calculate_price(self.plan, &self.meal_types, &self.delivery_days)
    }
}

/// Single-subscription wrapper returned by the backend
#[derive(Debug, Serialize, Deserialize)]
pub struct SubscriptionResponse {
    pub success: bool,
    pub message: String,
    pub subscription: Option<Subscription>,
}
