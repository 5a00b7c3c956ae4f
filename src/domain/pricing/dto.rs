use super::calculator::calculate_price;
use super::error::PricingError;
use crate::domain::plan::{DeliveryDay, MealType, Plan};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Response of GET /subscriptions/calculate-price/
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatePriceResponse {
    pub success: bool,
    pub total_price: Decimal,
    pub breakdown: PriceBreakdownDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceBreakdownDto {
    pub plan: String,
    pub meal_types_count: usize,
    pub delivery_days_count: usize,
    pub formula: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub plan: Plan,
    pub meal_types_count: usize,
    pub delivery_days_count: usize,
    pub formula: String,
    pub total_price: Decimal,
}

impl PriceBreakdown {
    /// Breakdown computed with the local formula
    pub fn local(
        plan: Plan,
        meal_types: &BTreeSet<MealType>,
        delivery_days: &BTreeSet<DeliveryDay>,
    ) -> Result<Self, PricingError> {
        let total_price = calculate_price(plan, meal_types, delivery_days)?;
        Ok(Self {
            plan,
            meal_types_count: meal_types.len(),
            delivery_days_count: delivery_days.len(),
            formula: formula(meal_types.len(), delivery_days.len()),
            total_price,
        })
    }

    pub fn from_response(plan: Plan, response: CalculatePriceResponse) -> Self {
        Self {
            plan,
            meal_types_count: response.breakdown.meal_types_count,
            delivery_days_count: response.breakdown.delivery_days_count,
            formula: response.breakdown.formula,
            total_price: response.total_price,
        }
    }
}

fn formula(meal_types_count: usize, delivery_days_count: usize) -> String {
    format!(
        "Plan Price × {} × {} × 4.3",
        meal_types_count, delivery_days_count
    )
}

/// Where a price quote was computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSource {
    Server,
    Local,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub breakdown: PriceBreakdown,
    pub source: QuoteSource,
}
