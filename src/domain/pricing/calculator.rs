use super::error::PricingError;
use crate::domain::plan::{DeliveryDay, MealType, Plan};
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// Approximate number of weeks in a month. Fixed business constant.
pub fn weeks_per_month() -> Decimal {
    Decimal::new(43, 1)
}

/// Monthly price of a subscription:
/// `price_per_meal(plan) × |meal_types| × |delivery_days| × 4.3`.
///
/// Both selections must be non-empty. The result keeps full precision;
/// rounding happens only when the amount is displayed.
pub fn calculate_price(
    plan: Plan,
    meal_types: &BTreeSet<MealType>,
    delivery_days: &BTreeSet<DeliveryDay>,
) -> Result<Decimal, PricingError> {
    if meal_types.is_empty() {
        return Err(PricingError::InvalidSelection(
            "At least one meal type must be selected".to_string(),
        ));
    }
    if delivery_days.is_empty() {
        return Err(PricingError::InvalidSelection(
            "At least one delivery day must be selected".to_string(),
        ));
    }

    Ok(Decimal::from(plan.price_per_meal())
        * Decimal::from(meal_types.len() as u64)
        * Decimal::from(delivery_days.len() as u64)
        * weeks_per_month())
}

/// Parses raw identifiers and prices them. Every identifier is checked
/// before anything is computed.
pub fn calculate_price_from_names<S: AsRef<str>>(
    plan: &str,
    meal_types: &[S],
    delivery_days: &[S],
) -> Result<Decimal, PricingError> {
    let plan: Plan = plan.parse()?;
    let meal_types = parse_meal_types(meal_types)?;
    let delivery_days = parse_delivery_days(delivery_days)?;
    calculate_price(plan, &meal_types, &delivery_days)
}

pub fn parse_meal_types<S: AsRef<str>>(names: &[S]) -> Result<BTreeSet<MealType>, PricingError> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}

pub fn parse_delivery_days<S: AsRef<str>>(
    names: &[S],
) -> Result<BTreeSet<DeliveryDay>, PricingError> {
    names.iter().map(|name| name.as_ref().parse()).collect()
}

/// Selection state of the subscription form while the user is filling it in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSelection {
    pub plan: Option<Plan>,
    pub meal_types: BTreeSet<MealType>,
    pub delivery_days: BTreeSet<DeliveryDay>,
}

impl PriceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plan(mut self, plan: Plan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn toggle_meal_type(&mut self, meal_type: MealType) {
        if !self.meal_types.remove(&meal_type) {
            self.meal_types.insert(meal_type);
        }
    }

    pub fn toggle_delivery_day(&mut self, day: DeliveryDay) {
        if !self.delivery_days.remove(&day) {
            self.delivery_days.insert(day);
        }
    }

    pub fn is_complete(&self) -> bool {
        self.plan.is_some() && !self.meal_types.is_empty() && !self.delivery_days.is_empty()
    }

    /// Running total shown on the form. Zero until plan, meal types and
    /// delivery days have all been chosen.
    pub fn total(&self) -> Decimal {
        match self.plan {
            Some(plan) if self.is_complete() => {
                calculate_price(plan, &self.meal_types, &self.delivery_days)
                    .unwrap_or(Decimal::ZERO)
            }
            _ => Decimal::ZERO,
        }
    }
}
