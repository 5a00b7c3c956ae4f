use crate::domain::plan::{DeliveryDay, MealType, Plan};
use crate::domain::shared::timestamp;
use crate::domain::shared::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Subscription as persisted by the backend. The client only holds a copy
/// that is refreshed after every mutating call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub phone: String,
    pub plan: Plan,
    pub meal_types: Vec<MealType>,
    pub delivery_days: Vec<DeliveryDay>,
    #[serde(default)]
    pub allergies: Option<String>,
    pub total_price: Decimal,
    pub is_active: bool,
    #[serde(default)]
    pub pause_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub pause_end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Subscription {
    /// The pause window, if both dates are set. A record with only one of
    /// the two dates has no window.
    pub fn pause_window(&self) -> Option<PauseWindow> {
        match (self.pause_start_date, self.pause_end_date) {
            (Some(start), Some(end)) => Some(PauseWindow { start, end }),
            _ => None,
        }
    }
}

/// Inclusive date range during which an active subscription is not fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseWindow {
    #[serde(rename = "pause_start_date")]
    start: NaiveDate,
    #[serde(rename = "pause_end_date")]
    end: NaiveDate,
}

impl PauseWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError(
                "Pause start date must not be after pause end date".to_string(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
