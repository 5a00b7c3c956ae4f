use crate::domain::shared::ValidationError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Backend dashboard figures for a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub new_subscriptions: i64,
    pub monthly_recurring_revenue: Decimal,
    pub reactivations: i64,
    pub active_subscriptions: i64,
    pub date_range_start: NaiveDate,
    pub date_range_end: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminDashboardResponse {
    pub success: bool,
    pub message: String,
    pub metrics: DashboardMetrics,
}

/// Optional date range for the metrics query. Missing bounds default on
/// the backend to the first of the current month and today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<NaiveDate>,
}

impl MetricsRange {
    pub fn new(
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                return Err(ValidationError(
                    "Start date must be before end date".to_string(),
                ));
            }
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }
}
