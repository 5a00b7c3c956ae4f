use crate::domain::subscription::{resolve_status, Subscription, SubscriptionStatus};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Figures derived locally from a list of subscriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionSummary {
    pub as_of: NaiveDate,
    pub total: usize,
    pub active: usize,
    pub paused: usize,
    pub cancelled: usize,
    /// Sum of `total_price` over subscriptions active on `as_of`
    pub monthly_recurring_revenue: Decimal,
}

pub fn summarize_subscriptions(
    subscriptions: &[Subscription],
    as_of: NaiveDate,
) -> SubscriptionSummary {
    let mut summary = SubscriptionSummary {
        as_of,
        total: subscriptions.len(),
        active: 0,
        paused: 0,
        cancelled: 0,
        monthly_recurring_revenue: Decimal::ZERO,
    };

    for subscription in subscriptions {
        match resolve_status(subscription, as_of) {
            SubscriptionStatus::Active => {
                summary.active += 1;
                summary.monthly_recurring_revenue += subscription.total_price;
            }
            SubscriptionStatus::Paused => summary.paused += 1,
            SubscriptionStatus::Cancelled => summary.cancelled += 1,
        }
    }

    summary
}
