//! Display status of a subscription.
//!
//! Status is never stored; it is derived from the cancellation flag, the
//! pause window and the date it is evaluated on.

use super::model::{PauseWindow, Subscription};
use chrono::{DateTime, NaiveDate, TimeZone};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Paused,
    Cancelled,
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionStatus::Active => write!(f, "Active"),
            SubscriptionStatus::Paused => write!(f, "Paused"),
            SubscriptionStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionAction {
    Pause,
    Resume,
    Cancel,
}

impl SubscriptionStatus {
    /// Actions offered to the subscriber in this state. Cancelled is terminal.
    pub fn allowed_actions(&self) -> &'static [SubscriptionAction] {
        match self {
            SubscriptionStatus::Active => &[SubscriptionAction::Pause, SubscriptionAction::Cancel],
            SubscriptionStatus::Paused => &[SubscriptionAction::Resume, SubscriptionAction::Cancel],
            SubscriptionStatus::Cancelled => &[],
        }
    }

    pub fn allows(&self, action: SubscriptionAction) -> bool {
        self.allowed_actions().contains(&action)
    }
}

/// Core rule: cancelled wins, otherwise paused iff `as_of` is inside the
/// window (both ends inclusive).
pub fn resolve(is_active: bool, window: Option<PauseWindow>, as_of: NaiveDate) -> SubscriptionStatus {
    if !is_active {
        return SubscriptionStatus::Cancelled;
    }
    match window {
        Some(window) if window.contains(as_of) => SubscriptionStatus::Paused,
        _ => SubscriptionStatus::Active,
    }
}

pub fn resolve_status(subscription: &Subscription, as_of: NaiveDate) -> SubscriptionStatus {
    resolve(subscription.is_active, subscription.pause_window(), as_of)
}

/// Same as [`resolve_status`] for a point in time; the time of day is
/// dropped in the timestamp's own time zone before comparing.
pub fn resolve_status_at<Tz: TimeZone>(
    subscription: &Subscription,
    at: &DateTime<Tz>,
) -> SubscriptionStatus {
    resolve_status(subscription, at.date_naive())
}
