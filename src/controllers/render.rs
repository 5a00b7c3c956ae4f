//! Plain-text rendering of records for terminal output.

use crate::domain::admin::{DashboardMetrics, SubscriptionSummary};
use crate::domain::plan::Plan;
use crate::domain::pricing::{format_idr, weeks_per_month, PriceQuote, QuoteSource};
use crate::domain::shared::Page;
use crate::domain::subscription::{resolve_status, Subscription};
use crate::domain::testimonial::{Testimonial, TestimonialStats};
use crate::domain::user::User;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt::Write;

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn plans() -> String {
    let mut out = String::new();
    for plan in Plan::ALL {
        let _ = writeln!(
            out,
            "{:<8} {:<13} {} per meal",
            plan.as_str(),
            plan.label(),
            format_idr(Decimal::from(plan.price_per_meal()))
        );
    }
    let _ = write!(
        out,
        "Monthly total = price per meal x meal types x delivery days x {}",
        weeks_per_month()
    );
    out
}

pub fn quote(quote: &PriceQuote) -> String {
    let breakdown = &quote.breakdown;
    let source = match quote.source {
        QuoteSource::Server => "server",
        QuoteSource::Local => "local estimate",
    };
    format!(
        "{} ({} meal types, {} delivery days)\n{}\nTotal: {} per month [{}]",
        breakdown.plan.label(),
        breakdown.meal_types_count,
        breakdown.delivery_days_count,
        breakdown.formula,
        format_idr(breakdown.total_price),
        source
    )
}

pub fn subscription(subscription: &Subscription, as_of: NaiveDate) -> String {
    let status = resolve_status(subscription, as_of);
    let mut out = format!(
        "#{} {} [{}]\n  Name: {}\n  Phone: {}\n  Meals: {}\n  Days: {}\n  Total: {} per month",
        subscription.id,
        subscription.plan.label(),
        status,
        subscription.name,
        subscription.phone,
        join(&subscription.meal_types),
        join(&subscription.delivery_days),
        format_idr(subscription.total_price),
    );
    if let Some(allergies) = &subscription.allergies {
        let _ = write!(out, "\n  Allergies: {}", allergies);
    }
    if let Some(window) = subscription.pause_window() {
        let _ = write!(out, "\n  Paused: {} to {}", window.start(), window.end());
    }
    let actions = status
        .allowed_actions()
        .iter()
        .map(|a| format!("{:?}", a).to_lowercase())
        .collect::<Vec<_>>();
    if !actions.is_empty() {
        let _ = write!(out, "\n  Actions: {}", actions.join(", "));
    }
    out
}

pub fn subscription_list(subscriptions: &[Subscription], as_of: NaiveDate) -> String {
    if subscriptions.is_empty() {
        return "No subscriptions found".to_string();
    }
    subscriptions
        .iter()
        .map(|s| subscription(s, as_of))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn subscription_page(page: &Page<Subscription>, as_of: NaiveDate) -> String {
    format!(
        "{}\n\nShowing {} of {}",
        subscription_list(&page.items, as_of),
        page.items.len(),
        page.total
    )
}

pub fn user(user: &User) -> String {
    let mut flags = Vec::new();
    if user.is_admin {
        flags.push("admin");
    }
    if !user.is_active {
        flags.push("inactive");
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(", "))
    };
    format!("#{} {} <{}>{}", user.id, user.full_name, user.email, flags)
}

pub fn user_page(page: &Page<User>) -> String {
    let mut out = page.items.iter().map(user).collect::<Vec<_>>().join("\n");
    let _ = write!(out, "\n\nShowing {} of {}", page.items.len(), page.total);
    out
}

pub fn testimonial(testimonial: &Testimonial) -> String {
    let stars = "*".repeat(testimonial.rating as usize);
    let pending = if testimonial.is_approved { "" } else { " (pending approval)" };
    format!(
        "#{} {} {}{}\n  \"{}\"",
        testimonial.id, testimonial.name, stars, pending, testimonial.message
    )
}

pub fn testimonial_list(testimonials: &[Testimonial]) -> String {
    if testimonials.is_empty() {
        return "No testimonials yet".to_string();
    }
    testimonials
        .iter()
        .map(testimonial)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn testimonial_stats(stats: &TestimonialStats) -> String {
    format!(
        "Testimonials: {} total, {} approved, {} pending\nAverage rating: {:.1}",
        stats.total, stats.approved, stats.pending, stats.average_rating
    )
}

pub fn metrics(metrics: &DashboardMetrics) -> String {
    format!(
        "Metrics {} to {}\n  New subscriptions: {}\n  Reactivations: {}\n  Active subscriptions: {}\n  Monthly recurring revenue: {}",
        metrics.date_range_start,
        metrics.date_range_end,
        metrics.new_subscriptions,
        metrics.reactivations,
        metrics.active_subscriptions,
        format_idr(metrics.monthly_recurring_revenue)
    )
}

pub fn summary(summary: &SubscriptionSummary) -> String {
    format!(
        "Subscriptions as of {}: {} total\n  Active: {}\n  Paused: {}\n  Cancelled: {}\n  Monthly recurring revenue: {}",
        summary.as_of,
        summary.total,
        summary.active,
        summary.paused,
        summary.cancelled,
        format_idr(summary.monthly_recurring_revenue)
    )
}
