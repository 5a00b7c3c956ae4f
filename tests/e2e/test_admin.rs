use crate::e2e::helpers;

use helpers::{
    assertions::{assert_auth_required, assert_rejected, assert_validation},
    fixtures::{date, paused_subscription, subscription, testimonial},
    TestContext,
};
use pretty_assertions::assert_eq;
use sea_catering::domain::auth::Session;
use sea_catering::domain::plan::{DeliveryDay, MealType, Plan};
use sea_catering::domain::shared::Pagination;
use sea_catering::domain::subscription::Subscription;
use test_context::test_context;

fn seed_subscriptions(ctx: &TestContext, user_id: i64) {
    // Rp 1.032.000, active
    ctx.backend.insert_subscription(subscription(
        100,
        user_id,
        Plan::Protein,
        &[MealType::Breakfast, MealType::Dinner],
        &[DeliveryDay::Monday, DeliveryDay::Wednesday, DeliveryDay::Friday],
    ));
    // Rp 129.000, active
    ctx.backend.insert_subscription(subscription(
        101,
        user_id,
        Plan::Diet,
        &[MealType::Lunch],
        &[DeliveryDay::Tuesday],
    ));
    // Paused through the reference date
    ctx.backend.insert_subscription(paused_subscription(
        102,
        user_id,
        date(2026, 10, 10),
        date(2026, 10, 20),
    ));
    ctx.backend.insert_subscription(Subscription {
        is_active: false,
        ..subscription(
            103,
            user_id,
            Plan::Royal,
            &[MealType::Dinner],
            &[DeliveryDay::Sunday],
        )
    });
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_pass_through_forbidden_for_regular_users(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let session = ctx.login_as(&user);

    let result = ctx
        .app
        .admin
        .summary(&session, date(2026, 10, 16))
        .await;

    assert_rejected(&result, 403, "Not enough permissions");
    assert_eq!(result.unwrap_err().exit_code(), 4);
    // A 403 is not a session problem
    assert!(ctx.stored_token().is_some());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_login_for_admin_commands(ctx: &TestContext) {
    let result = ctx
        .app
        .admin
        .users(&Session::anonymous(), Pagination::default())
        .await;

    assert_auth_required(&result);
    assert!(ctx.backend.requests().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_summarize_subscriptions_across_pages(ctx: &TestContext) {
    let admin = ctx.admin("admin@example.com");
    let customer = ctx.customer("budi@example.com");
    seed_subscriptions(ctx, customer.id);
    let session = ctx.login_as(&admin);

    let output = ctx
        .app
        .admin
        .summary(&session, date(2026, 10, 16))
        .await
        .unwrap();

    assert_eq!(
        output,
        "Subscriptions as of 2026-10-16: 4 total\n  \
         Active: 2\n  \
         Paused: 1\n  \
         Cancelled: 1\n  \
         Monthly recurring revenue: Rp 1.161.000"
    );

    // Same data a week later: the pause has ended
    let output = ctx
        .app
        .admin
        .summary(&session, date(2026, 10, 23))
        .await
        .unwrap();
    assert!(output.contains("Active: 3\n  Paused: 0"), "{}", output);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_page_through_all_subscriptions(ctx: &TestContext) {
    let admin = ctx.admin("admin@example.com");
    let customer = ctx.customer("budi@example.com");
    seed_subscriptions(ctx, customer.id);
    let session = ctx.login_as(&admin);

    let output = ctx
        .app
        .admin
        .subscriptions(&session, Pagination { skip: 1, limit: 2 }, date(2026, 10, 16))
        .await
        .unwrap();

    assert!(output.starts_with("#101 Diet Plan [Active]"), "{}", output);
    assert!(output.contains("#102 Diet Plan [Paused]"));
    assert!(!output.contains("#100"));
    assert!(output.ends_with("Showing 2 of 4"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_deactivate_any_subscription(ctx: &TestContext) {
    let admin = ctx.admin("admin@example.com");
    let customer = ctx.customer("budi@example.com");
    seed_subscriptions(ctx, customer.id);
    let session = ctx.login_as(&admin);

    let output = ctx.app.admin.deactivate(&session, 100).await.unwrap();

    assert_eq!(output, "Subscription #100 deactivated");
    assert!(!ctx.backend.subscription(100).unwrap().is_active);
    assert_eq!(
        ctx.backend.requests_to("/subscriptions/admin/100/deactivate"),
        1
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_show_dashboard_metrics_for_range(ctx: &TestContext) {
    let admin = ctx.admin("admin@example.com");
    let customer = ctx.customer("budi@example.com");
    seed_subscriptions(ctx, customer.id);
    let session = ctx.login_as(&admin);

    let output = ctx
        .app
        .admin
        .metrics(&session, Some(date(2026, 10, 1)), Some(date(2026, 10, 31)))
        .await
        .unwrap();

    assert!(output.starts_with("Metrics 2026-10-01 to 2026-10-31"), "{}", output);
    assert!(output.contains("New subscriptions: 4"));
    assert!(output.contains("Active subscriptions: 3"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_inverted_metrics_range_locally(ctx: &TestContext) {
    let admin = ctx.admin("admin@example.com");
    let session = ctx.login_as(&admin);

    let result = ctx
        .app
        .admin
        .metrics(&session, Some(date(2026, 10, 31)), Some(date(2026, 10, 1)))
        .await;

    assert_validation(&result);
    assert_eq!(ctx.backend.requests_to("/dashboard/admin/metrics"), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_manage_users(ctx: &TestContext) {
    let admin = ctx.admin("admin@example.com");
    let customer = ctx.customer("budi@example.com");
    let session = ctx.login_as(&admin);

    let output = ctx
        .app
        .admin
        .set_user_active(&session, customer.id, false)
        .await
        .unwrap();
    assert_eq!(output, format!("User #{} deactivated", customer.id));

    let output = ctx.app.admin.make_admin(&session, customer.id).await.unwrap();
    assert_eq!(output, format!("User #{} is now an admin", customer.id));

    let listed = ctx
        .app
        .admin
        .users(&session, Pagination::default())
        .await
        .unwrap();
    assert!(listed.contains(&format!(
        "#{} Budi Santoso <budi@example.com> [admin, inactive]",
        customer.id
    )));
    assert!(listed.ends_with("Showing 2 of 2"));

    let missing = ctx.app.admin.make_admin(&session, 999).await;
    assert_rejected(&missing, 404, "User not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_moderate_pending_testimonials(ctx: &TestContext) {
    let admin = ctx.admin("admin@example.com");
    let customer = ctx.customer("budi@example.com");
    ctx.backend.insert_testimonial(testimonial(200, customer.id, 5, false));
    ctx.backend.insert_testimonial(testimonial(201, customer.id, 2, false));
    ctx.backend.insert_testimonial(testimonial(202, customer.id, 4, true));
    let session = ctx.login_as(&admin);

    let pending = ctx
        .app
        .admin
        .pending_testimonials(&session, Pagination::default())
        .await
        .unwrap();
    assert!(pending.contains("#200 Rina ***** (pending approval)"));
    assert!(pending.contains("#201 Rina ** (pending approval)"));
    assert!(!pending.contains("#202"));

    assert_eq!(
        ctx.app.admin.approve(&session, 200).await.unwrap(),
        "Testimonial #200 approved"
    );
    assert_eq!(
        ctx.app.admin.reject(&session, 201).await.unwrap(),
        "Testimonial #201 rejected"
    );

    let state = ctx.backend.state.lock();
    assert_eq!(state.testimonials.len(), 2);
    assert!(state.testimonials.iter().all(|t| t.is_approved));
}
