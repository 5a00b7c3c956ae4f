use crate::e2e::helpers;

use helpers::{
    assertions::{assert_auth_required, assert_rejected, assert_validation},
    fixtures::{date, paused_subscription, subscription},
    TestContext,
};
use pretty_assertions::assert_eq;
use sea_catering::controllers::SubscribeForm;
use sea_catering::domain::auth::Session;
use sea_catering::domain::plan::{DeliveryDay, MealType, Plan};
use test_context::test_context;

fn form() -> SubscribeForm {
    SubscribeForm {
        name: "Budi Santoso".to_string(),
        phone: "081234567890".to_string(),
        plan: "protein".to_string(),
        meal_types: vec!["breakfast".to_string(), "dinner".to_string()],
        delivery_days: vec![
            "monday".to_string(),
            "wednesday".to_string(),
            "friday".to_string(),
        ],
        allergies: Some("shellfish".to_string()),
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_create_and_list_subscription(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let session = ctx.login_as(&user);
    let today = date(2026, 10, 16);

    let output = ctx
        .app
        .subscription
        .subscribe(&session, form(), today)
        .await
        .unwrap();

    assert!(output.starts_with("Subscription created\n#"), "{}", output);
    assert!(output.contains("Protein Plan [Active]"));
    assert!(output.contains("Total: Rp 1.032.000 per month"));
    assert!(output.contains("Allergies: shellfish"));
    assert!(output.contains("Actions: pause, cancel"));

    let stored = ctx.backend.state.lock().subscriptions[0].clone();
    assert_eq!(stored.user_id, user.id);
    assert_eq!(stored.meal_types, vec![MealType::Breakfast, MealType::Dinner]);

    let listed = ctx.app.subscription.list(&session, today).await.unwrap();
    assert!(listed.starts_with(&format!("#{} Protein Plan [Active]", stored.id)));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_nothing_for_new_customer(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let session = ctx.login_as(&user);

    let listed = ctx
        .app
        .subscription
        .list(&session, date(2026, 10, 16))
        .await
        .unwrap();

    assert_eq!(listed, "No subscriptions found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_login_to_subscribe(ctx: &TestContext) {
    let result = ctx
        .app
        .subscription
        .subscribe(&Session::anonymous(), form(), date(2026, 10, 16))
        .await;

    assert_auth_required(&result);
    assert_eq!(ctx.backend.requests_to("/subscriptions/"), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_invalid_form_without_calling_backend(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let session = ctx.login_as(&user);

    let bad_phone = SubscribeForm {
        phone: "12345".to_string(),
        ..form()
    };
    let result = ctx
        .app
        .subscription
        .subscribe(&session, bad_phone, date(2026, 10, 16))
        .await;
    assert_validation(&result);

    let no_days = SubscribeForm {
        delivery_days: vec![],
        ..form()
    };
    let result = ctx
        .app
        .subscription
        .subscribe(&session, no_days, date(2026, 10, 16))
        .await;
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().exit_code(), 2);

    assert_eq!(ctx.backend.requests_to("/subscriptions/"), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_resolve_status_against_given_date(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let session = ctx.login_as(&user);
    ctx.backend.insert_subscription(paused_subscription(
        100,
        user.id,
        date(2026, 11, 1),
        date(2026, 11, 10),
    ));

    let before = ctx
        .app
        .subscription
        .status(&session, 100, date(2026, 10, 31))
        .await
        .unwrap();
    assert!(before.contains("[Active]"), "{}", before);
    assert!(before.contains("Paused: 2026-11-01 to 2026-11-10"));

    for day in [date(2026, 11, 1), date(2026, 11, 5), date(2026, 11, 10)] {
        let during = ctx
            .app
            .subscription
            .status(&session, 100, day)
            .await
            .unwrap();
        assert!(during.contains("[Paused]"), "{}: {}", day, during);
        assert!(during.contains("Actions: resume, cancel"));
    }

    let after = ctx
        .app
        .subscription
        .status(&session, 100, date(2026, 11, 11))
        .await
        .unwrap();
    assert!(after.contains("[Active]"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_pause_active_subscription(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let session = ctx.login_as(&user);
    ctx.backend.insert_subscription(subscription(
        100,
        user.id,
        Plan::Diet,
        &[MealType::Lunch],
        &[DeliveryDay::Monday, DeliveryDay::Thursday],
    ));

    let output = ctx
        .app
        .subscription
        .pause(
            &session,
            100,
            date(2026, 10, 16),
            date(2026, 10, 30),
            date(2026, 10, 16),
        )
        .await
        .unwrap();

    assert!(output.contains("Diet Plan [Paused]"), "{}", output);
    let stored = ctx.backend.subscription(100).unwrap();
    assert_eq!(stored.pause_start_date, Some(date(2026, 10, 16)));
    assert_eq!(stored.pause_end_date, Some(date(2026, 10, 30)));
    assert!(stored.is_active);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_backend_pause_validation_verbatim(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let session = ctx.login_as(&user);
    ctx.backend.insert_subscription(subscription(
        100,
        user.id,
        Plan::Diet,
        &[MealType::Lunch],
        &[DeliveryDay::Monday],
    ));

    // A single-day window passes locally; the backend wants end after start
    let result = ctx
        .app
        .subscription
        .pause(
            &session,
            100,
            date(2026, 10, 20),
            date(2026, 10, 20),
            date(2026, 10, 16),
        )
        .await;

    assert_rejected(
        &result,
        422,
        "Value error, Pause end date must be after pause start date",
    );
    assert_eq!(ctx.backend.subscription(100).unwrap().pause_start_date, None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_reversed_pause_window_locally(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let session = ctx.login_as(&user);

    let result = ctx
        .app
        .subscription
        .pause(
            &session,
            100,
            date(2026, 10, 20),
            date(2026, 10, 10),
            date(2026, 10, 16),
        )
        .await;

    assert_validation(&result);
    assert!(ctx.backend.requests().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_resume_paused_subscription(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let session = ctx.login_as(&user);
    ctx.backend.insert_subscription(paused_subscription(
        100,
        user.id,
        date(2026, 10, 10),
        date(2026, 10, 20),
    ));

    let output = ctx
        .app
        .subscription
        .resume(&session, 100, date(2026, 10, 16))
        .await
        .unwrap();

    assert!(output.contains("[Active]"), "{}", output);
    assert!(!output.contains("Paused:"));
    let stored = ctx.backend.subscription(100).unwrap();
    assert_eq!(stored.pause_start_date, None);
    assert_eq!(stored.pause_end_date, None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_refuse_resume_outside_pause_window(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let session = ctx.login_as(&user);
    ctx.backend.insert_subscription(paused_subscription(
        100,
        user.id,
        date(2026, 11, 1),
        date(2026, 11, 10),
    ));

    let result = ctx
        .app
        .subscription
        .resume(&session, 100, date(2026, 10, 16))
        .await;

    match result {
        Err(e) => assert_eq!(
            e.to_string(),
            "Invalid input: Cannot resume a subscription that is Active"
        ),
        Ok(output) => panic!("expected refusal, got {}", output),
    }
    assert_eq!(ctx.backend.requests_to("/subscriptions/100/resume"), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_cancel_and_then_refuse_every_action(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let session = ctx.login_as(&user);
    let today = date(2026, 10, 16);
    ctx.backend.insert_subscription(subscription(
        100,
        user.id,
        Plan::Protein,
        &[MealType::Breakfast, MealType::Dinner],
        &[DeliveryDay::Monday, DeliveryDay::Wednesday, DeliveryDay::Friday],
    ));

    let output = ctx
        .app
        .subscription
        .cancel(&session, 100, today)
        .await
        .unwrap();
    assert_eq!(
        output,
        "Subscription #100 cancelled (Rp 1.032.000 per month no longer billed)"
    );
    assert!(!ctx.backend.subscription(100).unwrap().is_active);

    let status = ctx
        .app
        .subscription
        .status(&session, 100, today)
        .await
        .unwrap();
    assert!(status.contains("[Cancelled]"));
    assert!(!status.contains("Actions:"));

    let pause = ctx
        .app
        .subscription
        .pause(&session, 100, date(2026, 11, 1), date(2026, 11, 5), today)
        .await;
    assert_eq!(
        pause.unwrap_err().to_string(),
        "Invalid input: Cannot pause a subscription that is Cancelled"
    );

    let cancel = ctx.app.subscription.cancel(&session, 100, today).await;
    assert_validation(&cancel);

    assert_eq!(ctx.backend.requests_to("/subscriptions/100/pause"), 0);
    assert_eq!(ctx.backend.requests_to("/subscriptions/100/deactivate"), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_hide_other_customers_subscriptions(ctx: &TestContext) {
    let owner = ctx.customer("owner@example.com");
    let other = ctx.customer("other@example.com");
    ctx.backend.insert_subscription(subscription(
        100,
        owner.id,
        Plan::Royal,
        &[MealType::Dinner],
        &[DeliveryDay::Sunday],
    ));
    let session = ctx.login_as(&other);

    let result = ctx
        .app
        .subscription
        .status(&session, 100, date(2026, 10, 16))
        .await;

    assert_rejected(&result, 404, "Subscription not found");
}
