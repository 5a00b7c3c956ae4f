use crate::e2e::helpers;

use helpers::{
    assertions::{assert_auth_required, assert_validation},
    fixtures::testimonial,
    TestContext,
};
use pretty_assertions::assert_eq;
use sea_catering::domain::auth::Session;
use sea_catering::domain::shared::Pagination;
use sea_catering::domain::testimonial::TestimonialRequest;
use test_context::test_context;

fn request(rating: u8) -> TestimonialRequest {
    TestimonialRequest {
        name: "Budi Santoso".to_string(),
        message: "The protein plan keeps me going through long shifts.".to_string(),
        rating,
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_approved_testimonials_with_stats_anonymously(ctx: &TestContext) {
    ctx.backend.insert_testimonial(testimonial(200, 1, 5, true));
    ctx.backend.insert_testimonial(testimonial(201, 1, 4, true));
    ctx.backend.insert_testimonial(testimonial(202, 1, 1, false));

    let output = ctx
        .app
        .testimonial
        .list(&Session::anonymous(), false, Pagination::default())
        .await
        .unwrap();

    assert!(output.contains("#201 Rina ****\n"), "{}", output);
    assert!(output.contains("#200 Rina *****"));
    assert!(!output.contains("#202"));
    assert!(output.ends_with(
        "Testimonials: 3 total, 2 approved, 1 pending\nAverage rating: 4.5"
    ));

    let requests = ctx.backend.requests();
    assert!(requests.iter().all(|r| r.authorization.is_none()));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_show_empty_list(ctx: &TestContext) {
    let output = ctx
        .app
        .testimonial
        .list(&Session::anonymous(), false, Pagination::default())
        .await
        .unwrap();

    assert!(output.starts_with("No testimonials yet"));
    assert!(output.contains("Average rating: 0.0"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_submit_testimonial_pending_approval(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let session = ctx.login_as(&user);

    let output = ctx
        .app
        .testimonial
        .submit(&session, request(5))
        .await
        .unwrap();

    assert!(output.starts_with("Thank you! Your testimonial is pending approval.\n#"));
    assert!(output.contains("Budi Santoso ***** (pending approval)"));

    let stored = ctx.backend.state.lock().testimonials[0].clone();
    assert_eq!(stored.user_id, user.id);
    assert!(!stored.is_approved);

    // Only visible to its author until approved
    let mine = ctx
        .app
        .testimonial
        .list(&session, true, Pagination::default())
        .await
        .unwrap();
    assert!(mine.contains("(pending approval)"));

    let public = ctx
        .app
        .testimonial
        .list(&Session::anonymous(), false, Pagination::default())
        .await
        .unwrap();
    assert!(public.starts_with("No testimonials yet"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_validate_testimonial_before_sending(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let session = ctx.login_as(&user);

    let result = ctx.app.testimonial.submit(&session, request(6)).await;
    assert_validation(&result);

    let short = TestimonialRequest {
        message: "Great!".to_string(),
        ..request(4)
    };
    let result = ctx.app.testimonial.submit(&session, short).await;
    assert_validation(&result);

    assert_eq!(ctx.backend.requests_to("/testimonials/"), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_login_to_submit_or_list_own(ctx: &TestContext) {
    let result = ctx
        .app
        .testimonial
        .submit(&Session::anonymous(), request(5))
        .await;
    assert_auth_required(&result);

    let result = ctx
        .app
        .testimonial
        .list(&Session::anonymous(), true, Pagination::default())
        .await;
    assert_auth_required(&result);

    assert!(ctx.backend.requests().is_empty());
}
