use crate::e2e::helpers;

use helpers::{
    assertions::{assert_auth_required, assert_rejected, assert_validation},
    fixtures::TEST_PASSWORD,
    TestContext,
};
use pretty_assertions::assert_eq;
use sea_catering::domain::auth::{RegisterRequest, Session};
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_store_token_on_login(ctx: &TestContext) {
    ctx.customer("budi@example.com");

    let output = ctx
        .app
        .auth
        .login("budi@example.com", TEST_PASSWORD)
        .await
        .unwrap();

    assert_eq!(output, "Logged in as Budi Santoso");
    let token = ctx.stored_token().expect("token should be stored");
    assert!(ctx.backend.state.lock().tokens.contains_key(&token));

    let session = ctx.app.auth.session().unwrap();
    assert!(session.has_valid_token());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_login_rejection_verbatim(ctx: &TestContext) {
    ctx.customer("budi@example.com");

    let result = ctx
        .app
        .auth
        .login("budi@example.com", "Wr0ng$password")
        .await;

    assert_rejected(&result, 401, "Incorrect email or password");
    assert_eq!(ctx.stored_token(), None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_email_before_calling_backend(ctx: &TestContext) {
    let result = ctx.app.auth.login("not-an-email", TEST_PASSWORD).await;

    assert_validation(&result);
    assert_eq!(ctx.backend.requests_to("/auth/login"), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_register_new_account(ctx: &TestContext) {
    let output = ctx
        .app
        .auth
        .register(RegisterRequest {
            full_name: "Siti Rahma".to_string(),
            email: "siti@example.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output, "Account created for siti@example.com. You can now log in.");
    assert_eq!(ctx.stored_token(), None);

    // Credentials work afterwards
    ctx.app
        .auth
        .login("siti@example.com", TEST_PASSWORD)
        .await
        .unwrap();

    let registered = ctx
        .backend
        .requests()
        .into_iter()
        .find(|r| r.path == "/auth/register")
        .unwrap();
    assert_eq!(registered.authorization, None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_weak_password_on_register(ctx: &TestContext) {
    let result = ctx
        .app
        .auth
        .register(RegisterRequest {
            full_name: "Siti Rahma".to_string(),
            email: "siti@example.com".to_string(),
            password: "password".to_string(),
        })
        .await;

    assert_validation(&result);
    assert_eq!(ctx.backend.requests_to("/auth/register"), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_duplicate_registration(ctx: &TestContext) {
    ctx.customer("budi@example.com");

    let result = ctx
        .app
        .auth
        .register(RegisterRequest {
            full_name: "Budi Lagi".to_string(),
            email: "budi@example.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await;

    assert_rejected(&result, 400, "Email already registered");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_show_and_update_profile(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let mut session = ctx.login_as(&user);

    let output = ctx.app.auth.me(&mut session, None).await.unwrap();
    assert_eq!(output, format!("#{} Budi Santoso <budi@example.com>", user.id));

    let output = ctx
        .app
        .auth
        .me(&mut session, Some("Budi S."))
        .await
        .unwrap();
    assert_eq!(output, format!("#{} Budi S. <budi@example.com>", user.id));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_login_for_profile(ctx: &TestContext) {
    let mut session = Session::anonymous();

    let result = ctx.app.auth.me(&mut session, None).await;

    assert_auth_required(&result);
    assert_eq!(ctx.backend.requests_to("/auth/me"), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_clear_token_on_logout(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let mut session = ctx.login_as(&user);

    let output = ctx.app.auth.logout(&mut session).await.unwrap();

    assert_eq!(output, "Logged out");
    assert_eq!(ctx.stored_token(), None);
    assert!(!session.has_valid_token());
    assert_eq!(ctx.backend.requests_to("/auth/logout"), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_clear_token_when_backend_answers_401(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let mut session = ctx.login_as(&user);
    ctx.backend.revoke_all_tokens();

    let result = ctx.app.auth.me(&mut session, None).await;

    assert_auth_required(&result);
    assert_eq!(ctx.stored_token(), None);
    assert_eq!(result.unwrap_err().exit_code(), 3);

    // Next invocation starts anonymous
    let session = ctx.app.auth.session().unwrap();
    assert!(!session.has_valid_token());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_send_expired_token(ctx: &TestContext) {
    let user = ctx.customer("budi@example.com");
    let expired = helpers::fixtures::generate_expired_jwt(user.id, "expired");
    ctx.backend
        .state
        .lock()
        .tokens
        .insert(expired.clone(), user.id);
    let mut session = Session::with_token(expired);

    let result = ctx.app.auth.me(&mut session, None).await;

    assert_auth_required(&result);
    assert_eq!(ctx.backend.requests_to("/auth/me"), 0);
}
