//! Login and logout tests: `POST api/auth/login`, `POST api/auth/logout`.
//!
//! Run with: cargo test -p stellar-integration-tests -- --ignored

use reqwest::StatusCode;
use stellar_core::Credentials;
use stellar_integration_tests::{Session, assert_api_error, assert_session_matches};

/// Any credential mismatch yields this literal message with a 401.
const BAD_CREDENTIALS_MESSAGE: &str = "email or password are incorrect";

#[tokio::test]
#[ignore = "Requires network access to the Stellar Burgers backend"]
async fn login_with_valid_credentials() {
    let session = Session::register().await;

    let login = session
        .client
        .login(&session.credentials)
        .await
        .expect("login with valid credentials must succeed");
    assert_session_matches(&login, &session.credentials);

    session.cleanup().await;
}

#[tokio::test]
#[ignore = "Requires network access to the Stellar Burgers backend"]
async fn login_with_wrong_email_is_rejected() {
    expect_login_rejected(|credentials| {
        credentials.set_email("wrong-login@example.com");
    })
    .await;
}

#[tokio::test]
#[ignore = "Requires network access to the Stellar Burgers backend"]
async fn login_with_wrong_password_is_rejected() {
    expect_login_rejected(|credentials| {
        credentials.set_password("wrong-password");
    })
    .await;
}

#[tokio::test]
#[ignore = "Requires network access to the Stellar Burgers backend"]
async fn login_with_empty_email_is_rejected() {
    expect_login_rejected(|credentials| {
        credentials.set_email("");
    })
    .await;
}

#[tokio::test]
#[ignore = "Requires network access to the Stellar Burgers backend"]
async fn login_with_empty_password_is_rejected() {
    expect_login_rejected(|credentials| {
        credentials.set_password("");
    })
    .await;
}

#[tokio::test]
#[ignore = "Requires network access to the Stellar Burgers backend"]
async fn login_with_both_fields_wrong_is_rejected() {
    expect_login_rejected(|credentials| {
        credentials.set_email("wrong-login@example.com");
        credentials.set_password("wrong-password");
    })
    .await;
}

#[tokio::test]
#[ignore = "Requires network access to the Stellar Burgers backend"]
async fn logout_with_valid_refresh_token() {
    let session = Session::register().await;

    // Confirm the account can actually log in before logging out,
    // mirroring the original suite's precondition.
    let login = session
        .client
        .login(&session.credentials)
        .await
        .expect("login must succeed before logout");

    let ack = session
        .client
        .logout(&login.refresh_token)
        .await
        .expect("logout with a fresh refresh token must succeed");
    assert!(ack.success);
    assert_eq!(ack.message, "Successful logout");

    // The access token stays valid until expiry, so cleanup still works.
    session.cleanup().await;
}

/// Register a fresh account, corrupt the login credentials with `mutate`,
/// and expect the 401 refusal. The registered account is always deleted.
async fn expect_login_rejected(mutate: impl FnOnce(&mut Credentials)) {
    let session = Session::register().await;

    let mut attempted = session.credentials.clone();
    mutate(&mut attempted);

    let error = session
        .client
        .login(&attempted)
        .await
        .expect_err("login with corrupted credentials must be rejected");
    assert_api_error(&error, StatusCode::UNAUTHORIZED, BAD_CREDENTIALS_MESSAGE);

    session.cleanup().await;
}
