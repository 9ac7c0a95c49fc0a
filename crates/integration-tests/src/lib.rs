//! End-to-end tests for the Stellar Burgers backend.
//!
//! # Running Tests
//!
//! The suite talks to the live backend configured via `STELLAR_BASE_URL`
//! (default: the public instance), so every network test is `#[ignore]`d:
//!
//! ```bash
//! # Offline checks only
//! cargo test -p stellar-integration-tests
//!
//! # Full suite against the live backend
//! cargo test -p stellar-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `user_create` - Registration, duplicates, required fields
//! - `user_login` - Login, credential mismatches, logout
//! - `user_update` - Profile patching, authorization
//! - `order_create` - Order placement with and without authorization
//! - `order_list` - Account order list and the global feed
//! - `ingredients` - Catalog availability
//!
//! Every test creates its own throwaway account and deletes it on the way
//! out, so independent tests can run in parallel against the shared
//! backend.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rand::distr::{Alphanumeric, SampleString};
use reqwest::StatusCode;
use stellar_client::{ClientConfig, Error, StellarClient};
use stellar_core::{AuthSession, Credentials};
use uuid::Uuid;

/// Build a client from the environment configuration.
///
/// # Panics
///
/// Panics if the environment configuration is invalid; there is no point
/// continuing a test run against a misconfigured backend.
#[must_use]
pub fn client() -> StellarClient {
    let config = ClientConfig::from_env().expect("Invalid STELLAR_* environment");
    StellarClient::new(&config).expect("Failed to create HTTP client")
}

/// Generate unique throwaway credentials for one test.
///
/// The uuid keeps parallel test runs from colliding on the shared backend;
/// the password is random alphanumeric so no fixture relies on a literal.
#[must_use]
pub fn random_credentials() -> Credentials {
    let tag = Uuid::new_v4().simple().to_string();
    let password = Alphanumeric.sample_string(&mut rand::rng(), 12);
    Credentials::new(
        format!("e2e-{tag}@example.com"),
        password,
        format!("e2e-{}", &tag[..12]),
    )
}

/// A registered throwaway account, cleaned up via [`Session::cleanup`].
pub struct Session {
    /// Client the account was registered through.
    pub client: StellarClient,
    /// The credentials the account was registered with.
    pub credentials: Credentials,
    /// Tokens and echoed profile from registration.
    pub auth: AuthSession,
}

impl Session {
    /// Register a fresh random account and verify the positive envelope.
    ///
    /// # Panics
    ///
    /// Panics if registration fails or the echoed profile does not match.
    pub async fn register() -> Self {
        let client = client();
        let credentials = random_credentials();
        let auth = client
            .register(&credentials)
            .await
            .expect("Failed to register test account");
        assert_session_matches(&auth, &credentials);
        Self {
            client,
            credentials,
            auth,
        }
    }

    /// Delete the account and verify the backend's confirmation.
    ///
    /// Mirrors the original suite's teardown: the delete must succeed and
    /// answer with the literal removal message.
    ///
    /// # Panics
    ///
    /// Panics if the deletion is rejected.
    pub async fn cleanup(self) {
        let ack = self
            .client
            .delete_user(&self.auth.access_token)
            .await
            .expect("Failed to delete test account");
        assert!(ack.success);
        assert_eq!(ack.message, "User successfully removed");
    }
}

/// Assert the positive auth envelope: success flag, echoed profile, and
/// non-empty tokens.
///
/// # Panics
///
/// Panics on any mismatch.
pub fn assert_session_matches(auth: &AuthSession, credentials: &Credentials) {
    assert!(auth.success);
    assert_eq!(auth.user.email, credentials.email());
    assert_eq!(auth.user.name, credentials.name());
    assert!(!auth.access_token.expose().is_empty());
    assert!(!auth.refresh_token.expose().is_empty());
}

/// Assert a backend refusal with the expected status and literal message.
///
/// # Panics
///
/// Panics if the error is not an [`Error::Api`] or carries different
/// status/message values.
pub fn assert_api_error(error: &Error, status: StatusCode, message: &str) {
    match error {
        Error::Api {
            status: actual_status,
            message: actual_message,
        } => {
            assert_eq!(*actual_status, status);
            assert_eq!(actual_message, message);
        }
        other => panic!("expected API error {status} \"{message}\", got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn random_credentials_are_unique() {
        let a = random_credentials();
        let b = random_credentials();
        assert_ne!(a.email(), b.email());
        assert_ne!(a.name(), b.name());
    }

    #[test]
    fn random_credentials_look_like_an_account() {
        let creds = random_credentials();
        assert!(creds.email().ends_with("@example.com"));
        assert!(creds.name().starts_with("e2e-"));
        assert_eq!(creds.password().expose_secret().len(), 12);
    }
}
