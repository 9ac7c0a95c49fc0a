//! Account operations: register, login, logout, profile management.

use serde_json::json;
use stellar_core::{
    AccessToken, Acknowledgement, AuthSession, Credentials, RefreshToken, UserEnvelope, UserUpdate,
};
use tracing::instrument;

use crate::StellarClient;
use crate::endpoints;
use crate::error::Error;

impl StellarClient {
    /// Create an account (`POST api/auth/register`).
    ///
    /// On success (200) the backend echoes the profile and issues both
    /// tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] with 403 `"User already exists"` for a
    /// duplicate account, or 403 `"Email, password and name are required
    /// fields"` when a required field is empty.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn register(&self, credentials: &Credentials) -> Result<AuthSession, Error> {
        self.post(endpoints::REGISTER, None, credentials).await
    }

    /// Log in (`POST api/auth/login`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] with 401 `"email or password are incorrect"`
    /// for any credential mismatch, including empty fields.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthSession, Error> {
        self.post(endpoints::LOGIN, None, credentials).await
    }

    /// Invalidate a refresh token (`POST api/auth/logout`).
    ///
    /// On success the backend answers 200 with `"Successful logout"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] if the token is unknown or already revoked.
    #[instrument(skip_all)]
    pub async fn logout(&self, refresh_token: &RefreshToken) -> Result<Acknowledgement, Error> {
        let body = json!({ "token": refresh_token.expose() });
        self.post(endpoints::LOGOUT, None, &body).await
    }

    /// Fetch the authorized user's profile (`GET api/auth/user`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] with 401 `"You should be authorised"` for a
    /// missing or invalid token.
    #[instrument(skip_all)]
    pub async fn get_user(&self, token: &AccessToken) -> Result<UserEnvelope, Error> {
        self.get(endpoints::USER, Some(token)).await
    }

    /// Update profile fields (`PATCH api/auth/user`).
    ///
    /// The response echoes the profile with the patched values applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] with 401 `"You should be authorised"` for a
    /// missing or invalid token, or 403 if the new email is already taken.
    #[instrument(skip_all)]
    pub async fn update_user(
        &self,
        token: &AccessToken,
        update: &UserUpdate,
    ) -> Result<UserEnvelope, Error> {
        self.patch(endpoints::USER, Some(token), update).await
    }

    /// Delete the authorized user (`DELETE api/auth/user`).
    ///
    /// On success the backend answers 202 with `"User successfully
    /// removed"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] with 401 `"You should be authorised"` for a
    /// missing or invalid token.
    #[instrument(skip_all)]
    pub async fn delete_user(&self, token: &AccessToken) -> Result<Acknowledgement, Error> {
        self.delete(endpoints::USER, Some(token)).await
    }
}
