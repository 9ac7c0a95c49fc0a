//! User credential and profile types.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Registration/login credentials for a backend account.
///
/// Serializes to the JSON body expected by `api/auth/register` and
/// `api/auth/login`. The password is wrapped in [`SecretString`] and is only
/// exposed at the serde boundary; `Debug` output redacts it.
#[derive(Clone)]
pub struct Credentials {
    email: String,
    password: SecretString,
    name: String,
}

impl Credentials {
    /// Create credentials from the three required registration fields.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
            name: name.into(),
        }
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Password secret.
    #[must_use]
    pub const fn password(&self) -> &SecretString {
        &self.password
    }

    /// Replace the email field (e.g. to simulate a wrong login).
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Replace the password field.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = SecretString::from(password.into());
    }

    /// Replace the display name field.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Serialize for Credentials {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut body = serializer.serialize_struct("Credentials", 3)?;
        body.serialize_field("email", &self.email)?;
        body.serialize_field("password", self.password.expose_secret())?;
        body.serialize_field("name", &self.name)?;
        body.end()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// User profile as echoed back under the `"user"` key of auth and profile
/// responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account email address.
    pub email: String,
    /// Account display name.
    pub name: String,
}

/// Partial update body for `PATCH api/auth/user`.
///
/// Only the fields that are set are serialized, so a builder-style update
/// touches exactly the fields under test.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "expose_password"
    )]
    password: Option<SecretString>,
}

impl UserUpdate {
    /// Start an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new email address.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set a new display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a new password.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// True if no fields are set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.password.is_none()
    }
}

fn expose_password<S: Serializer>(
    password: &Option<SecretString>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match password {
        Some(secret) => serializer.serialize_str(secret.expose_secret()),
        None => serializer.serialize_none(),
    }
}
