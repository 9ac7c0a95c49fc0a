//! Bearer credential wrappers.
//!
//! The backend returns two opaque credentials from registration and login:
//! an access token prefixed with `"Bearer "` and a bare refresh token. Both
//! are wrapped in [`SecretString`] so they stay out of logs.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};

/// Access token for the `Authorization` header.
///
/// The wire value arrives as `"Bearer <token>"`; deserialization strips the
/// scheme prefix so the wrapper always holds the bare token.
#[derive(Clone)]
pub struct AccessToken(SecretString);

impl AccessToken {
    /// Wrap a raw token value, stripping a leading `"Bearer "` if present.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let bare = raw.strip_prefix("Bearer ").unwrap_or(raw);
        Self(SecretString::from(bare.to_owned()))
    }

    /// The bare token value.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Render the `Authorization` header value.
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0.expose_secret())
    }
}

impl<'de> Deserialize<'de> for AccessToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(REDACTED)")
    }
}

/// Refresh token used for logout (and token renewal on the backend side).
#[derive(Clone)]
pub struct RefreshToken(SecretString);

impl RefreshToken {
    /// Wrap a raw refresh token value.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(SecretString::from(raw.into()))
    }

    /// The bare token value.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<'de> Deserialize<'de> for RefreshToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(raw))
    }
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefreshToken(REDACTED)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_strips_bearer_prefix() {
        let token = AccessToken::from_raw("Bearer abc.def.ghi");
        assert_eq!(token.expose(), "abc.def.ghi");
        assert_eq!(token.header_value(), "Bearer abc.def.ghi");
    }

    #[test]
    fn access_token_accepts_bare_value() {
        let token = AccessToken::from_raw("abc.def.ghi");
        assert_eq!(token.expose(), "abc.def.ghi");
    }

    #[test]
    fn access_token_deserializes_from_wire_shape() {
        let token: AccessToken =
            serde_json::from_str("\"Bearer abc.def.ghi\"").expect("deserializable");
        assert_eq!(token.expose(), "abc.def.ghi");
    }

    #[test]
    fn tokens_redact_debug_output() {
        let access = AccessToken::from_raw("Bearer abc");
        let refresh = RefreshToken::from_raw("xyz");
        assert_eq!(format!("{access:?}"), "AccessToken(REDACTED)");
        assert_eq!(format!("{refresh:?}"), "RefreshToken(REDACTED)");
    }
}
