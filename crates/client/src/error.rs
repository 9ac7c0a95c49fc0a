//! Error mapping for backend responses.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the Stellar Burgers backend.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend refused the request with its standard error envelope.
    #[error("API error: {status} - {message}")]
    Api {
        /// Response status code.
        status: StatusCode,
        /// The backend's `message` field, e.g. `"User already exists"`.
        message: String,
    },

    /// Backend returned an error without the standard envelope, e.g. the
    /// HTML error page served for malformed ingredient ids.
    #[error("Unexpected response: {status}")]
    Unexpected {
        /// Response status code.
        status: StatusCode,
        /// Raw response body.
        body: String,
    },

    /// A success response could not be decoded into the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl Error {
    /// The HTTP status of a backend refusal, if this is one.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } | Self::Unexpected { status, .. } => Some(*status),
            Self::Http(_) | Self::Parse(_) => None,
        }
    }
}
