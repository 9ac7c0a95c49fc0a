//! HTTP transport for the Stellar Burgers backend.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use stellar_core::{AccessToken, Acknowledgement};

use crate::config::ClientConfig;
use crate::error::Error;

/// Stellar Burgers API client.
///
/// Cheap to clone; all clones share one connection pool. There are no
/// retries and no backoff - one request per operation, with the configured
/// timeout as the only policy.
#[derive(Clone)]
pub struct StellarClient {
    inner: Arc<StellarClientInner>,
}

struct StellarClientInner {
    client: reqwest::Client,
    /// Base URL without a trailing slash; endpoint paths start with one.
    base_url: String,
}

impl StellarClient {
    /// Create a new client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(StellarClientInner {
                client,
                base_url: config.base_url.as_str().trim_end_matches('/').to_owned(),
            }),
        })
    }

    /// The base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Execute a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&AccessToken>,
    ) -> Result<T, Error> {
        let url = format!("{}{path}", self.inner.base_url);
        let request = self.authorize(self.inner.client.get(&url), token);
        self.handle_response(request.send().await?).await
    }

    /// Execute a POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        token: Option<&AccessToken>,
        body: &B,
    ) -> Result<T, Error> {
        let url = format!("{}{path}", self.inner.base_url);
        let request = self.authorize(self.inner.client.post(&url), token).json(body);
        self.handle_response(request.send().await?).await
    }

    /// Execute a PATCH request with a JSON body.
    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        token: Option<&AccessToken>,
        body: &B,
    ) -> Result<T, Error> {
        let url = format!("{}{path}", self.inner.base_url);
        let request = self.authorize(self.inner.client.patch(&url), token).json(body);
        self.handle_response(request.send().await?).await
    }

    /// Execute a DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&AccessToken>,
    ) -> Result<T, Error> {
        let url = format!("{}{path}", self.inner.base_url);
        let request = self.authorize(self.inner.client.delete(&url), token);
        self.handle_response(request.send().await?).await
    }

    fn authorize(
        &self,
        request: reqwest::RequestBuilder,
        token: Option<&AccessToken>,
    ) -> reqwest::RequestBuilder {
        match token {
            Some(token) => request.header("Authorization", token.header_value()),
            None => request,
        }
    }

    /// Decode a success body, or map an error response.
    ///
    /// The backend signals success with 2xx (200 everywhere except user
    /// deletion, which returns 202); both land here as a typed decode.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, Error> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            return serde_json::from_str(&body)
                .map_err(|e| Error::Parse(format!("Failed to parse response: {e}")));
        }

        Err(Self::map_error(status, response.text().await.unwrap_or_default()))
    }

    /// Map a non-2xx response to [`Error::Api`] when the body carries the
    /// standard `{"success": false, "message": ...}` envelope, otherwise to
    /// [`Error::Unexpected`] (e.g. the 500 HTML error page).
    fn map_error(status: reqwest::StatusCode, body: String) -> Error {
        match serde_json::from_str::<Acknowledgement>(&body) {
            Ok(envelope) if !envelope.success => Error::Api {
                status,
                message: envelope.message,
            },
            _ => Error::Unexpected { status, body },
        }
    }
}

impl std::fmt::Debug for StellarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StellarClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}
