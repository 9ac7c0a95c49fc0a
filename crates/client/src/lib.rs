//! Stellar Client - Typed HTTP client for the Stellar Burgers backend.
//!
//! The backend (`https://stellarburgers.nomoreparties.site`) is a third-party
//! food-ordering service; this crate wraps its JSON API in typed operations
//! for the end-to-end suite and the CLI.
//!
//! # API Reference
//!
//! - Authentication: `Authorization: Bearer <accessToken>` header, token
//!   obtained from `api/auth/register` or `api/auth/login`
//! - Error bodies: `{"success": false, "message": "..."}` with 400/401/403;
//!   some malformed requests return a 500 HTML page instead
//!
//! # Example
//!
//! ```rust,no_run
//! use stellar_client::{ClientConfig, StellarClient};
//! use stellar_core::Credentials;
//!
//! # async fn run() -> Result<(), stellar_client::Error> {
//! let client = StellarClient::new(&ClientConfig::default())?;
//! let session = client
//!     .register(&Credentials::new("ada@example.com", "hunter2", "ada"))
//!     .await?;
//! client.delete_user(&session.access_token).await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
mod config;
pub mod endpoints;
mod error;
mod orders;
mod users;

pub use client::StellarClient;
pub use config::{ClientConfig, ConfigError};
pub use error::Error;
