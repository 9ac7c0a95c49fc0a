//! Stellar Core - Shared payload types.
//!
//! This crate provides the request and response shapes exchanged with the
//! Stellar Burgers backend, used by:
//! - `client` - Typed HTTP client for the backend
//! - `cli` - Command-line smoke tools
//! - `integration-tests` - End-to-end suite
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP client. Payloads
//! mirror the backend's JSON wire shapes (camelCase and `_id`-style field
//! names are handled with serde rename attributes), and credentials ride in
//! [`secrecy::SecretString`] so they never leak through `Debug` output.
//!
//! # Modules
//!
//! - [`types`] - User credentials, order tickets, tokens, and response envelopes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
