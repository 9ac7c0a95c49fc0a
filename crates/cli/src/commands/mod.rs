//! CLI command implementations.

pub mod feed;
pub mod ingredients;
pub mod smoke;

use stellar_client::{ClientConfig, StellarClient};

/// Build a client from the environment configuration.
pub(crate) fn client() -> Result<StellarClient, Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    tracing::debug!("Using backend at {}", config.base_url);
    Ok(StellarClient::new(&config)?)
}
