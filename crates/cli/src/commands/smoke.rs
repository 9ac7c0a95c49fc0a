//! End-to-end smoke flow with a throwaway account.
//!
//! Mirrors the happy path of the e2e suite: register, login, place an
//! order with the first two catalog ingredients, list the account's
//! orders, then delete the account. The account always gets cleaned up,
//! even when a middle step fails.

use stellar_core::{Credentials, OrderTicket};
use uuid::Uuid;

/// Run the smoke flow against the configured backend.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let client = super::client()?;

    let tag = Uuid::new_v4().simple().to_string();
    let credentials = Credentials::new(
        format!("sb-smoke-{tag}@example.com"),
        format!("pw-{tag}"),
        format!("smoke-{tag}"),
    );

    tracing::info!("Registering throwaway account {}", credentials.email());
    let session = client.register(&credentials).await?;
    tracing::info!("Registered as {}", session.user.name);

    let outcome = exercise(&client, &credentials).await;

    tracing::info!("Deleting throwaway account");
    let ack = client.delete_user(&session.access_token).await?;
    tracing::info!("Cleanup: {}", ack.message);

    outcome
}

async fn exercise(
    client: &stellar_client::StellarClient,
    credentials: &Credentials,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Logging in");
    let session = client.login(credentials).await?;

    tracing::info!("Fetching ingredient catalog");
    let catalog = client.ingredients().await?;
    let ticket = OrderTicket::new(
        catalog
            .data
            .iter()
            .take(2)
            .map(|ingredient| ingredient.id.clone())
            .collect(),
    );
    if ticket.ingredients().is_empty() {
        return Err("ingredient catalog is empty".into());
    }

    tracing::info!("Placing an order with {} ingredients", ticket.ingredients().len());
    let placed = client.create_order(Some(&session.access_token), &ticket).await?;
    tracing::info!("Order #{} placed: {}", placed.order.number, placed.name);

    tracing::info!("Listing account orders");
    let feed = client.user_orders(&session.access_token).await?;
    tracing::info!("Account has {} order(s)", feed.orders.len());

    tracing::info!("Logging out");
    let ack = client.logout(&session.refresh_token).await?;
    tracing::info!("Logout: {}", ack.message);

    Ok(())
}
