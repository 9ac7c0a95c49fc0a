//! Global order feed command.

/// Fetch the global feed and print the most recent `limit` orders.
pub async fn show(limit: usize) -> Result<(), Box<dyn std::error::Error>> {
    let client = super::client()?;

    tracing::info!("Fetching global order feed...");
    let feed = client.orders_feed().await?;

    tracing::info!(
        "{} orders total, {} today. Showing up to {}:",
        feed.total,
        feed.total_today,
        limit
    );
    for order in feed.orders.iter().take(limit) {
        tracing::info!(
            "  #{} {} ({}, {} ingredients)",
            order.number,
            order.name.as_deref().unwrap_or("<unnamed>"),
            order.status,
            order.ingredients.len()
        );
    }

    Ok(())
}
