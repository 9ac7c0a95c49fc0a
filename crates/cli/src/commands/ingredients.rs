//! Ingredient catalog command.

/// Fetch the catalog and print one line per ingredient.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let client = super::client()?;

    tracing::info!("Fetching ingredient catalog...");
    let catalog = client.ingredients().await?;

    tracing::info!("{} ingredients available:", catalog.data.len());
    for ingredient in &catalog.data {
        tracing::info!(
            "  [{}] {} ({}, {} credits)",
            ingredient.id,
            ingredient.name,
            ingredient.kind,
            ingredient.price
        );
    }

    Ok(())
}
