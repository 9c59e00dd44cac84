//! Seed command: trigger the API's sample-data initializer.

/// Run the seed. Safe to repeat; the API no-ops when products exist.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api_client()?;

    api.init_data().await?;
    let products = api.products().await?;
    tracing::info!("Seed complete, catalog has {} products", products.len());

    Ok(())
}
