//! Health command: ping the API's health endpoint.

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api_client()?;

    let health = api.health().await?;
    tracing::info!("API status: {}", health.status);
    if let Some(message) = health.message {
        tracing::info!("{message}");
    }

    Ok(())
}
