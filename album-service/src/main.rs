use album_service::{config, models::Album, SERVICE_NAME};
use service_core::observability::{init_metrics, init_tracing};
use service_core::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load()?;

    // Initialize metrics recorder (must be before any metrics are recorded)
    init_metrics()?;
    init_tracing(SERVICE_NAME, &config.observability);

    let application = Application::build::<Album>(SERVICE_NAME, &config)
        .await
        .map_err(|e| {
            tracing::error!("Failed to start {}: {}", SERVICE_NAME, e);
            e
        })?;
    application.run_until_stopped().await?;

    Ok(())
}
