use anyhow::{Context, Result};
use sitescout::{agent, app_state::AppState, config::Config, scout::Scout, telemetry};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(config.log_format());

    let scout = Scout::from_config(&config)?;
    let app = agent::router(AppState::new(scout));

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    info!(
        addr = config.bind_addr(),
        out_dir = %config.out_dir().display(),
        "scout agent listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            info!("Received shutdown signal, shutting down");
        })
        .await?;

    Ok(())
}
