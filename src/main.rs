use anyhow::Result;
use sustainability_dashboard::{api, config::Config, seed, telemetry, AppState};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::load()?;
    telemetry::init_tracing(&cfg.logging);

    let state = AppState::new(cfg.clone()).await?;

    if cfg.seed.enabled {
        seed::seed_if_empty(state.store.as_ref(), &cfg.seed).await?;
    }

    let app = api::router(state.clone());
    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!("binding to 0.0.0.0 - the API is reachable from the network and has no authentication");
    }

    info!(
        %addr,
        storage = state.store.backend(),
        remote_simulation = state.evaluator.has_remote(),
        "starting sustainability dashboard API"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
