//! Catalog API - REST server for the in-memory product catalog

use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let api_routes = api::routes(&config);
    let root = api::root::router().merge(health_router(config.app.clone()));
    let app = create_router::<openapi::ApiDoc>(api_routes, root);

    info!("Starting Catalog API on {}", config.server.address());

    create_app(app, &config.server).await?;

    info!("Catalog API shutdown complete");
    Ok(())
}
