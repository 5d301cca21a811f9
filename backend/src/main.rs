//! Item service entry-point: loads settings, seeds the store, and serves the
//! item pages.

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use item_service::domain::{ItemService, seed_sample_items};
use item_service::inbound::http::health::HealthState;
use item_service::inbound::http::state::HttpState;
use item_service::outbound::persistence::InMemoryItemRepository;
use item_service::server::{ServerConfig, create_server, shut_down};
use item_service::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_args(std::env::args_os())?;

    let repository = Arc::new(InMemoryItemRepository::new());
    let service = Arc::new(ItemService::new(repository));
    if settings.sample_data_enabled() {
        seed_sample_items(service.as_ref())
            .await
            .wrap_err("failed to seed sample items")?;
    } else {
        info!("sample items disabled");
    }

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr(), HttpState::from_service(service));
    let server =
        create_server(health_state.clone(), config).wrap_err("failed to start server")?;

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => shut_down(&health_state, handle).await,
            Err(e) => warn!(error = %e, "failed to listen for shutdown signal"),
        }
    });

    server.await.wrap_err("server terminated with an error")?;
    Ok(())
}
