//! Backend entry-point: loads settings, connects the document store, and
//! serves the portfolio API.

mod server;

use std::env;
use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::config::StoreSettings;
use backend::domain::SeedContent;
use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::connect_store;

use server::{ServerConfig, create_server, port_from};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    // Settings come from the environment only; command-line flags are not parsed.
    let settings = StoreSettings::load_from_iter([OsString::from("portfolio-api")])
        .unwrap_or_else(|e| {
            warn!(error = %e, "store settings unreadable; document store disabled");
            StoreSettings::default()
        });
    let seed_content = SeedContent::bundled()
        .map_err(|e| std::io::Error::other(format!("bundled seed content is invalid: {e}")))?;

    let connection = connect_store(&settings).await;
    let port = port_from(env::var("PORT").ok().as_deref());
    let config =
        ServerConfig::new(port, seed_content).with_store(connection, settings.presence());
    info!(address = %config.bind_addr(), "starting portfolio API");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
