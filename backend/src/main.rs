//! Service entry point: configuration, schema migration, then serving.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use userdir::outbound::persistence::{DieselUserStore, PoolSettings, StorePool, run_migrations};

mod server;

use server::{ServerConfig, StoreConfig, run};

/// Application bootstrap. Every failure before serving is fatal: the process
/// must not reach the listener with an unmigrated or unreachable store.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    dotenvy::dotenv().map_err(|err| fatal("failed to load .env file", &err))?;

    let store_config = StoreConfig::from_env();
    let database_url = store_config.database_url();

    // One dedicated connection applies the schema and drops before serving.
    run_migrations(&database_url).map_err(|err| fatal("schema migration failed", &err))?;

    let pool = StorePool::new(PoolSettings::new(&database_url))
        .await
        .map_err(|err| fatal("failed to build store pool", &err))?;
    let users = Arc::new(DieselUserStore::new(pool));

    // Listen address is fixed local loopback, deliberately not configurable.
    let bind_addr = SocketAddr::from(([127, 0, 0, 1], 8000));
    run(ServerConfig::new(bind_addr, users)).await
}

fn fatal(context: &str, err: &dyn std::fmt::Display) -> std::io::Error {
    error!(error = %err, "{context}");
    std::io::Error::other(format!("{context}: {err}"))
}
