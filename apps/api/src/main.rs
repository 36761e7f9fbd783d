//! VagasPlus API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dto;
mod error;
mod handlers;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use vagasplus_application::SystemClock;
use vagasplus_core::AppError;

use crate::api_config::{ApiConfig, StorageBackendConfig, init_tracing};
use crate::api_router::build_router;
use crate::api_services::{build_app_state, build_in_memory_app_state, connect_and_migrate};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ApiConfig::load()?;

    let app_state = match &config.storage_backend {
        StorageBackendConfig::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = connect_and_migrate(database_url, *max_connections).await?;
            if config.migrate_only {
                info!("database migrations applied successfully");
                return Ok(());
            }

            build_app_state(pool)
        }
        StorageBackendConfig::Memory => {
            warn!("using in-memory storage, data is lost on restart");
            build_in_memory_app_state(Arc::new(SystemClock))
        }
    };

    let app = build_router(app_state, &config.frontend_url)?;
    let address = config.socket_address()?;

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(%address, "vagasplus-api listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
