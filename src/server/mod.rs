//! Server bootstrap: store selection, router assembly and graceful
//! shutdown.

mod config;
mod telemetry;

pub use config::{ConfigError, LogFormat, ServerConfig};
pub use telemetry::{TelemetryError, init_telemetry};

use crate::{
    http::{AppState, router},
    tasks::{
        adapters::{
            memory::InMemoryTaskStore,
            postgres::{PostgresTaskStore, build_pool},
        },
        ports::{TaskListRepository, TaskRepository, TaskRepositoryError},
    },
};
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Failures that stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The store could not be prepared.
    #[error("failed to prepare store: {0}")]
    Store(#[from] TaskRepositoryError),

    /// Binding or serving failed.
    #[error("server I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Validates `config`, prepares the store and serves HTTP until ctrl-c.
///
/// A `PostgreSQL` store is used when a database URL is configured; its
/// schema is migrated before the listener binds. Otherwise the in-memory
/// store is used.
///
/// # Errors
///
/// Returns [`ServerError`] when validation, store preparation, binding or
/// serving fails.
pub async fn run(config: &ServerConfig) -> Result<(), ServerError> {
    config.validate()?;

    match &config.database_url {
        Some(database_url) => {
            let pool = build_pool(database_url, config.database_max_connections)?;
            let store = PostgresTaskStore::new(pool);
            store.migrate().await?;
            info!(
                max_connections = config.database_max_connections,
                "using PostgreSQL task store"
            );
            serve(config, store).await
        }
        None => {
            warn!("no database URL configured; task data will not survive a restart");
            serve(config, InMemoryTaskStore::new()).await
        }
    }
}

async fn serve<R>(config: &ServerConfig, store: R) -> Result<(), ServerError>
where
    R: TaskListRepository + TaskRepository + 'static,
{
    let addr = config.socket_addr()?;
    let app = router(AppState::new(Arc::new(store), Arc::new(DefaultClock)));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "task list server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("task list server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
    }
}
