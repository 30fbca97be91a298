//! # Bootstrap
//!
//! Startup wiring: logging, stores, seed data, services, clients and the
//! HTTP server.

use crate::api::rest::{AppState, create_router};
use crate::application::error::ApplicationError;
use crate::application::services::{CatalogSeed, CatalogService, TourRatingService};
use crate::config::{AppConfig, LoggingConfig};
use crate::infrastructure::clients::{ClientError, GuestClient, HttpClient, RoomClient};
use crate::infrastructure::persistence::in_memory::{
    InMemoryTourPackageRepository, InMemoryTourRatingRepository, InMemoryTourRepository,
};
use crate::infrastructure::persistence::postgres::{
    self, PostgresTourPackageRepository, PostgresTourRatingRepository, PostgresTourRepository,
};
use crate::infrastructure::persistence::{
    RepositoryError, TourPackageRepository, TourRatingRepository, TourRepository,
};
use std::sync::Arc;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while starting the service.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Configuration could not be read.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Store connection or schema setup failed.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),

    /// A remote client could not be built.
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// Seeding failed.
    #[error("seed error: {0}")]
    Application(#[from] ApplicationError),

    /// The seed file could not be read.
    #[error("cannot read seed file {path}: {source}")]
    SeedFile {
        /// Seed file path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The seed file is not valid JSON.
    #[error("invalid seed file {path}: {source}")]
    SeedFormat {
        /// Seed file path.
        path: String,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// Logging was already initialised.
    #[error("tracing error: {0}")]
    Tracing(String),

    /// Listener or server failure.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for startup.
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Installs the global tracing subscriber. `RUST_LOG` wins over the
/// configured level.
///
/// # Errors
///
/// Returns `BootstrapError::Tracing` if a subscriber is already installed.
pub fn init_tracing(logging: &LoggingConfig) -> BootstrapResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| BootstrapError::Tracing(e.to_string()))
}

struct Stores {
    tours: Arc<dyn TourRepository>,
    packages: Arc<dyn TourPackageRepository>,
    ratings: Arc<dyn TourRatingRepository>,
}

async fn build_stores(config: &AppConfig) -> BootstrapResult<Stores> {
    match &config.database.url {
        Some(url) => {
            let pool = postgres::connect(url, config.database.max_connections).await?;
            postgres::ensure_schema(&pool).await?;
            tracing::info!("using PostgreSQL stores");
            Ok(Stores {
                tours: Arc::new(PostgresTourRepository::new(pool.clone())),
                packages: Arc::new(PostgresTourPackageRepository::new(pool.clone())),
                ratings: Arc::new(PostgresTourRatingRepository::new(pool)),
            })
        }
        None => {
            tracing::info!("no database configured, using in-memory stores");
            Ok(Stores {
                tours: Arc::new(InMemoryTourRepository::new()),
                packages: Arc::new(InMemoryTourPackageRepository::new()),
                ratings: Arc::new(InMemoryTourRatingRepository::new()),
            })
        }
    }
}

/// Reads a catalog seed from a JSON file.
///
/// # Errors
///
/// Returns `SeedFile` or `SeedFormat` if the file is unreadable or malformed.
pub async fn load_seed(path: &str) -> BootstrapResult<CatalogSeed> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| BootstrapError::SeedFile {
            path: path.to_string(),
            source,
        })?;
    serde_json::from_str(&text).map_err(|source| BootstrapError::SeedFormat {
        path: path.to_string(),
        source,
    })
}

/// Builds the shared handler state from configuration.
///
/// # Errors
///
/// Returns an error if the stores, the seed or the clients cannot be set up.
pub async fn build_state(config: &AppConfig) -> BootstrapResult<AppState> {
    let stores = build_stores(config).await?;

    let catalog_service = CatalogService::new(stores.tours.clone(), stores.packages);
    if let Some(path) = &config.seed.file {
        let seed = load_seed(path).await?;
        catalog_service.seed(&seed).await?;
    }
    let rating_service = TourRatingService::new(stores.tours, stores.ratings);

    let services = &config.services;
    let guests = GuestClient::new(HttpClient::new(
        GuestClient::SERVICE_NAME,
        services.guest_url.as_str(),
        services.timeout_ms,
    )?);
    let rooms = RoomClient::new(HttpClient::new(
        RoomClient::SERVICE_NAME,
        services.room_url.as_str(),
        services.timeout_ms,
    )?);

    Ok(AppState {
        rating_service,
        catalog_service,
        guests: Arc::new(guests),
        rooms: Arc::new(rooms),
    })
}

/// Builds the state and serves HTTP until Ctrl-C.
///
/// # Errors
///
/// Returns an error if startup fails or the listener cannot be bound.
pub async fn run(config: AppConfig) -> BootstrapResult<()> {
    let state = build_state(&config).await?;
    let router = create_router(Arc::new(state));

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "tour ratings service listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
