//! HTTP surface for the Aether control plane
//!
//! Routes live under `/api`: resource CRUD for projects, sinks, and
//! agents, plus per-agent token rotation and config generation.

mod agents;
mod cors;
mod error;
mod health;
mod projects;
mod sinks;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use aether_config::Config;
use aether_store::MemoryStore;
use axum::{Router, routing};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration with a fresh store
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_store(config, Arc::new(MemoryStore::new()))
    }

    /// Build the server around an existing store
    #[must_use]
    pub fn with_store(config: &Config, store: Arc<MemoryStore>) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)));

        let mut api = Router::new()
            .route("/", routing::get(health::root_handler))
            .route("/projects", routing::post(projects::create).get(projects::list))
            .route("/projects/{id}", routing::get(projects::get))
            .route("/sinks", routing::post(sinks::create).get(sinks::list))
            .route("/sinks/{id}", routing::get(sinks::get))
            .route("/agents", routing::post(agents::create).get(agents::list))
            .route("/agents/{id}", routing::get(agents::get))
            .route("/agents/{id}/rotate-token", routing::post(agents::rotate_token))
            .route("/agents/{id}/config", routing::get(agents::generate_config));

        if config.server.health.enabled {
            api = api.route(&config.server.health.path, routing::get(health::health_handler));
        }

        let mut app = Router::new()
            .nest("/api", api)
            .with_state(AppState { store });

        app = app.layer(TraceLayer::new_for_http());

        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
