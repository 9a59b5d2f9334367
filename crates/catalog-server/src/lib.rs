#![allow(clippy::must_use_candidate)]

mod categories;
mod extract;
mod health;
mod instrument;
mod normalize;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use catalog_config::Config;
use catalog_store::{CategoryStore, MemoryStore};
use tower_http::trace::TraceLayer;

pub use categories::SharedStore;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration, backed by the in-memory store
    pub fn new(config: &Config) -> Self {
        Self::with_store(config, Arc::new(MemoryStore::new()))
    }

    /// Build the server with an explicit store backend
    pub fn with_store(config: &Config, store: Arc<dyn CategoryStore>) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Category routes
        app = app.merge(categories::router(store));

        // Apply middleware layers (innermost first)

        // Handler instrumentation (start/args/duration/end records per call)
        app = app.layer(axum::middleware::from_fn(instrument::instrument_handlers));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // Error normalization (outermost, the single failure translation point)
        app = app.layer(axum::middleware::from_fn(normalize::normalize_failures));

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
