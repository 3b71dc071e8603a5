mod cors;
mod health;
mod ocr;

use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use wayfinder_config::{API_KEY_ENV, Config};

pub use ocr::OCR_UNSUPPORTED;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// A missing API key does not prevent startup; the AI endpoints report it
    /// per request instead.
    pub fn new(config: &Config) -> Self {
        let listen_address = config.server.listen_address_or_default();

        if !config.provider.has_api_key() {
            tracing::warn!("{API_KEY_ENV} not found in environment variables; AI endpoints will fail until it is set");
        }

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Offline OCR stub
        app = app.route("/api/ocr", axum::routing::post(ocr::ocr_handler));

        // Feature routes
        app = app.merge(stt::endpoint_router().with_state(stt::build_server(config)));
        app = app.merge(vision::endpoint_router().with_state(vision::build_server(config)));
        app = app.merge(tts::endpoint_router().with_state(tts::build_server(config)));

        // Apply middleware layers (innermost first)
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

    /// Override the listen address (e.g. from the command line)
    #[must_use]
    pub fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
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
