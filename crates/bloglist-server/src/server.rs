use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use bloglist_store::BlogStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::{build_router, AppState};

/// The bloglist HTTP server.
pub struct BloglistServer {
    config: ServerConfig,
    store: Arc<dyn BlogStore>,
}

impl BloglistServer {
    pub fn new(config: ServerConfig, store: Arc<dyn BlogStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(
            AppState::new(Arc::clone(&self.store)).with_body_limit(self.config.max_body_bytes),
        )
    }

    /// Serve requests until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        self.serve_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Serve requests until `shutdown` resolves, then drain in-flight ones.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            addr = %listener.local_addr()?,
            backend = self.store.backend(),
            "bloglist server listening"
        );
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        tracing::info!("bloglist server stopped");
        Ok(())
    }
}
