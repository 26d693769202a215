use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{middleware, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use bloglist_store::BlogStore;

use crate::config::ServerConfig;
use crate::handler;
use crate::middleware::{panic_response, request_logger, unknown_endpoint};

/// HTTP endpoint paths.
pub mod endpoints {
    pub const BLOGS: &str = "/api/blogs";
    pub const BLOG: &str = "/api/blogs/:id";
    pub const HEALTH: &str = "/health";
    pub const INFO: &str = "/info";
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlogStore>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn BlogStore>) -> Self {
        Self {
            store,
            max_body_bytes: ServerConfig::default().max_body_bytes,
        }
    }

    pub fn with_body_limit(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

/// Build the axum router with all bloglist endpoints.
///
/// Pipeline, outermost first: tracing span, CORS, request logger, panic
/// catcher, body limit, routes, and the unknown-endpoint fallback (which
/// also answers unsupported methods on known paths). Every
/// failure on the way is a `ServerError` rendered by its `IntoResponse` impl.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;
    Router::new()
        .route(
            endpoints::BLOGS,
            get(handler::list_blogs)
                .post(handler::create_blog)
                .fallback(unknown_endpoint),
        )
        .route(
            endpoints::BLOG,
            get(handler::get_blog)
                .put(handler::replace_blog)
                .delete(handler::delete_blog)
                .fallback(unknown_endpoint),
        )
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .fallback(unknown_endpoint)
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(request_logger))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
