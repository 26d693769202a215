//! HTTP server for the bloglist service.
//!
//! Exposes the `/api/blogs` REST resource over any [`bloglist_store::BlogStore`],
//! wrapped in request logging, an unknown-endpoint fallback and a single
//! error-to-response mapping.

pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ErrorBody, ServerError, ServerResult};
pub use handler::HealthResponse;
pub use router::{build_router, endpoints, AppState};
pub use server::BloglistServer;
