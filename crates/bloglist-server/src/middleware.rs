use std::any::Any;
use std::time::Instant;

use axum::extract::Request;
use axum::http::{Method, Uri};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ServerError;

/// Log method, path, status and latency of every request.
///
/// Only observes; the request and response pass through untouched.
pub async fn request_logger(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}

/// Router fallback for paths no route matches.
pub async fn unknown_endpoint(method: Method, uri: Uri) -> ServerError {
    ServerError::UnknownEndpoint {
        method: method.to_string(),
        path: uri.path().to_owned(),
    }
}

/// Render a handler panic through the same error path as any other failure.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_owned()
    };
    ServerError::Internal(format!("handler panicked: {detail}")).into_response()
}
