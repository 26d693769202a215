//! The blog controller plus the operational endpoints.
//!
//! Every handler validates its inputs before the store is touched: ids go
//! through [`BlogStore::parse_id`] and bodies through
//! [`bloglist_types::parse_draft`]. Failures are returned as [`ServerError`]
//! and rendered by its `IntoResponse` impl.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use bloglist_types::{parse_draft, Blog, BlogDraft, BlogId};

use crate::error::{ServerError, ServerResult};
use crate::router::AppState;

fn draft_from_body(payload: Result<Json<Value>, JsonRejection>) -> ServerResult<BlogDraft> {
    let Json(body) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge
        } else {
            ServerError::InvalidBody(rejection.body_text())
        }
    })?;
    Ok(parse_draft(&body)?)
}

/// An id segment axum cannot decode is as malformed as one with the wrong shape.
fn id_from_path(
    state: &AppState,
    path: Result<Path<String>, PathRejection>,
) -> ServerResult<BlogId> {
    let Path(raw_id) = path.map_err(|rejection| ServerError::MalformedId(rejection.body_text()))?;
    Ok(state.store.parse_id(&raw_id)?)
}

/// `GET /api/blogs`
pub async fn list_blogs(State(state): State<AppState>) -> ServerResult<Json<Vec<Blog>>> {
    let blogs = state.store.list_all().await?;
    Ok(Json(blogs))
}

/// `GET /api/blogs/:id`
pub async fn get_blog(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ServerResult<Json<Blog>> {
    let id = id_from_path(&state, path)?;
    match state.store.find_by_id(&id).await? {
        Some(blog) => Ok(Json(blog)),
        None => Err(ServerError::NotFound(id)),
    }
}

/// `POST /api/blogs`
pub async fn create_blog(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<Blog>)> {
    let draft = draft_from_body(payload)?;
    let blog = state.store.insert(draft).await?;
    tracing::info!(id = %blog.id, title = %blog.title, "blog created");
    Ok((StatusCode::CREATED, Json(blog)))
}

/// `PUT /api/blogs/:id`
pub async fn replace_blog(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ServerResult<Json<Blog>> {
    let id = id_from_path(&state, path)?;
    let draft = draft_from_body(payload)?;
    match state.store.replace_by_id(&id, draft).await? {
        Some(blog) => {
            tracing::info!(%id, "blog replaced");
            Ok(Json(blog))
        }
        None => Err(ServerError::NotFound(id)),
    }
}

/// `DELETE /api/blogs/:id`
///
/// Answers 204 whether or not the record existed.
pub async fn delete_blog(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ServerResult<StatusCode> {
    let id = id_from_path(&state, path)?;
    let existed = state.store.delete_by_id(&id).await?;
    tracing::info!(%id, existed, "blog deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> ServerResult<Json<Value>> {
    let blogs = state.store.count().await?;
    Ok(Json(json!({
        "name": "bloglist-server",
        "version": env!("CARGO_PKG_VERSION"),
        "backend": state.store.backend(),
        "blogs": blogs,
    })))
}
