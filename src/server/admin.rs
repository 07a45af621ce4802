//! Admin endpoints behind the session gate.

use axum::body::Bytes;
use axum::extract::{Path, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::query::{self, Dashboard, Order};
use crate::content::{BlogPost, Category, Entity, EntityKind, Product, Record, StoredBlob};

use super::error::{ApiError, ApiResult};
use super::AppState;

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())
}

/// Rejects requests without a live session token.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    state.sessions.authorize(bearer(request.headers()))?;
    Ok(next.run(request).await)
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let token = state.sessions.login(&body.password)?;
    Ok(Json(LoginResponse { token }))
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = bearer(&headers).and_then(|h| h.strip_prefix("Bearer ")) {
        state.sessions.logout(token.trim());
    }
    StatusCode::NO_CONTENT
}

pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Json<Dashboard>> {
    Ok(Json(query::dashboard(state.store.as_ref())?))
}

/// Admin lists: newest first, blog posts by publication date.
pub async fn list(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> ApiResult<Json<Vec<Record>>> {
    let store = state.store.as_ref();
    let records = match kind.parse::<EntityKind>()? {
        EntityKind::Category => query::categories(store, Order::Descending)?,
        EntityKind::Product => query::products(store)?,
        EntityKind::BlogPost => query::blog_posts(store)?,
    };
    Ok(Json(records))
}

/// Parses an untagged admin form body as the entity for `kind`.
fn entity_from_json(kind: EntityKind, body: serde_json::Value) -> ApiResult<Entity> {
    let invalid = |err: serde_json::Error| ApiError::InvalidRequest(err.to_string());
    Ok(match kind {
        EntityKind::Category => serde_json::from_value::<Category>(body).map_err(invalid)?.into(),
        EntityKind::Product => serde_json::from_value::<Product>(body).map_err(invalid)?.into(),
        EntityKind::BlogPost => serde_json::from_value::<BlogPost>(body).map_err(invalid)?.into(),
    })
}

pub async fn create(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let entity = entity_from_json(kind.parse()?, body)?;
    let record = state.store.create(entity)?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn get(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, Uuid)>,
) -> ApiResult<Json<Record>> {
    Ok(Json(state.store.get(kind.parse()?, id)?))
}

pub async fn update(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, Uuid)>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Json<Record>> {
    let kind: EntityKind = kind.parse()?;
    state.store.get(kind, id)?;
    let entity = entity_from_json(kind, body)?;
    Ok(Json(state.store.update(id, entity)?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, Uuid)>,
) -> ApiResult<StatusCode> {
    state.store.delete(kind.parse()?, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Raw-body upload stored under the collection's media folder.
pub async fn upload(
    State(state): State<AppState>,
    Path((kind, filename)): Path<(String, String)>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<StoredBlob>)> {
    let kind: EntityKind = kind.parse()?;
    let blob = state.blobs.put(kind.as_str(), &filename, &body)?;
    Ok((StatusCode::CREATED, Json(blob)))
}
