use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::params::RgbBody;
use crate::error::ApiError;
use crate::models::{SessionId, SessionSnapshot};
use crate::services::{SessionAction, SessionStore};

async fn apply<S: SessionStore + 'static>(
    store: &S,
    id: String,
    action: SessionAction,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let id = SessionId::new(id);
    let session = store.apply(&id, action).await?;
    Ok(Json(SessionSnapshot::new(id, &session)))
}

/// Start a picker session
///
/// A session holds the hovered and selected colors of one loaded image and
/// the history of recent selections.
#[utoipa::path(
    post,
    path = "/api/sessions",
    responses(
        (status = 201, description = "Session created", body = SessionSnapshot),
    ),
    tag = "Session"
)]
pub async fn handle_create_session<S: SessionStore + 'static>(
    State(store): State<Arc<S>>,
) -> Result<impl IntoResponse, ApiError> {
    let id = store.create().await?;
    let session = store.find(&id).await?.ok_or(ApiError::SessionNotFound)?;

    tracing::info!(session = %id, "Picker session started");
    Ok((
        StatusCode::CREATED,
        Json(SessionSnapshot::new(id, &session)),
    ))
}

/// Get a picker session
#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    responses(
        (status = 200, description = "Session snapshot", body = SessionSnapshot),
        (status = 404, description = "Session not found"),
    ),
    params(("id" = String, Path, description = "Session id")),
    tag = "Session"
)]
pub async fn handle_get_session<S: SessionStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let id = SessionId::new(id);
    let session = store.find(&id).await?.ok_or(ApiError::SessionNotFound)?;
    Ok(Json(SessionSnapshot::new(id, &session)))
}

/// Report the color under the pointer
///
/// Send `null` when the pointer leaves the image.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/hover",
    request_body(content = RgbBody, description = "Hovered color, or null"),
    responses(
        (status = 200, description = "Session snapshot", body = SessionSnapshot),
        (status = 404, description = "Session not found"),
    ),
    params(("id" = String, Path, description = "Session id")),
    tag = "Session"
)]
pub async fn handle_hover<S: SessionStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    Json(body): Json<Option<RgbBody>>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    apply(store.as_ref(), id, SessionAction::Hover(body.map(Into::into))).await
}

/// Select a color
///
/// Pins the color and records it at the front of the history.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/select",
    request_body = RgbBody,
    responses(
        (status = 200, description = "Session snapshot", body = SessionSnapshot),
        (status = 404, description = "Session not found"),
    ),
    params(("id" = String, Path, description = "Session id")),
    tag = "Session"
)]
pub async fn handle_select<S: SessionStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    Json(body): Json<RgbBody>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    apply(store.as_ref(), id, SessionAction::Select(body.into())).await
}

/// Select a history entry
///
/// Pins the entry at `index` (0 = most recent) without reordering the history.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/history/{index}",
    responses(
        (status = 200, description = "Session snapshot", body = SessionSnapshot),
        (status = 400, description = "History index out of range"),
        (status = 404, description = "Session not found"),
    ),
    params(
        ("id" = String, Path, description = "Session id"),
        ("index" = usize, Path, description = "History position, 0 = most recent"),
    ),
    tag = "Session"
)]
pub async fn handle_select_history<S: SessionStore + 'static>(
    State(store): State<Arc<S>>,
    Path((id, index)): Path<(String, usize)>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    apply(store.as_ref(), id, SessionAction::SelectFromHistory(index)).await
}

/// Clear the selection
///
/// The hovered color becomes active again. History is kept.
#[utoipa::path(
    delete,
    path = "/api/sessions/{id}/selection",
    responses(
        (status = 200, description = "Session snapshot", body = SessionSnapshot),
        (status = 404, description = "Session not found"),
    ),
    params(("id" = String, Path, description = "Session id")),
    tag = "Session"
)]
pub async fn handle_clear_selection<S: SessionStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    apply(store.as_ref(), id, SessionAction::ClearSelection).await
}

/// Reset a session
///
/// Clears hover, selection and history, as when a new image is loaded.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/reset",
    responses(
        (status = 200, description = "Session snapshot", body = SessionSnapshot),
        (status = 404, description = "Session not found"),
    ),
    params(("id" = String, Path, description = "Session id")),
    tag = "Session"
)]
pub async fn handle_reset<S: SessionStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    apply(store.as_ref(), id, SessionAction::Reset).await
}

/// Delete a session
#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    responses(
        (status = 204, description = "Session deleted"),
        (status = 404, description = "Session not found"),
    ),
    params(("id" = String, Path, description = "Session id")),
    tag = "Session"
)]
pub async fn handle_delete_session<S: SessionStore + 'static>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = SessionId::new(id);
    if !store.remove(&id).await? {
        return Err(ApiError::SessionNotFound);
    }

    tracing::info!(session = %id, "Picker session ended");
    Ok(StatusCode::NO_CONTENT)
}
