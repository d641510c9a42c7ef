//! Task REST routes — the five operations over the task store.
//!
//! Each handler invokes exactly one store operation and translates the
//! outcome via `ApiError`. The empty-body gate runs before the store is
//! touched; no field validation happens here.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use std::sync::Arc;

use crate::rest::error::ApiError;
use crate::store::{Task, TaskInput};
use crate::AppContext;

/// Reject absent or empty bodies before the store sees them. Zero bytes,
/// a non-JSON content type, or a bare `{}` all mean the client sent no
/// usable data — a transport problem, not a validation one, so it gets
/// its own envelope code. Malformed JSON is the client's data being
/// wrong, which is a validation failure.
fn require_body(headers: &HeaderMap, body: &Bytes) -> Result<TaskInput, ApiError> {
    if body.is_empty() || !has_json_content_type(headers) {
        return Err(ApiError::MissingBody);
    }

    let input: TaskInput = serde_json::from_slice(body)
        .map_err(|e| ApiError::MalformedBody(format!("Failed to parse request body as JSON: {e}")))?;
    if input.is_empty() {
        return Err(ApiError::MissingBody);
    }
    Ok(input)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/json"))
        .unwrap_or(false)
}

pub async fn list_tasks(State(ctx): State<Arc<AppContext>>) -> Json<Vec<Task>> {
    Json(ctx.store.list().await)
}

pub async fn get_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let task = ctx.store.get(&id).await?;
    Ok(Json(task))
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let input = require_body(&headers, &body)?;
    let task = ctx.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Task>, ApiError> {
    let input = require_body(&headers, &body)?;
    let task = ctx.store.update(&id, input).await?;
    Ok(Json(task))
}

pub async fn toggle_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let task = ctx.store.toggle(&id).await?;
    Ok(Json(task))
}

pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    ctx.store.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
