//! JSON API handlers for the task collection.
//!
//! Thin layer between the REST surface and the task store: extract, call,
//! encode. Status codes follow the resource contract — 201 on create, 204 on
//! delete, 404 with a `{"detail": ...}` body for unknown ids.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use taskdeck_core::store::StoreError;
use taskdeck_core::{Task, TaskDraft, TaskId};
use tracing::{error, info};

use crate::server::AppState;

/// Store failure mapped onto an HTTP response.
pub struct ApiFailure(StoreError);

impl From<StoreError> for ApiFailure {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        match self.0 {
            StoreError::TaskNotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(json!({"detail": "Task not found"})),
            )
                .into_response(),
            err => {
                error!("task store failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"detail": "Internal server error"})),
                )
                    .into_response()
            }
        }
    }
}

/// `GET /api/tasks` - returns every task.
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiFailure> {
    let tasks = state.store.read().await.all().await?;
    Ok(Json(tasks))
}

/// `GET /api/tasks/{id}` - returns one task, 404 when absent.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<Task>, ApiFailure> {
    let task = state.store.read().await.find(id).await?;
    Ok(Json(task))
}

/// `POST /api/tasks` - stores a new task and returns it with 201.
///
/// The server assigns `id` and `created_at`; anything the client sends for
/// those fields is ignored because the draft simply does not carry them.
pub async fn create_task(
    State(state): State<AppState>,
    Json(draft): Json<TaskDraft>,
) -> Result<(StatusCode, Json<Task>), ApiFailure> {
    let task = state.store.write().await.insert(draft).await?;
    info!(id = %task.id, title = %task.title, "created task");
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /api/tasks/{id}` - replaces a task wholesale, 404 when absent.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    Json(draft): Json<TaskDraft>,
) -> Result<Json<Task>, ApiFailure> {
    let task = state.store.write().await.replace(id, draft).await?;
    info!(id = %task.id, "replaced task");
    Ok(Json(task))
}

/// `DELETE /api/tasks/{id}` - deletes a task, 204 on success, 404 when
/// absent.
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<StatusCode, ApiFailure> {
    state.store.write().await.remove(id).await?;
    info!(id = %id, "deleted task");
    Ok(StatusCode::NO_CONTENT)
}
