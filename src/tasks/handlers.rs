//! HTTP handlers for the task API
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{delete, get, post, put};
use axum::Router;
use log::error;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::state::AppState;
use crate::tasks::error::TaskError;
use crate::tasks::types::CreateTaskRequest;

/// Handler for task creation
pub async fn handle_task_create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTaskRequest>,
) -> Response {
    match state.task_engine.create_task(payload).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "success": true, "message": "task created succesfully" })),
        )
            .into_response(),
        Err(err) if err.is_internal() => {
            error!("Failed to create task: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Handler for listing all tasks
pub async fn handle_task_list(State(state): State<Arc<AppState>>) -> Response {
    match state.task_engine.find_all().await {
        Ok(tasks) => (
            StatusCode::OK,
            Json(json!({ "success": true, "tasks": tasks })),
        )
            .into_response(),
        Err(err) => {
            error!("Failed to list tasks: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}

/// Handler for marking a task complete
pub async fn handle_status_update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.task_engine.complete(id).await {
        Ok(Some(_)) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Ok(None) => TaskError::NotFound.into_response(),
        Err(err) => {
            error!("Failed to update task {id}: {err}");
            err.into_response()
        }
    }
}

/// Handler for task deletion
pub async fn handle_task_delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.task_engine.delete(id).await {
        Ok(Some(task)) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Task deleted successfully",
                "task": task
            })),
        )
            .into_response(),
        Ok(None) => TaskError::NotFound.into_response(),
        Err(err) => {
            error!("Failed to delete task {id}: {err}");
            err.into_response()
        }
    }
}

pub fn configure_task_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/addtask", post(handle_task_create))
        .route("/api/tasks", get(handle_task_list))
        .route("/api/updateStatus/:id", put(handle_status_update))
        .route("/api/deleteTask/:id", delete(handle_task_delete))
}
