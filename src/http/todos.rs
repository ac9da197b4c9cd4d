//! To-do endpoints
//!
//! CRUD handlers. Each is a pass-through to the todos service; error
//! status codes come from the `IntoResponse` impl on `AppError`.

use crate::app::AppState;
use crate::database::{CreateTodoRequest, Todo, UpdateTodoRequest};
use crate::error::Result;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Confirmation body returned by delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// List all todos, most recently created first
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>> {
    let todos = state.todos.list_todos().await?;
    Ok(Json(todos))
}

/// Create a new todo
pub async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>)> {
    let todo = state.todos.create_todo(req).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// Get a todo by ID
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>> {
    let todo = state.todos.get_todo(&id).await?;
    Ok(Json(todo))
}

/// Apply a partial update to a todo
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>> {
    let todo = state.todos.update_todo(&id, req).await?;
    Ok(Json(todo))
}

/// Delete a todo
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    state.todos.delete_todo(&id).await?;
    Ok(Json(DeleteResponse {
        message: "Todo deleted".to_string(),
    }))
}
