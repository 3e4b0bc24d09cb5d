//! Route handlers. Each one takes the shared store and delegates a single
//! call to `TodoStore`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use todo_core::{NewTodo, Todo, TodoId};

use crate::error::ServerError;
use crate::Db;

#[tracing::instrument(skip(db))]
pub async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await.list_all();
    tracing::debug!(count = todos.len(), "listed todos");
    Json(todos)
}

#[tracing::instrument(skip(db))]
pub async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<TodoId>,
) -> Result<Json<Todo>, ServerError> {
    let todo = db.read().await.get_by_id(id)?;
    tracing::debug!("found todo");
    Ok(Json(todo))
}

#[tracing::instrument(skip(db))]
pub async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), ServerError> {
    let todo = db.write().await.create(input)?;
    tracing::info!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

#[tracing::instrument(skip(db))]
pub async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<TodoId>,
) -> Result<StatusCode, ServerError> {
    let removed = db.write().await.delete_by_id(id)?;
    tracing::info!(title = %removed.title, "deleted todo");
    Ok(StatusCode::OK)
}

pub async fn health() -> &'static str {
    "ok"
}
