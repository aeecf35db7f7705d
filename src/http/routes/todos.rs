use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::application::todo_service::TodoService;
use crate::domain::error::TodoError;
use crate::domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo};
use crate::http::types::Confirmation;

#[derive(Clone)]
pub struct AppState<S: TodoService> {
    pub service: S,
}

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", get(list_todos::<S>).post(create_todo::<S>))
        .route(
            "/todos/:id",
            get(get_todo::<S>).patch(update_todo::<S>).delete(delete_todo::<S>),
        )
        .with_state(state)
}

async fn list_todos<S: TodoService>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Todo>>, TodoError> {
    Ok(Json(state.service.list().await?))
}

async fn create_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Json(payload): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), TodoError> {
    let todo = state.service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, TodoError> {
    let id: TodoId = id.parse()?;
    Ok(Json(state.service.get(id).await?))
}

async fn update_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTodo>,
) -> Result<Json<Todo>, TodoError> {
    let id: TodoId = id.parse()?;
    Ok(Json(state.service.update(id, payload).await?))
}

async fn delete_todo<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Confirmation>, TodoError> {
    let id: TodoId = id.parse()?;
    state.service.delete(id).await?;
    Ok(Json(Confirmation { message: "Todo deleted".into() }))
}
