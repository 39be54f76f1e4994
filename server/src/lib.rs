//! HTTP front end for `TodoStore`.
//!
//! Every handler takes the one shared lock, calls a single store operation and
//! maps the outcome to a status code. Readers (`GET`) share the lock; anything
//! that assigns ids or removes records takes it exclusively, which keeps the
//! store's counters consistent under concurrent requests.
//!
//! Extractors are taken as `Result` so a malformed query, path or body is
//! answered through `AppError` with the same `{"error": ...}` body as every
//! other rejection.

pub mod config;
pub mod demo;
pub mod error;
pub mod telemetry;

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use todo_core::{NewTask, NewTodo, Page, StoreError, Todo, TodoStore};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{info, warn};

pub use error::AppError;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 2000;

pub type Db = Arc<RwLock<TodoStore>>;

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// Router over a fresh, empty store.
pub fn app() -> Router {
    app_with_store(TodoStore::new())
}

pub fn app_with_store(store: TodoStore) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).delete(delete_todo))
        .route("/todos/{id}/tasks", post(add_task))
        .route("/tasks/{id}", delete(delete_task))
        .with_state(db)
}

/// Serve a fresh, empty store until the process exits.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve `store` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, store: TodoStore, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app_with_store(store))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn list_todos(
    State(db): State<Db>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Page<Todo>>, AppError> {
    let Query(params) = params?;
    let page = params.page.unwrap_or(0);
    let size = params.size.unwrap_or(DEFAULT_PAGE_SIZE);
    if size == 0 || size > MAX_PAGE_SIZE {
        warn!(size, "rejected page size");
        return Err(AppError::InvalidPage(format!(
            "size must be between 1 and {MAX_PAGE_SIZE}"
        )));
    }
    let todos = db.read().await;
    Ok(Json(todos.page(page, size)))
}

async fn create_todo(
    State(db): State<Db>,
    input: Result<Json<NewTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let Json(input) = input?;
    validate_todo(&input)?;
    let mut todos = db.write().await;
    let todo = todos.create(input).clone();
    info!(todo_id = todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Todo>, AppError> {
    let Path(id) = id?;
    let todos = db.read().await;
    todos
        .find(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| StoreError::todo_not_found(id).into())
}

async fn add_task(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
    input: Result<Json<NewTask>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let Path(id) = id?;
    let Json(input) = input?;
    let mut todos = db.write().await;
    let todo = todos.add_task(id, input)?.clone();
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn delete_todo(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    db.write().await.delete(id)?;
    info!(todo_id = id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_task(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    db.write().await.delete_task(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Author and details are required and must contain more than whitespace.
fn validate_todo(input: &NewTodo) -> Result<(), AppError> {
    for (field, value) in [("author", &input.author), ("details", &input.details)] {
        if value.trim().is_empty() {
            warn!(field, "rejected todo");
            return Err(AppError::Validation(format!("{field} must not be blank")));
        }
    }
    Ok(())
}
