//! HTTP handlers for the `/api` routes.
//!
//! Each handler validates its input, runs exactly one store operation on the
//! blocking pool and maps the outcome to a status code:
//!
//! - **200 OK** / **201 Created**: success
//! - **400 Bad Request**: missing field, malformed body or id, category in use
//! - **404 Not Found**: no row with that id
//! - **409 Conflict**: duplicate category name
//! - **500 Internal Server Error**: database failure

use super::dto::{CategoryPayload, HealthResponse, MessageResponse, TodoPayload};
use super::error::ApiErrorResponse;
use super::AppState;
use crate::db::categories::{Categories, Category};
use crate::db::error::StoreResult;
use crate::db::todos::Todos;
use crate::libs::messages::Message;
use crate::libs::todo::Todo;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::path::Path as FsPath;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Runs a store operation on tokio's blocking pool against the configured database.
async fn run_store<T, F>(state: &AppState, op: F) -> ApiResult<T>
where
    F: FnOnce(&FsPath) -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    let db_path = state.db_path.clone();
    tokio::task::spawn_blocking(move || op(db_path.as_path()))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "store task did not complete");
            ApiErrorResponse::internal_error()
        })?
        .map_err(ApiErrorResponse::from)
}

fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApiErrorResponse::bad_request(Message::InvalidId(raw.to_string()).to_string()))
}

// =============================================================================
// Todos
// =============================================================================

/// `GET /todos`
pub async fn list_todos(State(state): State<AppState>) -> ApiResult<Json<Vec<Todo>>> {
    let todos = run_store(&state, |db| Todos::new(db)?.list()).await?;
    Ok(Json(todos))
}

/// `GET /todos/{id}`
pub async fn get_todo(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Todo>> {
    let id = parse_id(&id)?;
    let todo = run_store(&state, move |db| Todos::new(db)?.get(id)).await?;
    Ok(Json(todo))
}

/// `POST /todos`
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let Json(payload) = payload?;
    let draft = payload.into_draft()?;

    let todo = run_store(&state, move |db| Todos::new(db)?.insert(&draft)).await?;
    tracing::info!(id = todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// `PUT /todos/{id}`
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<TodoPayload>, JsonRejection>,
) -> ApiResult<Json<Todo>> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let draft = payload.into_draft()?;

    let todo = run_store(&state, move |db| Todos::new(db)?.update(id, &draft)).await?;
    Ok(Json(todo))
}

/// `DELETE /todos/{id}`
pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    run_store(&state, move |db| Todos::new(db)?.delete(id)).await?;
    tracing::info!(id, "todo deleted");
    Ok(Json(Message::TodoDeletedSuccessfully.into()))
}

/// `PATCH /todos/{id}/toggle`
pub async fn toggle_todo(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Todo>> {
    let id = parse_id(&id)?;
    let todo = run_store(&state, move |db| Todos::new(db)?.toggle(id)).await?;
    Ok(Json(todo))
}

// =============================================================================
// Categories
// =============================================================================

/// `GET /categories`
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    let categories = run_store(&state, |db| Categories::new(db)?.list()).await?;
    Ok(Json(categories))
}

/// `GET /categories/{id}`
pub async fn get_category(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Category>> {
    let id = parse_id(&id)?;
    let category = run_store(&state, move |db| Categories::new(db)?.get(id)).await?;
    Ok(Json(category))
}

/// `POST /categories`
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CategoryPayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let Json(payload) = payload?;
    let draft = payload.into_draft()?;

    let category = run_store(&state, move |db| Categories::new(db)?.insert(&draft)).await?;
    tracing::info!(id = category.id, name = %category.name, "category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// `PUT /categories/{id}`
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CategoryPayload>, JsonRejection>,
) -> ApiResult<Json<Category>> {
    let id = parse_id(&id)?;
    let Json(payload) = payload?;
    let draft = payload.into_draft()?;

    let category = run_store(&state, move |db| Categories::new(db)?.update(id, &draft)).await?;
    Ok(Json(category))
}

/// `DELETE /categories/{id}`
pub async fn delete_category(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    run_store(&state, move |db| Categories::new(db)?.delete(id)).await?;
    tracing::info!(id, "category deleted");
    Ok(Json(Message::CategoryDeletedSuccessfully.into()))
}

/// `GET /categories/{id}/todos`
pub async fn list_category_todos(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Vec<Todo>>> {
    let id = parse_id(&id)?;
    let todos = run_store(&state, move |db| Todos::new(db)?.list_by_category(id)).await?;
    Ok(Json(todos))
}

// =============================================================================
// Health
// =============================================================================

/// `GET /health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: Message::ApiRunning.to_string(),
    })
}
