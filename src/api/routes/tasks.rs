//! Handlers for the `/api/v1/tasks` routes.
//!
//! Handlers validate boundary concerns (status tokens, pagination
//! bounds) before delegating to the lifecycle service, and translate
//! absent tasks into `404` responses.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use mockable::Clock;
use uuid::Uuid;

use crate::api::error::ApiErrorResponse;
use crate::api::schemas::{
    CreateTaskBody, ListTasksQuery, TaskListResponse, TaskResponse, UpdateTaskBody,
};
use crate::api::state::ApiState;
use crate::task::domain::{TaskId, TaskStatus};
use crate::task::ports::TaskStore;
use crate::task::services::{CreateTaskRequest, UpdateTaskRequest};

/// Inclusive bounds accepted for the `limit` query parameter.
const LIMIT_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// `POST /api/v1/tasks` creates a task and returns it with `201`.
pub async fn create_task<S, C>(
    State(state): State<ApiState<S, C>>,
    Json(body): Json<CreateTaskBody>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiErrorResponse>
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let initial_status = parse_status_token(body.status.as_deref())?;

    let mut request = CreateTaskRequest::new(body.title, body.description);
    if let Some(status) = initial_status {
        request = request.with_status(status);
    }

    let task = state.service.create_task(request).await?;
    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// `GET /api/v1/tasks/{id}` returns a single task or `404`.
pub async fn get_task<S, C>(
    State(state): State<ApiState<S, C>>,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskResponse>, ApiErrorResponse>
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = TaskId::from_uuid(id);
    let task = state
        .service
        .get_task(task_id)
        .await?
        .ok_or_else(|| ApiErrorResponse::task_not_found(task_id))?;

    Ok(Json(TaskResponse::from(task)))
}

/// `GET /api/v1/tasks` returns a page of tasks, newest first.
pub async fn list_tasks<S, C>(
    State(state): State<ApiState<S, C>>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<TaskListResponse>, ApiErrorResponse>
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    if !LIMIT_RANGE.contains(&query.limit) {
        return Err(ApiErrorResponse::validation(format!(
            "limit must be between 1 and 100, got {}",
            query.limit
        )));
    }

    let status_filter = parse_status_token(query.status.as_deref())?;
    let page = state
        .service
        .list_tasks(status_filter, query.skip, query.limit)
        .await?;

    Ok(Json(TaskListResponse::from_page(page, query.skip, query.limit)))
}

/// `PUT /api/v1/tasks/{id}` applies a partial update or returns `404`.
pub async fn update_task<S, C>(
    State(state): State<ApiState<S, C>>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTaskBody>,
) -> Result<Json<TaskResponse>, ApiErrorResponse>
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = TaskId::from_uuid(id);
    let new_status = parse_status_token(body.status.as_deref())?;

    let mut request = UpdateTaskRequest::new();
    if let Some(title) = body.title {
        request = request.with_title(title);
    }
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(status) = new_status {
        request = request.with_status(status);
    }

    let task = state
        .service
        .update_task(task_id, request)
        .await?
        .ok_or_else(|| ApiErrorResponse::task_not_found(task_id))?;

    Ok(Json(TaskResponse::from(task)))
}

/// `DELETE /api/v1/tasks/{id}` removes a task, returning `204` or `404`.
pub async fn delete_task<S, C>(
    State(state): State<ApiState<S, C>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiErrorResponse>
where
    S: TaskStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task_id = TaskId::from_uuid(id);
    let removed = state.service.delete_task(task_id).await?;
    if !removed {
        return Err(ApiErrorResponse::task_not_found(task_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Parses an optional status token, rejecting unknown values with `422`.
fn parse_status_token(token: Option<&str>) -> Result<Option<TaskStatus>, ApiErrorResponse> {
    token
        .map(TaskStatus::try_from)
        .transpose()
        .map_err(|parse_error| ApiErrorResponse::validation(parse_error.to_string()))
}
