//! Request handlers translating HTTP calls into planner operations.

use super::{
    dto::{DateStatusQuery, Envelope, SearchQuery, StatusQuery, TaskPayload, TaskResponse},
    error::ApiError,
};
use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::TaskRepository,
    services::TaskPlannerService,
};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use mockable::Clock;
use std::sync::Arc;

/// Planner service shared between handlers.
pub type SharedPlanner<R, C> = Arc<TaskPlannerService<R, C>>;

type TaskReply = Json<Envelope<TaskResponse>>;
type TaskListReply = Json<Envelope<Vec<TaskResponse>>>;

fn task_reply(task: Task) -> TaskReply {
    Json(Envelope::success(task.into()))
}

fn task_list_reply(tasks: Vec<Task>) -> TaskListReply {
    Json(Envelope::success(
        tasks.into_iter().map(TaskResponse::from).collect(),
    ))
}

fn task_id(path: Result<Path<String>, PathRejection>) -> Result<TaskId, ApiError> {
    let Path(raw) = path?;
    Ok(raw.parse::<TaskId>()?)
}

/// `POST /task`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed bodies and planner failures.
pub async fn create_task<R, C>(
    State(service): State<SharedPlanner<R, C>>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<(StatusCode, TaskReply), ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(body) = payload?;
    let task = service.create_task(&body.into_draft()).await?;
    Ok((StatusCode::CREATED, task_reply(task)))
}

/// `GET /task/{id}`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed ids and planner failures.
pub async fn get_task<R, C>(
    State(service): State<SharedPlanner<R, C>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<TaskReply, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = task_id(path)?;
    let task = service.get_task(id).await?;
    Ok(task_reply(task))
}

/// `GET /task?text=...`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed queries and planner failures.
pub async fn search_tasks<R, C>(
    State(service): State<SharedPlanner<R, C>>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<TaskListReply, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(params) = query?;
    let tasks = service.search_tasks(&params.text).await?;
    Ok(task_list_reply(tasks))
}

/// `PUT /task/{id}`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed requests and planner failures.
pub async fn update_task<R, C>(
    State(service): State<SharedPlanner<R, C>>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<TaskReply, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = task_id(path)?;
    let Json(body) = payload?;
    let task = service.update_task(id, &body.into_draft()).await?;
    Ok(task_reply(task))
}

/// `DELETE /task/{id}`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed ids and planner failures.
pub async fn delete_task<R, C>(
    State(service): State<SharedPlanner<R, C>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Envelope<()>>, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = task_id(path)?;
    service.delete_task(id).await?;
    Ok(Json(Envelope::empty()))
}

/// `GET /task/by_status?status=...&limit=...&offset=...`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed queries and planner failures.
pub async fn list_by_status<R, C>(
    State(service): State<SharedPlanner<R, C>>,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> Result<TaskListReply, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(params) = query?;
    let tasks = service
        .list_by_status(TaskStatus::from_done(params.status), params.limit, params.offset)
        .await?;
    Ok(task_list_reply(tasks))
}

/// `GET /task/by_date?year=...&month=...&day=...&status=...`
///
/// # Errors
///
/// Returns [`ApiError`] for malformed queries and planner failures.
pub async fn list_by_date_and_status<R, C>(
    State(service): State<SharedPlanner<R, C>>,
    query: Result<Query<DateStatusQuery>, QueryRejection>,
) -> Result<TaskListReply, ApiError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(params) = query?;
    let tasks = service
        .list_by_date_and_status(params.planning_date(), TaskStatus::from_done(params.status))
        .await?;
    Ok(task_list_reply(tasks))
}
