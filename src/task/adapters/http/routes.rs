//! Route table for the task API.

use super::handlers::{self, SharedPlanner};
use crate::task::ports::TaskRepository;
use axum::Router;
use axum::routing::{get, post};
use mockable::Clock;
use tower_http::trace::TraceLayer;

/// Path prefix under which every task route is mounted.
pub const API_PREFIX: &str = "/todo-list/api";

/// Creates the task API router.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use dayplanner::task::adapters::{http::task_router, memory::InMemoryTaskRepository};
/// use dayplanner::task::services::TaskPlannerService;
/// use mockable::DefaultClock;
///
/// let service = TaskPlannerService::new(
///     Arc::new(InMemoryTaskRepository::new()),
///     Arc::new(DefaultClock),
/// );
/// let router = task_router(Arc::new(service));
/// # let _ = router;
/// ```
pub fn task_router<R, C>(service: SharedPlanner<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let api = Router::new()
        .route(
            "/task",
            post(handlers::create_task::<R, C>).get(handlers::search_tasks::<R, C>),
        )
        .route("/task/by_status", get(handlers::list_by_status::<R, C>))
        .route(
            "/task/by_date",
            get(handlers::list_by_date_and_status::<R, C>),
        )
        .route(
            "/task/{id}",
            get(handlers::get_task::<R, C>)
                .put(handlers::update_task::<R, C>)
                .delete(handlers::delete_task::<R, C>),
        )
        .with_state(service);

    Router::new()
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
}
