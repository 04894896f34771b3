//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{TaskContentRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{PlanningDate, Task, TaskDraft, TaskId, TaskStatus},
    ports::{Pagination, TaskRepository, TaskRepositoryError, TaskRepositoryResult, TextMatch},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use thiserror::Error;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
///
/// Diesel calls are synchronous and run on the blocking thread pool. If the
/// caller drops the returned future, the in-flight statement still
/// completes but its result is discarded.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
    text_match: TextMatch,
}

/// A planning date that `PostgreSQL` cannot represent.
#[derive(Debug, Error)]
#[error("planning date {0} cannot be stored")]
struct UnrepresentableDate(PlanningDate);

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub fn new(pool: TaskPgPool) -> Self {
        Self {
            pool,
            text_match: TextMatch::default(),
        }
    }

    /// Sets the text search semantics.
    #[must_use]
    pub fn with_text_match(mut self, text_match: TextMatch) -> Self {
        self.text_match = text_match;
        self
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let row = to_content_row(draft)?;
        let inserted = self
            .run_blocking(move |connection| {
                diesel::insert_into(tasks::table)
                    .values(&row)
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(connection)
                    .map_err(TaskRepositoryError::persistence)
            })
            .await?;
        row_to_task(inserted)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Task> {
        let row = self
            .run_blocking(move |connection| {
                tasks::table
                    .find(id.value())
                    .select(TaskRow::as_select())
                    .first::<TaskRow>(connection)
                    .optional()
                    .map_err(TaskRepositoryError::persistence)
            })
            .await?;
        row.map_or(Err(TaskRepositoryError::NotFound(id)), row_to_task)
    }

    async fn search_by_text(&self, text: &str) -> TaskRepositoryResult<Vec<Task>> {
        let pattern = like_pattern(text, self.text_match);
        let rows = self
            .run_blocking(move |connection| {
                tasks::table
                    .filter(
                        tasks::title
                            .ilike(pattern.clone())
                            .or(tasks::description.ilike(pattern)),
                    )
                    .order(tasks::id.asc())
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection)
                    .map_err(TaskRepositoryError::persistence)
            })
            .await?;
        rows.into_iter().map(row_to_task).collect()
    }

    async fn update(&self, id: TaskId, draft: &TaskDraft) -> TaskRepositoryResult<Task> {
        let row = to_content_row(draft)?;
        let updated = self
            .run_blocking(move |connection| {
                diesel::update(tasks::table.find(id.value()))
                    .set(&row)
                    .returning(TaskRow::as_returning())
                    .get_result::<TaskRow>(connection)
                    .optional()
                    .map_err(TaskRepositoryError::persistence)
            })
            .await?;
        updated.map_or(Err(TaskRepositoryError::NotFound(id)), row_to_task)
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let affected = self
            .run_blocking(move |connection| {
                diesel::delete(tasks::table.find(id.value()))
                    .execute(connection)
                    .map_err(TaskRepositoryError::persistence)
            })
            .await?;
        if affected == 0 {
            return Err(TaskRepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn list_by_status(
        &self,
        status: TaskStatus,
        page: Pagination,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let limit = i64::try_from(page.limit()).unwrap_or(i64::MAX);
        let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
        let rows = self
            .run_blocking(move |connection| {
                tasks::table
                    .filter(tasks::status.eq(status.is_done()))
                    .order(tasks::id.asc())
                    .offset(offset)
                    .limit(limit)
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection)
                    .map_err(TaskRepositoryError::persistence)
            })
            .await?;
        rows.into_iter().map(row_to_task).collect()
    }

    async fn list_by_date_and_status(
        &self,
        date: PlanningDate,
        status: TaskStatus,
    ) -> TaskRepositoryResult<Vec<Task>> {
        let planning_date = to_naive_date(date)?;
        let rows = self
            .run_blocking(move |connection| {
                tasks::table
                    .filter(tasks::planning_date.eq(planning_date))
                    .filter(tasks::status.eq(status.is_done()))
                    .order(tasks::id.asc())
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(connection)
                    .map_err(TaskRepositoryError::persistence)
            })
            .await?;
        rows.into_iter().map(row_to_task).collect()
    }
}

fn to_naive_date(date: PlanningDate) -> TaskRepositoryResult<NaiveDate> {
    date.to_naive_date()
        .ok_or_else(|| TaskRepositoryError::persistence(UnrepresentableDate(date)))
}

fn to_content_row(draft: &TaskDraft) -> TaskRepositoryResult<TaskContentRow> {
    Ok(TaskContentRow {
        title: draft.title().to_owned(),
        description: draft.description().to_owned(),
        planning_date: to_naive_date(draft.planning_date())?,
        status: draft.status().is_done(),
    })
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        planning_date,
        status,
    } = row;

    let task_id = TaskId::new(id).map_err(TaskRepositoryError::persistence)?;
    let content = TaskDraft::new(title, PlanningDate::from(planning_date))
        .with_description(description)
        .with_status(TaskStatus::from_done(status));
    Ok(Task::new(task_id, content))
}

/// Builds an `ILIKE` pattern with the caller's wildcard characters escaped.
fn like_pattern(text: &str, text_match: TextMatch) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    if text_match == TextMatch::Contains {
        escaped.push('%');
    }
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}
