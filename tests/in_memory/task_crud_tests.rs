//! Planner CRUD flows against the in-memory repository.

use super::helpers::{FUTURE, TestPlanner, draft, planner};
use dayplanner::task::{
    domain::{PlanningDate, TaskDraft, TaskId, TaskStatus},
    services::TaskServiceError,
    validation::TaskViolation,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_can_be_read_back(planner: TestPlanner) -> Result<(), eyre::Report> {
    let created = planner
        .create_task(&draft("Buy milk", "Two litres"))
        .await?;
    let fetched = planner.get_task(created.id()).await?;

    assert_eq!(created.id().value(), 1);
    assert_eq!(fetched, created);
    assert_eq!(fetched.planning_date(), FUTURE);
    assert_eq!(fetched.status(), TaskStatus::Open);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn identifiers_are_not_reused_after_delete(
    planner: TestPlanner,
) -> Result<(), eyre::Report> {
    let first = planner.create_task(&draft("First", "")).await?;
    planner.delete_task(first.id()).await?;
    let second = planner.create_task(&draft("Second", "")).await?;

    assert_eq!(second.id().value(), 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_every_field(planner: TestPlanner) -> Result<(), eyre::Report> {
    let created = planner
        .create_task(&draft("Buy milk", "Two litres"))
        .await?;
    let replacement = TaskDraft::new("Buy bread", PlanningDate::new(2099, 7, 1))
        .with_status(TaskStatus::Done);

    let updated = planner.update_task(created.id(), &replacement).await?;
    let fetched = planner.get_task(created.id()).await?;

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.content(), &replacement);
    assert_eq!(fetched, updated);
    assert_eq!(fetched.description(), "");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_update_leaves_task_untouched(planner: TestPlanner) -> Result<(), eyre::Report> {
    let created = planner.create_task(&draft("Buy milk", "")).await?;
    let expired = TaskDraft::new("Buy milk", PlanningDate::new(2001, 1, 1));

    let result = planner.update_task(created.id(), &expired).await;
    let fetched = planner.get_task(created.id()).await?;

    let Err(TaskServiceError::InvalidTask(err)) = result else {
        return Err(eyre::eyre!("expected validation failure"));
    };
    assert!(matches!(
        err.violations(),
        [TaskViolation::DateExpired { .. }]
    ));
    assert_eq!(fetched, created);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_is_gone(planner: TestPlanner) -> Result<(), eyre::Report> {
    let created = planner.create_task(&draft("Buy milk", "")).await?;

    planner.delete_task(created.id()).await?;
    let lookup = planner.get_task(created.id()).await;
    let second_delete = planner.delete_task(created.id()).await;

    assert!(matches!(lookup, Err(TaskServiceError::NotFound(id)) if id == created.id()));
    assert!(matches!(second_delete, Err(TaskServiceError::NotFound(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operations_on_unknown_ids_report_not_found(
    planner: TestPlanner,
) -> Result<(), eyre::Report> {
    let unknown = TaskId::new(999)?;

    let fetched = planner.get_task(unknown).await;
    let updated = planner.update_task(unknown, &draft("Ghost", "")).await;
    let deleted = planner.delete_task(unknown).await;

    assert!(matches!(fetched, Err(TaskServiceError::NotFound(_))));
    assert!(matches!(updated, Err(TaskServiceError::NotFound(_))));
    assert!(matches!(deleted, Err(TaskServiceError::NotFound(_))));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_receive_distinct_ids(
    planner: TestPlanner,
) -> Result<(), eyre::Report> {
    let mut handles = Vec::new();
    for index in 0..16 {
        let worker = planner.clone();
        handles.push(tokio::spawn(async move {
            worker
                .create_task(&draft(&format!("Task {index}"), ""))
                .await
        }));
    }

    let mut seen = Vec::new();
    for handle in handles {
        seen.push(handle.await??.id().value());
    }
    seen.sort_unstable();

    assert_eq!(seen, (1..=16).collect::<Vec<i64>>());
    Ok(())
}
