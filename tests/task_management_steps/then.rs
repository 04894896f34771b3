//! Then steps for task management BDD scenarios.

use super::world::{TaskPlannerWorld, run_async};
use dayplanner::task::services::TaskServiceError;
use rstest_bdd_macros::then;

#[then("the task is stored with identifier {id:i64}")]
fn task_stored_with_id(world: &TaskPlannerWorld, id: i64) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result"))?;
    let task = result
        .as_ref()
        .map_err(|err| eyre::eyre!("expected task to be stored, got {err}"))?;
    eyre::ensure!(
        task.id().value() == id,
        "expected identifier {id}, found {}",
        task.id()
    );
    Ok(())
}

#[then(r#"the stored task has title "{title}""#)]
fn stored_task_has_title(world: &TaskPlannerWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.require_task()?.id();
    let stored = run_async(world.service.get_task(id))?;
    eyre::ensure!(
        stored.title() == title,
        "expected title {title:?}, found {:?}",
        stored.title()
    );
    Ok(())
}

#[then(r#"the request is rejected because of "{reason}""#)]
fn request_rejected(world: &TaskPlannerWorld, reason: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result"))?;
    let Err(TaskServiceError::InvalidTask(err)) = result else {
        return Err(eyre::eyre!("expected validation failure, got {result:?}"));
    };
    eyre::ensure!(
        err.to_string().contains(&reason),
        "expected {reason:?} in {err}"
    );
    Ok(())
}

#[then("the planner holds {count:usize} tasks")]
fn planner_holds(world: &TaskPlannerWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = world.repository.len()?;
    eyre::ensure!(stored == count, "expected {count} tasks, found {stored}");
    Ok(())
}

#[then("looking up the task reports it as not found")]
fn lookup_not_found(world: &TaskPlannerWorld) -> Result<(), eyre::Report> {
    let id = world.require_task()?.id();
    let result = run_async(world.service.get_task(id));
    if !matches!(result, Err(TaskServiceError::NotFound(missing)) if missing == id) {
        return Err(eyre::eyre!("expected NotFound error, got {result:?}"));
    }
    Ok(())
}

#[then("{count:usize} task is found")]
fn tasks_found(world: &TaskPlannerWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world
        .last_search
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing search result"))?;
    eyre::ensure!(
        found.len() == count,
        "expected {count} tasks, found {}",
        found.len()
    );
    Ok(())
}
