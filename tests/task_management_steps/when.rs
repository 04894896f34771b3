//! When steps for task management BDD scenarios.

use super::world::{TaskPlannerWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"a task titled "{title}" is planned {days:i64} days from today"#)]
fn plan_task_ahead(
    world: &mut TaskPlannerWorld,
    title: String,
    days: i64,
) -> Result<(), eyre::Report> {
    submit(world, &title, days)
}

#[when(r#"a task titled "{title}" is planned {days:i64} days before today"#)]
fn plan_task_behind(
    world: &mut TaskPlannerWorld,
    title: String,
    days: i64,
) -> Result<(), eyre::Report> {
    submit(world, &title, -days)
}

#[when("a task without a title is planned {days:i64} days from today")]
fn plan_untitled_task(world: &mut TaskPlannerWorld, days: i64) -> Result<(), eyre::Report> {
    submit(world, "", days)
}

fn submit(world: &mut TaskPlannerWorld, title: &str, days: i64) -> Result<(), eyre::Report> {
    let draft = world.draft_in_days(title, days)?;
    let result = run_async(world.service.create_task(&draft));
    if let Ok(ref created) = result {
        world.last_task = Some(created.clone());
    }
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"the task is retitled "{title}""#)]
fn retitle_task(world: &mut TaskPlannerWorld, title: String) -> Result<(), eyre::Report> {
    let task = world.require_task()?.clone();
    let draft = world.draft_in_days(&title, 14)?.with_description(task.description());
    let updated = run_async(world.service.update_task(task.id(), &draft))
        .wrap_err("update task in scenario")?;
    world.last_task = Some(updated);
    Ok(())
}

#[when("the task is deleted")]
fn delete_task(world: &mut TaskPlannerWorld) -> Result<(), eyre::Report> {
    let id = world.require_task()?.id();
    run_async(world.service.delete_task(id)).wrap_err("delete task in scenario")?;
    Ok(())
}

#[when(r#"tasks are searched for "{text}""#)]
fn search_tasks(world: &mut TaskPlannerWorld, text: String) -> Result<(), eyre::Report> {
    let found = run_async(world.service.search_tasks(&text)).wrap_err("search tasks")?;
    world.last_search = Some(found);
    Ok(())
}
