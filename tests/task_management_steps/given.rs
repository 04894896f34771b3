//! Given steps for task management BDD scenarios.

use super::world::{TaskPlannerWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty task planner")]
fn empty_planner(world: &mut TaskPlannerWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.repository.is_empty()?,
        "scenario world should start without tasks"
    );
    Ok(())
}

#[given(r#"a stored task titled "{title}""#)]
fn stored_task(world: &mut TaskPlannerWorld, title: String) -> Result<(), eyre::Report> {
    let draft = world.draft_in_days(&title, 7)?;
    let created = run_async(world.service.create_task(&draft))
        .wrap_err("create task for scenario setup")?;
    world.last_task = Some(created);
    Ok(())
}
