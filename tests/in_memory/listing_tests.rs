//! Status pages and date listings over the in-memory repository.

use super::helpers::{FUTURE, TestPlanner, draft, ids, planner, seed};
use dayplanner::task::{
    domain::{PlanningDate, TaskDraft, TaskStatus},
    services::{InvalidInputError, TaskServiceError},
};
use rstest::rstest;

async fn seed_mixed(planner: &TestPlanner) -> Result<(), eyre::Report> {
    let next_day = PlanningDate::new(2099, 6, 16);
    seed(
        planner,
        &[
            draft("Open one", ""),
            draft("Done one", "").with_status(TaskStatus::Done),
            draft("Open two", ""),
            TaskDraft::new("Open three", next_day),
            draft("Open four", ""),
            TaskDraft::new("Done two", next_day).with_status(TaskStatus::Done),
        ],
    )
    .await?;
    Ok(())
}

#[rstest]
#[case::first_page(2, 0, vec![1, 3])]
#[case::second_page(2, 2, vec![4, 5])]
#[case::past_the_end(10, 4, Vec::<i64>::new())]
#[case::zero_limit(0, 0, Vec::<i64>::new())]
#[tokio::test(flavor = "multi_thread")]
async fn open_tasks_are_paged_in_id_order(
    planner: TestPlanner,
    #[case] limit: i64,
    #[case] offset: i64,
    #[case] expected: Vec<i64>,
) -> Result<(), eyre::Report> {
    seed_mixed(&planner).await?;

    let page = planner
        .list_by_status(TaskStatus::Open, limit, offset)
        .await?;

    assert_eq!(ids(&page), expected);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn done_tasks_are_listed_separately(planner: TestPlanner) -> Result<(), eyre::Report> {
    seed_mixed(&planner).await?;

    let page = planner.list_by_status(TaskStatus::Done, 100, 0).await?;

    assert_eq!(ids(&page), vec![2, 6]);
    Ok(())
}

#[rstest]
#[case::negative_limit(-1, 0, InvalidInputError::NegativeLimit(-1))]
#[case::negative_offset(5, -3, InvalidInputError::NegativeOffset(-3))]
#[tokio::test(flavor = "multi_thread")]
async fn negative_paging_is_rejected(
    planner: TestPlanner,
    #[case] limit: i64,
    #[case] offset: i64,
    #[case] expected: InvalidInputError,
) {
    let result = planner.list_by_status(TaskStatus::Open, limit, offset).await;

    assert!(matches!(
        result,
        Err(TaskServiceError::InvalidInput(err)) if err == expected
    ));
}

#[rstest]
#[case::open_on_first_day(FUTURE, TaskStatus::Open, vec![1, 3, 5])]
#[case::done_on_first_day(FUTURE, TaskStatus::Done, vec![2])]
#[case::open_on_next_day(PlanningDate::new(2099, 6, 16), TaskStatus::Open, vec![4])]
#[case::empty_day(PlanningDate::new(2099, 6, 17), TaskStatus::Open, Vec::<i64>::new())]
#[tokio::test(flavor = "multi_thread")]
async fn date_listing_filters_on_date_and_status(
    planner: TestPlanner,
    #[case] date: PlanningDate,
    #[case] status: TaskStatus,
    #[case] expected: Vec<i64>,
) -> Result<(), eyre::Report> {
    seed_mixed(&planner).await?;

    let listed = planner.list_by_date_and_status(date, status).await?;

    assert_eq!(ids(&listed), expected);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn date_listing_rejects_impossible_dates(planner: TestPlanner) {
    let result = planner
        .list_by_date_and_status(PlanningDate::new(2099, 2, 29), TaskStatus::Open)
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::InvalidInput(
            InvalidInputError::InvalidFilterDate(_)
        ))
    ));
}
