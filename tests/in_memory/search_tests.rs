//! Text search semantics of the in-memory repository.

use super::helpers::{TestPlanner, draft, ids, planner, planner_with, seed};
use dayplanner::task::{
    ports::TextMatch,
    services::{InvalidInputError, TaskServiceError},
};
use rstest::rstest;

#[rstest]
#[case::contains_title(TextMatch::Contains, "milk", vec![1])]
#[case::contains_description(TextMatch::Contains, "bakery", vec![2])]
#[case::contains_ignores_case(TextMatch::Contains, "BUY", vec![1, 2])]
#[case::prefix_title(TextMatch::Prefix, "buy", vec![1, 2])]
#[case::prefix_rejects_infix(TextMatch::Prefix, "milk", Vec::<i64>::new())]
#[case::prefix_description(TextMatch::Prefix, "from the", vec![2])]
#[tokio::test(flavor = "multi_thread")]
async fn search_honours_match_mode(
    #[case] text_match: TextMatch,
    #[case] text: &str,
    #[case] expected: Vec<i64>,
) -> Result<(), eyre::Report> {
    let planner = planner_with(text_match);
    seed(
        &planner,
        &[
            draft("Buy milk", "Two litres"),
            draft("Buy bread", "From the bakery"),
            draft("Walk the dog", "Around the park"),
        ],
    )
    .await?;

    let found = planner.search_tasks(text).await?;

    assert_eq!(ids(&found), expected);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_without_matches_is_empty(planner: TestPlanner) -> Result<(), eyre::Report> {
    seed(&planner, &[draft("Buy milk", "")]).await?;

    let found = planner.search_tasks("zebra").await?;

    assert!(found.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_search_text_is_rejected(planner: TestPlanner) {
    let result = planner.search_tasks("").await;

    assert!(matches!(
        result,
        Err(TaskServiceError::InvalidInput(
            InvalidInputError::EmptySearchText
        ))
    ));
}
