//! Status transition and filtered-listing flows.

use super::helpers::{TestService, created_id, service};
use rstest::rstest;
use taskledger::task::domain::TaskStatus;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn done_filter_lists_exactly_the_completed_task(service: TestService) {
    let completed = service
        .create("Write report", "quarterly numbers")
        .await
        .expect("task creation should succeed");
    let open = service
        .create("Review report", "")
        .await
        .expect("task creation should succeed");
    service
        .mark_as_done(created_id(&completed))
        .await
        .expect("mark should succeed");

    let done = service
        .find_by_status(TaskStatus::Done)
        .await
        .expect("filtered listing should succeed");
    let todo = service
        .find_by_status(TaskStatus::Todo)
        .await
        .expect("filtered listing should succeed");

    assert_eq!(
        done.iter().map(|task| task.id()).collect::<Vec<_>>(),
        vec![completed.id()]
    );
    assert_eq!(
        todo.iter().map(|task| task.id()).collect::<Vec<_>>(),
        vec![open.id()]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn marking_done_twice_is_observably_harmless(service: TestService) {
    let created = service
        .create("Ship release", "")
        .await
        .expect("task creation should succeed");
    let id = created_id(&created);

    service.mark_as_done(id).await.expect("first mark succeeds");
    let after_first = service.find_by_id(id).await.expect("lookup succeeds");

    service
        .mark_as_done(id)
        .await
        .expect("second mark is harmless");
    let after_second = service.find_by_id(id).await.expect("lookup succeeds");

    assert_eq!(after_first.status(), TaskStatus::Done);
    assert_eq!(after_second, after_first);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filters_on_an_empty_store_return_nothing(service: TestService) {
    let done = service
        .find_by_status(TaskStatus::Done)
        .await
        .expect("filtered listing should succeed");
    let todo = service
        .find_by_status(TaskStatus::Todo)
        .await
        .expect("filtered listing should succeed");

    assert!(done.is_empty());
    assert!(todo.is_empty());
}
