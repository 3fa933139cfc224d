//! Save, fetch, overwrite, and delete round-trips against `PostgreSQL`.

use super::helpers;
use chrono::Utc;
use taskledger::task::{
    domain::{StoredTaskData, Task, TaskId, TaskName, TaskStatus},
    ports::{TaskStore, TaskStoreError},
    services::TaskServiceError,
};

#[tokio::test(flavor = "multi_thread")]
async fn created_task_round_trips_through_the_database() {
    let Some(service) = helpers::service() else {
        return;
    };

    let created = service
        .create("Buy milk", "2%  ")
        .await
        .expect("task creation should succeed");
    let id = created.id().expect("persisted task carries an id");

    let fetched = service.find_by_id(id).await.expect("lookup should succeed");
    assert_eq!(fetched.name().as_str(), "Buy milk");
    assert_eq!(fetched.description(), "2%  ");
    assert_eq!(fetched.status(), TaskStatus::Todo);
    assert_eq!(fetched.id(), Some(id));
}

#[tokio::test(flavor = "multi_thread")]
async fn description_update_overwrites_the_stored_row() {
    let Some(service) = helpers::service() else {
        return;
    };

    let created = service
        .create("Ship release", "cut the tag")
        .await
        .expect("task creation should succeed");
    let id = created.id().expect("persisted task carries an id");

    service
        .update_description(id, "cut the tag and publish notes")
        .await
        .expect("update should succeed");

    let fetched = service.find_by_id(id).await.expect("lookup should succeed");
    assert_eq!(fetched.description(), "cut the tag and publish notes");
    assert_eq!(fetched.name(), created.name());
}

#[tokio::test(flavor = "multi_thread")]
async fn save_rejects_an_id_the_store_has_never_seen() {
    let Some(store) = helpers::store() else {
        return;
    };

    let id = TaskId::new();
    let never_inserted = Task::from_stored(StoredTaskData {
        id,
        name: TaskName::from_stored("Archive logs".to_owned()),
        description: String::new(),
        status: TaskStatus::Todo,
        created: Utc::now(),
    });

    let result = store.save(&never_inserted).await;

    assert!(matches!(result, Err(TaskStoreError::MissingRecord(missing)) if missing == id));
    let lookup = store.find_by_id(id).await.expect("lookup succeeds");
    assert!(lookup.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn deleted_row_is_gone_and_unknown_ids_are_not_found() {
    let Some(service) = helpers::service() else {
        return;
    };

    let created = service
        .create("Water plants", "")
        .await
        .expect("task creation should succeed");
    let id = created.id().expect("persisted task carries an id");

    service.delete(id).await.expect("delete should succeed");
    let lookup = service.find_by_id(id).await;
    assert!(matches!(lookup, Err(TaskServiceError::NotFound(missing)) if missing == id));

    let unknown = TaskId::new();
    let delete = service.delete(unknown).await;
    assert!(matches!(delete, Err(TaskServiceError::NotFound(missing)) if missing == unknown));
}
