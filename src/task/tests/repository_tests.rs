//! Contract tests for the in-memory task repository.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId, TaskPriority, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

fn sample_task(title: &str, priority: TaskPriority) -> Task {
    let title = TaskTitle::new(title).expect("valid task title");
    Task::new(title, String::new(), priority, &DefaultClock)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_appends_in_insertion_order(repository: InMemoryTaskRepository) {
    let first = sample_task("First", TaskPriority::Low);
    let second = sample_task("Second", TaskPriority::Medium);
    let third = sample_task("Third", TaskPriority::High);

    for task in [&first, &second, &third] {
        repository.save(task).await.expect("save should succeed");
    }

    let all = repository.get_all().await.expect("get_all should succeed");
    assert_eq!(all, vec![first, second, third]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_all_is_idempotent(repository: InMemoryTaskRepository) {
    let task = sample_task("Only one", TaskPriority::Low);
    repository.save(&task).await.expect("save should succeed");

    let first_read = repository.get_all().await.expect("get_all should succeed");
    let second_read = repository.get_all().await.expect("get_all should succeed");
    assert_eq!(first_read, second_read);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_stored_task(repository: InMemoryTaskRepository) {
    let task = sample_task("Lookup me", TaskPriority::Medium);
    repository.save(&task).await.expect("save should succeed");

    let found = repository
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(found, Some(task));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_none_when_missing(repository: InMemoryTaskRepository) {
    let found = repository
        .find_by_id(TaskId::new())
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_matching_task(repository: InMemoryTaskRepository) {
    let keep = sample_task("Keep me", TaskPriority::Low);
    let remove = sample_task("Remove me", TaskPriority::Low);
    repository.save(&keep).await.expect("save should succeed");
    repository.save(&remove).await.expect("save should succeed");

    let removed = repository
        .delete(remove.id())
        .await
        .expect("delete should succeed");
    assert!(removed);

    let all = repository.get_all().await.expect("get_all should succeed");
    assert_eq!(all, vec![keep]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_returns_false_for_unknown_identifier(repository: InMemoryTaskRepository) {
    let task = sample_task("Still here", TaskPriority::Low);
    repository.save(&task).await.expect("save should succeed");

    let removed = repository
        .delete(TaskId::new())
        .await
        .expect("delete should succeed");
    assert!(!removed);

    let all = repository.get_all().await.expect("get_all should succeed");
    assert_eq!(all.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_rejects_identifier_collision(repository: InMemoryTaskRepository) {
    let task = sample_task("Unique", TaskPriority::Low);
    repository.save(&task).await.expect("save should succeed");

    let result = repository.save(&task).await;
    assert!(matches!(
        result,
        Err(TaskRepositoryError::IdentifierCollision(id)) if id == task.id()
    ));

    let all = repository.get_all().await.expect("get_all should succeed");
    assert_eq!(all.len(), 1);
}
