//! Behavioural integration tests for [`InMemoryTaskStore`].
//!
//! These tests exercise the in-memory store in realistic higher-level
//! flows, verifying that it correctly implements the task store contract
//! when used in task tracking scenarios.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use mockable::DefaultClock;
use taskdesk::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{Task, TaskDescription, TaskId, TaskStatus, TaskTitle},
    ports::{TaskStore, TaskStoreError},
};
use tokio::runtime::Runtime;

/// Creates a tokio runtime for async operations in tests.
fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

fn make_store() -> InMemoryTaskStore<DefaultClock> {
    InMemoryTaskStore::new(Arc::new(DefaultClock))
}

fn make_task(title: &str, status: TaskStatus) -> Task {
    let clock = DefaultClock;
    Task::new(
        TaskTitle::new(title).expect("valid title"),
        TaskDescription::new("integration test task").expect("valid description"),
        status,
        &clock,
    )
}

// ============================================================================
// Full Lifecycle Flow
// ============================================================================

/// Walks a task through create, read, update, and delete against the store,
/// verifying the record observed after each step.
#[test]
fn complete_task_lifecycle_through_store() {
    let rt = test_runtime();
    let store = make_store();

    // Create
    let task = make_task("Prepare the launch checklist", TaskStatus::Created);
    let created = rt.block_on(store.create(&task)).expect("create");
    assert_eq!(created, task);

    // Read it back
    let fetched = rt
        .block_on(store.get(task.id()))
        .expect("get")
        .expect("task should exist");
    assert_eq!(fetched, task);

    // Update the status and title
    let mut fields = fetched.fields();
    fields.title = TaskTitle::new("Prepare and review the launch checklist").expect("valid title");
    fields.status = TaskStatus::InProgress;
    let updated = rt
        .block_on(store.update(task.id(), fields))
        .expect("update")
        .expect("task should exist");

    assert_eq!(
        updated.title().as_str(),
        "Prepare and review the launch checklist"
    );
    assert_eq!(updated.status(), TaskStatus::InProgress);
    assert_eq!(updated.id(), task.id());
    assert_eq!(updated.created_at(), task.created_at());
    assert!(updated.updated_at() >= task.updated_at());

    // Delete and verify absence
    assert!(rt.block_on(store.delete(task.id())).expect("delete"));
    assert!(
        rt.block_on(store.get(task.id()))
            .expect("get after delete")
            .is_none()
    );
}

/// Sequential updates to the same record leave the store holding the most
/// recent writer's fields.
#[test]
fn sequential_field_updates_last_writer_wins() {
    let rt = test_runtime();
    let store = make_store();

    let task = make_task("Contended task", TaskStatus::Created);
    rt.block_on(store.create(&task)).expect("create");

    let mut first_fields = task.fields();
    first_fields.status = TaskStatus::InProgress;
    rt.block_on(store.update(task.id(), first_fields))
        .expect("first update")
        .expect("task should exist");

    let mut second_fields = task.fields();
    second_fields.title = TaskTitle::new("Contended task, renamed").expect("valid title");
    second_fields.status = TaskStatus::Completed;
    rt.block_on(store.update(task.id(), second_fields))
        .expect("second update")
        .expect("task should exist");

    let settled = rt
        .block_on(store.get(task.id()))
        .expect("get")
        .expect("task should exist");
    assert_eq!(settled.title().as_str(), "Contended task, renamed");
    assert_eq!(settled.status(), TaskStatus::Completed);
}

// ============================================================================
// Identity and Absence
// ============================================================================

#[test]
fn create_rejects_duplicate_task_id() {
    let rt = test_runtime();
    let store = make_store();

    let task = make_task("Stored once", TaskStatus::Created);
    rt.block_on(store.create(&task)).expect("first create");

    let result = rt.block_on(store.create(&task));
    assert!(
        matches!(result, Err(TaskStoreError::DuplicateTask(id)) if id == task.id()),
        "expected DuplicateTask error, got: {result:?}"
    );
}

#[test]
fn operations_on_unused_id_observe_absence() {
    let rt = test_runtime();
    let store = make_store();
    let unused = TaskId::new();

    assert!(rt.block_on(store.get(unused)).expect("get").is_none());
    assert!(
        rt.block_on(store.update(unused, make_task("x", TaskStatus::Created).fields()))
            .expect("update")
            .is_none()
    );
    assert!(!rt.block_on(store.delete(unused)).expect("delete"));
}

#[test]
fn delete_is_idempotent_in_effect() {
    let rt = test_runtime();
    let store = make_store();

    let task = make_task("Delete twice", TaskStatus::Created);
    rt.block_on(store.create(&task)).expect("create");

    assert!(rt.block_on(store.delete(task.id())).expect("first delete"));
    assert!(!rt.block_on(store.delete(task.id())).expect("second delete"));
}

// ============================================================================
// Listing Flows
// ============================================================================

/// Pages through a filtered backlog the way the API boundary would,
/// verifying window contents, totals, and exhaustion.
#[test]
fn paginated_listing_walks_the_backlog() {
    let rt = test_runtime();
    let store = make_store();

    for index in 0..5 {
        let task = make_task(&format!("Backlog item {index}"), TaskStatus::Created);
        rt.block_on(store.create(&task)).expect("create");
    }
    let in_flight = make_task("Already started", TaskStatus::InProgress);
    rt.block_on(store.create(&in_flight)).expect("create");

    // First page of the created backlog
    let first_page = rt
        .block_on(store.list(Some(TaskStatus::Created), 0, 2))
        .expect("first page");
    assert_eq!(first_page.total, 5);
    assert_eq!(first_page.tasks.len(), 2);

    // Second page continues without overlap
    let second_page = rt
        .block_on(store.list(Some(TaskStatus::Created), 2, 2))
        .expect("second page");
    assert_eq!(second_page.total, 5);
    assert_eq!(second_page.tasks.len(), 2);
    for task in &second_page.tasks {
        assert!(
            !first_page.tasks.iter().any(|seen| seen.id() == task.id()),
            "page windows must not overlap"
        );
    }

    // Final partial page and exhaustion
    let final_page = rt
        .block_on(store.list(Some(TaskStatus::Created), 4, 2))
        .expect("final page");
    assert_eq!(final_page.tasks.len(), 1);

    let past_the_end = rt
        .block_on(store.list(Some(TaskStatus::Created), 5, 2))
        .expect("past the end");
    assert_eq!(past_the_end.total, 5);
    assert!(past_the_end.tasks.is_empty());

    // Unfiltered listing counts every status
    let everything = rt.block_on(store.list(None, 0, 10)).expect("unfiltered");
    assert_eq!(everything.total, 6);
    assert_eq!(everything.tasks.len(), 6);
}

#[test]
fn listing_orders_newest_first() {
    let rt = test_runtime();
    let store = make_store();

    for index in 0..4 {
        let task = make_task(&format!("Ordered {index}"), TaskStatus::Created);
        rt.block_on(store.create(&task)).expect("create");
    }

    let page = rt.block_on(store.list(None, 0, 10)).expect("list");
    let timestamps: Vec<_> = page.tasks.iter().map(Task::created_at).collect();
    assert!(timestamps.is_sorted_by(|newer, older| newer >= older));
}

#[test]
fn filtered_listing_reflects_status_changes() {
    let rt = test_runtime();
    let store = make_store();

    let task = make_task("Moves between filters", TaskStatus::Created);
    rt.block_on(store.create(&task)).expect("create");

    let created_page = rt
        .block_on(store.list(Some(TaskStatus::Created), 0, 10))
        .expect("list created");
    assert_eq!(created_page.total, 1);

    let mut fields = task.fields();
    fields.status = TaskStatus::Completed;
    rt.block_on(store.update(task.id(), fields))
        .expect("update")
        .expect("task should exist");

    let created_after = rt
        .block_on(store.list(Some(TaskStatus::Created), 0, 10))
        .expect("list created again");
    assert_eq!(created_after.total, 0);

    let completed_after = rt
        .block_on(store.list(Some(TaskStatus::Completed), 0, 10))
        .expect("list completed");
    assert_eq!(completed_after.total, 1);
}

// ============================================================================
// Shared Handles
// ============================================================================

/// Cloned store handles observe the same underlying state.
#[test]
fn cloned_handles_share_state() {
    let rt = test_runtime();
    let store = make_store();
    let reader = store.clone();

    let task = make_task("Visible through clones", TaskStatus::Created);
    rt.block_on(store.create(&task)).expect("create");

    let fetched = rt
        .block_on(reader.get(task.id()))
        .expect("get via clone")
        .expect("task should exist");
    assert_eq!(fetched, task);
}
