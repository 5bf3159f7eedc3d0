//! Store port for task persistence, lookup, and paginated listing.

use crate::task::domain::{Task, TaskFields, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// One page of a task listing plus the unpaginated match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPage {
    /// Tasks on this page, ordered by creation time descending.
    pub tasks: Vec<Task>,
    /// Count of all tasks matching the status filter, ignoring skip and
    /// limit. Callers use it for pagination metadata.
    pub total: u64,
}

/// Task persistence contract.
///
/// Every operation acquires its own connection, performs one logical unit
/// of work, and releases resources on every exit path. Absence is reported
/// as `None` or `false`, never as an error.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Inserts a new task and returns the persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::DuplicateTask`] when the task identifier
    /// already exists, or [`TaskStoreError::Persistence`] on storage
    /// failure.
    async fn create(&self, task: &Task) -> TaskStoreResult<Task>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn get(&self, id: TaskId) -> TaskStoreResult<Option<Task>>;

    /// Lists tasks ordered by creation time descending.
    ///
    /// `status_filter`, when present, restricts the listing to matching
    /// tasks. `skip` omits rows from the front of the ordered result;
    /// `limit` caps the page size. A `skip` beyond the result size yields
    /// an empty page with the correct total. Bounds on `skip` and `limit`
    /// are the caller's responsibility.
    async fn list(
        &self,
        status_filter: Option<TaskStatus>,
        skip: u32,
        limit: u32,
    ) -> TaskStoreResult<TaskPage>;

    /// Overwrites the mutable fields of the task matching `id` and
    /// refreshes its `updated_at` timestamp.
    ///
    /// `id` and `created_at` are never touched. Returns `None` when no
    /// task matches; no partial effect occurs in that case.
    async fn update(&self, id: TaskId, fields: TaskFields) -> TaskStoreResult<Option<Task>>;

    /// Removes the task matching `id`.
    ///
    /// Returns whether a record was actually removed; deleting an absent
    /// task reports `false` rather than an error.
    async fn delete(&self, id: TaskId) -> TaskStoreResult<bool>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
