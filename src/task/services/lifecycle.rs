//! Service layer for task creation, retrieval, partial updates, and
//! deletion.

use crate::task::{
    domain::{Task, TaskDescription, TaskDomainError, TaskId, TaskStatus, TaskTitle},
    ports::{TaskPage, TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    status: Option<TaskStatus>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: None,
        }
    }

    /// Sets an explicit initial status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Partial-update payload.
///
/// Each mutable field is wrapped in an `Option` so "field omitted" and
/// "field explicitly set to its current value" stay distinct: an omitted
/// field keeps its prior value exactly, a present field is a full
/// overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
}

impl UpdateTaskRequest {
    /// Creates an empty request that changes no fields.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            description: None,
            status: None,
        }
    }

    /// Sets a new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a new status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Holds no persistent state of its own; every read goes to the store.
#[derive(Clone)]
pub struct TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates a task with a fresh identifier and current timestamps.
    ///
    /// An absent status defaults to [`TaskStatus::Created`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when title or description
    /// validation fails, or [`TaskLifecycleError::Store`] when persistence
    /// rejects the insert.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let description = TaskDescription::new(request.description)?;
        let status = request.status.unwrap_or_default();

        let task = Task::new(title, description, status, &*self.clock);
        let persisted = self.store.create(&task).await?;
        Ok(persisted)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist — absence is never
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the lookup fails.
    pub async fn get_task(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.store.get(id).await?)
    }

    /// Lists tasks ordered by creation time descending.
    ///
    /// The boundary is responsible for clamping `skip >= 0` and
    /// `1 <= limit <= 100`; the service trusts its inputs.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the listing fails.
    pub async fn list_tasks(
        &self,
        status_filter: Option<TaskStatus>,
        skip: u32,
        limit: u32,
    ) -> TaskLifecycleResult<TaskPage> {
        Ok(self.store.list(status_filter, skip, limit).await?)
    }

    /// Applies a partial update to the task matching `id`.
    ///
    /// The freshly loaded record is the merge base: fields present in the
    /// request overwrite it, absent fields keep their prior values, and the
    /// store refreshes `updated_at`. Returns `Ok(None)` when the task does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when a supplied field fails
    /// validation, or [`TaskLifecycleError::Store`] when persistence fails.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskLifecycleResult<Option<Task>> {
        let Some(existing) = self.store.get(id).await? else {
            return Ok(None);
        };

        let mut fields = existing.fields();
        if let Some(title) = request.title {
            fields.title = TaskTitle::new(title)?;
        }
        if let Some(description) = request.description {
            fields.description = TaskDescription::new(description)?;
        }
        if let Some(status) = request.status {
            fields.status = status;
        }

        Ok(self.store.update(id, fields).await?)
    }

    /// Deletes the task matching `id`.
    ///
    /// Returns whether a record was removed; deleting an absent task
    /// reports `false`, so the operation is idempotent in effect.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the deletion fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<bool> {
        Ok(self.store.delete(id).await?)
    }

    /// Reports whether a task with the given identifier exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Store`] when the lookup fails.
    pub async fn task_exists(&self, id: TaskId) -> TaskLifecycleResult<bool> {
        Ok(self.get_task(id).await?.is_some())
    }
}
