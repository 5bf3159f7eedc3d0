//! In-memory store for task lifecycle tests.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskFields, TaskId, TaskStatus},
    ports::{TaskPage, TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Implements the same contract as the `PostgreSQL` store, including the
/// `updated_at` refresh on update, for unit and behavioural tests.
#[derive(Debug)]
pub struct InMemoryTaskStore<C> {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryTaskStore<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }
}

#[async_trait]
impl<C> TaskStore for InMemoryTaskStore<C>
where
    C: Clock + Send + Sync,
{
    async fn create(&self, task: &Task) -> TaskStoreResult<Task> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        if state.contains_key(&task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id()));
        }

        state.insert(task.id(), task.clone());
        Ok(task.clone())
    }

    async fn get(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.get(&id).cloned())
    }

    async fn list(
        &self,
        status_filter: Option<TaskStatus>,
        skip: u32,
        limit: u32,
    ) -> TaskStoreResult<TaskPage> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;

        let mut matching: Vec<Task> = state
            .values()
            .filter(|task| status_filter.is_none_or(|status| task.status() == status))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        let total = u64::try_from(matching.len()).map_err(TaskStoreError::persistence)?;
        let start = usize::try_from(skip).map_err(TaskStoreError::persistence)?;
        let page_size = usize::try_from(limit).map_err(TaskStoreError::persistence)?;

        let tasks = matching.into_iter().skip(start).take(page_size).collect();
        Ok(TaskPage { tasks, total })
    }

    async fn update(&self, id: TaskId, fields: TaskFields) -> TaskStoreResult<Option<Task>> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;

        let Some(task) = state.get_mut(&id) else {
            return Ok(None);
        };
        task.apply_fields(fields, &*self.clock);
        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<bool> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.remove(&id).is_some())
    }
}
