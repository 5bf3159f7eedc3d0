//! Shared state handed to API handlers.

use std::sync::Arc;

use mockable::Clock;

use crate::task::ports::TaskStore;
use crate::task::services::TaskLifecycleService;

/// Handler state carrying the task lifecycle service.
pub struct ApiState<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Service the handlers delegate to.
    pub service: Arc<TaskLifecycleService<S, C>>,
}

impl<S, C> ApiState<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates handler state from a service handle.
    #[must_use]
    pub const fn new(service: Arc<TaskLifecycleService<S, C>>) -> Self {
        Self { service }
    }
}

impl<S, C> Clone for ApiState<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}
