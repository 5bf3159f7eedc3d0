//! Domain model for task lifecycle management.
//!
//! The task domain models validated task records and the partial-update
//! field set while keeping all infrastructure concerns outside of the
//! domain boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskDescription, TaskId, TaskTitle};
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task, TaskFields};
