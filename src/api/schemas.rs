//! Request and response bodies for the task API.
//!
//! These types define the JSON wire contract. Status values travel as
//! plain strings in requests so handlers can reject unknown tokens with
//! a structured validation error instead of a bare deserialization
//! failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::domain::{Task, TaskStatus};
use crate::task::ports::TaskPage;

/// Body accepted by `POST /api/v1/tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    /// Title for the new task.
    pub title: String,
    /// Description for the new task; may be empty.
    #[serde(default)]
    pub description: String,
    /// Optional initial status token; defaults to `created` when absent.
    #[serde(default)]
    pub status: Option<String>,
}

/// Body accepted by `PUT /api/v1/tasks/{id}`.
///
/// Every field is optional; omitted fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskBody {
    /// Replacement title, when present.
    pub title: Option<String>,
    /// Replacement description, when present.
    pub description: Option<String>,
    /// Replacement status token, when present.
    pub status: Option<String>,
}

/// Query parameters accepted by `GET /api/v1/tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListTasksQuery {
    /// Status token to filter by; absent means all statuses.
    #[serde(default)]
    pub status: Option<String>,
    /// Number of matching tasks to skip before the page starts.
    #[serde(default)]
    pub skip: u32,
    /// Maximum number of tasks to return; must stay within 1..=100.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

const fn default_limit() -> u32 {
    10
}

/// Task representation returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Current progress status.
    pub status: TaskStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            status: task.status(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Paged task listing returned by `GET /api/v1/tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskListResponse {
    /// Tasks on the requested page, newest first.
    pub tasks: Vec<TaskResponse>,
    /// Total number of tasks matching the filter, ignoring pagination.
    pub total: u64,
    /// Offset the page was requested with.
    pub skip: u32,
    /// Page size the page was requested with.
    pub limit: u32,
}

impl TaskListResponse {
    /// Builds a listing response from a store page and the request bounds.
    #[must_use]
    pub fn from_page(page: TaskPage, skip: u32, limit: u32) -> Self {
        Self {
            tasks: page.tasks.into_iter().map(TaskResponse::from).collect(),
            total: page.total,
            skip,
            limit,
        }
    }
}

/// Service metadata returned by `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceInfoResponse {
    /// Service name.
    pub name: String,
    /// Service version.
    pub version: String,
}

/// Liveness payload returned by `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Fixed liveness marker, always `healthy`.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use mockable::DefaultClock;
    use rstest::rstest;

    use super::*;
    use crate::task::domain::{TaskDescription, TaskTitle};

    fn sample_task() -> Task {
        let title = TaskTitle::new("Write release notes").expect("valid title");
        let description =
            TaskDescription::new("Cover the storage changes").expect("valid description");
        Task::new(title, description, TaskStatus::InProgress, &DefaultClock)
    }

    #[rstest]
    fn task_response_mirrors_the_task() {
        let task = sample_task();
        let response = TaskResponse::from(task.clone());

        assert_eq!(response.id, task.id().into_inner());
        assert_eq!(response.title, "Write release notes");
        assert_eq!(response.description, "Cover the storage changes");
        assert_eq!(response.status, TaskStatus::InProgress);
        assert_eq!(response.created_at, task.created_at());
        assert_eq!(response.updated_at, task.updated_at());
    }

    #[rstest]
    fn task_response_serializes_status_as_snake_case() {
        let response = TaskResponse::from(sample_task());
        let body = serde_json::to_value(&response).expect("task response serializes");

        let status = body.get("status").and_then(serde_json::Value::as_str);
        assert_eq!(status, Some("in_progress"));
    }

    #[rstest]
    fn list_response_carries_request_bounds() {
        let page = TaskPage {
            tasks: vec![sample_task()],
            total: 7,
        };
        let response = TaskListResponse::from_page(page, 2, 5);

        assert_eq!(response.tasks.len(), 1);
        assert_eq!(response.total, 7);
        assert_eq!(response.skip, 2);
        assert_eq!(response.limit, 5);
    }

    #[rstest]
    #[case::all_fields(r#"{"title":"a","description":"b","status":"completed"}"#, Some("completed"))]
    #[case::status_absent(r#"{"title":"a","description":"b"}"#, None)]
    fn create_body_status_token_is_optional(#[case] raw: &str, #[case] expected: Option<&str>) {
        let body: CreateTaskBody = serde_json::from_str(raw).expect("body deserializes");
        assert_eq!(body.status.as_deref(), expected);
    }

    #[rstest]
    fn create_body_description_defaults_to_empty() {
        let body: CreateTaskBody =
            serde_json::from_str(r#"{"title":"a"}"#).expect("body deserializes");
        assert_eq!(body.description, "");
    }

    #[rstest]
    fn update_body_defaults_leave_every_field_unset() {
        let body: UpdateTaskBody = serde_json::from_str("{}").expect("body deserializes");

        assert!(body.title.is_none());
        assert!(body.description.is_none());
        assert!(body.status.is_none());
    }

    #[rstest]
    fn list_query_defaults_to_first_page_of_ten() {
        let query: ListTasksQuery = serde_json::from_str("{}").expect("query deserializes");

        assert_eq!(query.skip, 0);
        assert_eq!(query.limit, 10);
        assert!(query.status.is_none());
    }
}
