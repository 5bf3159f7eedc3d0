//! `PostgreSQL` store implementation for task persistence.

use super::{
    models::{NewTaskRow, TaskRow, TaskRowChanges},
    schema::tasks,
};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskDescription, TaskFields, TaskId, TaskStatus, TaskTitle},
    ports::{TaskPage, TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use mockable::Clock;
use std::sync::Arc;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
///
/// The injected clock stamps `updated_at` on update, so the refresh is a
/// store responsibility rather than something callers supply.
#[derive(Debug)]
pub struct PostgresTaskStore<C> {
    pool: TaskPgPool,
    clock: Arc<C>,
}

impl<C> Clone for PostgresTaskStore<C> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> PostgresTaskStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a new store from a `PostgreSQL` connection pool and a clock.
    #[must_use]
    pub const fn new(pool: TaskPgPool, clock: Arc<C>) -> Self {
        Self { pool, clock }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

#[async_trait]
impl<C> TaskStore for PostgresTaskStore<C>
where
    C: Clock + Send + Sync,
{
    async fn create(&self, task: &Task) -> TaskStoreResult<Task> {
        let task_id = task.id();
        let new_row = to_new_row(task);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskStoreError::DuplicateTask(task_id)
                    }
                    _ => TaskStoreError::persistence(err),
                })?;
            row_to_task(row)
        })
        .await
    }

    async fn get(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskStoreError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(
        &self,
        status_filter: Option<TaskStatus>,
        skip: u32,
        limit: u32,
    ) -> TaskStoreResult<TaskPage> {
        let offset = i64::from(skip);
        let page_size = i64::from(limit);

        self.run_blocking(move |connection| {
            let mut count_query = tasks::table.count().into_boxed();
            if let Some(status) = status_filter {
                count_query = count_query.filter(tasks::status.eq(status.as_str()));
            }
            let matching: i64 = count_query
                .get_result(connection)
                .map_err(TaskStoreError::persistence)?;

            let mut query = tasks::table
                .select(TaskRow::as_select())
                .order(tasks::created_at.desc())
                .into_boxed();
            if let Some(status) = status_filter {
                query = query.filter(tasks::status.eq(status.as_str()));
            }
            let rows = query
                .offset(offset)
                .limit(page_size)
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;

            let tasks = rows
                .into_iter()
                .map(row_to_task)
                .collect::<TaskStoreResult<Vec<_>>>()?;
            let total = u64::try_from(matching).map_err(TaskStoreError::persistence)?;

            Ok(TaskPage { tasks, total })
        })
        .await
    }

    async fn update(&self, id: TaskId, fields: TaskFields) -> TaskStoreResult<Option<Task>> {
        let changes = TaskRowChanges {
            title: fields.title.as_str().to_owned(),
            description: fields.description.as_str().to_owned(),
            status: fields.status.as_str().to_owned(),
            updated_at: self.clock.utc(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .set(&changes)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskStoreError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().as_str().to_owned(),
        description: task.description().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status,
        created_at,
        updated_at,
    } = row;

    let parsed_title = TaskTitle::new(title).map_err(TaskStoreError::persistence)?;
    let parsed_description =
        TaskDescription::new(description).map_err(TaskStoreError::persistence)?;
    let parsed_status =
        TaskStatus::try_from(status.as_str()).map_err(TaskStoreError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        title: parsed_title,
        description: parsed_description,
        status: parsed_status,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
