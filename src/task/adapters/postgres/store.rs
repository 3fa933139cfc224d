//! `PostgreSQL` store implementation for task record persistence.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{StoredTaskData, Task, TaskId, TaskName, TaskStatus},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
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
impl TaskStore for PostgresTaskStore {
    async fn save(&self, task: &Task) -> TaskStoreResult<Task> {
        match task.id() {
            Some(id) => {
                let updated = task.clone();
                self.run_blocking(move |connection| {
                    let affected = diesel::update(tasks::table.filter(tasks::id.eq(id.into_inner())))
                        .set((
                            tasks::name.eq(updated.name().as_str().to_owned()),
                            tasks::description.eq(updated.description().to_owned()),
                            tasks::status.eq(updated.status().as_str().to_owned()),
                            tasks::created.eq(updated.created()),
                        ))
                        .execute(connection)
                        .map_err(TaskStoreError::persistence)?;
                    if affected == 0 {
                        return Err(TaskStoreError::MissingRecord(id));
                    }
                    Ok(updated)
                })
                .await
            }
            None => {
                let persisted = task.clone().with_id(TaskId::new());
                let new_row = to_new_row(&persisted)?;
                self.run_blocking(move |connection| {
                    diesel::insert_into(tasks::table)
                        .values(&new_row)
                        .execute(connection)
                        .map_err(TaskStoreError::persistence)?;
                    Ok(persisted)
                })
                .await
            }
        }
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
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

    async fn find_all(&self) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_status(&self, status: TaskStatus) -> TaskStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::status.eq(status.as_str()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn exists_by_id(&self, id: TaskId) -> TaskStoreResult<bool> {
        self.run_blocking(move |connection| {
            diesel::select(diesel::dsl::exists(
                tasks::table.filter(tasks::id.eq(id.into_inner())),
            ))
            .get_result::<bool>(connection)
            .map_err(TaskStoreError::persistence)
        })
        .await
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskStoreResult<()> {
        self.run_blocking(move |connection| {
            diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(TaskStoreError::persistence)?;
            Ok(())
        })
        .await
    }
}

fn to_new_row(task: &Task) -> TaskStoreResult<NewTaskRow> {
    let id = task
        .id()
        .ok_or_else(|| TaskStoreError::persistence(std::io::Error::other("task id unassigned")))?;

    Ok(NewTaskRow {
        id: id.into_inner(),
        name: task.name().as_str().to_owned(),
        description: task.description().to_owned(),
        status: task.status().as_str().to_owned(),
        created: task.created(),
    })
}

fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let TaskRow {
        id,
        name,
        description,
        status: stored_status,
        created,
    } = row;

    let status =
        TaskStatus::try_from(stored_status.as_str()).map_err(TaskStoreError::persistence)?;

    let data = StoredTaskData {
        id: TaskId::from_uuid(id),
        name: TaskName::from_stored(name),
        description,
        status,
        created,
    };
    Ok(Task::from_stored(data))
}
