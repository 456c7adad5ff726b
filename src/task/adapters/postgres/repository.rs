//! `PostgreSQL` repository implementation for task lifecycle storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        ActualHours, EstimatedHours, OwnerId, PersistedTaskData, ResolvedPatch, Tag, Task, TaskId,
        TaskPriority, TaskStatus,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::BTreeSet;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let new_row = to_new_row(task)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::Conflict(task_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(
        &self,
        id: TaskId,
        owner_id: OwnerId,
    ) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .filter(tasks::owner_id.eq(owner_id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_by_owner(&self, owner_id: OwnerId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::owner_id.eq(owner_id.into_inner()))
                .order(tasks::created_at.desc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn apply_patch(
        &self,
        id: TaskId,
        owner_id: OwnerId,
        patch: &ResolvedPatch,
    ) -> TaskRepositoryResult<Task> {
        let changeset = to_changeset(patch)?;

        self.run_blocking(move |connection| {
            let row = diesel::update(
                tasks::table
                    .filter(tasks::id.eq(id.into_inner()))
                    .filter(tasks::owner_id.eq(owner_id.into_inner())),
            )
            .set(changeset)
            .returning(TaskRow::as_returning())
            .get_result::<TaskRow>(connection)
            .optional()
            .map_err(TaskRepositoryError::persistence)?;

            row.map_or(Err(TaskRepositoryError::NotFound(id)), row_to_task)
        })
        .await
    }

    async fn delete(&self, id: TaskId, owner_id: OwnerId) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(
                tasks::table
                    .filter(tasks::id.eq(id.into_inner()))
                    .filter(tasks::owner_id.eq(owner_id.into_inner())),
            )
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }
}

fn to_new_row(task: &Task) -> TaskRepositoryResult<NewTaskRow> {
    let tags = serde_json::to_value(task.tags()).map_err(TaskRepositoryError::persistence)?;

    Ok(NewTaskRow {
        id: task.id().into_inner(),
        owner_id: task.owner_id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().map(ToOwned::to_owned),
        priority: task.priority().as_str().to_owned(),
        status: task.status().as_str().to_owned(),
        due_date: task.due_date(),
        estimated_hours: task.estimated_hours().value(),
        actual_hours: task.actual_hours().value(),
        tags,
        created_at: task.created_at(),
        updated_at: task.updated_at(),
        completed_at: task.completed_at(),
    })
}

fn to_changeset(patch: &ResolvedPatch) -> TaskRepositoryResult<TaskChangeset> {
    let tags = patch
        .tags
        .as_ref()
        .map(serde_json::to_value)
        .transpose()
        .map_err(TaskRepositoryError::persistence)?;

    Ok(TaskChangeset {
        title: patch.title.clone(),
        description: patch.description.clone(),
        priority: patch.priority.map(|priority| priority.as_str().to_owned()),
        status: patch.status.map(|status| status.as_str().to_owned()),
        due_date: patch.due_date,
        estimated_hours: patch.estimated_hours.map(EstimatedHours::value),
        actual_hours: patch.actual_hours.map(ActualHours::value),
        tags,
        updated_at: patch.updated_at,
        completed_at: patch.completed_at,
    })
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        owner_id,
        title,
        description,
        priority: persisted_priority,
        status: persisted_status,
        due_date,
        estimated_hours,
        actual_hours,
        tags: persisted_tags,
        created_at,
        updated_at,
        completed_at,
    } = row;

    let priority = TaskPriority::try_from(persisted_priority.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let status = TaskStatus::try_from(persisted_status.as_str())
        .map_err(TaskRepositoryError::persistence)?;
    let tags = serde_json::from_value::<BTreeSet<Tag>>(persisted_tags)
        .map_err(TaskRepositoryError::persistence)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        owner_id: OwnerId::from_uuid(owner_id),
        title,
        description,
        priority,
        status,
        due_date,
        estimated_hours: EstimatedHours::new(estimated_hours)
            .map_err(TaskRepositoryError::persistence)?,
        actual_hours: ActualHours::new(actual_hours).map_err(TaskRepositoryError::persistence)?,
        tags,
        created_at,
        updated_at,
        completed_at,
    };
    Ok(Task::from_persisted(data))
}
