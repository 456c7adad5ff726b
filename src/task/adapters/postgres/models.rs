//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning principal identifier.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority level in canonical string form.
    pub priority: String,
    /// Lifecycle status in canonical string form.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Estimated effort in hours.
    pub estimated_hours: f64,
    /// Recorded effort in hours.
    pub actual_hours: f64,
    /// Tag labels as a JSON array.
    pub tags: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning principal identifier.
    pub owner_id: uuid::Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Priority level in canonical string form.
    pub priority: String,
    /// Lifecycle status in canonical string form.
    pub status: String,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Estimated effort in hours.
    pub estimated_hours: f64,
    /// Recorded effort in hours.
    pub actual_hours: f64,
    /// Tag labels as a JSON array.
    pub tags: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Partial-update model applied in a single `UPDATE` statement.
///
/// Outer `None` skips a column; nested options write `NULL` explicitly.
/// `updated_at` is unconditional, so a resolved patch never produces an
/// empty changeset.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// New title, if patched.
    pub title: Option<String>,
    /// New description state, if patched.
    pub description: Option<Option<String>>,
    /// New priority, if patched.
    pub priority: Option<String>,
    /// New status, if patched.
    pub status: Option<String>,
    /// New due date state, if patched.
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// New effort estimate, if patched.
    pub estimated_hours: Option<f64>,
    /// New recorded effort, if patched.
    pub actual_hours: Option<f64>,
    /// New tag labels, if patched.
    pub tags: Option<Value>,
    /// Refreshed mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Completion timestamp side effect, if any.
    pub completed_at: Option<Option<DateTime<Utc>>>,
}
