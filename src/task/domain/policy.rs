//! Update policy resolving a patch against an existing task.
//!
//! Resolution turns a [`TaskPatch`](super::TaskPatch) into the exact field
//! set to persist: it refreshes `updated_at`, stamps `completed_at` when the
//! status moves into completed, and clears it again when the status moves
//! away, keeping the invariant that a completion timestamp exists exactly
//! while a task is completed.

use super::{
    ActualHours, EstimatedHours, Tag, Task, TaskDomainError, TaskPatch, TaskPriority, TaskStatus,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::BTreeSet;

/// Field set produced by resolving a patch, applied atomically by
/// repositories.
///
/// `None` leaves a column untouched; for nullable columns the inner
/// `Option` distinguishes "set to null" from "set to a value".
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPatch {
    /// New title, if patched.
    pub title: Option<String>,
    /// New description state, if patched.
    pub description: Option<Option<String>>,
    /// New priority, if patched.
    pub priority: Option<TaskPriority>,
    /// New status, if patched.
    pub status: Option<TaskStatus>,
    /// New due date state, if patched.
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// New effort estimate, if patched.
    pub estimated_hours: Option<EstimatedHours>,
    /// New recorded effort, if patched.
    pub actual_hours: Option<ActualHours>,
    /// New tag set, if patched.
    pub tags: Option<BTreeSet<Tag>>,
    /// Refreshed mutation timestamp, always written.
    pub updated_at: DateTime<Utc>,
    /// Completion timestamp side effect, if the status transition demands
    /// one.
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

impl ResolvedPatch {
    /// Resolves a patch against the current state of a task.
    ///
    /// Only fields present in the patch change; `updated_at` is always
    /// refreshed. Entering [`TaskStatus::Completed`] from any other status
    /// stamps `completed_at`; leaving it clears the stamp. Patching a task
    /// that stays completed leaves the original stamp in place.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyPatch`] when the patch assigns no
    /// field.
    pub fn resolve(
        task: &Task,
        patch: &TaskPatch,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        if patch.is_empty() {
            return Err(TaskDomainError::EmptyPatch);
        }

        let now = clock.utc();
        let previous_status = task.status();
        let next_status = patch
            .status()
            .as_option()
            .copied()
            .unwrap_or(previous_status);

        let completed_at = match (previous_status, next_status) {
            (TaskStatus::Completed, TaskStatus::Completed) => None,
            (_, TaskStatus::Completed) => Some(Some(now)),
            (TaskStatus::Completed, _) => Some(None),
            _ => None,
        };

        Ok(Self {
            title: patch.title().as_option().cloned(),
            description: patch.description().as_option().cloned(),
            priority: patch.priority().as_option().copied(),
            status: patch.status().as_option().copied(),
            due_date: patch.due_date().as_option().copied(),
            estimated_hours: patch.estimated_hours().as_option().copied(),
            actual_hours: patch.actual_hours().as_option().copied(),
            tags: patch.tags().as_option().cloned(),
            updated_at: now,
            completed_at,
        })
    }
}
