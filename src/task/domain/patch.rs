//! Typed partial update for task aggregates.
//!
//! A patch marks every field as either kept or set, so "absent" is
//! distinguishable from "set to null" without inspecting raw request
//! payloads. Builder methods validate raw input up front; fields that are
//! never set remain untouched when the patch is applied.

use super::{
    ActualHours, EstimatedHours, Tag, TaskDomainError, TaskPriority, TaskStatus,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

/// A single patchable field: either left alone or set to a new value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatchField<T> {
    /// The field keeps its prior value.
    #[default]
    Keep,
    /// The field is assigned the given value.
    Set(T),
}

impl<T> PatchField<T> {
    /// Returns `true` when the field is assigned a new value.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Converts the field into an optional assignment.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Keep => None,
            Self::Set(value) => Some(value),
        }
    }

    /// Returns the assigned value, if any.
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Keep => None,
            Self::Set(value) => Some(value),
        }
    }
}

/// Validated partial update for a task.
///
/// Nullable fields (`description`, `due_date`) carry an inner `Option` so a
/// patch can clear them as well as reassign them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    title: PatchField<String>,
    description: PatchField<Option<String>>,
    priority: PatchField<TaskPriority>,
    status: PatchField<TaskStatus>,
    due_date: PatchField<Option<DateTime<Utc>>>,
    estimated_hours: PatchField<EstimatedHours>,
    actual_hours: PatchField<ActualHours>,
    tags: PatchField<BTreeSet<Tag>>,
}

impl TaskPatch {
    /// Creates an empty patch that leaves every field untouched.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a new title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the title is empty after
    /// trimming.
    pub fn with_title(mut self, title: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = title.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        self.title = PatchField::Set(normalized.to_owned());
        Ok(self)
    }

    /// Assigns a new description; an all-whitespace value clears it.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let value = description.into();
        let normalized = value.trim();
        self.description = PatchField::Set((!normalized.is_empty()).then_some(normalized.to_owned()));
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = PatchField::Set(None);
        self
    }

    /// Assigns a new priority from its canonical string form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPriority`] when the value is not
    /// one of the enumerated priorities.
    pub fn with_priority(mut self, priority: &str) -> Result<Self, TaskDomainError> {
        self.priority = PatchField::Set(TaskPriority::try_from(priority)?);
        Ok(self)
    }

    /// Assigns a new status from its canonical string form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatus`] when the value is not one
    /// of the enumerated statuses.
    pub fn with_status(mut self, status: &str) -> Result<Self, TaskDomainError> {
        self.status = PatchField::Set(TaskStatus::try_from(status)?);
        Ok(self)
    }

    /// Assigns a new due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = PatchField::Set(Some(due_date));
        self
    }

    /// Clears the due date.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = PatchField::Set(None);
        self
    }

    /// Assigns a new effort estimate.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidEstimatedHours`] when the value is
    /// zero, negative, or not finite.
    pub fn with_estimated_hours(mut self, hours: f64) -> Result<Self, TaskDomainError> {
        self.estimated_hours = PatchField::Set(EstimatedHours::new(hours)?);
        Ok(self)
    }

    /// Assigns a new recorded effort.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidActualHours`] when the value is
    /// negative or not finite.
    pub fn with_actual_hours(mut self, hours: f64) -> Result<Self, TaskDomainError> {
        self.actual_hours = PatchField::Set(ActualHours::new(hours)?);
        Ok(self)
    }

    /// Replaces the tag set.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskDomainError`] when any tag is empty or too long.
    pub fn with_tags(
        mut self,
        tags: impl IntoIterator<Item = String>,
    ) -> Result<Self, TaskDomainError> {
        let validated = tags
            .into_iter()
            .map(Tag::new)
            .collect::<Result<BTreeSet<_>, _>>()?;
        self.tags = PatchField::Set(validated);
        Ok(self)
    }

    /// Returns `true` when no field is assigned.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.title.is_set()
            || self.description.is_set()
            || self.priority.is_set()
            || self.status.is_set()
            || self.due_date.is_set()
            || self.estimated_hours.is_set()
            || self.actual_hours.is_set()
            || self.tags.is_set())
    }

    /// Returns the title assignment.
    #[must_use]
    pub const fn title(&self) -> &PatchField<String> {
        &self.title
    }

    /// Returns the description assignment.
    #[must_use]
    pub const fn description(&self) -> &PatchField<Option<String>> {
        &self.description
    }

    /// Returns the priority assignment.
    #[must_use]
    pub const fn priority(&self) -> &PatchField<TaskPriority> {
        &self.priority
    }

    /// Returns the status assignment.
    #[must_use]
    pub const fn status(&self) -> &PatchField<TaskStatus> {
        &self.status
    }

    /// Returns the due date assignment.
    #[must_use]
    pub const fn due_date(&self) -> &PatchField<Option<DateTime<Utc>>> {
        &self.due_date
    }

    /// Returns the effort estimate assignment.
    #[must_use]
    pub const fn estimated_hours(&self) -> &PatchField<EstimatedHours> {
        &self.estimated_hours
    }

    /// Returns the recorded effort assignment.
    #[must_use]
    pub const fn actual_hours(&self) -> &PatchField<ActualHours> {
        &self.actual_hours
    }

    /// Returns the tag set assignment.
    #[must_use]
    pub const fn tags(&self) -> &PatchField<BTreeSet<Tag>> {
        &self.tags
    }
}
