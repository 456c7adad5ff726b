//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for TaskId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the authenticated principal that owns a task.
///
/// Tasks are only visible and mutable under their owning principal;
/// cross-owner lookups behave exactly like lookups of missing tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(Uuid);

impl OwnerId {
    /// Creates a new random owner identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an owner identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for OwnerId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Estimated effort for a task in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EstimatedHours(f64);

impl EstimatedHours {
    /// Creates a validated estimate.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidEstimatedHours`] when the value is
    /// zero, negative, or not finite.
    pub fn new(value: f64) -> Result<Self, TaskDomainError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(TaskDomainError::InvalidEstimatedHours(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying hour value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for EstimatedHours {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for EstimatedHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Effort actually spent on a task in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActualHours(f64);

impl ActualHours {
    /// Creates a validated effort record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidActualHours`] when the value is
    /// negative or not finite.
    pub fn new(value: f64) -> Result<Self, TaskDomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(TaskDomainError::InvalidActualHours(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying hour value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for ActualHours {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for ActualHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short text label attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Longest label accepted by the persisted schema.
    pub const MAX_LEN: usize = 50;

    /// Creates a validated, trimmed tag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTag`] when the value is empty after
    /// trimming, or [`TaskDomainError::TagTooLong`] when it exceeds
    /// [`Tag::MAX_LEN`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTag);
        }
        if normalized.chars().count() > Self::MAX_LEN {
            return Err(TaskDomainError::TagTooLong {
                tag: normalized.to_owned(),
                max_len: Self::MAX_LEN,
            });
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the tag as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
