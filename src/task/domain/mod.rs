//! Domain model for task lifecycle management.
//!
//! The task domain models owner-scoped task aggregates, typed partial
//! updates with their status side effects, and derived productivity
//! analytics while keeping all infrastructure concerns outside of the
//! domain boundary.

mod analytics;
mod error;
mod ids;
mod patch;
mod policy;
mod task;

pub use analytics::{AnalyticsSnapshot, TREND_WINDOW_DAYS, TaskStats, TrendEntry};
pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{ActualHours, EstimatedHours, OwnerId, Tag, TaskId};
pub use patch::{PatchField, TaskPatch};
pub use policy::ResolvedPatch;
pub use task::{NewTask, PersistedTaskData, Task, TaskPriority, TaskStatus};
