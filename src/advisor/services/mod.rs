//! Application services for advice generation.

mod advice;

pub use advice::{AdvisorService, FALLBACK_INSIGHTS, RECENT_TASK_LIMIT};
