//! Derived productivity analytics over a user's task set.
//!
//! Snapshots are computed on demand and never persisted. Computation is
//! total: an empty task set degrades to zero counts, a `None` average, and
//! a zero score rather than raising.

use super::{Task, TaskStatus};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of trailing calendar days covered by the activity trend,
/// inclusive of the reference day.
pub const TREND_WINDOW_DAYS: usize = 7;

/// Per-day points a day with any created tasks contributes to the
/// productivity score.
const ACTIVE_DAY_SCORE_WEIGHT: f64 = 5.0;

/// Status counts and completion-time average for a task set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStats {
    /// All tasks, regardless of status.
    pub total: usize,
    /// Tasks with completed status.
    pub completed: usize,
    /// Tasks with in-progress status.
    pub in_progress: usize,
    /// Tasks with pending status.
    pub pending: usize,
    /// Mean recorded effort over completed tasks; `None` when no task is
    /// completed.
    pub avg_completion_hours: Option<f64>,
}

/// Creation and completion activity for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendEntry {
    /// UTC calendar date of the activity.
    pub date: NaiveDate,
    /// Tasks created on this date.
    pub tasks_created: usize,
    /// Completed tasks among those created on this date.
    pub tasks_completed: usize,
}

/// Point-in-time productivity snapshot derived from a task set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    /// Aggregate status counts.
    pub stats: TaskStats,
    /// Trailing [`TREND_WINDOW_DAYS`]-day activity, oldest date first,
    /// zero-filled for days without activity.
    pub trends: Vec<TrendEntry>,
    /// Heuristic score in [0, 100] combining completion rate and recent
    /// activity breadth, rounded to one decimal place.
    pub productivity_score: f64,
}

impl AnalyticsSnapshot {
    /// Computes a snapshot of the given tasks as of `today`.
    ///
    /// `today` is the reference UTC calendar date closing the trend
    /// window.
    #[must_use]
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let stats = compute_stats(tasks);
        let trends = compute_trends(tasks, today);
        let active_days = trends
            .iter()
            .filter(|entry| entry.tasks_created > 0)
            .count();
        let productivity_score = score(&stats, active_days);

        Self {
            stats,
            trends,
            productivity_score,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "averaging hour totals over task counts is inherently floating point"
)]
fn compute_stats(tasks: &[Task]) -> TaskStats {
    let completed_hours: Vec<f64> = tasks
        .iter()
        .filter(|task| task.status() == TaskStatus::Completed)
        .map(|task| task.actual_hours().value())
        .collect();

    let avg_completion_hours = if completed_hours.is_empty() {
        None
    } else {
        Some(completed_hours.iter().sum::<f64>() / completed_hours.len() as f64)
    };

    TaskStats {
        total: tasks.len(),
        completed: completed_hours.len(),
        in_progress: count_status(tasks, TaskStatus::InProgress),
        pending: count_status(tasks, TaskStatus::Pending),
        avg_completion_hours,
    }
}

fn count_status(tasks: &[Task], status: TaskStatus) -> usize {
    tasks.iter().filter(|task| task.status() == status).count()
}

/// Builds the trailing activity trend, one entry per calendar day.
///
/// Completed counts are bucketed by creation date: an entry reports how
/// many of the tasks created that day have since been completed.
fn compute_trends(tasks: &[Task], today: NaiveDate) -> Vec<TrendEntry> {
    let window = i64::try_from(TREND_WINDOW_DAYS).unwrap_or(i64::MAX);
    (0..window)
        .rev()
        .map(|days_back| {
            let date = today - Duration::days(days_back);
            let mut entry = TrendEntry {
                date,
                tasks_created: 0,
                tasks_completed: 0,
            };
            for task in tasks {
                if task.created_at().date_naive() == date {
                    entry.tasks_created += 1;
                    if task.status() == TaskStatus::Completed {
                        entry.tasks_completed += 1;
                    }
                }
            }
            entry
        })
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the score heuristic is defined over percentages"
)]
fn score(stats: &TaskStats, active_days: usize) -> f64 {
    let completion_rate = if stats.total == 0 {
        0.0
    } else {
        stats.completed as f64 / stats.total as f64 * 100.0
    };
    let raw = (completion_rate + ACTIVE_DAY_SCORE_WEIGHT * active_days as f64).min(100.0);
    (raw * 10.0).round() / 10.0
}
