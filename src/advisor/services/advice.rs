//! Advice orchestration service.

use minijinja::Environment;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::warn;

use crate::advisor::domain::{Advice, AdviceQuery, AdvisorError, ProductivityDigest, TaskDigest};
use crate::advisor::ports::GenerativeClient;
use crate::task::domain::Task;

/// Most recent tasks included in the advice prompt.
pub const RECENT_TASK_LIMIT: usize = 10;

/// Insights returned when the generative capability fails or produces
/// unparseable output.
pub const FALLBACK_INSIGHTS: [&str; 4] = [
    "Focus on completing pending tasks to improve your completion rate",
    "Consider breaking down large tasks into smaller, manageable chunks",
    "Set realistic time estimates based on your historical performance",
    "Prioritize high-impact tasks during your most productive hours",
];

const ADVICE_TEMPLATE: &str = "\
You are a workplace productivity assistant helping a user with task
management.

User's recent tasks:
{{ tasks }}

{% if context %}Additional context: {{ context }}

{% endif %}User query: {{ query }}

Provide helpful, actionable advice focused on productivity, task management,
and workplace efficiency. Keep responses concise and practical.
";

const INSIGHTS_TEMPLATE: &str = "\
Analyse this user's productivity data and provide 3-5 actionable insights:

Statistics:
- Total tasks: {{ total_tasks }}
- Completed tasks: {{ completed_tasks }}
- Completion rate: {{ completion_rate }}%
- Average estimated hours per task: {{ avg_estimated_hours }}

Provide specific, actionable insights to improve productivity. Format the
response as a JSON array of strings.
";

/// Service that generates productivity advice through an injected
/// generative capability.
#[derive(Clone)]
pub struct AdvisorService<G>
where
    G: GenerativeClient,
{
    client: Arc<G>,
}

impl<G> AdvisorService<G>
where
    G: GenerativeClient,
{
    /// Creates a new advice service.
    #[must_use]
    pub const fn new(client: Arc<G>) -> Self {
        Self { client }
    }

    /// Generates advice for a query, grounding the prompt in the user's
    /// most recently updated tasks.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::TemplateRender`] when the prompt cannot be
    /// rendered and [`AdvisorError::Generative`] when the capability fails.
    pub async fn advise(
        &self,
        query: &AdviceQuery,
        tasks: &[Task],
    ) -> Result<Advice, AdvisorError> {
        let digests = recent_digests(tasks);
        let tasks_json = serde_json::to_string_pretty(&digests).map_err(|err| {
            AdvisorError::TemplateRender {
                reason: err.to_string(),
            }
        })?;

        let mut context = Map::new();
        context.insert("tasks".to_owned(), Value::String(tasks_json));
        context.insert(
            "query".to_owned(),
            Value::String(query.query().to_owned()),
        );
        if let Some(extra) = query.context() {
            context.insert("context".to_owned(), Value::String(extra.to_owned()));
        }

        let prompt = render_template(ADVICE_TEMPLATE, &context)?;
        let text = self.client.generate(&prompt).await?;

        Ok(Advice {
            text,
            context_used: !digests.is_empty(),
        })
    }

    /// Generates actionable insights from aggregate productivity figures.
    ///
    /// Falls back to [`FALLBACK_INSIGHTS`] when the capability fails or
    /// returns something other than a JSON array of strings.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::TemplateRender`] when the prompt cannot be
    /// rendered.
    pub async fn insights(
        &self,
        digest: &ProductivityDigest,
    ) -> Result<Vec<String>, AdvisorError> {
        let mut context = Map::new();
        context.insert(
            "total_tasks".to_owned(),
            Value::from(digest.total_tasks),
        );
        context.insert(
            "completed_tasks".to_owned(),
            Value::from(digest.completed_tasks),
        );
        context.insert(
            "completion_rate".to_owned(),
            Value::String(format!("{:.1}", digest.completion_rate_percent)),
        );
        context.insert(
            "avg_estimated_hours".to_owned(),
            Value::String(format!("{:.1}", digest.avg_estimated_hours)),
        );

        let prompt = render_template(INSIGHTS_TEMPLATE, &context)?;
        match self.client.generate(&prompt).await {
            Ok(response) => Ok(parse_insights(&response)),
            Err(err) => {
                warn!(error = %err, "insight generation failed, using fallback insights");
                Ok(fallback_insights())
            }
        }
    }
}

/// Digests the most recently updated tasks, newest first.
fn recent_digests(tasks: &[Task]) -> Vec<TaskDigest> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()));
    ordered
        .into_iter()
        .take(RECENT_TASK_LIMIT)
        .map(TaskDigest::from_task)
        .collect()
}

fn render_template(template: &str, context: &Map<String, Value>) -> Result<String, AdvisorError> {
    let environment = Environment::new();
    environment
        .render_str(template, context)
        .map_err(|err| AdvisorError::TemplateRender {
            reason: err.to_string(),
        })
}

/// Parses a JSON array of strings, ignoring surrounding whitespace.
fn parse_insights(response: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(response.trim())
        .ok()
        .filter(|insights| !insights.is_empty())
        .unwrap_or_else(fallback_insights)
}

fn fallback_insights() -> Vec<String> {
    FALLBACK_INSIGHTS.iter().map(|&s| s.to_owned()).collect()
}
