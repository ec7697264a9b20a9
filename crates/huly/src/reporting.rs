//! Progress and dashboard reporting.
//!
//! Pure aggregation over the project and task fetches — no new remote data.
//! Status bucketing and specialty counting are exact string matches on the
//! wire values; unknown status strings count toward the total only.

use serde::{Deserialize, Serialize};

use domain::{HulyResult, Project, ProjectId, Task, TaskStatus, TaskType, Timestamp};

use crate::brand;
use crate::client::HulyClient;

/// Per-specialty task counts for the five audit task types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyCounts {
    pub seo_audit: usize,
    pub social_audit: usize,
    pub technical_audit: usize,
    pub content_analysis: usize,
    pub strategy_report: usize,
}

/// Progress snapshot for one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub project_id: ProjectId,
    pub project_name: Option<String>,
    pub brand: String,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub in_progress_tasks: usize,
    pub pending_tasks: usize,
    /// `completed / total * 100`, rounded to one decimal; `0` for an empty
    /// project.
    pub progress_percentage: f64,
    pub client_url: Option<String>,
    pub last_updated: Timestamp,
    pub tiny_sumo_specialties: SpecialtyCounts,
    /// Every `custom_tool` tag found on the project's tasks, in task order.
    pub custom_tools_used: Vec<String>,
}

/// Fixed branding block composed into the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub company: String,
    pub tagline: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            primary_color: "#8b0000".to_string(),
            secondary_color: "#2d1b1b".to_string(),
            accent_color: "#a52a2a".to_string(),
            company: brand::COMPANY.to_string(),
            tagline: brand::TAGLINE.to_string(),
        }
    }
}

/// Presentational aggregation of a project, its progress, and the fixed
/// branding/widget blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub project: Project,
    pub progress: ProgressSummary,
    pub brand: String,
    pub dashboard_config: DashboardConfig,
    pub custom_widgets: Vec<String>,
}

/// The fixed widget identifiers every dashboard carries.
fn default_widgets() -> Vec<String> {
    [
        "revenue_tracking",
        "client_satisfaction",
        "task_completion_rate",
        "custom_tool_integration_status",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

impl HulyClient {
    /// Fetches the project and its tasks and aggregates them into a progress
    /// summary.
    pub async fn project_progress_summary(
        &self,
        project_id: &ProjectId,
    ) -> HulyResult<ProgressSummary> {
        let project = self.get_project(project_id).await?;
        let tasks = self.get_project_tasks(project_id).await?;
        Ok(build_summary(&project, &tasks))
    }

    /// Composes the dashboard: project record, progress summary, branding
    /// block, and the fixed widget list.
    pub async fn dashboard_data(&self, project_id: &ProjectId) -> HulyResult<Dashboard> {
        let progress = self.project_progress_summary(project_id).await?;
        let project = self.get_project(project_id).await?;

        Ok(Dashboard {
            project,
            progress,
            brand: brand::BRAND_TAG.to_string(),
            dashboard_config: DashboardConfig::default(),
            custom_widgets: default_widgets(),
        })
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

fn count_by_type(tasks: &[Task], task_type: TaskType) -> usize {
    tasks
        .iter()
        .filter(|task| task.task_type() == Some(task_type.as_str()))
        .count()
}

pub(crate) fn build_summary(project: &Project, tasks: &[Task]) -> ProgressSummary {
    let completed = tasks
        .iter()
        .filter(|t| t.has_status(TaskStatus::Completed))
        .count();
    let in_progress = tasks
        .iter()
        .filter(|t| t.has_status(TaskStatus::InProgress))
        .count();
    let pending = tasks
        .iter()
        .filter(|t| t.has_status(TaskStatus::Pending))
        .count();

    let progress_percentage = if tasks.is_empty() {
        0.0
    } else {
        let raw = completed as f64 / tasks.len() as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    };

    ProgressSummary {
        project_id: project.id.clone(),
        project_name: project.name.clone(),
        brand: brand::BRAND_TAG.to_string(),
        total_tasks: tasks.len(),
        completed_tasks: completed,
        in_progress_tasks: in_progress,
        pending_tasks: pending,
        progress_percentage,
        client_url: project.client_url().map(str::to_string),
        last_updated: Timestamp::now(),
        tiny_sumo_specialties: SpecialtyCounts {
            seo_audit: count_by_type(tasks, TaskType::SeoAudit),
            social_audit: count_by_type(tasks, TaskType::SocialAudit),
            technical_audit: count_by_type(tasks, TaskType::TechnicalAudit),
            content_analysis: count_by_type(tasks, TaskType::ContentAnalysis),
            strategy_report: count_by_type(tasks, TaskType::StrategyReport),
        },
        custom_tools_used: tasks
            .iter()
            .filter_map(Task::custom_tool)
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn project() -> Project {
        serde_json::from_value(json!({
            "id": "PRJ-1",
            "name": "Tiny Sumo Marketing - https://example-client.com",
            "custom_fields": { "client_url": "https://example-client.com" }
        }))
        .unwrap()
    }

    fn task(status: &str, task_type: Option<&str>, custom_tool: Option<&str>) -> Task {
        let mut custom_fields = serde_json::Map::new();
        if let Some(t) = task_type {
            custom_fields.insert("task_type".to_string(), json!(t));
        }
        if let Some(t) = custom_tool {
            custom_fields.insert("custom_tool".to_string(), json!(t));
        }
        serde_json::from_value(json!({
            "id": "TASK-1",
            "status": status,
            "custom_fields": custom_fields,
        }))
        .unwrap()
    }

    #[test]
    fn empty_project_reports_zero_progress() {
        let summary = build_summary(&project(), &[]);
        assert_eq!(summary.total_tasks, 0);
        assert_eq!(summary.completed_tasks, 0);
        assert_eq!(summary.in_progress_tasks, 0);
        assert_eq!(summary.pending_tasks, 0);
        assert_eq!(summary.progress_percentage, 0.0);
    }

    #[test]
    fn three_of_ten_completed_is_thirty_percent() {
        let mut tasks = Vec::new();
        for _ in 0..3 {
            tasks.push(task("completed", None, None));
        }
        for _ in 0..4 {
            tasks.push(task("in_progress", None, None));
        }
        for _ in 0..3 {
            tasks.push(task("pending", None, None));
        }
        let summary = build_summary(&project(), &tasks);
        assert_eq!(summary.total_tasks, 10);
        assert_eq!(summary.completed_tasks, 3);
        assert_eq!(summary.in_progress_tasks, 4);
        assert_eq!(summary.pending_tasks, 3);
        assert_eq!(summary.progress_percentage, 30.0);
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        let mut tasks = vec![task("completed", None, None)];
        tasks.push(task("pending", None, None));
        tasks.push(task("pending", None, None));
        // 1/3 = 33.333…% → 33.3
        let summary = build_summary(&project(), &tasks);
        assert_eq!(summary.progress_percentage, 33.3);
    }

    #[test]
    fn unknown_statuses_count_toward_total_only() {
        let tasks = vec![task("blocked", None, None), task("completed", None, None)];
        let summary = build_summary(&project(), &tasks);
        assert_eq!(summary.total_tasks, 2);
        assert_eq!(summary.completed_tasks, 1);
        assert_eq!(summary.pending_tasks, 0);
        assert_eq!(summary.in_progress_tasks, 0);
        assert_eq!(summary.progress_percentage, 50.0);
    }

    #[test]
    fn specialties_are_counted_by_exact_tag() {
        let tasks = vec![
            task("pending", Some("seo_audit"), None),
            task("pending", Some("seo_audit"), None),
            task("pending", Some("SEO_AUDIT"), None),
            task("pending", Some("strategy_report"), None),
        ];
        let summary = build_summary(&project(), &tasks);
        assert_eq!(summary.tiny_sumo_specialties.seo_audit, 2);
        assert_eq!(summary.tiny_sumo_specialties.strategy_report, 1);
        assert_eq!(summary.tiny_sumo_specialties.social_audit, 0);
    }

    #[test]
    fn custom_tools_used_collects_every_tagged_task() {
        let tasks = vec![
            task("pending", Some("custom_analytics"), Some("analytics")),
            task("pending", None, None),
            task("completed", Some("custom_crm"), Some("crm")),
        ];
        let summary = build_summary(&project(), &tasks);
        assert_eq!(summary.custom_tools_used, vec!["analytics", "crm"]);
    }

    #[test]
    fn summary_carries_the_project_context() {
        let summary = build_summary(&project(), &[]);
        assert_eq!(summary.project_id.as_str(), "PRJ-1");
        assert_eq!(
            summary.client_url.as_deref(),
            Some("https://example-client.com")
        );
        assert_eq!(summary.brand, "tiny_sumo");
    }
}
