//! The Tiny Sumo marketing-audit workflow generator.
//!
//! Creates a branded project and populates it with the fixed five-task audit
//! template (SEO, social, technical, content, strategy) plus one task per
//! requested custom tool. The strategy task's `depends_on` list is advisory
//! metadata only — nothing schedules or gates on it.

use serde_json::{json, Map, Value};

use domain::{HulyResult, NewProject, NewTask, Priority, Project, ProjectId, Task, TaskType, Timestamp, ToolName};

use crate::brand;
use crate::client::{object_fields, HulyClient};
use crate::tools::title_case;

impl HulyClient {
    /// Creates a Tiny Sumo branded marketing project and its audit tasks.
    ///
    /// `project_type` defaults to `"marketing_audit"`. Returns the created
    /// project; the generated tasks are not returned.
    pub async fn create_tiny_sumo_project(
        &self,
        client_url: &str,
        project_type: Option<&str>,
        custom_tools: &[ToolName],
    ) -> HulyResult<Project> {
        let project_type = project_type.unwrap_or("marketing_audit");
        let tool_names: Vec<&str> = custom_tools.iter().map(ToolName::as_str).collect();

        let record = NewProject {
            name: format!("Tiny Sumo Marketing - {client_url}"),
            description: Some(format!(
                "Comprehensive marketing project for {client_url} - Powered by Tiny Sumo"
            )),
            project_type: Some(project_type.to_string()),
            client_url: Some(client_url.to_string()),
            template_id: Some("tiny_sumo_marketing_template".to_string()),
            custom_fields: object_fields(json!({
                "client_url": client_url,
                "project_type": project_type,
                "created_date": Timestamp::now().to_rfc3339(),
                "status": "active",
                "brand": brand::BRAND_TAG,
                "custom_tools_enabled": tool_names,
                "marketing_agency": brand::CLIENT_TAG,
            })),
        };

        let project = self.create_project(&record).await?;
        self.generate_audit_tasks(&project.id, client_url, custom_tools)
            .await?;
        Ok(project)
    }

    /// Bulk-creates the five audit-template tasks plus one per custom tool.
    pub async fn generate_audit_tasks(
        &self,
        project_id: &ProjectId,
        client_url: &str,
        custom_tools: &[ToolName],
    ) -> HulyResult<Vec<Task>> {
        let mut tasks = audit_task_templates(client_url);
        for tool in custom_tools {
            tasks.push(custom_tool_task(tool, client_url));
        }
        self.bulk_create_tasks(project_id, tasks).await
    }
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

fn template_task(
    title: &str,
    description: String,
    assignee: &str,
    priority: Priority,
    estimated_hours: u32,
    custom_fields: Map<String, Value>,
) -> NewTask {
    NewTask {
        title: title.to_string(),
        description: Some(description),
        assignee: Some(assignee.to_string()),
        priority: Some(priority),
        estimated_hours: Some(estimated_hours),
        custom_fields,
        ..NewTask::default()
    }
}

/// The fixed five-task audit sequence for one client site.
fn audit_task_templates(client_url: &str) -> Vec<NewTask> {
    vec![
        template_task(
            "SEO Analysis & Competitor Research",
            format!("Comprehensive SEO analysis for {client_url}"),
            "seo_specialist",
            Priority::High,
            4,
            object_fields(json!({
                "task_type": TaskType::SeoAudit.as_str(),
                "automation_level": "high",
                "data_sources": ["google_search_console", "semrush", "ahrefs"],
                "client_url": client_url,
                "tiny_sumo_specialty": true,
            })),
        ),
        template_task(
            "Social Media Performance Analysis",
            format!("Social media audit and strategy for {client_url}"),
            "social_specialist",
            Priority::High,
            3,
            object_fields(json!({
                "task_type": TaskType::SocialAudit.as_str(),
                "automation_level": "medium",
                "data_sources": ["meta_business", "twitter_api", "linkedin_api"],
                "client_url": client_url,
                "tiny_sumo_specialty": true,
            })),
        ),
        template_task(
            "Technical Website Audit",
            format!("Technical performance analysis for {client_url}"),
            "technical_specialist",
            Priority::Medium,
            3,
            object_fields(json!({
                "task_type": TaskType::TechnicalAudit.as_str(),
                "automation_level": "medium",
                "data_sources": ["google_page_speed", "gtmetrix", "lighthouse"],
                "client_url": client_url,
                "tiny_sumo_specialty": true,
            })),
        ),
        template_task(
            "Content Strategy Development",
            format!("Content marketing strategy for {client_url}"),
            "content_strategist",
            Priority::Medium,
            2,
            object_fields(json!({
                "task_type": TaskType::ContentAnalysis.as_str(),
                "automation_level": "low",
                "data_sources": ["google_trends", "buzzsumo", "semrush"],
                "client_url": client_url,
                "tiny_sumo_specialty": true,
            })),
        ),
        template_task(
            "Strategic Marketing Recommendations",
            format!("Comprehensive marketing strategy for {client_url}"),
            "senior_strategist",
            Priority::High,
            2,
            object_fields(json!({
                "task_type": TaskType::StrategyReport.as_str(),
                "automation_level": "high",
                // Advisory only; never scheduled or gated on.
                "depends_on": [
                    TaskType::SeoAudit.as_str(),
                    TaskType::SocialAudit.as_str(),
                    TaskType::TechnicalAudit.as_str(),
                    TaskType::ContentAnalysis.as_str(),
                ],
                "client_url": client_url,
                "tiny_sumo_specialty": true,
            })),
        ),
    ]
}

/// A generic analysis task for one custom tool, tagged `custom_<name>`.
fn custom_tool_task(tool: &ToolName, client_url: &str) -> NewTask {
    template_task(
        &format!("{} Analysis", title_case(tool.as_str())),
        format!("Custom {tool} analysis for {client_url}"),
        "specialist",
        Priority::Medium,
        2,
        object_fields(json!({
            "task_type": format!("custom_{tool}"),
            "custom_tool": tool.as_str(),
            "client_url": client_url,
            "tiny_sumo_specialty": true,
        })),
    )
}
