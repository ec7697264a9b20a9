//! Sample custom tools and the end-to-end demo flow.
//!
//! The two tools return canned metrics; a real deployment would call the
//! analytics and CRM APIs here.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{json, Map, Value};

use domain::{CustomTool, HulyResult, ProjectId, ToolName};
use huly::HulyClient;

/// Stand-in for a web-analytics integration.
struct AnalyticsTool;

#[async_trait]
impl CustomTool for AnalyticsTool {
    async fn project_data(&self, _project_id: &ProjectId) -> HulyResult<Map<String, Value>> {
        Ok(metric_map(json!({
            "monthly_traffic": 45600,
            "conversion_rate": 3.2,
            "revenue": 12500,
            "top_pages": ["/services", "/about", "/contact"],
            "bounce_rate": 45.2,
        })))
    }
}

/// Stand-in for a CRM integration.
struct CrmTool;

#[async_trait]
impl CustomTool for CrmTool {
    async fn project_data(&self, _project_id: &ProjectId) -> HulyResult<Map<String, Value>> {
        Ok(metric_map(json!({
            "active_leads": 12,
            "proposals_sent": 5,
            "conversion_rate": 18.5,
            "average_deal_size": 3500,
            "sales_pipeline_value": 42000,
        })))
    }
}

fn metric_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Registers the sample tools, authenticates, creates a demo project, and
/// prints the resulting progress summary and dashboard.
pub async fn run(client: &mut HulyClient, client_url: &str, email: &str) -> Result<()> {
    let analytics = ToolName::new("analytics").context("tool name")?;
    let crm = ToolName::new("crm").context("tool name")?;
    client.register_custom_tool(analytics.clone(), Arc::new(AnalyticsTool));
    client.register_custom_tool(crm.clone(), Arc::new(CrmTool));

    let auth = client.authenticate_sso(email).await?;
    println!("Authenticated: {}", serde_json::to_string_pretty(&auth)?);

    let project = client
        .create_tiny_sumo_project(client_url, Some("comprehensive_audit"), &[analytics.clone(), crm])
        .await?;
    println!(
        "Created project: {}",
        project.name.as_deref().unwrap_or(project.id.as_str())
    );

    let metrics = client.custom_tool_data(&analytics, &project.id).await?;
    println!(
        "Analytics metrics: {}",
        serde_json::to_string_pretty(&metrics)?
    );

    let progress = client.project_progress_summary(&project.id).await?;
    println!("Project progress: {}%", progress.progress_percentage);

    let dashboard = client.dashboard_data(&project.id).await?;
    println!("Dashboard ready for {}", dashboard.brand);

    Ok(())
}
