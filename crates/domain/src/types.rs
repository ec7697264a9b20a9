//! Shared value and record types for the Tiny Sumo Huly domain.
//!
//! Record types are deliberately open: Huly stores whatever JSON it is given,
//! so outbound records carry a free-form `custom_fields` map and inbound
//! records capture unmodelled remote fields via `#[serde(flatten)]`. The enums
//! here name the well-known values the Tiny Sumo workflow relies on; nothing
//! prevents the remote service from returning other strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ProjectId, TaskId};

// ---------------------------------------------------------------------------
// Task classification
// ---------------------------------------------------------------------------

/// Task types used across Tiny Sumo marketing projects.
///
/// Stored in task custom fields under the `task_type` key. Custom-tool tasks
/// use the free-form tag `custom_<tool>` instead of a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    SeoAudit,
    SocialAudit,
    TechnicalAudit,
    ContentAnalysis,
    StrategyReport,
    CampaignManagement,
    ClientRelationship,
    AnalyticsReport,
    ContentCreation,
}

impl TaskType {
    /// Returns the snake_case tag stored in task custom fields.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::SeoAudit => "seo_audit",
            TaskType::SocialAudit => "social_audit",
            TaskType::TechnicalAudit => "technical_audit",
            TaskType::ContentAnalysis => "content_analysis",
            TaskType::StrategyReport => "strategy_report",
            TaskType::CampaignManagement => "campaign_management",
            TaskType::ClientRelationship => "client_relationship",
            TaskType::AnalyticsReport => "analytics_report",
            TaskType::ContentCreation => "content_creation",
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------

/// Well-known task status values.
///
/// Task records keep status as a free string — the remote service enforces no
/// state machine and any status may overwrite any other. This enum exists for
/// progress bucketing and for callers that want the known values spelled once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Returns the snake_case status string used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------

/// Task priority levels used by the workflow templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Returns the snake_case priority string used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Branding
// ---------------------------------------------------------------------------

/// The fixed Tiny Sumo color palette merged into every outbound project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            primary: "#8b0000".to_string(),
            secondary: "#2d1b1b".to_string(),
            accent: "#a52a2a".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly; the underlying representation can change without affecting the
/// domain API. Serialises as an RFC 3339 string, which is the form Huly stores
/// in custom fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time as a [`Timestamp`].
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a [`Timestamp`] from a [`DateTime<Utc>`].
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the underlying [`DateTime<Utc>`].
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }

    /// Returns the RFC 3339 rendering used when stamping outbound records.
    pub fn to_rfc3339(self) -> String {
        self.0.to_rfc3339()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

// ---------------------------------------------------------------------------
// Outbound records
// ---------------------------------------------------------------------------

/// A project record to be created.
///
/// The client merges the Tiny Sumo brand fields (client tag, color palette,
/// `brand`/`created_by`/`api_version` custom fields) before sending; those
/// system values overwrite any caller-supplied values under the same keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,

    /// Target site the project is about, for audit projects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub custom_fields: Map<String, Value>,
}

impl NewProject {
    /// Creates a project record with the given name and nothing else set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------

/// A task record to be created.
///
/// `project_id` is stamped by the bulk-create path; single creation sends the
/// record as-is plus the actor/brand/timestamp stamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<u32>,

    /// Free string; see [`TaskStatus`] for the well-known values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub custom_fields: Map<String, Value>,
}

impl NewTask {
    /// Creates a task record with the given title and nothing else set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Inbound records
// ---------------------------------------------------------------------------

/// A project as returned by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub custom_fields: Map<String, Value>,

    /// Remote fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Returns the `client_url` custom field, if the project carries one.
    pub fn client_url(&self) -> Option<&str> {
        self.custom_fields.get("client_url").and_then(Value::as_str)
    }
}

// ---------------------------------------------------------------------------

/// A task as returned by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,

    #[serde(default)]
    pub title: Option<String>,

    /// Free string; the remote service enforces no state machine.
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub custom_fields: Map<String, Value>,

    /// Remote fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Task {
    /// Returns the `task_type` tag from custom fields, if present.
    pub fn task_type(&self) -> Option<&str> {
        self.custom_fields.get("task_type").and_then(Value::as_str)
    }

    /// Returns the `custom_tool` tag from custom fields, if present.
    pub fn custom_tool(&self) -> Option<&str> {
        self.custom_fields.get("custom_tool").and_then(Value::as_str)
    }

    /// Returns `true` if the task's status string equals the given well-known
    /// status. Unknown status strings match nothing.
    pub fn has_status(&self, status: TaskStatus) -> bool {
        self.status.as_deref() == Some(status.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_type_tags_are_snake_case() {
        assert_eq!(TaskType::SeoAudit.as_str(), "seo_audit");
        assert_eq!(TaskType::StrategyReport.as_str(), "strategy_report");
        assert_eq!(
            serde_json::to_value(TaskType::ContentAnalysis).unwrap(),
            json!("content_analysis")
        );
    }

    #[test]
    fn default_brand_colors_are_the_tiny_sumo_palette() {
        let colors = BrandColors::default();
        assert_eq!(colors.primary, "#8b0000");
        assert_eq!(colors.secondary, "#2d1b1b");
        assert_eq!(colors.accent, "#a52a2a");
    }

    #[test]
    fn task_deserialises_with_unmodelled_fields_preserved() {
        let task: Task = serde_json::from_value(json!({
            "id": "TASK-1",
            "title": "SEO Analysis & Competitor Research",
            "status": "in_progress",
            "custom_fields": { "task_type": "seo_audit", "custom_tool": "analytics" },
            "sprint": "2026-W09"
        }))
        .unwrap();

        assert_eq!(task.task_type(), Some("seo_audit"));
        assert_eq!(task.custom_tool(), Some("analytics"));
        assert!(task.has_status(TaskStatus::InProgress));
        assert!(!task.has_status(TaskStatus::Completed));
        assert_eq!(task.extra.get("sprint"), Some(&json!("2026-W09")));
    }

    #[test]
    fn unknown_status_matches_no_bucket() {
        let task: Task = serde_json::from_value(json!({
            "id": "TASK-2",
            "status": "blocked"
        }))
        .unwrap();
        assert!(!task.has_status(TaskStatus::Pending));
        assert!(!task.has_status(TaskStatus::InProgress));
        assert!(!task.has_status(TaskStatus::Completed));
    }

    #[test]
    fn new_task_serialises_without_unset_fields() {
        let task = NewTask::new("Technical Website Audit");
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value, json!({ "title": "Technical Website Audit" }));
    }
}
