//! Custom-tool registry and task integration.
//!
//! The registry maps tool names to [`CustomTool`] handlers. Lookup of an
//! unregistered name is a hard failure ([`HulyError::ToolNotFound`]); a
//! registered tool without the project-data capability is a soft failure that
//! returns an `"error"` entry in the result map. The asymmetry is part of the
//! contract — callers of [`HulyClient::custom_tool_data`] must check for the
//! `"error"` key on that one path.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{json, Map, Value};

use domain::{CustomTool, HulyError, HulyResult, ProjectId, TaskId, Timestamp, ToolName};

use crate::brand;
use crate::client::HulyClient;

impl HulyClient {
    /// Registers a custom tool, silently overwriting any prior handler under
    /// the same name.
    pub fn register_custom_tool(&mut self, name: ToolName, tool: Arc<dyn CustomTool>) {
        tracing::info!(tool = %name, "Registered custom tool");
        self.tools.insert(name, tool);
    }

    /// Fetches per-project metrics from a registered tool.
    ///
    /// Fails with [`HulyError::ToolNotFound`] when the name is unregistered.
    /// When the tool lacks the project-data capability the returned map holds
    /// a single `"error"` entry instead; otherwise the tool's map is returned
    /// unchanged.
    pub async fn custom_tool_data(
        &self,
        name: &ToolName,
        project_id: &ProjectId,
    ) -> HulyResult<Map<String, Value>> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| HulyError::tool_not_found(name.as_str()))?;

        if !tool.supports_project_data() {
            let mut result = Map::new();
            result.insert(
                "error".to_string(),
                json!(format!(
                    "Tool {name} does not support project data retrieval"
                )),
            );
            return Ok(result);
        }

        tool.project_data(project_id).await
    }

    /// Posts raw tool results to the task's custom-integration endpoint,
    /// tagged with an integration timestamp. Does not consult the registry.
    pub async fn integrate_tool_results(
        &self,
        name: &ToolName,
        task_id: &TaskId,
        data: &Map<String, Value>,
    ) -> HulyResult<Value> {
        let tool_data = json!({
            "custom_tool": name.as_str(),
            "tool_data": data,
            "integrated_at": Timestamp::now().to_rfc3339(),
            "client": brand::CLIENT_TAG,
        });
        self.request(
            Method::POST,
            &format!("/tasks/{task_id}/custom-integration"),
            Some(&tool_data),
        )
        .await
    }

    /// Updates a task with formatted tool results.
    ///
    /// Fails with [`HulyError::ToolNotFound`] when the name is unregistered.
    /// The description carries the human-readable rendering of `data`; the raw
    /// map travels alongside in custom fields with an integration timestamp.
    pub async fn update_task_with_custom_data(
        &self,
        name: &ToolName,
        task_id: &TaskId,
        data: &Map<String, Value>,
    ) -> HulyResult<Value> {
        if !self.tools.contains_key(name) {
            return Err(HulyError::tool_not_found(name.as_str()));
        }

        let mut updates = Map::new();
        updates.insert(
            "description".to_string(),
            json!(format!(
                "{} Results:\n\n{}",
                title_case(name.as_str()),
                format_tool_data(data)
            )),
        );
        updates.insert(
            "custom_fields".to_string(),
            json!({
                "custom_tool_data": data,
                "custom_tool_name": name.as_str(),
                "last_updated": Timestamp::now().to_rfc3339(),
                "integration_client": brand::CLIENT_TAG,
            }),
        );

        self.update_task(task_id, updates).await
    }
}

// ---------------------------------------------------------------------------
// Human-readable rendering of tool data
// ---------------------------------------------------------------------------

/// Renders a metric map as one `Key: value` line per entry. Keys are
/// title-cased with underscores replaced by spaces; integer values are
/// thousands-separated; everything else renders as-is.
pub(crate) fn format_tool_data(data: &Map<String, Value>) -> String {
    data.iter()
        .map(|(key, value)| {
            let rendered = match value {
                Value::Number(number) => format_number(number),
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            format!("{}: {}", title_case(key), rendered)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replaces underscores with spaces and title-cases each word.
pub(crate) fn title_case(key: &str) -> String {
    key.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Formats a JSON number with thousands separators on the integer part.
/// A float's fractional digits pass through untouched.
fn format_number(number: &serde_json::Number) -> String {
    if let Some(value) = number.as_i64() {
        let sign = if value < 0 { "-" } else { "" };
        format!("{sign}{}", group_thousands(&value.unsigned_abs().to_string()))
    } else if let Some(value) = number.as_u64() {
        group_thousands(&value.to_string())
    } else if let Some(value) = number.as_f64() {
        let text = value.to_string();
        let (int_part, frac_part) = match text.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (text.as_str(), None),
        };
        let (sign, digits) = match int_part.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", int_part),
        };
        match frac_part {
            Some(frac) => format!("{sign}{}.{frac}", group_thousands(digits)),
            None => format!("{sign}{}", group_thousands(digits)),
        }
    } else {
        number.to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
