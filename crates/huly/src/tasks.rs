//! Task CRUD and bulk creation.
//!
//! Bulk creation is sequential: one POST per task, each stamped with the
//! shared project identifier and actor identity. There is no batching and no
//! rollback — if item N fails, the error propagates as-is and items before it
//! are already committed remotely.

use reqwest::Method;
use serde_json::{json, Map, Value};

use domain::{HulyResult, NewTask, ProjectId, Task, TaskId, TaskStatus, Timestamp};

use crate::brand;
use crate::client::{decode, record_map, HulyClient};

impl HulyClient {
    /// Creates one task, stamped with the actor, brand tag, and timestamp.
    pub async fn create_task(&self, task: &NewTask) -> HulyResult<Task> {
        let mut body = record_map(task)?;
        body.insert("created_by".to_string(), json!(brand::ACTOR));
        body.insert("brand".to_string(), json!(brand::BRAND_TAG));
        body.insert(
            "timestamp".to_string(),
            json!(Timestamp::now().to_rfc3339()),
        );

        let result = self
            .request(Method::POST, "/tasks", Some(&Value::Object(body)))
            .await?;
        decode(result)
    }

    /// Creates tasks one by one under the given project.
    ///
    /// Failure at item N surfaces that item's error; items before N remain
    /// created remotely.
    pub async fn bulk_create_tasks(
        &self,
        project_id: &ProjectId,
        tasks: Vec<NewTask>,
    ) -> HulyResult<Vec<Task>> {
        let mut results = Vec::with_capacity(tasks.len());
        for mut task in tasks {
            task.project_id = Some(project_id.clone());
            results.push(self.create_task(&task).await?);
        }
        Ok(results)
    }

    /// Fetches every task of a project.
    pub async fn get_project_tasks(&self, project_id: &ProjectId) -> HulyResult<Vec<Task>> {
        let result = self
            .request(Method::GET, &format!("/projects/{project_id}/tasks"), None)
            .await?;
        decode(result)
    }

    /// Fetches a project's tasks and keeps those whose `task_type` custom
    /// field equals the given tag (exact string match).
    pub async fn get_tasks_by_type(
        &self,
        project_id: &ProjectId,
        type_tag: &str,
    ) -> HulyResult<Vec<Task>> {
        let tasks = self.get_project_tasks(project_id).await?;
        Ok(tasks
            .into_iter()
            .filter(|task| task.task_type() == Some(type_tag))
            .collect())
    }

    /// Applies a partial update, stamping `updated_by` and `update_timestamp`
    /// over any caller-supplied values. Returns the remote response verbatim.
    pub async fn update_task(
        &self,
        task_id: &TaskId,
        mut updates: Map<String, Value>,
    ) -> HulyResult<Value> {
        updates.insert("updated_by".to_string(), json!(brand::ACTOR));
        updates.insert(
            "update_timestamp".to_string(),
            json!(Timestamp::now().to_rfc3339()),
        );
        self.request(
            Method::PATCH,
            &format!("/tasks/{task_id}"),
            Some(&Value::Object(updates)),
        )
        .await
    }

    /// Marks a task completed, recording when and by whom.
    pub async fn complete_task(&self, task_id: &TaskId) -> HulyResult<Value> {
        let mut updates = Map::new();
        updates.insert("status".to_string(), json!(TaskStatus::Completed.as_str()));
        updates.insert(
            "completed_at".to_string(),
            json!(Timestamp::now().to_rfc3339()),
        );
        updates.insert("completed_by".to_string(), json!(brand::ACTOR));
        self.update_task(task_id, updates).await
    }
}
