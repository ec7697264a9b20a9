//! Project CRUD.
//!
//! Thin pass-throughs to the transport that merge the Tiny Sumo brand fields
//! into every outbound record. System-stamped keys (`client`, `brand_colors`,
//! `updated_by`, `update_timestamp`, and the brand custom fields) overwrite
//! caller-supplied values.

use reqwest::Method;
use serde_json::{json, Map, Value};

use domain::{BrandColors, HulyResult, NewProject, Project, ProjectId, Timestamp};

use crate::brand;
use crate::client::{decode, record_map, HulyClient};

impl HulyClient {
    /// Creates a project with the Tiny Sumo branding merged in.
    pub async fn create_project(&self, project: &NewProject) -> HulyResult<Project> {
        let mut body = record_map(project)?;
        body.insert("client".to_string(), json!(brand::CLIENT_TAG));
        body.insert("brand_colors".to_string(), json!(BrandColors::default()));

        let custom_fields = body
            .entry("custom_fields".to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Some(fields) = custom_fields.as_object_mut() {
            fields.insert("brand".to_string(), json!(brand::BRAND_TAG));
            fields.insert("created_by".to_string(), json!(brand::ACTOR));
            fields.insert("api_version".to_string(), json!(brand::API_VERSION));
        }

        let result = self
            .request(Method::POST, "/projects", Some(&Value::Object(body)))
            .await?;
        decode(result)
    }

    /// Fetches a project by identifier.
    pub async fn get_project(&self, project_id: &ProjectId) -> HulyResult<Project> {
        let result = self
            .request(Method::GET, &format!("/projects/{project_id}"), None)
            .await?;
        decode(result)
    }

    /// Applies a partial update, stamping `updated_by` and `update_timestamp`
    /// over any caller-supplied values. Returns the remote response verbatim.
    pub async fn update_project(
        &self,
        project_id: &ProjectId,
        mut updates: Map<String, Value>,
    ) -> HulyResult<Value> {
        updates.insert("updated_by".to_string(), json!(brand::ACTOR));
        updates.insert(
            "update_timestamp".to_string(),
            json!(Timestamp::now().to_rfc3339()),
        );
        self.request(
            Method::PATCH,
            &format!("/projects/{project_id}"),
            Some(&Value::Object(updates)),
        )
        .await
    }

    /// Deletes a project. The only way this system ever removes remote data.
    pub async fn delete_project(&self, project_id: &ProjectId) -> HulyResult<Value> {
        self.request(Method::DELETE, &format!("/projects/{project_id}"), None)
            .await
    }
}
