//! The branded Huly client and its transport core.
//!
//! One [`HulyClient`] owns one `reqwest` connection pool, the current session,
//! and the custom-tool registry. The pool is acquired in [`HulyClient::new`]
//! and released when the client is dropped, on success and failure paths
//! alike. No retry is attempted anywhere: transport failures surface
//! immediately as [`HulyError::Transport`], remote rejections as
//! [`HulyError::Request`].

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

use domain::{CustomTool, HulyError, HulyResult, ToolName};

use crate::brand;
use crate::config::HulyConfig;

/// Branded HTTP client for the Huly project-management API.
///
/// Session state and the tool registry are instance-scoped: they are mutated
/// only through `&mut self` and never shared across instances.
pub struct HulyClient {
    pub(crate) config: HulyConfig,
    base_url: String,
    http: reqwest::Client,
    pub(crate) session_user: Option<Value>,
    pub(crate) tools: HashMap<ToolName, Arc<dyn CustomTool>>,
}

impl HulyClient {
    /// Builds the client and acquires its connection pool.
    ///
    /// The standard headers (bearer credential, content type, brand
    /// identifiers) are fixed here and sent on every request.
    pub fn new(config: HulyConfig) -> HulyResult<Self> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", config.api_key);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer).map_err(|err| HulyError::transport(err.to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "X-Tiny-Sumo-Brand",
            HeaderValue::from_static(brand::BRAND_HEADER),
        );
        headers.insert(
            "X-Client-Version",
            HeaderValue::from_static(brand::CLIENT_VERSION),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| HulyError::transport(err.to_string()))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            config,
            base_url,
            http,
            session_user: None,
            tools: HashMap::new(),
        })
    }

    /// Returns the configuration the client was built with.
    pub fn config(&self) -> &HulyConfig {
        &self.config
    }

    /// Returns the authenticated user identity, if a session is active.
    pub fn authenticated_user(&self) -> Option<&Value> {
        self.session_user.as_ref()
    }

    /// Executes one request against the remote API.
    ///
    /// Injects the per-request brand headers, maps non-success statuses to
    /// [`HulyError::Request`] with the remote error body, and maps send-level
    /// failures to [`HulyError::Transport`]. Every successful call is logged
    /// at info level with method and path.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> HulyResult<Value> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header("X-Tiny-Sumo-Client", brand::BRAND_HEADER)
            .header("X-Request-Source", brand::REQUEST_SOURCE);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|err| {
            tracing::error!(%method, path, error = %err, "Tiny Sumo Huly API request failed");
            HulyError::transport(err.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HulyError::request(status.as_u16(), body));
        }

        tracing::info!(%method, path, "Tiny Sumo Huly API request succeeded");

        response
            .json()
            .await
            .map_err(|err| HulyError::transport(err.to_string()))
    }
}

// ---------------------------------------------------------------------------
// JSON plumbing shared by the operation modules
// ---------------------------------------------------------------------------

/// Serialises a record into the JSON object map the transport sends.
pub(crate) fn record_map<T: Serialize>(record: &T) -> HulyResult<Map<String, Value>> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(HulyError::transport("record did not serialise to an object")),
        Err(err) => Err(HulyError::transport(err.to_string())),
    }
}

/// Deserialises a response body into a typed record.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(value: Value) -> HulyResult<T> {
    serde_json::from_value(value)
        .map_err(|err| HulyError::transport(format!("invalid response body: {err}")))
}

/// Unwraps a `json!({..})` literal into its object map.
pub(crate) fn object_fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn construction_trims_trailing_slash_from_base_url() {
        let config = HulyConfig {
            base_url: "https://api.huly.app/".to_string(),
            ..HulyConfig::default()
        };
        let client = HulyClient::new(config).unwrap();
        assert_eq!(client.base_url, "https://api.huly.app");
    }

    #[test]
    fn record_map_rejects_non_object_values() {
        assert!(record_map(&json!("bare string")).is_err());
        assert!(record_map(&json!({"name": "ok"})).is_ok());
    }
}
