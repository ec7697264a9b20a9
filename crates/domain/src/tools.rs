//! Custom-tool port trait.
//!
//! A custom tool is a pluggable data source (analytics platform, CRM, rank
//! tracker) that can report per-project metrics. The source system probed
//! handlers for the capability at call time; here the probe is an explicit
//! trait method so the registry performs an interface check instead of
//! attribute sniffing.
//!
//! Implementations live with the caller; the `huly` crate only stores
//! `Arc<dyn CustomTool>` references keyed by tool name.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::{HulyResult, ProjectId};

/// A named external data source that can be integrated into tasks.
#[async_trait]
pub trait CustomTool: Send + Sync {
    /// Whether this tool can produce per-project metrics.
    ///
    /// Tools that return `false` are still registrable; fetching data from
    /// them yields a map with an `"error"` entry instead of a hard failure.
    fn supports_project_data(&self) -> bool {
        true
    }

    /// Fetches metrics for the given project, as a metric-name → value map.
    async fn project_data(&self, project_id: &ProjectId) -> HulyResult<Map<String, Value>>;
}
