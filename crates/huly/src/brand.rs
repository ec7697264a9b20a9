//! Fixed Tiny Sumo brand literals merged into outbound records and headers.
//!
//! Header values use hyphens; JSON field values use underscores. The split is
//! deliberate — both forms exist in the remote data and changing either would
//! orphan existing records.

/// Value of the `client` / `client_type` / `integration_client` JSON fields.
pub const CLIENT_TAG: &str = "tiny_sumo_marketing";

/// Value of the `brand` custom field on projects, tasks, and summaries.
pub const BRAND_TAG: &str = "tiny_sumo";

/// Actor identity stamped into `created_by` / `updated_by` / `completed_by`.
pub const ACTOR: &str = "tiny_sumo_huly_client";

/// Value of the `api_version` custom field on created projects.
pub const API_VERSION: &str = "1.0";

/// Value of the `X-Tiny-Sumo-Brand` and `X-Tiny-Sumo-Client` headers.
pub const BRAND_HEADER: &str = "tiny-sumo-marketing";

/// Value of the `X-Request-Source` header.
pub const REQUEST_SOURCE: &str = "tiny-sumo-huly-integration";

/// Value of the `X-Client-Version` header.
pub const CLIENT_VERSION: &str = "1.0.0";

/// Company name shown in the dashboard branding block.
pub const COMPANY: &str = "Tiny Sumo Marketing";

/// Tagline shown in the dashboard branding block.
pub const TAGLINE: &str = "Tiny Sumo. Giant Growth";
