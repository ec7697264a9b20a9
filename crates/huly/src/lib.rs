//! Tiny Sumo Huly infrastructure adapter.
//!
//! Implements the branded HTTP client over Huly's project-management API for
//! the Tiny Sumo marketing workflow: SSO-style authentication with an email
//! domain allow-list, project/task CRUD with brand fields merged into every
//! outbound record, the custom-tool registry, the five-task audit workflow
//! generator, and progress/dashboard reporting.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** All HTTP transport, header injection, request
//! formatting, and response parsing live here. The [`domain`] crate defines
//! the types and the [`domain::CustomTool`] port; this crate never adds domain
//! rules beyond the brand-merging contract.
//!
//! ## Lifecycle
//!
//! [`HulyClient::new`] acquires the connection pool; dropping the client
//! releases it. Session state and the tool registry are fields of the client —
//! instance-scoped, mutated only through `&mut self`, never shared across
//! instances.

pub mod client;
pub mod config;
pub mod reporting;

mod auth;
mod brand;
mod projects;
mod tasks;
mod tools;
mod workflow;

pub use client::HulyClient;
pub use config::HulyConfig;
pub use reporting::{Dashboard, DashboardConfig, ProgressSummary, SpecialtyCounts};
