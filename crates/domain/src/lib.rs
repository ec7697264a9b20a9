//! Core domain for the Tiny Sumo Huly client.
//!
//! This crate contains every domain concept, newtype identifier, record type,
//! and cross-cutting error type used by the client. The `huly` adapter crate
//! implements the transport against these definitions; it never adds domain
//! rules of its own.
//!
//! ## Architectural Layer
//!
//! **Business types + port definitions.** This crate has no I/O dependencies.
//! It defines *what* the workflow needs; the adapter defines *how* to reach
//! the remote service.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`ProjectId`, `TaskId`, `ToolName`) |
//! | [`types`] | Record and value types (`Task`, `Project`, `TaskType`, etc.) |
//! | [`errors`] | The error taxonomy ([`HulyError`]) |
//! | [`tools`] | The [`CustomTool`] port trait |

pub mod errors;
pub mod identifiers;
pub mod tools;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{HulyError, HulyResult};
pub use identifiers::{ProjectId, TaskId, ToolName};
pub use tools::CustomTool;
pub use types::{
    BrandColors, NewProject, NewTask, Priority, Project, Task, TaskStatus, TaskType, Timestamp,
};
