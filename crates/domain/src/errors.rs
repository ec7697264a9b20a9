//! Error taxonomy for the Tiny Sumo Huly client.
//!
//! Every failure surfaces to the caller unmodified: there is no retry, no
//! circuit breaking, and no local recovery anywhere in the system. The one
//! deliberate soft failure lives in the custom-tool registry — fetching data
//! from a registered tool that lacks the project-data capability returns an
//! `"error"` entry in the result map rather than an `Err` (see the `huly`
//! crate's tool registry).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the client.
pub type HulyResult<T> = Result<T, HulyError>;

/// Failures surfaced by client operations.
///
/// `Transport` carries a message rather than the underlying `reqwest::Error`
/// so this crate stays free of I/O dependencies; the adapter crate performs
/// the mapping at the network boundary.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum HulyError {
    /// A domain or session violation, detected locally (email outside the
    /// allowed domain, no active session) or reported by the remote service.
    #[error("Authorization failed: {reason}")]
    Authorization {
        /// Human-readable description of the violation.
        reason: String,
    },

    /// The remote service rejected the request with a non-success status.
    #[error("Huly API error: {status} - {body}")]
    Request {
        /// HTTP status code returned by the remote service.
        status: u16,
        /// The remote error body, verbatim.
        body: String,
    },

    /// The request never produced an HTTP response (connection refused,
    /// timeout, DNS failure). Surfaced immediately; never retried.
    #[error("Transport failure: {message}")]
    Transport {
        /// Description of the underlying network failure.
        message: String,
    },

    /// A custom-tool operation named a tool that was never registered.
    #[error("Custom tool '{name}' not registered")]
    ToolNotFound {
        /// The tool name that failed lookup.
        name: String,
    },
}

impl HulyError {
    /// Creates an [`HulyError::Authorization`].
    pub fn authorization(reason: impl Into<String>) -> Self {
        Self::Authorization {
            reason: reason.into(),
        }
    }

    /// Creates an [`HulyError::Request`] from a status code and error body.
    pub fn request(status: u16, body: impl Into<String>) -> Self {
        Self::Request {
            status,
            body: body.into(),
        }
    }

    /// Creates an [`HulyError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Creates an [`HulyError::ToolNotFound`].
    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_error_carries_status_and_body() {
        let err = HulyError::request(422, "missing field: name");
        match err {
            HulyError::Request { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, "missing field: name");
            }
            other => panic!("expected Request, got {other:?}"),
        }
    }

    #[test]
    fn display_names_the_unregistered_tool() {
        let err = HulyError::tool_not_found("crm");
        assert_eq!(err.to_string(), "Custom tool 'crm' not registered");
    }

    #[test]
    fn errors_serialise_for_structured_logging() {
        let err = HulyError::authorization("no active session");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["Authorization"]["reason"], "no active session");
    }
}
