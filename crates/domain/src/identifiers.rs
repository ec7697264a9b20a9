//! Newtype domain identifiers.
//!
//! Every remote entity with an identity is represented as a distinct newtype
//! wrapping a `String`. Huly assigns identifiers server-side and treats them as
//! opaque; the newtypes exist so a [`ProjectId`] can never be passed where a
//! [`TaskId`] is expected even though both are strings under the hood.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id! {
    /// Identifies a Huly project.
    ///
    /// Assigned by the remote service on creation; never generated locally.
    ProjectId
}

string_id! {
    /// Identifies a Huly task. Every task belongs to exactly one project.
    TaskId
}

string_id! {
    /// Identifies a registered custom tool (e.g. `"analytics"`, `"crm"`).
    ///
    /// Used as the registry key and echoed into task custom fields as the
    /// `custom_tool` tag.
    ToolName
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_identifier_is_rejected() {
        assert!(ProjectId::new("").is_none());
        assert!(TaskId::new("").is_none());
        assert!(ToolName::new("").is_none());
    }

    #[test]
    fn identifier_round_trips_through_serde_as_bare_string() {
        let id = ProjectId::new("PRJ-42").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"PRJ-42\"");
        let back: ProjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn display_matches_inner_value() {
        let tool = ToolName::new("crm").unwrap();
        assert_eq!(tool.to_string(), "crm");
        assert_eq!(tool.as_str(), "crm");
    }
}
