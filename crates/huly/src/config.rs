//! Static client configuration.
//!
//! Read once at construction; there is no hot-reload. The two feature flags
//! are carried as configuration surface for callers but are not consulted by
//! any client operation.

/// Environment variable holding the Huly API credential.
pub const API_KEY_VAR: &str = "TINY_SUMO_HULY_API_KEY";

/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "TINY_SUMO_HULY_BASE_URL";

/// Configuration for the Tiny Sumo Huly integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HulyConfig {
    /// Bearer credential sent on every request.
    pub api_key: String,
    /// API base URL; a trailing `/` is trimmed at client construction.
    pub base_url: String,
    /// Email domain allowed to authenticate.
    pub allowed_domain: String,
    /// Single address allowed to authenticate from outside the domain.
    pub admin_email: String,
    /// Feature flag: custom-tool integration. Stored, not enforced.
    pub custom_tools_enabled: bool,
    /// Feature flag: SSO authentication. Stored, not enforced.
    pub sso_enabled: bool,
}

impl Default for HulyConfig {
    fn default() -> Self {
        Self {
            api_key: "your-tiny-sumo-huly-api-key-here".to_string(),
            base_url: "https://api.huly.app".to_string(),
            allowed_domain: "tiny-sumo.com".to_string(),
            admin_email: "aaron47willis@gmail.com".to_string(),
            custom_tools_enabled: true,
            sso_enabled: true,
        }
    }
}

impl HulyConfig {
    /// Returns the default configuration with the API key and base URL
    /// overlaid from the environment, when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var(API_KEY_VAR) {
            config.api_key = key;
        }
        if let Ok(url) = std::env::var(BASE_URL_VAR) {
            config.base_url = url;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_hosted_service() {
        let config = HulyConfig::default();
        assert_eq!(config.base_url, "https://api.huly.app");
        assert_eq!(config.allowed_domain, "tiny-sumo.com");
        assert!(config.custom_tools_enabled);
        assert!(config.sso_enabled);
    }
}
