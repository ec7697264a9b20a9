//! SSO authentication and session validation.
//!
//! The domain check is local and fail-fast: an email outside the allowed
//! domain (and not the admin override) is rejected before any network call.
//! Session validity beyond that is entirely delegated to the remote service —
//! no token refresh, no expiry tracking.

use reqwest::Method;
use serde_json::{json, Value};

use domain::{HulyError, HulyResult, Timestamp};

use crate::brand;
use crate::client::HulyClient;

/// Returns the domain part of an email, or the empty string when there is
/// no `@`.
fn email_domain(email: &str) -> &str {
    email.split_once('@').map(|(_, domain)| domain).unwrap_or("")
}

impl HulyClient {
    /// Authenticates a user via SSO, enforcing the domain allow-list locally
    /// first.
    ///
    /// On success the response's `user` field (when present and non-null)
    /// becomes the current session identity. Returns the full response.
    pub async fn authenticate_sso(&mut self, email: &str) -> HulyResult<Value> {
        let domain = email_domain(email);
        if domain != self.config.allowed_domain && email != self.config.admin_email {
            return Err(HulyError::authorization(format!(
                "access restricted to {} employees only",
                self.config.allowed_domain
            )));
        }

        let auth_data = json!({
            "email": email,
            "domain": domain,
            "client_type": brand::CLIENT_TAG,
            "sso_provider": "google",
            "timestamp": Timestamp::now().to_rfc3339(),
        });

        let result = self.request(Method::POST, "/auth/sso", Some(&auth_data)).await?;
        self.session_user = result.get("user").filter(|user| !user.is_null()).cloned();
        Ok(result)
    }

    /// Validates the current session against the remote service.
    ///
    /// Fails locally when no session is active; otherwise returns the remote
    /// validation result verbatim.
    pub async fn validate_session(&self) -> HulyResult<Value> {
        if self.session_user.is_none() {
            return Err(HulyError::authorization(
                "no active session, authenticate first",
            ));
        }
        self.request(Method::GET, "/auth/validate", None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_domain_splits_on_the_first_at_sign() {
        assert_eq!(email_domain("employee@tiny-sumo.com"), "tiny-sumo.com");
        assert_eq!(email_domain("a@b@c"), "b@c");
    }

    #[test]
    fn email_without_at_sign_has_empty_domain() {
        assert_eq!(email_domain("not-an-email"), "");
        assert_eq!(email_domain(""), "");
    }
}
