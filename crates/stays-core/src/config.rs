// ── Core service configuration ──

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Connection settings for the booking service, resolved by the config
/// layer (or built directly in tests).
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the booking service API.
    pub base_url: Url,
    /// Credentials used when a command needs an authenticated session.
    pub auth: AuthCredentials,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Skip TLS certificate verification. Development only.
    pub danger_accept_invalid_certs: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            // Matches the local development server; overridden by config.
            base_url: Url::parse("http://localhost:7000/api/")
                .unwrap_or_else(|_| unreachable!("static URL is valid")),
            auth: AuthCredentials::Anonymous,
            timeout: Duration::from_secs(10),
            danger_accept_invalid_certs: false,
        }
    }
}

impl ServiceConfig {
    pub fn transport(&self) -> stays_api::TransportConfig {
        stays_api::TransportConfig {
            timeout: self.timeout,
            danger_accept_invalid_certs: self.danger_accept_invalid_certs,
            ..stays_api::TransportConfig::default()
        }
    }
}

/// How to authenticate against the booking service.
#[derive(Debug, Clone)]
pub enum AuthCredentials {
    /// Browse-only access; booking and admin operations will fail with
    /// an authentication error.
    Anonymous,
    Credentials {
        email: String,
        password: SecretString,
    },
}

impl AuthCredentials {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_anonymous_with_timeout() {
        let config = ServiceConfig::default();
        assert!(config.auth.is_anonymous());
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(!config.danger_accept_invalid_certs);
    }
}
