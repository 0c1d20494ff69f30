//! CLI-side configuration resolution.
//!
//! Bridges `stays-config` profiles with `GlobalOpts` flag overrides into
//! the `ServiceConfig` the core crates consume. Flags beat environment,
//! environment beats the profile.

use std::time::Duration;

use secrecy::SecretString;
use stays_config::{Config, Profile};
use stays_core::{AuthCredentials, ServiceConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `ServiceConfig` from the config file, profile, and CLI overrides.
pub fn resolve_service_config(global: &GlobalOpts) -> Result<ServiceConfig, CliError> {
    let cfg = stays_config::load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    if let Some(profile) = cfg.profiles.get(&profile_name) {
        return resolve_profile(profile, &profile_name, global);
    }

    // No profile on disk: a --service flag (or env var) is enough for
    // anonymous browsing.
    let url_str = global.service.as_deref().ok_or_else(|| CliError::NoConfig {
        path: stays_config::config_path().display().to_string(),
    })?;
    let base_url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "service".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    let auth = match (&global.email, std::env::var("STAYS_PASSWORD").ok()) {
        (Some(email), Some(password)) => AuthCredentials::Credentials {
            email: email.clone(),
            password: SecretString::from(password),
        },
        _ => AuthCredentials::Anonymous,
    };

    Ok(ServiceConfig {
        base_url,
        auth,
        timeout: Duration::from_secs(global.timeout),
        danger_accept_invalid_certs: global.insecure,
    })
}

/// Translate a profile + global flags into a `ServiceConfig`.
fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<ServiceConfig, CliError> {
    // 1. Service URL (flag > env > profile)
    let url_str = global.service.as_deref().unwrap_or(&profile.service);
    let base_url: url::Url = url_str.parse().map_err(|_| CliError::Validation {
        field: "service".into(),
        reason: format!("invalid URL: {url_str}"),
    })?;

    // 2. Auth credentials (email flag overrides the profile's)
    let email = global.email.clone().or_else(|| profile.email.clone());
    let auth = match email {
        Some(email) => {
            let password = stays_config::resolve_password(profile, profile_name)?;
            AuthCredentials::Credentials { email, password }
        }
        None => AuthCredentials::Anonymous,
    };

    // 3. Timeout and TLS
    let timeout = Duration::from_secs(global.timeout);
    let danger_accept_invalid_certs = global.insecure || profile.insecure.unwrap_or(false);

    Ok(ServiceConfig {
        base_url,
        auth,
        timeout,
        danger_accept_invalid_certs,
    })
}
