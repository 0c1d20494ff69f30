//! Shared configuration for the Stays CLI.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `stays_core::ServiceConfig`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stays_core::{AuthCredentials, ServiceConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("unknown profile '{0}'")]
    UnknownProfile(String),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named service profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Look up a profile by explicit name or fall back to the default.
    pub fn profile<'a>(&'a self, name: Option<&'a str>) -> Result<(&'a str, &'a Profile), ConfigError> {
        let name = name
            .or(self.default_profile.as_deref())
            .unwrap_or("default");
        self.profiles
            .get(name)
            .map(|p| (name, p))
            .ok_or_else(|| ConfigError::UnknownProfile(name.into()))
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    10
}

/// A named booking-service profile.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Booking service base URL (e.g., "http://localhost:7000/api").
    pub service: String,

    /// Account email for the cookie session.
    pub email: Option<String>,

    /// Password (plaintext — prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("sh", "stays", "stays").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("stays");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit path (tests and the `--config` escape hatch).
///
/// Environment keys nest on a double underscore so snake_case fields
/// stay addressable: `STAYS_DEFAULT_PROFILE` sets `default_profile`,
/// `STAYS_PROFILES__LOCAL__SERVICE` sets `profiles.local.service`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("STAYS_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution ───────────────────────────────────────────

/// Keyring service name under which passwords are stored.
pub const KEYRING_SERVICE: &str = "stays";

/// Resolve a password from the credential chain: profile env var, the
/// `STAYS_PASSWORD` env var, the system keyring, then plaintext config.
pub fn resolve_password(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's password_env → env var lookup
    if let Some(ref env_name) = profile.password_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. Well-known env var
    if let Ok(val) = std::env::var("STAYS_PASSWORD") {
        return Ok(SecretString::from(val));
    }

    // 3. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password")) {
        if let Ok(secret) = entry.get_password() {
            return Ok(SecretString::from(secret));
        }
    }

    // 4. Plaintext in config
    if let Some(ref pw) = profile.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store a password in the system keyring for a profile.
pub fn store_password(profile_name: &str, password: &str) -> Result<(), ConfigError> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password"))
        .map_err(|e| ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        })?;
    entry.set_password(password).map_err(|e| ConfigError::Validation {
        field: "keyring".into(),
        reason: e.to_string(),
    })
}

/// Resolve `AuthCredentials`. A profile without an email is
/// browse-only rather than an error.
pub fn resolve_auth(profile: &Profile, profile_name: &str) -> Result<AuthCredentials, ConfigError> {
    let Some(ref email) = profile.email else {
        return Ok(AuthCredentials::Anonymous);
    };
    let password = resolve_password(profile, profile_name)?;
    Ok(AuthCredentials::Credentials {
        email: email.clone(),
        password,
    })
}

// ── Profile translation ─────────────────────────────────────────────

/// Build a `ServiceConfig` from a profile — no CLI flag overrides.
pub fn profile_to_service_config(
    profile: &Profile,
    profile_name: &str,
) -> Result<ServiceConfig, ConfigError> {
    let base_url: url::Url = profile
        .service
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "service".into(),
            reason: format!("invalid URL: {}", profile.service),
        })?;

    let auth = resolve_auth(profile, profile_name)?;
    let timeout = Duration::from_secs(profile.timeout.unwrap_or_else(default_timeout));

    Ok(ServiceConfig {
        base_url,
        auth,
        timeout,
        danger_accept_invalid_certs: profile.insecure.unwrap_or(false),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_names_default_profile() {
        let cfg = Config::default();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert!(cfg.profiles.is_empty());
    }

    #[test]
    fn profile_lookup_prefers_explicit_name() {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "prod".into(),
            Profile {
                service: "https://stays.example/api".into(),
                ..Profile::default()
            },
        );
        let (name, _) = cfg.profile(Some("prod")).unwrap();
        assert_eq!(name, "prod");
        assert!(matches!(
            cfg.profile(Some("missing")),
            Err(ConfigError::UnknownProfile(_))
        ));
    }

    #[test]
    fn toml_roundtrip_via_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        cfg.profiles.insert(
            "local".into(),
            Profile {
                service: "http://localhost:7000/api".into(),
                email: Some("admin@stays.test".into()),
                timeout: Some(5),
                ..Profile::default()
            },
        );
        save_config_to(&cfg, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        let (_, profile) = loaded.profile(Some("local")).unwrap();
        assert_eq!(profile.service, "http://localhost:7000/api");
        assert_eq!(profile.timeout, Some(5));
    }

    #[test]
    fn env_overrides_reach_snake_case_and_nested_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("STAYS_DEFAULT_PROFILE", "prod");
            jail.set_env("STAYS_PROFILES__PROD__SERVICE", "https://stays.example/api");

            let cfg = load_config_from(Path::new("missing.toml")).expect("load");
            assert_eq!(cfg.default_profile.as_deref(), Some("prod"));
            let (_, profile) = cfg.profile(None).expect("prod profile");
            assert_eq!(profile.service, "https://stays.example/api");
            Ok(())
        });
    }

    #[test]
    fn profile_without_email_is_anonymous() {
        let profile = Profile {
            service: "http://localhost:7000/api".into(),
            ..Profile::default()
        };
        let auth = resolve_auth(&profile, "local").unwrap();
        assert!(auth.is_anonymous());
    }

    #[test]
    fn plaintext_password_resolves_when_nothing_else_set() {
        let profile = Profile {
            service: "http://localhost:7000/api".into(),
            email: Some("admin@stays.test".into()),
            password: Some("hunter2".into()),
            ..Profile::default()
        };
        assert!(resolve_password(&profile, "isolated-test-profile").is_ok());
    }

    #[test]
    fn invalid_service_url_is_a_validation_error() {
        let profile = Profile {
            service: "not a url".into(),
            ..Profile::default()
        };
        assert!(matches!(
            profile_to_service_config(&profile, "local"),
            Err(ConfigError::Validation { .. })
        ));
    }
}
