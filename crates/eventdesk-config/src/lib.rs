//! Shared configuration for the eventdesk CLI.
//!
//! TOML profiles on disk, `EVENTDESK_` environment overrides, and
//! translation to `eventdesk_core::DeskConfig`. The CLI layers its
//! flag-aware resolution on top of this.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use eventdesk_core::{DEFAULT_BACKEND_URL, DeskConfig, RetryPolicy, TlsVerification};

/// Profile used when neither the config file nor the command line names one.
pub const DEFAULT_PROFILE: &str = "default";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{profile}' is not defined")]
    UnknownProfile { profile: String },

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
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when `--profile` is not given.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some(DEFAULT_PROFILE.into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Name of the profile to use: the requested one, else the configured
    /// default, else `"default"`.
    pub fn active_profile_name(&self, requested: Option<&str>) -> String {
        requested
            .or(self.default_profile.as_deref())
            .unwrap_or(DEFAULT_PROFILE)
            .to_owned()
    }

    /// Look up a profile. The implicit default profile always resolves,
    /// so a machine with no config file still reaches the local backend.
    pub fn profile(&self, name: &str) -> Result<Profile, ConfigError> {
        match self.profiles.get(name) {
            Some(profile) => Ok(profile.clone()),
            None if name == DEFAULT_PROFILE => Ok(Profile::default()),
            None => Err(ConfigError::UnknownProfile {
                profile: name.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Retries for failed reads.
    #[serde(default = "default_retries")]
    pub retries: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
            retries: default_retries(),
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
    30
}
fn default_retries() -> u32 {
    3
}

/// A named backend profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// Backend base URL (e.g., "http://localhost:8000").
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Event id used when a command needs one and `--event` is absent.
    pub event: Option<String>,

    /// Override the default timeout (seconds).
    pub timeout: Option<u64>,

    /// Override the default retry count.
    pub retries: Option<u32>,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Skip TLS verification.
    pub insecure: Option<bool>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            event: None,
            timeout: None,
            retries: None,
            ca_cert: None,
            insecure: None,
        }
    }
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.into()
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "eventdesk", "eventdesk").map_or_else(
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
    p.push("eventdesk");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` (a missing file is fine) and `EVENTDESK_` variables.
///
/// Nested keys use a double underscore: `EVENTDESK_DEFAULTS__TIMEOUT=60`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("EVENTDESK_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
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

// ── Translation to DeskConfig ───────────────────────────────────────

/// Build a `DeskConfig` from a profile and the global defaults.
pub fn profile_to_desk_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<DeskConfig, ConfigError> {
    let url = parse_backend_url(&profile.backend_url)?;

    let tls = if profile.insecure.unwrap_or(false) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(DeskConfig {
        url,
        tls,
        timeout: Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout)),
        retry: RetryPolicy {
            max_retries: profile.retries.unwrap_or(defaults.retries),
            ..RetryPolicy::default()
        },
    })
}

/// Parse and sanity-check a backend URL.
pub fn parse_backend_url(raw: &str) -> Result<url::Url, ConfigError> {
    let url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "backend_url".into(),
        reason: format!("invalid URL: {raw}"),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Validation {
            field: "backend_url".into(),
            reason: format!("unsupported scheme '{other}' (expected http or https)"),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // Loading reads the environment, so every test that loads runs inside
    // a `Jail` to stay isolated from `environment_overrides_file`.

    #[test]
    fn missing_file_yields_defaults() {
        figment::Jail::expect_with(|_jail| {
            let dir = tempfile::tempdir().unwrap();
            let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();

            assert_eq!(cfg.default_profile.as_deref(), Some(DEFAULT_PROFILE));
            assert_eq!(cfg.defaults, Defaults::default());
            assert!(cfg.profiles.is_empty());
            Ok(())
        });
    }

    #[test]
    fn implicit_default_profile_points_at_local_backend() {
        let cfg = Config::default();
        let name = cfg.active_profile_name(None);
        let profile = cfg.profile(&name).unwrap();
        let desk = profile_to_desk_config(&profile, &cfg.defaults).unwrap();

        assert_eq!(desk.url.as_str(), "http://localhost:8000/");
        assert_eq!(desk.timeout, Duration::from_secs(30));
        assert_eq!(desk.retry.max_retries, 3);
        assert_eq!(desk.tls, TlsVerification::SystemDefaults);
    }

    #[test]
    fn unknown_named_profile_is_an_error() {
        let err = Config::default().profile("staging").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile { .. }));
    }

    #[test]
    fn saved_config_loads_back() {
        figment::Jail::expect_with(|_jail| {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("nested").join("config.toml");

            let mut cfg = Config::default();
            cfg.profiles.insert(
                "festival".into(),
                Profile {
                    backend_url: "https://ops.example.org".into(),
                    event: Some("EVT1".into()),
                    retries: Some(0),
                    ..Profile::default()
                },
            );
            save_config_to(&cfg, &path).unwrap();

            assert_eq!(load_config_from(&path).unwrap(), cfg);
            Ok(())
        });
    }

    #[test]
    fn profile_overrides_defaults() {
        let profile = Profile {
            timeout: Some(5),
            retries: Some(0),
            ca_cert: Some(PathBuf::from("/etc/ssl/ops.pem")),
            ..Profile::default()
        };
        let desk = profile_to_desk_config(&profile, &Defaults::default()).unwrap();

        assert_eq!(desk.timeout, Duration::from_secs(5));
        assert_eq!(desk.retry.max_retries, 0);
        assert_eq!(
            desk.tls,
            TlsVerification::CustomCa(PathBuf::from("/etc/ssl/ops.pem"))
        );
    }

    #[test]
    fn insecure_wins_over_custom_ca() {
        let profile = Profile {
            insecure: Some(true),
            ca_cert: Some(PathBuf::from("/etc/ssl/ops.pem")),
            ..Profile::default()
        };
        let desk = profile_to_desk_config(&profile, &Defaults::default()).unwrap();
        assert_eq!(desk.tls, TlsVerification::DangerAcceptInvalid);
    }

    #[test]
    fn non_http_backend_url_is_rejected() {
        let err = parse_backend_url("ftp://ops.example.org").unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
        assert!(parse_backend_url("not a url").is_err());
    }

    #[test]
    fn environment_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                default_profile = "festival"

                [defaults]
                timeout = 10

                [profiles.festival]
                backend_url = "https://ops.example.org"
                event = "EVT1"
                "#,
            )?;
            jail.set_env("EVENTDESK_DEFAULTS__TIMEOUT", "60");
            jail.set_env("EVENTDESK_DEFAULT_PROFILE", "other");

            let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;
            assert_eq!(cfg.defaults.timeout, 60);
            assert_eq!(cfg.defaults.output, "table");
            assert_eq!(cfg.default_profile.as_deref(), Some("other"));
            assert_eq!(cfg.profiles["festival"].event.as_deref(), Some("EVT1"));
            Ok(())
        });
    }
}
