//! CLI configuration: thin wrapper around `eventdesk_config`.
//!
//! Adds the flag-aware resolution on top of the shared types. Clap has
//! already folded `EVENTDESK_*` variables into `GlobalOpts`, so the order
//! is flag, then env, then profile, then `[defaults]`.

use clap::ValueEnum;

use eventdesk_core::DeskConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use eventdesk_config::{
    Config, DEFAULT_PROFILE, Defaults, Profile, config_path, load_config, parse_backend_url,
    save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    config.active_profile_name(global.profile.as_deref())
}

/// Comma-separated profile names for help text.
pub fn available_profiles(config: &Config) -> String {
    if config.profiles.is_empty() {
        "(none)".into()
    } else {
        config.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Fill `--output` / `--color` from `[defaults]` when neither flag nor env set them.
pub fn apply_defaults(global: &mut GlobalOpts, defaults: &Defaults) -> Result<(), CliError> {
    if global.output.is_none() {
        global.output = Some(parse_choice::<OutputFormat>("output", &defaults.output)?);
    }
    if global.color.is_none() {
        global.color = Some(parse_choice::<ColorMode>("color", &defaults.color)?);
    }
    Ok(())
}

fn parse_choice<T: ValueEnum>(field: &str, raw: &str) -> Result<T, CliError> {
    T::from_str(raw, true).map_err(|_| CliError::Validation {
        field: format!("defaults.{field}"),
        reason: format!("unknown value '{raw}'"),
    })
}

/// Translate the active profile + global flags into a `DeskConfig`.
///
/// Also fills `global.event` from the profile when no flag or env gave one.
pub fn resolve(global: &mut GlobalOpts, config: &Config) -> Result<DeskConfig, CliError> {
    let name = active_profile_name(global, config);
    let mut profile = config
        .profile(&name)
        .map_err(|_| CliError::ProfileNotFound {
            available: available_profiles(config),
            name: name.clone(),
        })?;

    if let Some(ref url) = global.url {
        profile.backend_url.clone_from(url);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }
    if global.retries.is_some() {
        profile.retries = global.retries;
    }
    if global.event.is_none() {
        global.event = profile.event.clone();
    }

    tracing::debug!(profile = %name, url = %profile.backend_url, "resolved profile");
    Ok(eventdesk_config::profile_to_desk_config(
        &profile,
        &config.defaults,
    )?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["eventdesk"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["events", "list"]);
        Cli::try_parse_from(argv).unwrap().global
    }

    fn config_with(name: &str, profile: Profile) -> Config {
        let mut cfg = Config::default();
        cfg.profiles.insert(name.into(), profile);
        cfg
    }

    #[test]
    fn flags_override_profile() {
        let cfg = config_with(
            DEFAULT_PROFILE,
            Profile {
                backend_url: "http://ops.example:8000".into(),
                event: Some("EVT1".into()),
                timeout: Some(10),
                ..Profile::default()
            },
        );
        let mut g = global(&["--url", "http://localhost:9000", "--timeout", "5"]);
        let desk = resolve(&mut g, &cfg).unwrap();

        assert_eq!(desk.url.as_str(), "http://localhost:9000/");
        assert_eq!(desk.timeout.as_secs(), 5);
        assert_eq!(g.event.as_deref(), Some("EVT1"));
    }

    #[test]
    fn event_flag_beats_profile_event() {
        let cfg = config_with(
            DEFAULT_PROFILE,
            Profile {
                event: Some("EVT1".into()),
                ..Profile::default()
            },
        );
        let mut g = global(&["--event", "EVT2"]);
        resolve(&mut g, &cfg).unwrap();
        assert_eq!(g.event.as_deref(), Some("EVT2"));
    }

    #[test]
    fn unknown_profile_lists_the_known_ones() {
        let cfg = config_with("staging", Profile::default());
        let mut g = global(&["--profile", "prod"]);
        match resolve(&mut g, &cfg) {
            Err(CliError::ProfileNotFound { name, available }) => {
                assert_eq!(name, "prod");
                assert_eq!(available, "staging");
            }
            other => panic!("expected ProfileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn defaults_fill_unset_output() {
        let mut g = global(&[]);
        let defaults = Defaults {
            output: "yaml".into(),
            ..Defaults::default()
        };
        apply_defaults(&mut g, &defaults).unwrap();
        assert_eq!(g.format(), OutputFormat::Yaml);

        let mut g = global(&["-o", "json"]);
        apply_defaults(&mut g, &defaults).unwrap();
        assert_eq!(g.format(), OutputFormat::Json);
    }

    #[test]
    fn bad_default_output_is_reported() {
        let mut g = global(&[]);
        let defaults = Defaults {
            output: "xml".into(),
            ..Defaults::default()
        };
        assert!(matches!(
            apply_defaults(&mut g, &defaults),
            Err(CliError::Validation { .. })
        ));
    }
}
